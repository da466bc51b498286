use std::collections::HashMap;

use common::model::student::StudentRecord;
use common::requests::CreateClubResponse;

use super::state::DraftField;
use super::validation::LeadershipRole;

#[derive(Clone)]
pub enum Msg {
    RosterLoaded(HashMap<String, StudentRecord>),
    RosterUnavailable,
    DraftInput(DraftField, String),
    CategoryEdited(String),
    IdentifierInput(LeadershipRole, String),
    LookupTick { role: LeadershipRole, generation: u32 },
    OpenFileDialog,
    ImageSelected(Option<web_sys::File>),
    Submit,
    SubmitSucceeded(CreateClubResponse),
    SubmitFailed(String),
}
