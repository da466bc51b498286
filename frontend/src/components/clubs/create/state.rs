//! Component state for the club-creation form.
//!
//! Holds the roster cache, the in-progress application draft, one validation
//! state plus one debounce timer per leadership field, and the submission
//! flag. Fields are `pub` because they are accessed by the `view` and
//! `update` modules.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::model::club::ClubCategory;

use super::classifier::CategoryOwner;
use super::roster::RosterCache;
use super::validation::{FieldValidationState, LeadershipRole};

/// Scalar draft fields addressable from input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    ClubName,
    ClubEmail,
    ClubPassword,
    Description,
    Purpose,
}

/// The in-progress, not-yet-submitted club application.
pub struct ClubDraft {
    pub club_name: String,
    pub club_email: String,
    pub club_password: String,
    pub description: String,
    pub purpose: String,
    pub category: Option<ClubCategory>,
    pub category_owner: CategoryOwner,
    pub image: Option<web_sys::File>,
}

impl ClubDraft {
    pub fn new() -> Self {
        Self {
            club_name: String::new(),
            club_email: String::new(),
            club_password: String::new(),
            description: String::new(),
            purpose: String::new(),
            category: None,
            category_owner: CategoryOwner::Auto,
            image: None,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::ClubName => &mut self.club_name,
            DraftField::ClubEmail => &mut self.club_email,
            DraftField::ClubPassword => &mut self.club_password,
            DraftField::Description => &mut self.description,
            DraftField::Purpose => &mut self.purpose,
        }
    }

    /// True when every required scalar field is non-empty.
    pub fn required_filled(&self) -> bool {
        !self.club_name.trim().is_empty()
            && !self.club_email.trim().is_empty()
            && !self.club_password.trim().is_empty()
    }
}

/// Main state container for the `ClubCreateComponent`.
pub struct ClubCreateComponent {
    /// Roster snapshot, fetched once on first render.
    pub roster: RosterCache,

    /// Validation pipeline state for the leader identifier.
    pub leader: FieldValidationState,

    /// Validation pipeline state for the sub-leader identifier.
    pub subleader: FieldValidationState,

    /// Armed debounce timer for the leader field. Replacing or clearing the
    /// option drops the previous `Timeout`, which cancels it; at most one
    /// timer per field is ever pending.
    pub leader_timer: Option<Timeout>,

    /// Armed debounce timer for the sub-leader field.
    pub subleader_timer: Option<Timeout>,

    /// The application being drafted.
    pub draft: ClubDraft,

    /// True while a creation request is in flight.
    pub submitting: bool,

    /// Reference to the hidden file input used for the logo attachment.
    pub file_input_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ClubCreateComponent {
    pub fn new() -> Self {
        Self {
            roster: RosterCache::loading(),
            leader: FieldValidationState::new(),
            subleader: FieldValidationState::new(),
            leader_timer: None,
            subleader_timer: None,
            draft: ClubDraft::new(),
            submitting: false,
            file_input_ref: Default::default(),
            loaded: false,
        }
    }

    pub fn field_state(&self, role: LeadershipRole) -> &FieldValidationState {
        match role {
            LeadershipRole::Leader => &self.leader,
            LeadershipRole::Subleader => &self.subleader,
        }
    }

    pub fn field_state_mut(&mut self, role: LeadershipRole) -> &mut FieldValidationState {
        match role {
            LeadershipRole::Leader => &mut self.leader,
            LeadershipRole::Subleader => &mut self.subleader,
        }
    }

    pub fn timer_slot_mut(&mut self, role: LeadershipRole) -> &mut Option<Timeout> {
        match role {
            LeadershipRole::Leader => &mut self.leader_timer,
            LeadershipRole::Subleader => &mut self.subleader_timer,
        }
    }

    /// Clears the draft and both validation pipelines, cancelling any armed
    /// timers. Used after a successful submission.
    pub fn reset_form(&mut self) {
        self.draft = ClubDraft::new();
        self.leader.reset();
        self.subleader.reset();
        self.leader_timer = None;
        self.subleader_timer = None;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
