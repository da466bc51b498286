//! Update function for the club-creation form.
//!
//! Elm-style: receives the current `ClubCreateComponent` state, the
//! `Context`, and a `Msg`, mutates the state, and returns whether the view
//! should re-render.
//!
//! Key behaviors
//! - Debounced identifier validation: every keystroke bumps the field's
//!   generation and re-arms its single timer (arming drops the previous
//!   timer, cancelling it). The tick handler performs the synchronous
//!   roster lookup and applies the result only if the captured generation
//!   is still live.
//! - Auto-classification: whenever a leadership field changes its resolved
//!   record, the category is re-derived, unless the user has taken manual
//!   ownership of the field.
//! - Submission: re-validates, sends exactly one request (JSON, or
//!   multipart when a logo is attached), surfaces server messages verbatim,
//!   and clears the form on success.

use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::club::ClubCategory;

use super::classifier::{apply_classification, CategoryOwner};
use super::helpers::show_toast;
use super::messages::Msg;
use super::roster::RosterCache;
use super::state::ClubCreateComponent;
use super::submit::{build_application, can_submit, prepare_body, send_application};
use super::validation::DEBOUNCE_MS;

/// Central update function for the component.
pub fn update(
    component: &mut ClubCreateComponent,
    ctx: &Context<ClubCreateComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::RosterLoaded(records) => {
            component.roster = RosterCache::ready(records);
            true
        }
        Msg::RosterUnavailable => {
            component.roster.invalidate();
            true
        }
        Msg::DraftInput(field, value) => {
            *component.draft.field_mut(field) = value;
            true
        }
        Msg::CategoryEdited(value) => {
            component.draft.category = ClubCategory::from_str(&value);
            component.draft.category_owner = CategoryOwner::Manual;
            true
        }
        Msg::IdentifierInput(role, value) => {
            match component.field_state_mut(role).note_input(&value) {
                Some(generation) => {
                    let link = ctx.link().clone();
                    // Replacing the slot drops the previously armed timer,
                    // cancelling it: one pending timer per field, at most.
                    *component.timer_slot_mut(role) = Some(Timeout::new(DEBOUNCE_MS, move || {
                        link.send_message(Msg::LookupTick { role, generation });
                    }));
                }
                None => {
                    // Too short: resolved state was cleared synchronously,
                    // nothing to look up.
                    *component.timer_slot_mut(role) = None;
                    reclassify(component);
                }
            }
            true
        }
        Msg::LookupTick { role, generation } => {
            *component.timer_slot_mut(role) = None;
            let outcome = component
                .roster
                .lookup(&component.field_state(role).normalized())
                .cloned();
            let applied = component.field_state_mut(role).apply_lookup(generation, outcome);
            if applied {
                reclassify(component);
            }
            applied
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::ImageSelected(file) => {
            component.draft.image = file;
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let resolved_pair = (
                component.leader.resolved_id(),
                component.subleader.resolved_id(),
            );
            match resolved_pair {
                (Some(leader_id), Some(subleader_id))
                    if can_submit(&component.leader, &component.subleader, &component.draft) =>
                {
                    let application =
                        build_application(&component.draft, leader_id, subleader_id);
                    let body = prepare_body(application, component.draft.image.is_some());
                    let image = component.draft.image.clone();
                    component.submitting = true;

                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match send_application(body, image).await {
                            Ok(response) => link.send_message(Msg::SubmitSucceeded(response)),
                            Err(message) => link.send_message(Msg::SubmitFailed(message)),
                        }
                    });
                    true
                }
                _ => {
                    // Defense in depth: the button is disabled while invalid,
                    // but a submit that slips through is refused locally.
                    show_toast(
                        "Submission blocked: leadership not validated or required fields missing.",
                    );
                    true
                }
            }
        }
        Msg::SubmitSucceeded(response) => {
            component.submitting = false;
            component.reset_form();
            show_toast(&format!(
                "Club application submitted. Waiting for admin approval (ref {}).",
                response.id
            ));
            ctx.props().on_created.emit(response.id);
            true
        }
        Msg::SubmitFailed(message) => {
            component.submitting = false;
            show_toast(&message);
            true
        }
    }
}

/// Re-derives the draft category from the currently resolved records,
/// honoring the category ownership flag.
fn reclassify(component: &mut ClubCreateComponent) {
    apply_classification(
        &mut component.draft.category,
        component.draft.category_owner,
        component.leader.resolved(),
        component.subleader.resolved(),
    );
}
