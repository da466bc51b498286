//! Submission gate and dispatch for the club application.
//!
//! `can_submit` is the cross-field invariant: both leadership identifiers
//! resolved, resolved to different students, required scalars filled. It is
//! recomputed from live state on every render and again inside the submit
//! handler, which does not trust its caller.
//!
//! Encoding: with a logo attached the application travels as multipart form
//! data (an `application` JSON part followed by the `image` part); without
//! one it is a plain JSON body. Exactly one request is sent per submit, and
//! a failed attempt is never retried automatically.

use gloo_net::http::Request;

use common::model::club::ClubApplication;
use common::requests::CreateClubResponse;

use super::state::ClubDraft;
use super::validation::{FieldStatus, FieldValidationState};

const APPLY_URL: &str = "/api/clubs/apply";

/// Shown when the server rejects a submission without a message of its own.
pub const GENERIC_FAILURE: &str =
    "Club creation failed. Please review the application and try again.";

/// True iff the application may be submitted: both fields resolved, the two
/// resolved identifiers differ (case-normalized), and the required scalar
/// fields are non-empty.
pub fn can_submit(
    leader: &FieldValidationState,
    subleader: &FieldValidationState,
    draft: &ClubDraft,
) -> bool {
    if leader.status() != FieldStatus::Resolved || subleader.status() != FieldStatus::Resolved {
        return false;
    }
    let distinct = match (leader.resolved_id(), subleader.resolved_id()) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    };
    distinct && draft.required_filled()
}

/// Assembles the wire payload from the draft and the resolved identifiers.
pub fn build_application(
    draft: &ClubDraft,
    leader_id: String,
    subleader_id: String,
) -> ClubApplication {
    ClubApplication {
        club_name: draft.club_name.clone(),
        club_email: draft.club_email.clone(),
        club_password: draft.club_password.clone(),
        description: draft.description.clone(),
        purpose: draft.purpose.clone(),
        category: draft.category,
        leader_id,
        subleader_id,
    }
}

/// Chosen encoding for one submission.
pub enum SubmissionBody {
    /// Plain JSON body, no attachment.
    Structured(ClubApplication),
    /// Multipart body: `application` JSON part plus an `image` part.
    Multipart(ClubApplication),
}

/// Picks the encoding: multipart iff an image is attached.
pub fn prepare_body(application: ClubApplication, has_image: bool) -> SubmissionBody {
    if has_image {
        SubmissionBody::Multipart(application)
    } else {
        SubmissionBody::Structured(application)
    }
}

fn multipart_form(
    application: &ClubApplication,
    image: &web_sys::File,
) -> Result<web_sys::FormData, String> {
    let form =
        web_sys::FormData::new().map_err(|_| "could not build multipart body".to_string())?;
    let json = serde_json::to_string(application).map_err(|e| e.to_string())?;
    form.append_with_str("application", &json)
        .map_err(|_| "could not attach application part".to_string())?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(|_| "could not attach image part".to_string())?;
    Ok(form)
}

/// Sends one creation request and interprets the outcome.
///
/// On a non-success status the server body is surfaced verbatim when
/// non-empty; a transport error or an empty body falls back to
/// [`GENERIC_FAILURE`]-style wording without inventing detail the server
/// never sent.
pub async fn send_application(
    body: SubmissionBody,
    image: Option<web_sys::File>,
) -> Result<CreateClubResponse, String> {
    let request = match body {
        SubmissionBody::Structured(application) => Request::post(APPLY_URL)
            .json(&application)
            .map_err(|e| e.to_string())?,
        SubmissionBody::Multipart(application) => {
            let file = image.ok_or_else(|| "logo attachment is missing".to_string())?;
            let form = multipart_form(&application, &file)?;
            Request::post(APPLY_URL)
                .body(form)
                .map_err(|e| e.to_string())?
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => response
            .json::<CreateClubResponse>()
            .await
            .map_err(|e| e.to_string()),
        Ok(response) => {
            let server_message = response.text().await.unwrap_or_default();
            if server_message.trim().is_empty() {
                Err(GENERIC_FAILURE.to_string())
            } else {
                Err(server_message)
            }
        }
        Err(err) => Err(format!("Failed to submit club application: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::club::ClubCategory;
    use common::model::student::StudentRecord;

    fn record(id: &str) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            name: "Test Student".to_string(),
            email: "test@example.edu".to_string(),
            mobile: String::new(),
            department: "CSE".to_string(),
            year: "3".to_string(),
            skills: vec![],
            interests: vec![],
            achievements: vec![],
        }
    }

    fn resolved_field(id: &str) -> FieldValidationState {
        let mut field = FieldValidationState::new();
        let generation = field.note_input(id).expect("identifier long enough");
        assert!(field.apply_lookup(generation, Some(record(id))));
        field
    }

    fn filled_draft() -> ClubDraft {
        let mut draft = ClubDraft::new();
        draft.club_name = "Coding Circle".to_string();
        draft.club_email = "coding@example.edu".to_string();
        draft.club_password = "hunter2".to_string();
        draft
    }

    #[test]
    fn submit_allowed_with_two_distinct_resolved_leaders() {
        let leader = resolved_field("21CS044");
        let subleader = resolved_field("21CS045");
        assert!(can_submit(&leader, &subleader, &filled_draft()));
    }

    #[test]
    fn same_resolved_identifier_blocks_submission() {
        let leader = resolved_field("21CS044");
        // Same student entered with different casing still counts as equal.
        let subleader = resolved_field("21cs044");
        assert!(!can_submit(&leader, &subleader, &filled_draft()));
    }

    #[test]
    fn unresolved_field_blocks_submission() {
        let leader = resolved_field("21CS044");
        let mut subleader = FieldValidationState::new();
        subleader.note_input("21CS045");
        assert!(!can_submit(&leader, &subleader, &filled_draft()));
    }

    #[test]
    fn missing_required_scalar_blocks_submission() {
        let leader = resolved_field("21CS044");
        let subleader = resolved_field("21CS045");
        let mut draft = filled_draft();
        draft.club_password = String::new();
        assert!(!can_submit(&leader, &subleader, &draft));
    }

    #[test]
    fn encoding_follows_attachment_presence() {
        let application = build_application(
            &filled_draft(),
            "21CS044".to_string(),
            "21CS045".to_string(),
        );
        assert!(matches!(
            prepare_body(application.clone(), true),
            SubmissionBody::Multipart(_)
        ));
        assert!(matches!(
            prepare_body(application, false),
            SubmissionBody::Structured(_)
        ));
    }

    #[test]
    fn application_carries_every_scalar_field() {
        let mut draft = filled_draft();
        draft.description = "We write code.".to_string();
        draft.purpose = "Teach programming.".to_string();
        draft.category = Some(ClubCategory::Technical);

        let application =
            build_application(&draft, "21CS044".to_string(), "21CS045".to_string());
        let value = serde_json::to_value(&application).expect("serializable");
        let object = value.as_object().expect("flat object");

        for key in [
            "club_name",
            "club_email",
            "club_password",
            "description",
            "purpose",
            "category",
            "leader_id",
            "subleader_id",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
        }
        assert_eq!(object["category"], "technical");
        assert_eq!(object["leader_id"], "21CS044");
    }
}
