use serde::{Deserialize, Serialize};

/// Response body of a successful `POST /api/clubs/apply`.
///
/// `id` is the identifier of the newly created (still unapproved) club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClubResponse {
    pub id: String,
    pub message: String,
}
