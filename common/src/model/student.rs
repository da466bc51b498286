use serde::{Deserialize, Serialize};

/// A single entry in the student roster.
///
/// Records are produced by the profile service and consumed read-only by the
/// club-creation workflow: the frontend fetches the whole roster once and
/// resolves leadership identifiers against it without further requests.
///
/// `student_id` is the unique roster key (roll/registration number). Matching
/// against user input is case-insensitive, so identifiers are stored the way
/// the student registered them and normalized at lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    pub department: String,
    pub year: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}
