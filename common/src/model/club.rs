use serde::{Deserialize, Serialize};

/// The fixed set of club categories.
///
/// The frontend derives one of these from the resolved leadership profiles;
/// the serialized form is the kebab-case name used on the wire and in the
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClubCategory {
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "arts-and-cultural")]
    ArtsAndCultural,
    #[serde(rename = "sports-and-wellness")]
    SportsAndWellness,
    #[serde(rename = "academic")]
    Academic,
    #[serde(rename = "general")]
    General,
}

impl ClubCategory {
    /// All categories, in display order.
    pub const ALL: [ClubCategory; 5] = [
        ClubCategory::Technical,
        ClubCategory::ArtsAndCultural,
        ClubCategory::SportsAndWellness,
        ClubCategory::Academic,
        ClubCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::Technical => "technical",
            ClubCategory::ArtsAndCultural => "arts-and-cultural",
            ClubCategory::SportsAndWellness => "sports-and-wellness",
            ClubCategory::Academic => "academic",
            ClubCategory::General => "general",
        }
    }

    /// Parses the kebab-case wire form back into a category.
    pub fn from_str(value: &str) -> Option<ClubCategory> {
        ClubCategory::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Human-readable label for form controls.
    pub fn label(&self) -> &'static str {
        match self {
            ClubCategory::Technical => "Technical",
            ClubCategory::ArtsAndCultural => "Arts & Cultural",
            ClubCategory::SportsAndWellness => "Sports & Wellness",
            ClubCategory::Academic => "Academic",
            ClubCategory::General => "General",
        }
    }
}

/// The scalar fields of a club-creation request.
///
/// This is the payload body for `POST /api/clubs/apply`. When a logo is
/// attached the same struct travels as the `application` JSON part of a
/// multipart body, with the image bytes in a sibling `image` part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubApplication {
    pub club_name: String,
    pub club_email: String,
    pub club_password: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub category: Option<ClubCategory>,
    pub leader_id: String,
    pub subleader_id: String,
}

/// A club as returned by the public listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<ClubCategory>,
    pub leader_id: String,
    pub subleader_id: String,
    pub approved: bool,
}
