//! Category suggestion from the resolved leadership profiles.
//!
//! A pure keyword heuristic: the skills and interests of whichever leadership
//! records are resolved are lower-cased into one text body and matched
//! against four fixed keyword sets in a fixed order. The first set with a
//! hit wins; a body matching nothing is `General`. First-match-wins is the
//! tie-break when a body spans several categories.

use common::model::club::ClubCategory;
use common::model::student::StudentRecord;

/// Who last wrote the draft's category field.
///
/// While `Auto`, every (re)resolution of a leadership field re-runs
/// `classify` and overwrites the category. The first manual edit flips the
/// owner to `Manual` and the classifier never writes again for the life of
/// the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOwner {
    Auto,
    Manual,
}

const TECHNICAL: &[&str] = &[
    "coding",
    "programming",
    "python",
    "java",
    "robot",
    "electronics",
    "software",
    "hardware",
    "machine learning",
    "cybersecurity",
    "web development",
    "arduino",
    "data science",
];

const ARTS_AND_CULTURAL: &[&str] = &[
    "painting",
    "drawing",
    "sketch",
    "music",
    "dance",
    "drama",
    "theater",
    "theatre",
    "singing",
    "photography",
    "poetry",
    "literature",
    "film",
    "sculpture",
];

const SPORTS_AND_WELLNESS: &[&str] = &[
    "cricket",
    "football",
    "basketball",
    "badminton",
    "volleyball",
    "athletics",
    "yoga",
    "fitness",
    "swimming",
    "running",
    "chess",
];

const ACADEMIC: &[&str] = &[
    "debate",
    "quiz",
    "research",
    "mathematics",
    "math",
    "physics",
    "chemistry",
    "biology",
    "economics",
    "astronomy",
    "olympiad",
];

/// Keyword sets in evaluation order.
const ORDERED_SETS: [(&[&str], ClubCategory); 4] = [
    (TECHNICAL, ClubCategory::Technical),
    (ARTS_AND_CULTURAL, ClubCategory::ArtsAndCultural),
    (SPORTS_AND_WELLNESS, ClubCategory::SportsAndWellness),
    (ACADEMIC, ClubCategory::Academic),
];

fn gather(body: &mut String, record: &StudentRecord) {
    for entry in record.skills.iter().chain(record.interests.iter()) {
        if !body.is_empty() {
            body.push(' ');
        }
        body.push_str(&entry.to_lowercase());
    }
}

/// Derives a category from the union of the resolved profiles' skills and
/// interests. Returns `None` when neither record is present; the caller
/// leaves the draft untouched in that case. Deterministic and side-effect
/// free.
pub fn classify(
    leader: Option<&StudentRecord>,
    subleader: Option<&StudentRecord>,
) -> Option<ClubCategory> {
    if leader.is_none() && subleader.is_none() {
        return None;
    }

    let mut body = String::new();
    if let Some(record) = leader {
        gather(&mut body, record);
    }
    if let Some(record) = subleader {
        gather(&mut body, record);
    }

    for (keywords, category) in ORDERED_SETS {
        if keywords.iter().any(|keyword| body.contains(keyword)) {
            return Some(category);
        }
    }
    Some(ClubCategory::General)
}

/// Writes a fresh classification into the draft's category slot, respecting
/// ownership: a `Manual` owner is never overwritten, and an empty
/// classification (no resolved records) changes nothing.
pub fn apply_classification(
    category: &mut Option<ClubCategory>,
    owner: CategoryOwner,
    leader: Option<&StudentRecord>,
    subleader: Option<&StudentRecord>,
) {
    if owner != CategoryOwner::Auto {
        return;
    }
    if let Some(derived) = classify(leader, subleader) {
        *category = Some(derived);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_skills(skills: &[&str], interests: &[&str]) -> StudentRecord {
        StudentRecord {
            student_id: "21CS001".to_string(),
            name: "Test Student".to_string(),
            email: "test@example.edu".to_string(),
            mobile: String::new(),
            department: "CSE".to_string(),
            year: "1".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            achievements: vec![],
        }
    }

    #[test]
    fn technical_skills_win() {
        let leader = with_skills(&["Python", "robotics"], &[]);
        assert_eq!(classify(Some(&leader), None), Some(ClubCategory::Technical));
    }

    #[test]
    fn interests_from_both_records_are_pooled() {
        let leader = with_skills(&[], &["painting"]);
        let subleader = with_skills(&[], &["theater"]);
        assert_eq!(
            classify(Some(&leader), Some(&subleader)),
            Some(ClubCategory::ArtsAndCultural)
        );
    }

    #[test]
    fn no_keyword_match_is_general() {
        let leader = with_skills(&["accounting"], &[]);
        assert_eq!(classify(Some(&leader), None), Some(ClubCategory::General));
    }

    #[test]
    fn both_absent_yields_no_category() {
        assert_eq!(classify(None, None), None);
    }

    #[test]
    fn first_matching_set_wins_over_later_sets() {
        // "coding" (technical) and "painting" (arts) in one body: technical
        // is evaluated first.
        let leader = with_skills(&["coding"], &["painting"]);
        assert_eq!(classify(Some(&leader), None), Some(ClubCategory::Technical));
    }

    #[test]
    fn classify_is_deterministic() {
        let leader = with_skills(&["yoga"], &[]);
        let subleader = with_skills(&[], &["debate"]);
        let first = classify(Some(&leader), Some(&subleader));
        for _ in 0..10 {
            assert_eq!(classify(Some(&leader), Some(&subleader)), first);
        }
        assert_eq!(first, Some(ClubCategory::SportsAndWellness));
    }

    #[test]
    fn manual_category_survives_later_resolutions() {
        let mut category = Some(ClubCategory::Academic);
        let leader = with_skills(&["Python"], &[]);

        // A new leader resolves after the user picked Academic by hand.
        apply_classification(
            &mut category,
            CategoryOwner::Manual,
            Some(&leader),
            None,
        );
        assert_eq!(category, Some(ClubCategory::Academic));

        // Under machine ownership the same resolution would have won.
        apply_classification(&mut category, CategoryOwner::Auto, Some(&leader), None);
        assert_eq!(category, Some(ClubCategory::Technical));
    }

    #[test]
    fn empty_classification_leaves_the_category_alone() {
        let mut category = Some(ClubCategory::General);
        apply_classification(&mut category, CategoryOwner::Auto, None, None);
        assert_eq!(category, Some(ClubCategory::General));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let leader = with_skills(&["CRICKET"], &[]);
        assert_eq!(
            classify(Some(&leader), None),
            Some(ClubCategory::SportsAndWellness)
        );
    }
}
