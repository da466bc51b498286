//! Per-field validation state for the leader and sub-leader identifiers.
//!
//! Each field runs an independent debounce pipeline: keystrokes bump a
//! generation counter and (re)arm a single timer; when the timer fires the
//! roster lookup result is applied only if its captured generation still
//! matches the field's live generation. The timer itself lives in the
//! component state (`state.rs`) so that arming a new one drops, and thereby
//! cancels, the previous one. The generation check here covers any firing
//! that slips through.

use common::model::student::StudentRecord;

/// Quiet interval after the last keystroke before a lookup fires, shared by
/// both leadership fields.
pub const DEBOUNCE_MS: u32 = 400;

/// Identifiers shorter than this (after normalization) are never looked up.
pub const MIN_IDENTIFIER_LEN: usize = 3;

/// Which leadership field a message or timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipRole {
    Leader,
    Subleader,
}

/// Resolution status of one identifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// No lookup pending or applicable (empty or too-short input).
    Idle,
    /// Input accepted, lookup scheduled or in flight.
    Pending,
    /// Identifier matched a roster record.
    Resolved,
    /// Debounced lookup completed without a match.
    NotFound,
}

/// Validation state of a single leadership identifier field.
pub struct FieldValidationState {
    raw_input: String,
    generation: u32,
    status: FieldStatus,
    resolved: Option<StudentRecord>,
}

impl FieldValidationState {
    pub fn new() -> Self {
        Self {
            raw_input: String::new(),
            generation: 0,
            status: FieldStatus::Idle,
            resolved: None,
        }
    }

    /// Records a keystroke.
    ///
    /// Every call increments the generation, so results captured under an
    /// older generation can no longer be applied. Returns the generation a
    /// scheduled lookup must capture, or `None` when the normalized input is
    /// below the minimum length; in that case any resolved state is cleared
    /// immediately and no lookup should be armed.
    pub fn note_input(&mut self, raw: &str) -> Option<u32> {
        self.raw_input = raw.to_string();
        self.generation = self.generation.wrapping_add(1);

        if self.normalized().len() < MIN_IDENTIFIER_LEN {
            self.status = FieldStatus::Idle;
            self.resolved = None;
            None
        } else {
            self.status = FieldStatus::Pending;
            Some(self.generation)
        }
    }

    /// Applies a completed lookup, unless the field has moved on.
    ///
    /// Returns `false` when `generation` no longer matches the live counter;
    /// the stale result is discarded without touching the state.
    pub fn apply_lookup(&mut self, generation: u32, outcome: Option<StudentRecord>) -> bool {
        if generation != self.generation {
            return false;
        }
        match outcome {
            Some(record) => {
                self.status = FieldStatus::Resolved;
                self.resolved = Some(record);
            }
            None => {
                self.status = FieldStatus::NotFound;
                self.resolved = None;
            }
        }
        true
    }

    /// Trimmed, upper-cased view of the current input.
    pub fn normalized(&self) -> String {
        super::roster::normalize_identifier(&self.raw_input)
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn resolved(&self) -> Option<&StudentRecord> {
        self.resolved.as_ref()
    }

    /// Normalized identifier of the resolved record, if any.
    pub fn resolved_id(&self) -> Option<String> {
        self.resolved
            .as_ref()
            .map(|r| super::roster::normalize_identifier(&r.student_id))
    }

    /// Returns the field to its initial state, invalidating in-flight work.
    pub fn reset(&mut self) {
        self.raw_input.clear();
        self.generation = self.generation.wrapping_add(1);
        self.status = FieldStatus::Idle;
        self.resolved = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.edu".to_string(),
            mobile: String::new(),
            department: "ECE".to_string(),
            year: "2".to_string(),
            skills: vec!["Python".to_string()],
            interests: vec![],
            achievements: vec![],
        }
    }

    #[test]
    fn each_keystroke_bumps_the_generation() {
        let mut field = FieldValidationState::new();
        let g1 = field.note_input("21C").expect("long enough");
        let g2 = field.note_input("21CS").expect("long enough");
        let g3 = field.note_input("21CS0").expect("long enough");
        assert!(g1 < g2 && g2 < g3);
        assert_eq!(field.status(), FieldStatus::Pending);
    }

    #[test]
    fn stale_generation_result_is_discarded() {
        let mut field = FieldValidationState::new();
        let stale = field.note_input("21CS044").unwrap();
        // A newer keystroke arrives before the first lookup completes.
        let live = field.note_input("21CS045").unwrap();

        assert!(!field.apply_lookup(stale, Some(record("21CS044"))));
        assert_eq!(field.status(), FieldStatus::Pending);
        assert!(field.resolved().is_none());

        assert!(field.apply_lookup(live, None));
        assert_eq!(field.status(), FieldStatus::NotFound);
    }

    #[test]
    fn matching_generation_resolves_the_field() {
        let mut field = FieldValidationState::new();
        let generation = field.note_input("21cs044").unwrap();
        assert!(field.apply_lookup(generation, Some(record("21CS044"))));
        assert_eq!(field.status(), FieldStatus::Resolved);
        assert_eq!(field.resolved_id().as_deref(), Some("21CS044"));
    }

    #[test]
    fn short_input_clears_resolved_state_synchronously() {
        let mut field = FieldValidationState::new();
        let generation = field.note_input("21CS044").unwrap();
        field.apply_lookup(generation, Some(record("21CS044")));
        assert_eq!(field.status(), FieldStatus::Resolved);

        assert!(field.note_input("21").is_none());
        assert_eq!(field.status(), FieldStatus::Idle);
        assert!(field.resolved().is_none());
    }

    #[test]
    fn whitespace_only_input_stays_idle() {
        let mut field = FieldValidationState::new();
        assert!(field.note_input("   ").is_none());
        assert_eq!(field.status(), FieldStatus::Idle);
    }

    #[test]
    fn unavailable_roster_yields_not_found_not_eternal_pending() {
        use super::super::roster::RosterCache;

        let mut cache = RosterCache::loading();
        cache.invalidate();
        let mut field = FieldValidationState::new();
        let generation = field.note_input("21CS044").unwrap();
        assert_eq!(field.status(), FieldStatus::Pending);

        // The debounce fires, the lookup runs against the empty cache.
        let outcome = cache.lookup(&field.normalized()).cloned();
        assert!(field.apply_lookup(generation, outcome));
        assert_eq!(field.status(), FieldStatus::NotFound);
    }

    #[test]
    fn reset_invalidates_in_flight_lookups() {
        let mut field = FieldValidationState::new();
        let generation = field.note_input("21CS044").unwrap();
        field.reset();
        assert!(!field.apply_lookup(generation, Some(record("21CS044"))));
        assert_eq!(field.status(), FieldStatus::Idle);
        assert_eq!(field.raw_input(), "");
    }
}
