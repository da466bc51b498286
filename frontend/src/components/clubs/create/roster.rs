//! In-memory cache of the student roster.
//!
//! The roster is fetched exactly once when the club-creation form mounts
//! (see `mod.rs`) and is read-only for the rest of the session. Lookups are
//! synchronous dictionary reads; no component performs per-keystroke
//! requests against the server.

use std::collections::HashMap;

use common::model::student::StudentRecord;

/// Load state of the roster, surfaced in the form header so a failed fetch
/// is distinguishable from an identifier that simply is not in the roster.
///
/// `lookup` itself does not distinguish the two: with an empty cache every
/// identifier resolves to not-found, whatever the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterHealth {
    /// Initial fetch still in flight.
    Loading,
    /// Fetch succeeded; the cache holds the full roster.
    Ready,
    /// Fetch failed; the cache is empty and stays empty.
    Unavailable,
}

/// Normalizes a student identifier for keying and comparison.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Owning map from normalized student identifier to roster record.
pub struct RosterCache {
    records: HashMap<String, StudentRecord>,
    health: RosterHealth,
}

impl RosterCache {
    /// An empty cache in the `Loading` state, the value the form mounts with.
    pub fn loading() -> Self {
        Self {
            records: HashMap::new(),
            health: RosterHealth::Loading,
        }
    }

    /// Builds a ready cache from the fetched roster, normalizing keys so
    /// `lookup` is a plain `get`.
    pub fn ready(records: HashMap<String, StudentRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|(id, record)| (normalize_identifier(&id), record))
            .collect();
        Self {
            records,
            health: RosterHealth::Ready,
        }
    }

    pub fn health(&self) -> RosterHealth {
        self.health
    }

    /// Synchronous, case-normalized read. Never performs I/O.
    pub fn lookup(&self, identifier: &str) -> Option<&StudentRecord> {
        self.records.get(&normalize_identifier(identifier))
    }

    /// Empties the cache. Subsequent lookups all report not-found until a
    /// fresh roster is installed with `ready`.
    pub fn invalidate(&mut self) {
        self.records.clear();
        self.health = RosterHealth::Unavailable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> StudentRecord {
        StudentRecord {
            student_id: id.to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.edu".to_string(),
            mobile: String::new(),
            department: "CSE".to_string(),
            year: "3".to_string(),
            skills: vec![],
            interests: vec![],
            achievements: vec![],
        }
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        let mut records = HashMap::new();
        records.insert("21cs044".to_string(), record("21cs044"));
        let cache = RosterCache::ready(records);

        assert!(cache.lookup("21CS044").is_some());
        assert!(cache.lookup("  21cs044  ").is_some());
        assert!(cache.lookup("21CS045").is_none());
    }

    #[test]
    fn unavailable_roster_reports_not_found_for_everything() {
        let mut cache = RosterCache::loading();
        cache.invalidate();
        assert_eq!(cache.health(), RosterHealth::Unavailable);
        assert!(cache.lookup("21CS044").is_none());
    }

    #[test]
    fn invalidate_empties_a_ready_cache() {
        let mut records = HashMap::new();
        records.insert("21CS044".to_string(), record("21CS044"));
        let mut cache = RosterCache::ready(records);
        assert!(cache.lookup("21cs044").is_some());

        cache.invalidate();
        assert_eq!(cache.health(), RosterHealth::Unavailable);
        assert!(cache.lookup("21cs044").is_none());
    }
}
