//! Response store — answers keyed by question id, plus the SKIP sentinel.

use std::collections::HashMap;

/// Recorded value for a question bypassed by a conditional skip.
///
/// Skips are always recorded explicitly so downstream consumers can tell
/// "not asked" apart from "no data".
pub const SKIP: &str = "SKIP";

/// Mapping from question id to the recorded response value.
///
/// Grows monotonically during a conversation; last write wins if a question
/// id is recorded twice (SKIP and explicit answers share the same slot).
#[derive(Debug, Default)]
pub struct ResponseStore {
    values: HashMap<String, String>,
}

impl ResponseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the response for a question.
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(question_id.into(), value.into());
    }

    /// Look up the recorded response for a question.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.values.get(question_id).map(String::as_str)
    }

    /// Whether the question was answered (or skipped).
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }

    /// Whether the question was conditionally skipped.
    pub fn was_skipped(&self, question_id: &str) -> bool {
        self.get(question_id) == Some(SKIP)
    }

    /// Number of recorded responses (skips included).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no responses have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view for conditional evaluation. Predicates get this instead
    /// of the store itself so they cannot mutate it.
    pub fn snapshot(&self) -> ResponseSnapshot<'_> {
        ResponseSnapshot { values: &self.values }
    }
}

/// Read-only capability over recorded responses, handed to conditionals.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSnapshot<'a> {
    values: &'a HashMap<String, String>,
}

impl<'a> ResponseSnapshot<'a> {
    /// Look up the recorded response for a question.
    pub fn get(&self, question_id: &str) -> Option<&'a str> {
        self.values.get(question_id).map(String::as_str)
    }

    /// Whether the question has a recorded response (skips included).
    pub fn contains(&self, question_id: &str) -> bool {
        self.values.contains_key(question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_get() {
        let mut store = ResponseStore::new();
        assert!(store.is_empty());

        store.record("ready", "Yes");
        assert_eq!(store.get("ready"), Some("Yes"));
        assert!(store.contains("ready"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn last_write_wins() {
        let mut store = ResponseStore::new();
        store.record("symptoms", SKIP);
        store.record("symptoms", "Fatigue");
        assert_eq!(store.get("symptoms"), Some("Fatigue"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn skip_is_an_explicit_entry() {
        let mut store = ResponseStore::new();
        store.record("adherence_difficulty", SKIP);
        assert!(store.contains("adherence_difficulty"));
        assert!(store.was_skipped("adherence_difficulty"));
        assert!(!store.was_skipped("never_recorded"));
    }

    #[test]
    fn snapshot_reflects_store() {
        let mut store = ResponseStore::new();
        store.record("ready", "Yes");

        let snap = store.snapshot();
        assert_eq!(snap.get("ready"), Some("Yes"));
        assert!(snap.contains("ready"));
        assert!(!snap.contains("ready2"));
    }
}
