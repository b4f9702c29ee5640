#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Short-term conversation memory.
//!
//! Holds the most recent distinct user utterances for the current session
//! only. Nothing here touches the filesystem.

use std::collections::VecDeque;

/// Default number of utterances kept by [`HistoryBuffer`].
pub const MAX_HISTORY: usize = 10;

/// Bounded, insertion-ordered set of lower-cased user utterances.
///
/// Recording an utterance that is already present changes nothing, not even
/// its position, so eviction stays strictly first-in first-out.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    items: VecDeque<String>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl HistoryBuffer {
    /// Create a buffer holding [`MAX_HISTORY`] utterances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with a custom capacity (at least one slot).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Record an utterance. Returns `true` if it was not already present.
    pub fn record(&mut self, utterance: &str) -> bool {
        let item = tokenize::normalise(utterance);
        if self.items.contains(&item) {
            return false;
        }
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front();
        }
        true
    }

    /// `true` when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of utterances currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether `utterance` (compared lower-cased) is in the buffer.
    pub fn contains(&self, utterance: &str) -> bool {
        let item = tokenize::normalise(utterance);
        self.items.contains(&item)
    }

    /// Recent utterances, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapshot(h: &HistoryBuffer) -> Vec<String> {
        h.recent().map(str::to_string).collect()
    }

    #[test]
    fn starts_empty() {
        let h = HistoryBuffer::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
    }

    #[test]
    fn record_lowercases_input() {
        let mut h = HistoryBuffer::new();
        assert!(h.record("Hello There"));
        assert_eq!(snapshot(&h), vec!["hello there"]);
        assert!(h.contains("HELLO there"));
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut h = HistoryBuffer::new();
        for i in 1..=11 {
            h.record(&format!("u{i}"));
        }
        let expected: Vec<String> = (2..=11).map(|i| format!("u{i}")).collect();
        assert_eq!(snapshot(&h), expected);
        assert_eq!(h.len(), MAX_HISTORY);
    }

    #[test]
    fn reinsert_does_not_refresh_position() {
        let mut h = HistoryBuffer::with_capacity(3);
        h.record("a");
        h.record("b");
        h.record("c");
        assert!(!h.record("A"));
        assert_eq!(snapshot(&h), vec!["a", "b", "c"]);
        // "a" is still the oldest and goes first
        h.record("d");
        assert_eq!(snapshot(&h), vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut h = HistoryBuffer::with_capacity(0);
        h.record("x");
        h.record("y");
        assert_eq!(snapshot(&h), vec!["y"]);
    }

    proptest! {
        #[test]
        fn size_never_exceeds_capacity(inputs in proptest::collection::vec("[a-zA-Z ]{1,8}", 0..40)) {
            let mut h = HistoryBuffer::new();
            for s in &inputs {
                h.record(s);
                prop_assert!(h.len() <= MAX_HISTORY);
                prop_assert!(h.contains(s));
            }
        }

        #[test]
        fn reinserting_present_item_is_a_no_op(inputs in proptest::collection::vec("[a-z]{1,4}", 1..20), pick in 0usize..20) {
            let mut h = HistoryBuffer::new();
            for s in &inputs {
                h.record(s);
            }
            let before = snapshot(&h);
            let again = before.get(pick % before.len()).cloned().unwrap_or_default();
            prop_assert!(!h.record(&again));
            prop_assert_eq!(snapshot(&h), before);
        }
    }
}
