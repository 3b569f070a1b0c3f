//! # Favorite Batch Queue
//!
//! Favorite toggles are not committed one by one. They accumulate here, keyed
//! by asset address with the last write winning, and are committed as two
//! batches (adds, then removes) at flush points chosen by the session:
//!
//! - the screen loses focus (non-discovery sessions)
//! - the search query is cleared after the queue changed during a search
//! - the session closes
//!
//! Each entry remembers the state the asset had before its first toggle, so
//! toggling an asset on and back off cancels out and commits nothing.
//!
//! At most one flush is in flight. Flushing drains the queue, so toggles made
//! while a batch is being committed wait for the next cycle.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Intent {
    /// Favorite state before the first queued toggle
    baseline: bool,
    pending: bool,
}

/// Addresses to commit, split by target state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushBatch {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl FlushBatch {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Pending favorite intents plus flush bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct FavoriteQueue {
    pending: HashMap<String, Intent>,
    in_flight: bool,
    /// A flush was asked for while another was in flight
    flush_requested: bool,
    /// The queue changed while a search query was active
    search_deferred: bool,
}

impl FavoriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `address` should end up favorited (`true`) or not.
    ///
    /// `searching` marks the mutation as made during a non-empty search, which
    /// arms the flush-on-clear trigger.
    pub fn record_intent(&mut self, address: &str, is_favorited: bool, searching: bool) {
        match self.pending.get_mut(address) {
            Some(intent) => {
                intent.pending = is_favorited;
                if intent.pending == intent.baseline {
                    self.pending.remove(address);
                }
            }
            None => {
                self.pending.insert(
                    address.to_string(),
                    Intent {
                        baseline: !is_favorited,
                        pending: is_favorited,
                    },
                );
            }
        }

        if searching {
            self.search_deferred = true;
        }
    }

    /// Pending state for `address`, if any.
    pub fn pending_state(&self, address: &str) -> Option<bool> {
        self.pending.get(address).map(|intent| intent.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_flushing(&self) -> bool {
        self.in_flight
    }

    /// Consume the flush-on-clear trigger. Returns `true` at most once per arming.
    pub fn take_search_deferred(&mut self) -> bool {
        std::mem::take(&mut self.search_deferred)
    }

    /// Drain the queue into a batch and mark a flush in flight.
    ///
    /// Returns `None` when a flush is already running (the request is
    /// remembered for when it finishes) or when there is nothing to commit.
    pub fn begin_flush(&mut self) -> Option<FlushBatch> {
        if self.in_flight {
            self.flush_requested = true;
            return None;
        }
        if self.pending.is_empty() {
            return None;
        }

        let mut batch = FlushBatch::default();
        for (address, intent) in self.pending.drain() {
            if intent.pending {
                batch.add.push(address);
            } else {
                batch.remove.push(address);
            }
        }
        batch.add.sort();
        batch.remove.sort();

        self.in_flight = true;
        Some(batch)
    }

    /// Mark the in-flight flush complete.
    ///
    /// If another flush was requested meanwhile, the next batch is started and returned.
    pub fn finish_flush(&mut self) -> Option<FlushBatch> {
        self.in_flight = false;
        if std::mem::take(&mut self.flush_requested) {
            self.begin_flush()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_one_entry_per_address() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xa", true, false);
        queue.record_intent("0xb", false, false);
        queue.record_intent("0xb", true, false);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pending_state("0xa"), Some(true));
        // 0xb was favorited, unfavorited then favorited again: back to baseline
        assert_eq!(queue.pending_state("0xb"), None);
    }

    #[test]
    fn test_toggle_on_then_off_commits_nothing() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xdai", true, false);
        queue.record_intent("0xdai", false, false);
        assert!(queue.is_empty());
        assert_eq!(queue.begin_flush(), None);
        assert!(!queue.is_flushing());
    }

    #[test]
    fn test_flush_partitions_into_disjoint_sets() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xc", true, false);
        queue.record_intent("0xa", true, false);
        queue.record_intent("0xb", false, false);
        queue.record_intent("0xd", false, false);
        queue.record_intent("0xd", true, false);
        queue.record_intent("0xd", false, false);

        let batch = queue.begin_flush().expect("batch");
        assert_eq!(batch.add, vec!["0xa".to_string(), "0xc".to_string()]);
        assert_eq!(batch.remove, vec!["0xb".to_string(), "0xd".to_string()]);
        assert!(queue.is_empty());
        assert!(queue.is_flushing());
    }

    #[test]
    fn test_no_reentrant_flush_and_mutations_wait_for_next_cycle() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xa", true, false);
        let first = queue.begin_flush().expect("first batch");
        assert_eq!(first.add, vec!["0xa".to_string()]);

        // Arrives while the first batch is committing
        queue.record_intent("0xb", true, false);
        assert_eq!(queue.begin_flush(), None);
        assert_eq!(queue.pending_state("0xb"), Some(true));

        let next = queue.finish_flush().expect("deferred flush");
        assert_eq!(next.add, vec!["0xb".to_string()]);
        assert!(next.remove.is_empty());
        assert!(queue.is_flushing());

        assert_eq!(queue.finish_flush(), None);
        assert!(!queue.is_flushing());
    }

    #[test]
    fn test_finish_without_request_does_not_start_another() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xa", true, false);
        queue.begin_flush();
        queue.record_intent("0xb", true, false);
        assert_eq!(queue.finish_flush(), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_search_deferred_consumed_once() {
        let mut queue = FavoriteQueue::new();
        queue.record_intent("0xa", true, false);
        assert!(!queue.take_search_deferred());

        queue.record_intent("0xb", true, true);
        assert!(queue.take_search_deferred());
        assert!(!queue.take_search_deferred());
    }
}
