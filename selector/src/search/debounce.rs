//! Trailing debounce for the search query.
//!
//! Every keystroke restarts the quiet timer; the settled value only changes once
//! the timer runs out, so a burst of typing yields one update carrying the final
//! text. Time comes in from the caller (`tokio::time::Instant`), which keeps the
//! debouncer deterministic under a paused test clock.

use std::time::Duration;
use tokio::time::Instant;

/// Trailing debouncer over a string value.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Latest raw value
    value: String,
    /// Last value that survived a full quiet interval
    settled: String,
    /// Timestamp of the last change, `None` when nothing is pending
    last_change: Option<Instant>,
    interval: Duration,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            value: String::new(),
            settled: String::new(),
            last_change: None,
            interval,
        }
    }

    /// Record a new raw value and restart the quiet timer.
    pub fn input(&mut self, value: &str, now: Instant) {
        if value == self.value {
            return;
        }
        self.value = value.to_string();
        self.last_change = Some(now);
    }

    /// Returns the new settled value once the quiet interval has elapsed.
    ///
    /// Yields `None` while the timer is running, when nothing changed, or when
    /// the text was edited back to the already-settled value.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let changed_at = self.last_change?;
        if now.saturating_duration_since(changed_at) < self.interval {
            return None;
        }

        self.last_change = None;
        if self.value == self.settled {
            return None;
        }
        self.settled = self.value.clone();
        Some(self.settled.clone())
    }

    /// When the pending value will settle, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_change.map(|changed_at| changed_at + self.interval)
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Latest raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value as of the last settle
    pub fn settled(&self) -> &str {
        &self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_settles_once_with_final_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(350));

        debouncer.input("u", start);
        debouncer.input("us", start + ms(100));
        assert_eq!(debouncer.poll(start + ms(300)), None);
        debouncer.input("usd", start + ms(200));
        debouncer.input("usdc", start + ms(300));

        // 349ms after the last keystroke: still quiet period
        assert_eq!(debouncer.poll(start + ms(649)), None);
        assert_eq!(debouncer.poll(start + ms(650)), Some("usdc".to_string()));
        assert_eq!(debouncer.poll(start + ms(2000)), None);
        assert_eq!(debouncer.settled(), "usdc");
    }

    #[test]
    fn test_edit_back_to_settled_value_is_not_an_update() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(350));

        debouncer.input("dai", start);
        assert_eq!(debouncer.poll(start + ms(350)), Some("dai".to_string()));

        debouncer.input("da", start + ms(400));
        debouncer.input("dai", start + ms(450));
        assert_eq!(debouncer.poll(start + ms(900)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_deadline_tracks_last_change() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(350));
        assert_eq!(debouncer.deadline(), None);

        debouncer.input("e", start);
        debouncer.input("et", start + ms(50));
        assert_eq!(debouncer.deadline(), Some(start + ms(400)));
        assert_eq!(debouncer.value(), "et");
        assert_eq!(debouncer.settled(), "");
    }

    #[test]
    fn test_clearing_query_settles_to_empty() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(350));
        debouncer.input("weth", start);
        debouncer.poll(start + ms(350));

        debouncer.input("", start + ms(500));
        assert_eq!(debouncer.poll(start + ms(850)), Some(String::new()));
    }
}
