//! List visibility across screen transitions.
//!
//! The list is visible while the screen is focused, while an explainer sheet
//! covers it, or while a transition is in progress. Losing focus schedules the
//! end of the transition after a settle delay so the list does not vanish while
//! the screen animates away. Sessions opened without a settle delay (discovery
//! entry) keep a started transition until the screen is torn down.

use std::time::Duration;
use tokio::time::Instant;

/// Direction of a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Gained,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Visibility {
    focused: bool,
    transitioning: bool,
    settle_at: Option<Instant>,
    settle_delay: Option<Duration>,
}

impl Visibility {
    /// Sessions open focused. `None` disables the settle on focus loss.
    pub fn new(settle_delay: Option<Duration>) -> Self {
        Self {
            focused: true,
            transitioning: false,
            settle_at: None,
            settle_delay,
        }
    }

    /// Record the screen's focus state. Returns the change, if any.
    pub fn set_focused(&mut self, focused: bool, now: Instant) -> Option<FocusChange> {
        if focused == self.focused {
            return None;
        }
        self.focused = focused;

        if focused {
            self.settle_at = None;
            Some(FocusChange::Gained)
        } else {
            self.settle_at = self.settle_delay.map(|delay| now + delay);
            Some(FocusChange::Lost)
        }
    }

    /// Keep the list on screen until the next settle.
    pub fn begin_transition(&mut self) {
        self.transitioning = true;
    }

    /// End the transition once the settle delay has elapsed. Returns `true` when it did.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.settle_at {
            Some(at) if now >= at => {
                self.settle_at = None;
                self.transitioning = false;
                true
            }
            _ => false,
        }
    }

    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_at
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_list_visible(&self, viewing_explainer: bool) -> bool {
        self.focused || self.transitioning || viewing_explainer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(750);

    #[test]
    fn test_visible_while_focused() {
        let visibility = Visibility::new(Some(SETTLE));
        assert!(visibility.is_focused());
        assert!(visibility.is_list_visible(false));
    }

    #[test]
    fn test_transition_keeps_list_until_settle() {
        let start = Instant::now();
        let mut visibility = Visibility::new(Some(SETTLE));
        visibility.begin_transition();

        assert_eq!(visibility.set_focused(false, start), Some(FocusChange::Lost));
        assert!(visibility.is_list_visible(false));

        assert!(!visibility.poll(start + Duration::from_millis(749)));
        assert!(visibility.is_list_visible(false));

        assert!(visibility.poll(start + SETTLE));
        assert!(!visibility.is_list_visible(false));
        // Explainer on top still shows the list
        assert!(visibility.is_list_visible(true));
    }

    #[test]
    fn test_unfocused_without_transition_hides() {
        let start = Instant::now();
        let mut visibility = Visibility::new(Some(SETTLE));
        visibility.set_focused(false, start);
        assert!(!visibility.is_list_visible(false));
    }

    #[test]
    fn test_without_settle_delay_transition_persists() {
        let start = Instant::now();
        let mut visibility = Visibility::new(None);
        visibility.begin_transition();

        assert_eq!(visibility.set_focused(false, start), Some(FocusChange::Lost));
        assert_eq!(visibility.settle_deadline(), None);
        assert!(!visibility.poll(start + Duration::from_secs(10)));
        assert!(visibility.is_list_visible(false));
    }

    #[test]
    fn test_repeated_focus_state_is_not_a_change() {
        let start = Instant::now();
        let mut visibility = Visibility::new(Some(SETTLE));
        assert_eq!(visibility.set_focused(true, start), None);
        visibility.set_focused(false, start);
        assert_eq!(visibility.set_focused(false, start), None);
        assert_eq!(visibility.set_focused(true, start), Some(FocusChange::Gained));
        assert_eq!(visibility.settle_deadline(), None);
    }
}
