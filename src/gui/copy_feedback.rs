//! Timed "copied" indicator for the code view
//!
//! Each copy pushes the deadline out; there is only ever one pending revert.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    window: Duration,
    shown_until: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            shown_until: None,
        }
    }

    /// Show the indicator, replacing any pending revert
    pub fn trigger(&mut self, now: Instant) {
        self.shown_until = Some(now + self.window);
    }

    /// Whether the indicator is up at `now`. Clears an expired deadline.
    pub fn is_showing(&mut self, now: Instant) -> bool {
        match self.shown_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.shown_until = None;
                false
            }
            None => false,
        }
    }

    /// Time left before the indicator reverts
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.shown_until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(2);

    #[test]
    fn test_hidden_until_triggered() {
        let mut feedback = CopyFeedback::new(WINDOW);
        let now = Instant::now();
        assert!(!feedback.is_showing(now));
        assert_eq!(feedback.remaining(now), None);
    }

    #[test]
    fn test_reverts_after_window() {
        let mut feedback = CopyFeedback::new(WINDOW);
        let start = Instant::now();
        feedback.trigger(start);

        assert!(feedback.is_showing(start));
        assert!(feedback.is_showing(start + Duration::from_millis(1999)));
        assert!(!feedback.is_showing(start + WINDOW));
        assert_eq!(feedback.remaining(start + WINDOW), None);
    }

    #[test]
    fn test_retrigger_resets_window() {
        let mut feedback = CopyFeedback::new(WINDOW);
        let start = Instant::now();
        feedback.trigger(start);
        feedback.trigger(start + Duration::from_millis(1500));

        // first deadline has passed but the second copy keeps it up
        assert!(feedback.is_showing(start + Duration::from_millis(2500)));
        assert_eq!(
            feedback.remaining(start + Duration::from_millis(2500)),
            Some(Duration::from_millis(1000))
        );
        assert!(!feedback.is_showing(start + Duration::from_millis(3500)));
    }
}
