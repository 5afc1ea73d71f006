//! One-second countdown primitive
//!
//! The environment owns the real 1 Hz schedule; a `Countdown` only decides
//! what each delivered tick means. `active` is the single authority on whether
//! a tick is honoured, so a tick that races a cancel is dropped.

use serde::{Deserialize, Serialize};

/// Which countdown a scheduled tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// "3, 2, 1" before the first word
    PreRound,
    /// Round clock
    Round,
}

/// Result of a honoured tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still running with this many seconds left
    Running(u32),
    /// Reached zero; the countdown is now inactive
    Finished,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// (Re)start from `seconds`
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.active = true;
    }

    /// Stop without finishing. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance one second. `None` when inactive (stale tick).
    pub fn tick(&mut self) -> Option<CountdownStep> {
        if !self.active {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            Some(CountdownStep::Finished)
        } else {
            Some(CountdownStep::Running(self.remaining))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_down_to_zero() {
        let mut c = Countdown::default();
        c.start(3);
        assert_eq!(c.tick(), Some(CountdownStep::Running(2)));
        assert_eq!(c.tick(), Some(CountdownStep::Running(1)));
        assert_eq!(c.tick(), Some(CountdownStep::Finished));
        assert_eq!(c.remaining(), 0);
        assert!(!c.is_active());
        // Late tick after finishing is ignored, never goes negative
        assert_eq!(c.tick(), None);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut c = Countdown::default();
        c.start(13);
        c.tick();
        c.cancel();
        c.cancel();
        assert_eq!(c.tick(), None);
        assert_eq!(c.remaining(), 12);
    }

    #[test]
    fn test_zero_start_finishes_on_first_tick() {
        let mut c = Countdown::default();
        c.start(0);
        assert_eq!(c.tick(), Some(CountdownStep::Finished));
    }

    #[test]
    fn test_restart_resets() {
        let mut c = Countdown::default();
        c.start(2);
        c.tick();
        c.start(5);
        assert_eq!(c.remaining(), 5);
        assert!(c.is_active());
    }
}
