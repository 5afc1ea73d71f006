//! Tilt Words - A tilt-to-answer word guessing party game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (word draws, tilt gestures, timers, scoring)
//! - `platform`: Browser/native environment abstraction
//! - `settings`: Tunable round configuration
//! - `ui`: View snapshot handed to the environment for display

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::GameError;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Pre-round countdown length (seconds)
    pub const COUNTDOWN_SECONDS: u32 = 3;
    /// Round length (seconds)
    pub const ROUND_SECONDS: u32 = 13;
    /// Tilt angles at or beyond this many degrees count as neutral
    pub const TILT_LIMIT_DEGREES: f64 = 50.0;
    /// Interval between timer ticks (milliseconds)
    pub const TICK_INTERVAL_MS: i32 = 1000;
    /// Word list location, relative to the page
    pub const WORDS_URL: &str = "words.json";
}

/// Format whole seconds as `M:SS`
#[inline]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(13), "0:13");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(75), "1:15");
    }
}
