//! Display model
//!
//! The controller keeps one `View` describing everything on screen and hands
//! it to the environment after each change. `None` fields are hidden.

use crate::format_clock;
use crate::sim::PlayedEntry;

/// Instruction line shown above everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Turn the device sideways to begin
    RotateToLandscape,
    /// Round timer ran out
    TimeUp,
    /// Results are on screen
    GameOver,
    /// Word list could not be loaded
    LoadError,
}

impl Prompt {
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::RotateToLandscape => "Drehe dein Gerät ins Querformat…",
            Prompt::TimeUp => "Zeit abgelaufen! Bitte Gerät ins Hochformat drehen.",
            Prompt::GameOver => "Spiel beendet!",
            Prompt::LoadError => "Fehler beim Laden der Wörter.",
        }
    }
}

/// Trailing line under the result list
pub const NEXT_ROUND_HINT: &str = "Für eine neue Runde bitte Gerät wieder ins Querformat drehen.";

/// Message for the blocking alert after motion access is refused
pub const PERMISSION_DENIED_ALERT: &str = "Bewegungserkennung wurde abgelehnt.";

/// Background colour while a tilt is latched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn color(&self) -> &'static str {
        match self {
            Feedback::Neutral => "#111",
            Feedback::Correct => "green",
            Feedback::Incorrect => "red",
        }
    }
}

/// Everything the player can see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    /// Pre-round countdown digit
    pub countdown: Option<u32>,
    pub word: Option<String>,
    /// Remaining round seconds
    pub clock: Option<u32>,
    pub score: Option<u32>,
    pub prompt: Option<Prompt>,
    /// Result list, shown after a round
    pub results: Option<Vec<PlayedEntry>>,
    pub feedback: Feedback,
}

impl View {
    pub fn clock_text(&self) -> Option<String> {
        self.clock
            .map(|secs| format!("Verbleibende Zeit: {}", format_clock(secs)))
    }

    pub fn score_text(&self) -> Option<String> {
        self.score.map(|score| format!("Score: {score}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_text() {
        let view = View {
            clock: Some(13),
            score: Some(4),
            ..Default::default()
        };
        assert_eq!(view.clock_text().as_deref(), Some("Verbleibende Zeit: 0:13"));
        assert_eq!(view.score_text().as_deref(), Some("Score: 4"));
        assert_eq!(View::default().clock_text(), None);
    }

    #[test]
    fn test_feedback_colors() {
        assert_eq!(Feedback::default().color(), "#111");
        assert_eq!(Feedback::Correct.color(), "green");
        assert_eq!(Feedback::Incorrect.color(), "red");
    }
}
