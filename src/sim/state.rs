//! Round state and core game types

use serde::{Deserialize, Serialize};

use super::words::WordBank;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the word list and a landscape screen
    Idle,
    /// Pre-round countdown, tilt ignored
    Countdown,
    /// Round timer running, tilt evaluated
    Playing,
    /// Round over
    Ended(EndReason),
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Round timer ran out; results wait for the return to portrait
    TimeUp,
    /// Player rotated to portrait mid-round
    Aborted,
}

/// Screen shape, width vs height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn from_size(width: f64, height: f64) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Outcome recorded for a played word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Shown but never answered (time ran out or round aborted)
    Pending,
    Correct,
    Incorrect,
}

impl EntryStatus {
    /// CSS class for the result list
    pub fn as_class(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Correct => "correct",
            EntryStatus::Incorrect => "incorrect",
        }
    }
}

/// A word and how the player handled it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedEntry {
    pub word: String,
    pub status: EntryStatus,
}

/// Per-session bookkeeping, replaced at every session start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Word on screen (None until the countdown finishes)
    pub current_word: Option<String>,
    pub score: u32,
    pub remaining_seconds: u32,
    /// Append-only log of played words
    played: Vec<PlayedEntry>,
}

impl RoundState {
    pub fn new(round_seconds: u32) -> Self {
        Self {
            remaining_seconds: round_seconds,
            ..Default::default()
        }
    }

    pub fn played(&self) -> &[PlayedEntry] {
        &self.played
    }

    /// Record the current word with `status`; correct answers score a point.
    /// Returns false when no word is on screen.
    pub fn record(&mut self, status: EntryStatus) -> bool {
        let Some(word) = self.current_word.clone() else {
            return false;
        };
        if status == EntryStatus::Correct {
            self.score += 1;
        }
        self.played.push(PlayedEntry { word, status });
        true
    }

    pub fn count(&self, status: EntryStatus) -> usize {
        self.played.iter().filter(|e| e.status == status).count()
    }
}

/// Word list load status
#[derive(Debug, Clone, PartialEq)]
pub enum BankState {
    Loading,
    Ready(WordBank),
    /// Permanent; no retry
    Failed,
}

impl BankState {
    pub fn bank(&self) -> Option<&WordBank> {
        match self {
            BankState::Ready(bank) => Some(bank),
            _ => None,
        }
    }
}
