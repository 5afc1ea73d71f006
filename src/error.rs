//! Error types
//!
//! Two failure families reach the player: the word list could not be loaded,
//! or motion access was refused. Everything else is an idempotent transition.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The word list request never produced a response
    Fetch(String),
    /// The word list request returned a non-success status
    HttpStatus(u16),
    /// The word list body was not a JSON array of strings
    Malformed(String),
    /// The word list parsed but contained no words
    EmptyWordBank,
    /// The player refused motion sensor access
    PermissionDenied,
    /// A config value is out of range
    InvalidConfig(&'static str),
}

impl GameError {
    /// Whether this error leaves the game without a usable word bank
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            GameError::Fetch(_)
                | GameError::HttpStatus(_)
                | GameError::Malformed(_)
                | GameError::EmptyWordBank
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Fetch(reason) => write!(f, "word list request failed: {reason}"),
            GameError::HttpStatus(status) => write!(f, "word list not found (HTTP {status})"),
            GameError::Malformed(reason) => write!(f, "word list is malformed: {reason}"),
            GameError::EmptyWordBank => write!(f, "word list is empty"),
            GameError::PermissionDenied => write!(f, "motion sensor access was denied"),
            GameError::InvalidConfig(what) => write!(f, "invalid config: {what}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_grouping() {
        assert!(GameError::Fetch("offline".into()).is_load_failure());
        assert!(GameError::HttpStatus(404).is_load_failure());
        assert!(GameError::EmptyWordBank.is_load_failure());
        assert!(!GameError::PermissionDenied.is_load_failure());
        assert!(!GameError::InvalidConfig("round_seconds").is_load_failure());
    }

    #[test]
    fn test_serde_error_maps_to_malformed() {
        let err: GameError = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
        assert!(matches!(err, GameError::Malformed(_)));
    }
}
