//! Word bank loaded once at startup

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Immutable, non-empty list of words to draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordBank);
        }
        Ok(Self { words })
    }

    /// Parse a JSON array of strings
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Self::new(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed bank
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniform random draw. Consecutive draws may repeat.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }
}

impl TryFrom<Vec<String>> for WordBank {
    type Error = GameError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordBank> for Vec<String> {
    fn from(bank: WordBank) -> Self {
        bank.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_word_list() {
        let bank = WordBank::from_json(r#"["Apfel", "Birne", "Kirsche"]"#).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.words()[1], "Birne");
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(WordBank::from_json("[]"), Err(GameError::EmptyWordBank));
    }

    #[test]
    fn test_non_string_entries_rejected() {
        let err = WordBank::from_json(r#"["Apfel", 3]"#).unwrap_err();
        assert!(matches!(err, GameError::Malformed(_)));
    }

    #[test]
    fn test_draw_stays_in_bank() {
        let bank = WordBank::new(vec!["Apfel".into(), "Birne".into()]).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let word = bank.draw(&mut rng);
            assert!(word == "Apfel" || word == "Birne");
        }
    }

    #[test]
    fn test_draw_is_deterministic_per_seed() {
        let bank = WordBank::new((0..20).map(|i| format!("w{i}")).collect()).unwrap();
        let a: Vec<String> = {
            let mut rng = Pcg32::seed_from_u64(42);
            (0..10).map(|_| bank.draw(&mut rng).to_string()).collect()
        };
        let b: Vec<String> = {
            let mut rng = Pcg32::seed_from_u64(42);
            (0..10).map(|_| bank.draw(&mut rng).to_string()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_word_bank_repeats() {
        let bank = WordBank::new(vec!["Apfel".into()]).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(bank.draw(&mut rng), "Apfel");
        assert_eq!(bank.draw(&mut rng), "Apfel");
    }
}
