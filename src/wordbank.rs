use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");
pub const DEFAULT_MAX_STRIKES: usize = 6;

/// Supplies secret words by game number, plus the strike limit for rounds
/// played from it.
pub trait WordSource {
    fn max_words(&self) -> usize;

    /// Word for a 1-based game number, `None` outside `[1, max_words]`.
    fn word(&self, game_number: usize) -> Option<&str>;

    fn max_strikes(&self) -> usize {
        DEFAULT_MAX_STRIKES
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
    max_strikes: usize,
}

impl WordBank {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            max_strikes: DEFAULT_MAX_STRIKES,
        }
    }

    #[must_use]
    pub fn with_max_strikes(mut self, max_strikes: usize) -> Self {
        self.max_strikes = max_strikes.max(1);
        self
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn max_words(&self) -> usize {
        self.words.len()
    }

    fn word(&self, game_number: usize) -> Option<&str> {
        game_number
            .checked_sub(1)
            .and_then(|index| self.words.get(index))
            .map(String::as_str)
    }

    fn max_strikes(&self) -> usize {
        self.max_strikes
    }
}

/// Normalizes one word-list line, or `None` if it should be skipped.
///
/// Blank lines and `#` comments are skipped, as are entries with anything but
/// ASCII letters and spaces (they could never be completed). Inner whitespace
/// collapses to single spaces.
fn parse_entry(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let word = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let valid = word.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
        && word.chars().any(|c| c.is_ascii_alphabetic());
    valid.then(|| word.to_ascii_uppercase())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_entry).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_entry(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let bank = WordBank::embedded();
        assert!(!bank.is_empty());
        assert!(bank.words().iter().any(|w| w == "ICE CREAM"));
        for word in bank.words() {
            assert!(word.chars().all(|c| c.is_ascii_uppercase() || c == ' '));
        }
    }

    #[test]
    fn test_word_lookup_is_one_based() {
        let bank = WordBank::new(vec!["CAT".to_string(), "DOG".to_string()]);
        assert_eq!(bank.max_words(), 2);
        assert_eq!(bank.word(1), Some("CAT"));
        assert_eq!(bank.word(2), Some("DOG"));
        assert_eq!(bank.word(0), None);
        assert_eq!(bank.word(3), None);
    }

    #[test]
    fn test_max_strikes_default_and_override() {
        let bank = WordBank::new(vec!["CAT".to_string()]);
        assert_eq!(bank.max_strikes(), DEFAULT_MAX_STRIKES);
        assert_eq!(bank.clone().with_max_strikes(3).max_strikes(), 3);
        assert_eq!(bank.with_max_strikes(0).max_strikes(), 1);
    }

    #[test]
    fn test_load_from_str_normalizes_and_filters() {
        let data = "cat\n\n# comment\n  ice   cream \nr2d2\nrock-n-roll\n   \nDog\n";
        assert_eq!(
            load_wordbank_from_str(data),
            vec!["CAT".to_string(), "ICE CREAM".to_string(), "DOG".to_string()]
        );
    }

    #[test]
    fn test_non_ascii_entries_are_skipped_before_uppercasing() {
        let data = "straße\ncafé\nﬁsh\nplain\n";
        assert_eq!(load_wordbank_from_str(data), vec!["PLAIN".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("hangman_wordbank_unit_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "banana split").unwrap();
            writeln!(file, "404").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["APPLE".to_string(), "BANANA SPLIT".to_string()]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        assert!(load_wordbank_from_file("/nonexistent/hangman/words.txt").is_err());
    }
}
