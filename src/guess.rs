//! Guess validation and per-round state.

use crate::board::BoardState;
use crate::debug_log;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter appears in the word; `revealed` positions were uncovered.
    Correct { revealed: usize },
    /// The letter is not in the word and cost a strike.
    Incorrect { strikes_remaining: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One play-through of a single secret word.
///
/// Owns the board, the letters submitted so far and the strike count. The
/// strike count only grows and never passes `max_strikes`.
#[derive(Debug, Clone)]
pub struct GameRound {
    word: String,
    board: BoardState,
    guessed: Vec<char>,
    strikes: usize,
    max_strikes: usize,
}

impl GameRound {
    /// `max_strikes` is clamped to at least one.
    #[must_use]
    pub fn new(word: &str, max_strikes: usize) -> Self {
        Self {
            word: word.to_string(),
            board: BoardState::new(word),
            guessed: Vec::new(),
            strikes: 0,
            max_strikes: max_strikes.max(1),
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn strikes(&self) -> usize {
        self.strikes
    }

    #[must_use]
    pub fn max_strikes(&self) -> usize {
        self.max_strikes
    }

    #[must_use]
    pub fn strikes_remaining(&self) -> usize {
        self.max_strikes - self.strikes
    }

    /// Letters submitted this round, in submission order.
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.board.is_complete() {
            RoundStatus::Won
        } else if self.strikes >= self.max_strikes {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != RoundStatus::InProgress
    }

    /// Applies one guessed character to the round.
    ///
    /// # Errors
    /// - `InvalidCharacter` if `ch` is not an ASCII letter
    /// - `DuplicateGuess` if the letter was already submitted, right or wrong
    /// - `RoundOver` if the round has already been won or lost
    pub fn guess(&mut self, ch: char) -> Result<GuessOutcome, GameError> {
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidCharacter(ch.to_string()));
        }
        let letter = ch.to_ascii_uppercase();

        if self.is_over() {
            return Err(GameError::RoundOver(letter));
        }
        if self.guessed.contains(&letter) {
            return Err(GameError::DuplicateGuess(letter));
        }
        self.guessed.push(letter);

        let revealed = self.board.reveal_letter(letter);
        debug_log!("guess '{}' revealed {} position(s)", letter, revealed);
        if revealed > 0 {
            Ok(GuessOutcome::Correct { revealed })
        } else {
            self.strikes += 1;
            Ok(GuessOutcome::Incorrect {
                strikes_remaining: self.strikes_remaining(),
            })
        }
    }
}

/// Extracts the guessed character from one input line.
///
/// Returns `Ok(None)` for a blank line. Anything other than exactly one
/// character is rejected with the trimmed input echoed back.
///
/// # Errors
/// `InvalidCharacter` when the line holds more than one character.
pub fn parse_guess(input: &str) -> Result<Option<char>, GameError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        (Some(_), Some(_)) => Err(GameError::InvalidCharacter(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_won_with_zero_strikes() {
        let mut round = GameRound::new("CAT", 6);
        for letter in ['C', 'A', 'T'] {
            assert_eq!(
                round.guess(letter),
                Ok(GuessOutcome::Correct { revealed: 1 })
            );
        }
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.strikes(), 0);
    }

    #[test]
    fn test_cat_lost_after_three_misses() {
        let mut round = GameRound::new("CAT", 3);
        assert_eq!(
            round.guess('X'),
            Ok(GuessOutcome::Incorrect {
                strikes_remaining: 2
            })
        );
        assert_eq!(
            round.guess('Y'),
            Ok(GuessOutcome::Incorrect {
                strikes_remaining: 1
            })
        );
        assert_eq!(
            round.guess('Z'),
            Ok(GuessOutcome::Incorrect {
                strikes_remaining: 0
            })
        );
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.strikes(), 3);
        assert_eq!(round.board().render(), "***");
    }

    #[test]
    fn test_ice_cream_reveals_both_c() {
        let mut round = GameRound::new("ICE CREAM", 6);
        assert_eq!(round.guess('C'), Ok(GuessOutcome::Correct { revealed: 2 }));
        assert_eq!(round.board().render(), "*C* C****");
    }

    #[test]
    fn test_lowercase_guess_is_normalized() {
        let mut round = GameRound::new("CAT", 6);
        assert_eq!(round.guess('a'), Ok(GuessOutcome::Correct { revealed: 1 }));
        assert_eq!(round.guessed_letters(), &['A']);
        assert_eq!(round.guess('A'), Err(GameError::DuplicateGuess('A')));
    }

    #[test]
    fn test_duplicate_correct_guess_costs_nothing() {
        let mut round = GameRound::new("CAT", 6);
        round.guess('C').unwrap();
        assert_eq!(round.guess('c'), Err(GameError::DuplicateGuess('C')));
        assert_eq!(round.strikes(), 0);
    }

    #[test]
    fn test_duplicate_wrong_guess_costs_nothing() {
        let mut round = GameRound::new("CAT", 6);
        round.guess('Q').unwrap();
        assert_eq!(round.strikes(), 1);
        assert_eq!(round.guess('Q'), Err(GameError::DuplicateGuess('Q')));
        assert_eq!(round.strikes(), 1);
    }

    #[test]
    fn test_non_letters_are_rejected() {
        let mut round = GameRound::new("CAT", 6);
        for ch in ['1', '?', ' ', 'é'] {
            assert_eq!(
                round.guess(ch),
                Err(GameError::InvalidCharacter(ch.to_string()))
            );
        }
        assert_eq!(round.strikes(), 0);
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn test_strikes_never_exceed_maximum() {
        let mut round = GameRound::new("CAT", 2);
        round.guess('X').unwrap();
        round.guess('Y').unwrap();
        assert_eq!(round.guess('Z'), Err(GameError::RoundOver('Z')));
        assert_eq!(round.guess('C'), Err(GameError::RoundOver('C')));
        assert_eq!(round.strikes(), 2);
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn test_loss_ends_round_with_letters_hidden() {
        let mut round = GameRound::new("CATS", 1);
        round.guess('C').unwrap();
        round.guess('Q').unwrap();
        assert!(round.is_over());
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.board().render(), "C***");
    }

    #[test]
    fn test_zero_max_strikes_is_clamped() {
        let round = GameRound::new("CAT", 0);
        assert_eq!(round.max_strikes(), 1);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("a\n"), Ok(Some('a')));
        assert_eq!(parse_guess("  Z  "), Ok(Some('Z')));
        assert_eq!(parse_guess("7"), Ok(Some('7')));
        assert_eq!(parse_guess("\n"), Ok(None));
        assert_eq!(parse_guess(""), Ok(None));
        assert_eq!(
            parse_guess("ab\n"),
            Err(GameError::InvalidCharacter("ab".to_string()))
        );
    }
}
