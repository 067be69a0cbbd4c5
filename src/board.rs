//! Revealed/hidden state of the secret word.

use std::fmt;

pub const PLACEHOLDER: char = '*';

/// Per-position reveal state for one secret word.
///
/// Spaces are separators: they are never tracked as guesses but always render
/// as a space and never block completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    word: Vec<char>,
    revealed: Vec<bool>,
}

impl BoardState {
    #[must_use]
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let revealed = vec![false; word.len()];
        Self { word, revealed }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Marks a position as guessed. Already revealed or out-of-range
    /// positions are left alone.
    pub fn reveal(&mut self, position: usize) {
        if let Some(slot) = self.revealed.get_mut(position) {
            *slot = true;
        }
    }

    /// Reveals every position holding `letter` (case-insensitive) and returns
    /// how many positions matched.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        let matches: Vec<usize> = self
            .word
            .iter()
            .enumerate()
            .filter(|(_, c)| c.to_ascii_uppercase() == letter)
            .map(|(i, _)| i)
            .collect();
        for &position in &matches {
            self.reveal(position);
        }
        matches.len()
    }

    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(position).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(PLACEHOLDER)
    }

    #[must_use]
    pub fn render_with(&self, placeholder: char) -> String {
        self.word
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| match c {
                ' ' => ' ',
                _ if shown => c,
                _ => placeholder,
            })
            .collect()
    }

    /// True iff every non-space position has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.word
            .iter()
            .zip(&self.revealed)
            .all(|(&c, &shown)| c == ' ' || shown)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_fully_hidden() {
        let board = BoardState::new("CAT");
        assert_eq!(board.render(), "***");
        assert!(!board.is_complete());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_spaces_render_as_separators() {
        let board = BoardState::new("ICE CREAM");
        assert_eq!(board.render(), "*** *****");
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut board = BoardState::new("CAT");
        board.reveal(1);
        board.reveal(1);
        assert_eq!(board.render(), "*A*");
        assert!(board.is_revealed(1));
        assert!(!board.is_revealed(0));
    }

    #[test]
    fn test_reveal_out_of_range_is_ignored() {
        let mut board = BoardState::new("CAT");
        board.reveal(10);
        assert_eq!(board.render(), "***");
        assert!(!board.is_revealed(10));
    }

    #[test]
    fn test_reveal_letter_matches_all_occurrences() {
        let mut board = BoardState::new("ICE CREAM");
        assert_eq!(board.reveal_letter('c'), 2);
        assert_eq!(board.render(), "*C* C****");
    }

    #[test]
    fn test_reveal_letter_is_case_insensitive() {
        let mut board = BoardState::new("Cat");
        assert_eq!(board.reveal_letter('A'), 1);
        assert_eq!(board.reveal_letter('c'), 1);
        assert_eq!(board.render(), "Ca*");
        assert_eq!(board.reveal_letter('z'), 0);
    }

    #[test]
    fn test_render_length_matches_word_for_any_reveal_set() {
        let word = "HELLO WORLD";
        for mask in 0u32..(1 << 11) {
            let mut board = BoardState::new(word);
            for position in 0..11 {
                if mask & (1 << position) != 0 {
                    board.reveal(position);
                }
            }
            assert_eq!(board.render().chars().count(), word.chars().count());
        }
    }

    #[test]
    fn test_complete_ignores_spaces_and_order() {
        let orders: [&[char]; 3] = [
            &['I', 'C', 'E', 'R', 'A', 'M'],
            &['M', 'A', 'R', 'E', 'C', 'I'],
            &['E', 'I', 'M', 'C', 'A', 'R'],
        ];
        for order in orders {
            let mut board = BoardState::new("ICE CREAM");
            for (i, &letter) in order.iter().enumerate() {
                assert!(!board.is_complete(), "complete too early at step {i}");
                board.reveal_letter(letter);
            }
            assert!(board.is_complete());
            assert_eq!(board.render(), "ICE CREAM");
        }
    }

    #[test]
    fn test_custom_placeholder() {
        let mut board = BoardState::new("DOG");
        board.reveal_letter('o');
        assert_eq!(board.render_with('_'), "_O_");
        assert_eq!(board.to_string(), "*O*");
    }
}
