const STAGES: [&str; 7] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Picture for the given strike count.
///
/// Strikes are scaled onto the available stages so any maximum works: zero
/// strikes is the empty gallows and `max_strikes` is always the full figure.
#[must_use]
pub fn hangman_art(strikes: usize, max_strikes: usize) -> &'static str {
    let last = STAGES.len() - 1;
    let max_strikes = max_strikes.max(1);
    let strikes = strikes.min(max_strikes);
    let stage = if strikes == 0 {
        0
    } else {
        // Round up so the first miss always adds something.
        (strikes * last).div_ceil(max_strikes)
    };
    STAGES[stage.min(last)]
}
