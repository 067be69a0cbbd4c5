// Library interface for hangman
// This allows integration tests to access internal modules

pub mod art;
pub mod board;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use board::BoardState;
pub use error::GameError;
pub use game_state::{GameInterface, RoundRecord, SessionSummary, game_loop};
pub use guess::{GameRound, GuessOutcome, RoundStatus};
pub use wordbank::{WordBank, WordSource, load_wordbank_from_file, load_wordbank_from_str};
