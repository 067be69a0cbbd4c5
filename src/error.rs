use derive_more::Display;

/// Recoverable player input errors.
///
/// Every variant carries the offending input so the message can echo it back.
/// None of these are fatal: the game loop reports them and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// Game number was not a number in `[1, max_words]`.
    #[display("\"{}\" is not a valid game number.", _0)]
    InvalidSelection(String),

    /// Guess was not a single alphabetic character.
    #[display("\"{}\" is not a letter.", _0)]
    InvalidCharacter(String),

    /// Letter was already submitted this round.
    #[display("You have already guessed \"{}\".", _0)]
    DuplicateGuess(char),

    /// Replay answer was not one of Y/y/N/n.
    #[display("\"{}\" is not a valid response. Please answer Y or N.", _0)]
    InvalidReplayResponse(String),

    /// A guess arrived after the round was already decided.
    #[display("The round is over; \"{}\" was not counted.", _0)]
    RoundOver(char),
}

impl std::error::Error for GameError {}
