use crate::error::GameError;
use crate::guess::{GameRound, GuessOutcome, RoundStatus, parse_guess};
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};

/// A finished round, kept for the end-of-session summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub game_number: usize,
    pub word: String,
    pub status: RoundStatus,
    pub strikes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: Vec<RoundRecord>,
}

impl SessionSummary {
    #[must_use]
    pub fn wins(&self) -> usize {
        self.count(RoundStatus::Won)
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.count(RoundStatus::Lost)
    }

    fn count(&self, status: RoundStatus) -> usize {
        self.rounds.iter().filter(|r| r.status == status).count()
    }
}

/// Front end the game loop talks to.
///
/// Prompts return the raw line the player entered; `None` means input is
/// exhausted or the player quit, which ends the session. All validation
/// happens in the game loop.
pub trait GameInterface {
    fn prompt_game_number(&mut self, max_words: usize) -> Option<String>;

    /// Shows the hangman art and board for `round`, then reads one guess.
    fn prompt_letter(&mut self, round: &GameRound) -> Option<String>;

    fn prompt_replay(&mut self) -> Option<String>;

    fn display_error(&mut self, error: &GameError);

    fn display_miss(&mut self, letter: char, strikes_remaining: usize);

    /// Final art plus the win or loss message revealing the word.
    fn display_round_over(&mut self, round: &GameRound);

    fn display_exit_message(&mut self, summary: &SessionSummary);
}

enum GameState {
    AwaitingGameSelection,
    Playing {
        game_number: usize,
        round: GameRound,
    },
    RoundEnded {
        game_number: usize,
        round: GameRound,
    },
    AwaitingReplayChoice,
    Terminated,
}

/// Parses a game number in `[1, max_words]`.
///
/// # Errors
/// `InvalidSelection` for non-numeric or out-of-range input.
pub fn parse_game_number(input: &str, max_words: usize) -> Result<usize, GameError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max_words).contains(&n) => Ok(n),
        _ => Err(GameError::InvalidSelection(trimmed.to_string())),
    }
}

/// `true` to play again, `false` to stop.
///
/// # Errors
/// `InvalidReplayResponse` for anything but Y/y/N/n.
pub fn parse_replay_choice(input: &str) -> Result<bool, GameError> {
    match input.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        other => Err(GameError::InvalidReplayResponse(other.to_string())),
    }
}

pub fn game_loop<S, I>(source: &S, interface: &mut I) -> SessionSummary
where
    S: WordSource + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut summary = SessionSummary::default();
    let mut state = GameState::AwaitingGameSelection;

    loop {
        state = match state {
            GameState::AwaitingGameSelection => select_game(source, interface),
            GameState::Playing { game_number, round } => play_turn(interface, game_number, round),
            GameState::RoundEnded { game_number, round } => {
                interface.display_round_over(&round);
                info_log!(
                    "round {} ended: {:?} with {} strike(s)",
                    game_number,
                    round.status(),
                    round.strikes()
                );
                summary.rounds.push(RoundRecord {
                    game_number,
                    word: round.word().to_string(),
                    status: round.status(),
                    strikes: round.strikes(),
                });
                GameState::AwaitingReplayChoice
            }
            GameState::AwaitingReplayChoice => replay_choice(interface),
            GameState::Terminated => break,
        };
    }

    info_log!(
        "session over: {} won, {} lost",
        summary.wins(),
        summary.losses()
    );
    interface.display_exit_message(&summary);
    summary
}

fn select_game<S, I>(source: &S, interface: &mut I) -> GameState
where
    S: WordSource + ?Sized,
    I: GameInterface + ?Sized,
{
    let max_words = source.max_words();
    let Some(input) = interface.prompt_game_number(max_words) else {
        return GameState::Terminated;
    };
    let selected = parse_game_number(&input, max_words)
        .and_then(|n| {
            source
                .word(n)
                .map(|word| (n, word))
                .ok_or_else(|| GameError::InvalidSelection(n.to_string()))
        });
    match selected {
        Ok((game_number, word)) => {
            info_log!("starting game {}", game_number);
            GameState::Playing {
                game_number,
                round: GameRound::new(word, source.max_strikes()),
            }
        }
        Err(e) => {
            interface.display_error(&e);
            GameState::AwaitingGameSelection
        }
    }
}

fn play_turn<I>(interface: &mut I, game_number: usize, mut round: GameRound) -> GameState
where
    I: GameInterface + ?Sized,
{
    if round.is_over() {
        return GameState::RoundEnded { game_number, round };
    }

    let Some(input) = interface.prompt_letter(&round) else {
        debug_log!("input ended during game {}", game_number);
        return GameState::Terminated;
    };

    match parse_guess(&input).and_then(|guess| guess.map(|c| round.guess(c)).transpose()) {
        Ok(Some(GuessOutcome::Incorrect { strikes_remaining })) => {
            let letter = round.guessed_letters().last().copied().unwrap_or_default();
            interface.display_miss(letter, strikes_remaining);
        }
        Ok(Some(GuessOutcome::Correct { .. }) | None) => {}
        Err(e) => {
            debug_log!("rejected guess {:?}: {}", input.trim(), e);
            interface.display_error(&e);
        }
    }

    GameState::Playing { game_number, round }
}

fn replay_choice<I>(interface: &mut I) -> GameState
where
    I: GameInterface + ?Sized,
{
    let Some(input) = interface.prompt_replay() else {
        return GameState::Terminated;
    };
    match parse_replay_choice(&input) {
        Ok(true) => GameState::AwaitingGameSelection,
        Ok(false) => GameState::Terminated,
        Err(e) => {
            interface.display_error(&e);
            GameState::AwaitingReplayChoice
        }
    }
}
