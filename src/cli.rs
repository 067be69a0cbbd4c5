use crate::art::hangman_art;
use crate::error::GameError;
use crate::game_state::{GameInterface, SessionSummary};
use crate::guess::{GameRound, RoundStatus};
use crate::wordbank::DEFAULT_MAX_STRIKES;
use crate::{debug_log, info_log};
use clap::Parser;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Wrong guesses allowed before the round is lost
    #[arg(
        short = 's',
        long = "max-strikes",
        default_value_t = DEFAULT_MAX_STRIKES as u8,
        value_parser = clap::value_parser!(u8).range(1..=26)
    )]
    pub max_strikes: u8,

    /// Play in the full-screen terminal interface
    #[arg(short = 't', long = "tui")]
    pub tui: bool,

    /// Write logs here instead of the default cache location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented implementation of `GameInterface`.
///
/// Reads one response per line from `reader` and writes prompts and messages
/// to `writer` (stdout unless built with `with_writer`).
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, args: fmt::Arguments) {
        if let Err(e) = self.writer.write_fmt(args).and_then(|()| self.writer.flush()) {
            debug_log!("failed to write to terminal: {}", e);
        }
    }

    /// Reads one line. Bytes that are not UTF-8 become U+FFFD so the game
    /// loop rejects the line and re-prompts; only EOF or a failed read is `None`.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info_log!("input exhausted");
                None
            }
            Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
            Err(e) => {
                // Kept in release builds: a failed read ends the session.
                log::warn!("failed to read input: {e}");
                None
            }
        }
    }
}

fn guessed_list(round: &GameRound) -> String {
    round
        .guessed_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn prompt_game_number(&mut self, max_words: usize) -> Option<String> {
        self.emit(format_args!(
            "\nEnter a game number between 1 and {max_words}: "
        ));
        self.read_line()
    }

    fn prompt_letter(&mut self, round: &GameRound) -> Option<String> {
        let art = hangman_art(round.strikes(), round.max_strikes());
        let board = round.board().render();
        self.emit(format_args!("\n{art}\n"));
        if !round.guessed_letters().is_empty() {
            let guessed = guessed_list(round);
            self.emit(format_args!("Guessed: {guessed}\n"));
        }
        self.emit(format_args!("{board}\nEnter a letter: "));
        self.read_line()
    }

    fn prompt_replay(&mut self) -> Option<String> {
        self.emit(format_args!("Do you want to play again? (Y/N): "));
        self.read_line()
    }

    fn display_error(&mut self, error: &GameError) {
        self.emit(format_args!("{error}\n"));
    }

    fn display_miss(&mut self, letter: char, strikes_remaining: usize) {
        self.emit(format_args!("\"{letter}\" is not in the word.\n"));
        if strikes_remaining > 0 {
            let plural = if strikes_remaining == 1 { "" } else { "es" };
            self.emit(format_args!(
                "You have {strikes_remaining} wrong guess{plural} remaining.\n"
            ));
        }
    }

    fn display_round_over(&mut self, round: &GameRound) {
        let art = hangman_art(round.strikes(), round.max_strikes());
        let word = round.word();
        self.emit(format_args!("\n{art}\n"));
        match round.status() {
            RoundStatus::Won => {
                self.emit(format_args!(
                    "Congratulations! You guessed the word \"{word}\".\n"
                ));
            }
            RoundStatus::Lost | RoundStatus::InProgress => {
                self.emit(format_args!("Game over. The word was \"{word}\".\n"));
            }
        }
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        let played = summary.rounds.len();
        if played == 0 {
            self.emit(format_args!("\nThanks for playing!\n"));
        } else {
            let wins = summary.wins();
            self.emit(format_args!(
                "\nThanks for playing! You won {wins} of {played} round(s).\n"
            ));
        }
    }
}
