//! TUI (Terminal User Interface) front end for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows the game loop's prompts:
//! - `SelectingGame` → `Guessing` (one key press per guess) → `ConfirmingReplay`
//! - `ConfirmingReplay` → `SelectingGame` or exit; `Esc` quits from any state

use crate::art::hangman_art;
use crate::error::GameError;
use crate::game_state::{GameInterface, SessionSummary};
use crate::guess::{GameRound, RoundStatus};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_GAME_NUMBER_DIGITS: usize = 6;
const GALLOWS_WIDTH: u16 = 16;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const BOARD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    SelectingGame { max_words: usize },
    Guessing,
    ConfirmingReplay,
}

#[derive(Debug, PartialEq, Eq)]
enum TuiAction {
    Submit(String),
    Exit,
}

/// Groups what a frame needs so rendering can borrow it while the terminal
/// is borrowed mutably.
struct RenderContext<'a> {
    state: TuiState,
    art: &'a str,
    board: &'a str,
    guessed: &'a str,
    strikes_line: &'a str,
    current_input: &'a str,
    message: &'a str,
    message_style: Style,
    error_message: &'a str,
    status: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    art: &'static str,
    board: String,
    guessed: String,
    strikes_line: String,
    current_input: String,
    message: String,
    message_style: Style,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = undo_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
                let _ = disable_raw_mode();
            },
        )?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            state: TuiState::SelectingGame { max_words: 0 },
            art: hangman_art(0, 1),
            board: String::new(),
            guessed: String::new(),
            strikes_line: String::new(),
            current_input: String::new(),
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            art: self.art,
            board: &self.board,
            guessed: &self.guessed,
            strikes_line: &self.strikes_line,
            current_input: &self.current_input,
            message: &self.message,
            message_style: self.message_style,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(9), // Gallows + board
                Constraint::Min(4),    // Messages
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let play_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(rows[1]);

        Self::render_title(f, rows[0]);
        Self::render_gallows(f, play_area[0], ctx.art);
        Self::render_board(f, play_area[1], ctx);
        Self::render_messages(f, rows[2], ctx);
        Self::render_status(f, rows[3], ctx.status);
        Self::render_instructions(f, rows[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, art: &str) {
        let lines: Vec<Line> = art.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let TuiState::SelectingGame { max_words } = ctx.state {
            lines.push(Line::from(vec![Span::styled(
                format!("Choose a game (1-{max_words}):"),
                INFO_STYLE,
            )]));
            lines.push(Line::from(vec![Span::styled(
                format!("  > {}_", ctx.current_input),
                BOARD_STYLE,
            )]));
        } else {
            // Letter spacing keeps the placeholders readable.
            let spaced: String = ctx
                .board
                .chars()
                .map(|c| format!("{c} "))
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("  {}", spaced.trim_end()),
                BOARD_STYLE,
            )]));
            lines.push(Line::from(""));
            lines.push(Line::from(format!("  Guessed: {}", ctx.guessed)));
            lines.push(Line::from(format!("  {}", ctx.strikes_line)));
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();
        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, ctx.message_style)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::SelectingGame { .. } => "Type a game number | ENTER: Start | ESC: Quit",
            TuiState::Guessing => "Press a letter to guess | ESC: Quit",
            TuiState::ConfirmingReplay => "Y: Play again | N: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_input(&mut self) -> Result<Option<TuiAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press || Self::has_modifier_keys(&key) {
            debug_log!("handle_input() - Ignoring key: {:?}", key);
            return Ok(None);
        }
        if let KeyCode::Char(c) = key.code
            && (c.is_control() || c == '\u{FFFD}')
        {
            debug_log!("handle_input() - Ignoring control character: {:?}", c);
            return Ok(None);
        }

        self.error_message.clear();
        if key.code == KeyCode::Esc {
            info_log!("handle_input() - ESC pressed, returning Exit");
            return Ok(Some(TuiAction::Exit));
        }

        let action = match self.state {
            TuiState::SelectingGame { .. } => self.handle_selection_input(key),
            TuiState::Guessing | TuiState::ConfirmingReplay => match key.code {
                KeyCode::Char(c) => Some(TuiAction::Submit(c.to_string())),
                _ => None,
            },
        };
        Ok(action)
    }

    fn handle_selection_input(&mut self, key: KeyEvent) -> Option<TuiAction> {
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_digit() && self.current_input.len() < MAX_GAME_NUMBER_DIGITS =>
            {
                self.current_input.push(c);
                None
            }
            KeyCode::Char(c) if !c.is_ascii_digit() => {
                self.error_message = format!("Only digits are allowed! ('{c}' is not a digit)");
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => Some(TuiAction::Submit(std::mem::take(&mut self.current_input))),
            _ => None,
        }
    }

    /// Redraws and waits for the current state to produce an action.
    fn read_action(&mut self) -> Option<String> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, treating as exit");
                return None;
            }
            match self.handle_input() {
                Ok(Some(TuiAction::Submit(input))) => {
                    debug_log!("read_action() - Submitted {:?}", input);
                    return Some(input);
                }
                Ok(Some(TuiAction::Exit)) => return None,
                Ok(None) => {}
                Err(e) => {
                    log::warn!("terminal input error: {e}");
                    return None;
                }
            }
        }
    }

    fn show_round(&mut self, round: &GameRound) {
        self.art = hangman_art(round.strikes(), round.max_strikes());
        self.board = round.board().render();
        self.guessed = round
            .guessed_letters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.strikes_line = format!("Strikes: {} / {}", round.strikes(), round.max_strikes());
    }
}

impl GameInterface for TuiInterface {
    fn prompt_game_number(&mut self, max_words: usize) -> Option<String> {
        if !matches!(self.state, TuiState::SelectingGame { .. }) {
            self.art = hangman_art(0, 1);
            self.message.clear();
        }
        self.state = TuiState::SelectingGame { max_words };
        self.current_input.clear();
        self.status = format!("Select a game between 1 and {max_words}");
        self.read_action()
    }

    fn prompt_letter(&mut self, round: &GameRound) -> Option<String> {
        if self.state != TuiState::Guessing {
            self.message.clear();
        }
        self.state = TuiState::Guessing;
        self.show_round(round);
        self.status = format!("{} wrong guess(es) left", round.strikes_remaining());
        let input = self.read_action();
        // The game loop reports misses and errors after this returns.
        self.message.clear();
        input
    }

    fn prompt_replay(&mut self) -> Option<String> {
        self.state = TuiState::ConfirmingReplay;
        self.status = "Do you want to play again? (Y/N)".to_string();
        self.read_action()
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_miss(&mut self, letter: char, strikes_remaining: usize) {
        self.message_style = INFO_STYLE;
        self.message = if strikes_remaining > 0 {
            format!("\"{letter}\" is not in the word. {strikes_remaining} wrong guess(es) remaining.")
        } else {
            format!("\"{letter}\" is not in the word.")
        };
        self.draw_or_log();
    }

    fn display_round_over(&mut self, round: &GameRound) {
        self.show_round(round);
        let word = round.word();
        if round.status() == RoundStatus::Won {
            self.message_style = SUCCESS_STYLE;
            self.message = format!("Congratulations! You guessed the word \"{word}\".");
        } else {
            self.message_style = ERROR_STYLE;
            self.message = format!("Game over. The word was \"{word}\".");
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, summary: &SessionSummary) {
        self.message_style = MESSAGE_STYLE;
        self.message = format!(
            "Thanks for playing! You won {} of {} round(s).",
            summary.wins(),
            summary.rounds.len()
        );
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Runs `setup`, calling `undo` before returning its error. `Drop` does not
/// run for a `TuiInterface` that was never built.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        log::warn!("terminal setup failed, restoring: {e}");
        undo();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::other("no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = undo_on_error(|| Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
