//! Terminal UI for the wolf-vs-runner hangman game, built on Ratatui.
//!
//! The interface has two modes: `Playing`, where any letter key is a guess,
//! and `GameOver`, where letters are dead and only `N` (new word) and `ESC`
//! work. All game state lives in [`crate::game::Session`]; this module keeps
//! only the latest [`RoundView`] snapshot plus message strings.

use crate::game::{GameInterface, GuessOutcome, RoundView, UserAction};
use crate::pursuit::pursuit_offset;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
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

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHI", "JKLMNOPQR", "STUVWXYZ"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const DIM_STYLE: Style = Style::new().fg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Playing,
    GameOver,
}

/// Groups what the render pass needs, to keep the draw closure borrow-clean.
struct RenderContext<'a> {
    view: Option<&'a RoundView>,
    state: TuiState,
    message: &'a str,
    message_style: Style,
    status: &'a str,
}

/// The wolf and runner on one line of `width` cells.
///
/// Runner sits one cell of padding from the right edge; the wolf starts one
/// cell from the left and closes the gap per wrong guess, overrunning the
/// runner's cell exactly at the guess limit.
fn scene_line(width: u16, wrong_count: u32, max_wrong: u32) -> String {
    let width = width.max(6) as usize;
    let runner_col = width - 2;
    let track_start = 1.0;
    let track_end = runner_col as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let wolf_col = pursuit_offset(wrong_count, max_wrong, track_start, track_end).round() as usize;

    let mut cells: Vec<char> = vec!['.'; width];
    cells[runner_col] = 'R';
    cells[wolf_col] = 'W';
    cells.into_iter().collect()
}

/// Ratatui front end. Raw mode and the alternate screen are held for the
/// lifetime of the value and released in `Drop`.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: Option<RoundView>,
    state: TuiState,
    message: String,
    message_style: Style,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            view: None,
            state: TuiState::Playing,
            message: String::new(),
            message_style: MESSAGE_STYLE,
            status: "Guess a letter".to_string(),
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
            view: self.view.as_ref(),
            state: self.state,
            message: &self.message,
            message_style: self.message_style,
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
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Pursuit scene
                Constraint::Length(3), // Masked word
                Constraint::Length(5), // Keyboard
                Constraint::Min(5),    // Hint / messages
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_scene(f, chunks[1], ctx.view);
        Self::render_word(f, chunks[2], ctx.view);
        Self::render_keyboard(f, chunks[3], ctx.view, ctx.state);
        Self::render_info(f, chunks[4], ctx.view, ctx.message, ctx.message_style);
        Self::render_status(f, chunks[5], ctx.status);
        Self::render_instructions(f, chunks[6], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN: RUNNER VS WOLF")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_scene(f: &mut Frame, area: Rect, view: Option<&RoundView>) {
        let block = Block::default().title("Chase").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(view) = view else {
            return;
        };
        let line = scene_line(inner.width, view.wrong_count, view.max_wrong);
        f.render_widget(Paragraph::new(line), inner);
    }

    fn render_word(f: &mut Frame, area: Rect, view: Option<&RoundView>) {
        let masked = view.map_or(String::new(), |v| v.masked.clone());
        let word = Paragraph::new(masked)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(word, area);
    }

    fn keyboard_key_style(letter: char, view: Option<&RoundView>, state: TuiState) -> Style {
        let Some(view) = view else {
            return DIM_STYLE;
        };
        if view.hits.contains(&letter) {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else if view.misses.contains(&letter) {
            Style::default().fg(Color::Black).bg(Color::Red)
        } else if state == TuiState::GameOver {
            // terminal outcome disables the remaining keys
            DIM_STYLE
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
    }

    fn render_keyboard(f: &mut Frame, area: Rect, view: Option<&RoundView>, state: TuiState) {
        let mut lines = Vec::new();
        for row in KEYBOARD_ROWS {
            let mut spans = vec![Span::raw(" ")];
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    Self::keyboard_key_style(letter, view, state),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        let keyboard = Paragraph::new(lines)
            .block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(keyboard, area);
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        view: Option<&RoundView>,
        message: &str,
        message_style: Style,
    ) {
        let mut lines = Vec::new();
        if let Some(view) = view {
            lines.push(Line::from(format!("Hint: {}", view.hint)));
            lines.push(Line::from(format!(
                "Guesses Remaining: {}",
                view.remaining
            )));
            lines.push(Line::from(""));
        }
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                message.to_string(),
                message_style,
            )]));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let paragraph = Paragraph::new(status)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => "A-Z: Guess a letter | ESC: Quit",
            TuiState::GameOver => "N: New word | ESC: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - Ignoring non-key event: {:?}", event);
            return Ok(None);
        };

        // Press only; Release/Repeat would double-submit guesses
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }
        if Self::has_modifier_keys(&key) {
            debug_log!(
                "handle_input() - Ignoring key with modifier: {:?}",
                key.modifiers
            );
            return Ok(None);
        }

        Ok(match self.state {
            TuiState::Playing => Self::handle_playing_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        })
    }

    fn handle_playing_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_playing_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                info_log!("handle_playing_input() - Guessing '{}'", c);
                Some(UserAction::Guess(c))
            }
            _ => {
                debug_log!("handle_playing_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn show_round(&mut self, view: &RoundView) {
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Input error, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn show_guess(&mut self, letter: char, outcome: GuessOutcome) {
        let letter = letter.to_ascii_uppercase();
        let (message, style) = match outcome {
            GuessOutcome::Hit => (format!("'{letter}' is in the word!"), SUCCESS_STYLE),
            GuessOutcome::Miss => (
                format!("No '{letter}'. The wolf gains ground..."),
                ERROR_STYLE,
            ),
            GuessOutcome::Repeat => (format!("Already tried '{letter}'."), MESSAGE_STYLE),
            GuessOutcome::Ignored => ("The round is over.".to_string(), MESSAGE_STYLE),
        };
        self.message = message;
        self.message_style = style;
        self.status = "Guess a letter".to_string();
        self.draw_or_log();
    }

    fn show_win(&mut self, _word: &str) {
        self.state = TuiState::GameOver;
        self.message = "You Win! The Runner escaped the Wolf!".to_string();
        self.message_style = SUCCESS_STYLE;
        self.status = "Game over - you won".to_string();
        self.draw_or_log();
    }

    fn show_loss(&mut self, word: &str) {
        self.state = TuiState::GameOver;
        self.message = format!("Game Over! The Wolf caught the Runner. The word was: {word}");
        self.message_style = ERROR_STYLE;
        self.status = "Game over - the wolf won".to_string();
        self.draw_or_log();
    }

    fn show_new_game(&mut self) {
        self.state = TuiState::Playing;
        self.message.clear();
        self.message_style = MESSAGE_STYLE;
        self.status = "New word drawn - run!".to_string();
        self.draw_or_log();
    }

    fn show_exit(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
