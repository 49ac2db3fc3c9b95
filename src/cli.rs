use crate::game::{GameInterface, GuessOutcome, RoundView, UserAction};
use crate::pursuit::pursuit_column;
use clap::Parser;
use std::io::BufRead;

/// Hangman: Runner vs Wolf
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON word list ([{ "word": ..., "hint": ... }])
    #[arg(short = 'i', long = "input")]
    pub words_path: Option<String>,

    /// Wrong guesses allowed before the wolf catches the runner
    #[arg(long = "max-wrong", default_value_t = crate::game::DEFAULT_MAX_WRONG)]
    pub max_wrong: u32,

    /// Seed for the word draw (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-based interface instead of the TUI
    #[arg(long)]
    pub plain: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const TRACK_CELLS: u16 = 32;

/// The pursuit track as one line of text, wolf gaining on the runner.
fn track_line(wrong_count: u32, max_wrong: u32) -> String {
    let mut cells: Vec<char> = vec!['.'; TRACK_CELLS as usize];
    cells[TRACK_CELLS as usize - 1] = 'R';
    let wolf = pursuit_column(wrong_count, max_wrong, TRACK_CELLS) as usize;
    cells[wolf] = 'W';
    cells.into_iter().collect()
}

fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line-based front end over any `BufRead`, which keeps whole games
/// scriptable from a `Cursor` in tests.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn show_round(&mut self, view: &RoundView) {
        println!("\n  {}", view.masked);
        println!("  Hint: {}", view.hint);
        println!("  Guesses Remaining: {}", view.remaining);
        if !view.misses.is_empty() {
            println!("  Missed: {}", format_letters(&view.misses));
        }
        println!("  [{}]", track_line(view.wrong_count, view.max_wrong));
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nGuess a letter (or 'next' for a new word, 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // EOF or a broken pipe ends the game rather than spinning
            Ok(0) | Err(_) => return Some(UserAction::Exit),
            Ok(_) => {}
        }
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "EXIT" => Some(UserAction::Exit),
            "NEXT" => Some(UserAction::NewGame),
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(UserAction::Guess(c)),
                    _ => {
                        println!("Invalid input. Enter a single letter A-Z.");
                        None
                    }
                }
            }
        }
    }

    fn show_guess(&mut self, letter: char, outcome: GuessOutcome) {
        let letter = letter.to_ascii_uppercase();
        match outcome {
            GuessOutcome::Hit => println!("'{letter}' is in the word!"),
            GuessOutcome::Miss => println!("No '{letter}'. The wolf gains ground..."),
            GuessOutcome::Repeat => println!("You already tried '{letter}'."),
            GuessOutcome::Ignored => {
                println!("The round is over. Enter 'next' for a new word.");
            }
        }
    }

    fn show_win(&mut self, _word: &str) {
        println!("\nYou Win! The Runner escaped the Wolf!");
    }

    fn show_loss(&mut self, word: &str) {
        println!("\nGame Over! The Wolf caught the Runner.");
        println!("The word was: {word}");
    }

    fn show_new_game(&mut self) {
        println!("\nNew word drawn. Run!");
    }

    fn show_exit(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hangman-pursuit"]);
        assert_eq!(cli.words_path, None);
        assert_eq!(cli.max_wrong, 6);
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "hangman-pursuit",
            "-i",
            "words.json",
            "--max-wrong",
            "8",
            "--seed",
            "7",
            "--plain",
        ]);
        assert_eq!(cli.words_path, Some("words.json".to_string()));
        assert_eq!(cli.max_wrong, 8);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.plain);
    }

    #[test]
    fn test_read_action_letter() {
        let mut interface = CliInterface::new(Cursor::new("a\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Guess('A')));
    }

    #[test]
    fn test_read_action_trims_whitespace() {
        let mut interface = CliInterface::new(Cursor::new("  b  \n"));
        assert_eq!(interface.read_action(), Some(UserAction::Guess('B')));
    }

    #[test]
    fn test_read_action_exit_case_insensitive() {
        let mut interface = CliInterface::new(Cursor::new("EXIT\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_read_action_next() {
        let mut interface = CliInterface::new(Cursor::new("next\n"));
        assert_eq!(interface.read_action(), Some(UserAction::NewGame));
    }

    #[test]
    fn test_read_action_word_rejected() {
        let mut interface = CliInterface::new(Cursor::new("abc\n"));
        assert_eq!(interface.read_action(), None);
    }

    #[test]
    fn test_read_action_digit_rejected() {
        let mut interface = CliInterface::new(Cursor::new("5\n"));
        assert_eq!(interface.read_action(), None);
    }

    #[test]
    fn test_read_action_eof_exits() {
        let mut interface = CliInterface::new(Cursor::new(""));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_track_line_endpoints() {
        let start = track_line(0, 6);
        assert!(start.starts_with('W'));
        assert!(start.ends_with('R'));

        // at the limit the wolf overtakes the runner's cell
        let caught = track_line(6, 6);
        assert!(caught.ends_with('W'));
    }

    #[test]
    fn test_track_line_advances() {
        let wolf_at = |wrong| track_line(wrong, 6).find('W').unwrap();
        assert!(wolf_at(1) > wolf_at(0));
        assert!(wolf_at(5) > wolf_at(1));
    }
}
