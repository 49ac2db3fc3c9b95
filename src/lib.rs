// Library interface for hangman-pursuit
// This allows integration tests to access internal modules

pub mod cli;
pub mod game;
pub mod logging;
pub mod pursuit;
pub mod tui;
pub mod words;

// Re-export commonly used items for easier testing
pub use cli::CliInterface;
pub use game::{
    DEFAULT_MAX_WRONG, GameError, GameInterface, GuessOutcome, Outcome, Session, UserAction,
    draw_entry, game_loop,
};
pub use pursuit::pursuit_offset;
pub use words::{EMBEDDED_WORDS, WordEntry, WordsError, load_words_from_file, load_words_from_str};
