use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Default word list compiled into the binary.
pub const EMBEDDED_WORDS: &str = include_str!("resources/words.json");

/// One candidate for a round: the word to guess plus the hint shown under it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list contains no entries")]
    Empty,
    #[error("word list entry {word:?} is not a plain alphabetic word")]
    InvalidWord { word: String },
}

/// Parse a JSON word list (`[{ "word": ..., "hint": ... }]`).
///
/// Words are upper-cased on load so the rest of the game never has to
/// case-normalize again. Rejects empty lists and non-alphabetic words.
pub fn load_words_from_str(data: &str) -> Result<Vec<WordEntry>, WordsError> {
    let mut entries: Vec<WordEntry> = serde_json::from_str(data)?;
    if entries.is_empty() {
        return Err(WordsError::Empty);
    }
    for entry in &mut entries {
        let word = entry.word.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordsError::InvalidWord {
                word: entry.word.clone(),
            });
        }
        entry.word = word.to_uppercase();
    }
    Ok(entries)
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, WordsError> {
    let data = fs::read_to_string(path)?;
    load_words_from_str(&data)
}
