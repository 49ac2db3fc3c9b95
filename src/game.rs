//! Core round state and the guess state machine.
//!
//! A [`Session`] owns the candidate list and the single active [`Round`].
//! The only mutators are [`Session::submit_guess`] and [`Session::reset`];
//! interfaces get read-only [`RoundView`] snapshots. Outcome is always
//! derived from the round, never stored.

use crate::words::WordEntry;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use thiserror::Error;

/// Wrong guesses allowed before the wolf catches the runner.
pub const DEFAULT_MAX_WRONG: u32 = 6;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no candidate words to draw from")]
    EmptyCandidateList,
    #[error("wrong-guess limit must be at least 1")]
    ZeroGuessLimit,
}

/// Win/lose/in-progress status of a round. Won and Lost are absorbing:
/// once reached, guesses are ignored until the session is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What a single call to [`Session::submit_guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; revealed.
    Hit,
    /// Letter is not in the word; wrong count went up.
    Miss,
    /// Letter was already tried; nothing changed.
    Repeat,
    /// Guess not accepted (terminal round, or not a letter).
    Ignored,
}

/// Draw one entry uniformly at random. The random source is a parameter so
/// callers can pass a seeded rng and get a deterministic draw.
pub fn draw_entry<'a, R: Rng>(
    entries: &'a [WordEntry],
    rng: &mut R,
) -> Result<&'a WordEntry, GameError> {
    if entries.is_empty() {
        return Err(GameError::EmptyCandidateList);
    }
    Ok(&entries[rng.gen_range(0..entries.len())])
}

/// One play-through: the chosen word, its hint, and the guesses so far.
///
/// `guessed` records every distinct letter tried, right or wrong, so a
/// repeated guess is a no-op in both directions and can never double-count
/// toward the limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    wrong_count: u32,
}

impl Round {
    fn new(entry: &WordEntry) -> Self {
        Self {
            word: entry.word.to_uppercase(),
            hint: entry.hint.clone(),
            guessed: BTreeSet::new(),
            wrong_count: 0,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// The word with unguessed letters masked, e.g. `C _ _` for CAT after C.
    pub fn masked_word(&self) -> String {
        let cells: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        cells.join(" ")
    }

    pub fn remaining(&self, max_wrong: u32) -> u32 {
        max_wrong.saturating_sub(self.wrong_count)
    }

    pub fn outcome(&self, max_wrong: u32) -> Outcome {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            Outcome::Won
        } else if self.wrong_count >= max_wrong {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}

/// Read-only snapshot handed to interfaces for rendering. Interfaces derive
/// the pursuit offset themselves from `wrong_count`/`max_wrong` and their
/// own track geometry.
#[derive(Debug, Clone)]
pub struct RoundView {
    pub masked: String,
    pub hint: String,
    pub wrong_count: u32,
    pub max_wrong: u32,
    pub remaining: u32,
    /// Tried letters that are in the word, sorted.
    pub hits: Vec<char>,
    /// Tried letters that are not, sorted.
    pub misses: Vec<char>,
    pub outcome: Outcome,
}

/// Something the player did, independent of which interface captured it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Seam between the game loop and a front end. The loop pushes snapshots
/// and result messages out; the interface pulls one action at a time.
/// `read_action` returning `None` means "nothing usable yet, ask again".
pub trait GameInterface {
    fn show_round(&mut self, view: &RoundView);
    fn read_action(&mut self) -> Option<UserAction>;
    fn show_guess(&mut self, letter: char, outcome: GuessOutcome);
    fn show_win(&mut self, word: &str);
    fn show_loss(&mut self, word: &str);
    fn show_new_game(&mut self);
    fn show_exit(&mut self);
}

/// The candidate list, guess limit, rng, and the one active round.
pub struct Session {
    entries: Vec<WordEntry>,
    max_wrong: u32,
    rng: StdRng,
    round: Round,
}

impl Session {
    pub fn new(
        entries: Vec<WordEntry>,
        max_wrong: u32,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        if max_wrong == 0 {
            return Err(GameError::ZeroGuessLimit);
        }
        let round = Round::new(draw_entry(&entries, &mut rng)?);
        Ok(Self {
            entries,
            max_wrong,
            rng,
            round,
        })
    }

    /// Seeded construction for reproducible draws; entropy-seeded otherwise.
    pub fn from_seed(
        entries: Vec<WordEntry>,
        max_wrong: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(entries, max_wrong, rng)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    pub fn outcome(&self) -> Outcome {
        self.round.outcome(self.max_wrong)
    }

    /// Replace the round with a fresh draw, clearing all guesses.
    pub fn reset(&mut self) {
        // entries were validated non-empty at construction
        let idx = self.rng.gen_range(0..self.entries.len());
        self.round = Round::new(&self.entries[idx]);
    }

    /// The state machine's single entry point.
    ///
    /// Terminal rounds absorb guesses, repeats are idempotent, anything
    /// outside A-Z is ignored. Letters are case-normalized first, so `c`
    /// and `C` are the same guess.
    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        if self.outcome() != Outcome::InProgress {
            return GuessOutcome::Ignored;
        }
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();
        if !self.round.guessed.insert(letter) {
            return GuessOutcome::Repeat;
        }
        if self.round.word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.round.wrong_count += 1;
            GuessOutcome::Miss
        }
    }

    pub fn view(&self) -> RoundView {
        let (hits, misses): (Vec<char>, Vec<char>) = self
            .round
            .guessed
            .iter()
            .copied()
            .partition(|c| self.round.word.contains(*c));
        RoundView {
            masked: self.round.masked_word(),
            hint: self.round.hint.clone(),
            wrong_count: self.round.wrong_count,
            max_wrong: self.max_wrong,
            remaining: self.round.remaining(self.max_wrong),
            hits,
            misses,
            outcome: self.outcome(),
        }
    }
}

/// Run rounds until the player exits. One iteration handles exactly one
/// action; all state mutation happens here, synchronously.
pub fn game_loop<I: GameInterface>(session: &mut Session, interface: &mut I) {
    interface.show_round(&session.view());
    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match action {
            UserAction::Exit => {
                interface.show_exit();
                break;
            }
            UserAction::NewGame => {
                session.reset();
                interface.show_new_game();
                interface.show_round(&session.view());
            }
            UserAction::Guess(letter) => {
                let result = session.submit_guess(letter);
                interface.show_guess(letter, result);
                if matches!(result, GuessOutcome::Hit | GuessOutcome::Miss) {
                    interface.show_round(&session.view());
                    match session.outcome() {
                        Outcome::Won => interface.show_win(session.round().word()),
                        Outcome::Lost => interface.show_loss(session.round().word()),
                        Outcome::InProgress => {}
                    }
                }
            }
        }
    }
}
