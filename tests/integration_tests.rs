// Integration tests for hangman-pursuit
// Whole games are played through the plain CLI interface with scripted input

use hangman_pursuit::*;
use std::io::Cursor;

fn single_word_session(word: &str, hint: &str) -> Session {
    let entries = vec![WordEntry {
        word: word.to_string(),
        hint: hint.to_string(),
    }];
    Session::from_seed(entries, DEFAULT_MAX_WRONG, Some(0)).unwrap()
}

#[test]
fn test_full_game_win() {
    // Word is CAT; guess all three letters, then quit
    let mut session = single_word_session("CAT", "A pet");
    let input = "c\na\nt\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.round().masked_word(), "C A T");
}

#[test]
fn test_full_game_loss() {
    // Six distinct wrong letters lose the round; the script then runs dry,
    // which the CLI treats as exit
    let mut session = single_word_session("DOG", "A pet");
    let input = "x\ny\nz\nq\nw\ne\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Lost);
    assert_eq!(session.round().word(), "DOG");
    assert_eq!(session.round().wrong_count(), DEFAULT_MAX_WRONG);
}

#[test]
fn test_repeated_guesses_do_not_lose_the_game() {
    // The same wrong letter over and over only counts once
    let mut session = single_word_session("DOG", "A pet");
    let input = "x\nx\nx\nx\nx\nx\nx\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.round().wrong_count(), 1);
}

#[test]
fn test_invalid_input_is_reprompted_not_counted() {
    let mut session = single_word_session("CAT", "A pet");
    let input = "hello\n42\n\nc\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.round().wrong_count(), 0);
    assert_eq!(session.round().masked_word(), "C _ _");
}

#[test]
fn test_guesses_after_win_are_absorbed() {
    let mut session = single_word_session("CAT", "A pet");
    let input = "c\na\nt\nz\nq\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.round().wrong_count(), 0);
}

#[test]
fn test_next_starts_a_fresh_round() {
    let mut session = single_word_session("CAT", "A pet");
    let input = "c\na\nt\nnext\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    // single-entry list, so the redraw picks CAT again, but clean
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.round().masked_word(), "_ _ _");
    assert_eq!(session.round().wrong_count(), 0);
}

#[test]
fn test_mixed_hits_and_misses() {
    let mut session = single_word_session("WOLF", "It chases");
    let input = "w\nz\no\nq\nl\nf\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.round().wrong_count(), 2);
}

#[test]
fn test_words_pipeline_into_game() {
    // Load a JSON list, build a seeded session, play it to a win
    let data = r#"[{"word": "owl", "hint": "Night bird"}]"#;
    let entries = load_words_from_str(data).unwrap();
    let mut session = Session::from_seed(entries, DEFAULT_MAX_WRONG, Some(1)).unwrap();
    assert_eq!(session.round().hint(), "Night bird");

    let input = "o\nw\nl\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Won);
}

#[test]
fn test_embedded_word_list_is_playable() {
    let entries = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let mut session = Session::from_seed(entries, DEFAULT_MAX_WRONG, Some(3)).unwrap();

    // Guess the whole alphabet; every word is A-Z only, so this always wins
    // or loses, never hangs
    let script: String = ('a'..='z').map(|c| format!("{c}\n")).collect();
    let mut interface = CliInterface::new(Cursor::new(script));
    game_loop(&mut session, &mut interface);

    assert_ne!(session.outcome(), Outcome::InProgress);
}

#[test]
fn test_seeded_sessions_draw_the_same_word() {
    let entries = load_words_from_str(EMBEDDED_WORDS).unwrap();
    let a = Session::from_seed(entries.clone(), DEFAULT_MAX_WRONG, Some(9)).unwrap();
    let b = Session::from_seed(entries, DEFAULT_MAX_WRONG, Some(9)).unwrap();
    assert_eq!(a.round().word(), b.round().word());
    assert_eq!(a.round().hint(), b.round().hint());
}

#[test]
fn test_custom_guess_limit_threads_through() {
    let entries = vec![WordEntry {
        word: "CAT".to_string(),
        hint: "A pet".to_string(),
    }];
    let mut session = Session::from_seed(entries, 2, Some(0)).unwrap();

    let input = "x\ny\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut session, &mut interface);

    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_pursuit_offset_matches_game_progress() {
    let mut session = single_word_session("DOG", "A pet");
    let track = (12.0, 300.0);
    assert_eq!(
        pursuit_offset(session.round().wrong_count(), DEFAULT_MAX_WRONG, track.0, track.1),
        12.0
    );
    for _ in 0..3 {
        session.submit_guess('x');
        session.submit_guess('y');
        session.submit_guess('z');
    }
    assert_eq!(session.round().wrong_count(), 3);
    assert_eq!(
        pursuit_offset(session.round().wrong_count(), DEFAULT_MAX_WRONG, track.0, track.1),
        156.0
    );
}
