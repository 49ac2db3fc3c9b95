use hangman_pursuit::cli::{CliInterface, parse_cli};
use hangman_pursuit::game::{Session, game_loop};
use hangman_pursuit::tui::TuiInterface;
use hangman_pursuit::words::{EMBEDDED_WORDS, load_words_from_file, load_words_from_str};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = parse_cli();

    let entries = match &cli.words_path {
        Some(path) => match load_words_from_file(path) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => match load_words_from_str(EMBEDDED_WORDS) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Embedded word list is broken: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut session = match Session::from_seed(entries, cli.max_wrong, cli.seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Cannot start game: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &mut interface);
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut session, &mut interface);
    }

    ExitCode::SUCCESS
}
