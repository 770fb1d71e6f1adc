//! ttt: arbitrary-size tic-tac-toe in the terminal.
//!
//! ## Usage
//!
//! - `ttt` - Play on a 3x3 board
//! - `ttt --size 5` - Play on a 5x5 board
//!
//! Moves are typed as a column letter followed by a row number, e.g. `b1`.
//! Set `RUST_LOG=debug` to log every move to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ttt::board::Board;
use ttt::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use ttt::game::Game;
use ttt::rules::GameState;
use ttt::session::Session;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "License AGPLv3: GNU AGPL version 3 only <https://gnu.org/licenses/agpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law.",
);

/// Arbitrary-size tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    size: usize,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Exit status when clap stops before a game starts. Help and version come
/// through here too and are not failures; argument errors exit 1, not 2.
fn parse_exit_status(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn exit_status<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("{e}");
                eprintln!("(could not print the message above normally: {io_err})");
            }
            return ExitCode::from(parse_exit_status(&e));
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let result = play(cli.size, stdin.lock(), io::stdout(), io::stderr());
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// Set up a `size`x`size` board and play one game over the given streams.
fn play<R, W, E>(size: usize, input: R, out: W, err: E) -> anyhow::Result<GameState>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let board = Board::new(size).context("could not set up the board")?;
    let mut session = Session::new(Game::new(board));
    let state = session.run(input, out, err).context("game aborted")?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use ttt::board::Player;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_size() {
        let cli = Cli::try_parse_from(["ttt"]).unwrap();
        assert_eq!(cli.size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_size_option() {
        let cli = Cli::try_parse_from(["ttt", "--size", "7"]).unwrap();
        assert_eq!(cli.size, 7);
        let cli = Cli::try_parse_from(["ttt", "-s", "26"]).unwrap();
        assert_eq!(cli.size, 26);
    }

    #[test]
    fn test_bad_sizes_are_errors() {
        for args in [["ttt", "-s", "2"], ["ttt", "-s", "27"], ["ttt", "-s", "big"]] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert!(err.use_stderr());
        }
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let err = Cli::try_parse_from(["ttt", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_and_version_are_not_errors() {
        let err = Cli::try_parse_from(["ttt", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());

        let err = Cli::try_parse_from(["ttt", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
        assert!(err.to_string().contains("AGPL"));
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let err = Cli::try_parse_from(["ttt", flag]).unwrap_err();
            assert_eq!(parse_exit_status(&err), 0, "{flag}");
        }
    }

    #[test]
    fn test_argument_errors_exit_one() {
        let bad: [&[&str]; 4] = [
            &["ttt", "--size", "2"],
            &["ttt", "--size", "x"],
            &["ttt", "--size"],
            &["ttt", "--bogus"],
        ];
        for args in bad {
            let err = Cli::try_parse_from(args.iter().copied()).unwrap_err();
            assert_eq!(parse_exit_status(&err), 1, "{args:?}");
        }
    }

    #[test]
    fn test_finished_game_exits_zero() {
        let input = Cursor::new("a0\na1\nb0\nb1\nc0\n");
        let result = play(3, input, io::sink(), io::sink());
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap(), GameState::Won(Player::X));

        let input = Cursor::new("a0\nb0\nc0\nb1\na1\nc1\nb2\na2\nc2\n");
        let result = play(3, input, io::sink(), io::sink());
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn test_early_end_of_input_exits_one() {
        let result = play(3, Cursor::new("a0\n"), io::sink(), io::sink());
        assert_eq!(exit_status(&result), 1);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ttt::Error>(),
            Some(ttt::Error::InputClosed)
        ));
        assert_eq!(
            format!("{err:#}"),
            "game aborted: input closed before the game finished"
        );
    }

    #[test]
    fn test_bad_board_exits_one() {
        let result = play(2, Cursor::new("a0\n"), io::sink(), io::sink());
        assert_eq!(exit_status(&result), 1);
    }
}
