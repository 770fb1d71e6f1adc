//! Interactive play over a line-based text stream.
//!
//! Each turn the board is drawn, the player to move is prompted with
//! `"<P>'s move: "`, and one line is read. Bad input and rejected moves are
//! reported on the error stream and the same player is asked again. When the
//! game ends the board is drawn one last time followed by the result.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use ttt::board::{Board, Player};
//! use ttt::game::Game;
//! use ttt::rules::GameState;
//! use ttt::session::Session;
//!
//! let input = Cursor::new("a0\na1\nb0\nb1\nc0\n");
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//!
//! let mut session = Session::new(Game::new(Board::new(3).unwrap()));
//! let state = session.run(input, &mut out, &mut err).unwrap();
//! assert_eq!(state, GameState::Won(Player::X));
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use crate::constants::{MSG_DRAW, MSG_OFF_BOARD, MSG_TAKEN};
use crate::coord::parse_coord;
use crate::error::{Error, MoveError};
use crate::game::Game;
use crate::rules::GameState;

pub struct Session {
    game: Game,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Play until the game ends, reading moves from `input`.
    ///
    /// The board, prompts, and result go to `out`; rejection messages go to
    /// `err`. Running out of input before the game ends is an error.
    pub fn run<R, W, E>(
        &mut self,
        mut input: R,
        mut out: W,
        mut err: E,
    ) -> Result<GameState, Error>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();

        let state = loop {
            let state = self.game.state();
            if state.is_finished() {
                break state;
            }

            write!(out, "{}", self.game.board())?;
            write!(out, "{}'s move: ", self.game.current_player())?;
            out.flush()?;

            // Raw bytes, so a non-UTF-8 line is a bad move and not an I/O error.
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Err(Error::InputClosed);
            }
            let line = String::from_utf8_lossy(&buf);

            if let Err(e) = parse_coord(&line).and_then(|mv| self.game.play(mv)) {
                debug!(
                    player = %self.game.current_player(),
                    input = line.trim(),
                    error = %e,
                    "move rejected"
                );
                writeln!(err, "{}", Self::rejection(&e))?;
                err.flush()?;
            }
        };

        write!(out, "{}", self.game.board())?;
        match state {
            GameState::Won(player) => writeln!(out, "{player} wins!")?,
            _ => writeln!(out, "{MSG_DRAW}")?,
        }
        out.flush()?;

        Ok(state)
    }

    /// Message shown to the player for a rejected move.
    fn rejection(e: &MoveError) -> String {
        match e {
            MoveError::OutOfBounds { .. } => MSG_OFF_BOARD.to_string(),
            MoveError::Occupied(_) => MSG_TAKEN.to_string(),
            other => format!("Invalid move: {other}"),
        }
    }
}
