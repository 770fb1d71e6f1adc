//! ttt: arbitrary-size tic-tac-toe for two players sharing one terminal.
//!
//! ## Modules
//!
//! - [`constants`] - Board size bounds, cell glyphs, and messages
//! - [`board`] - Players, cells, and the NxN grid
//! - [`coord`] - Move coordinates and parsing of typed moves
//! - [`rules`] - Win and draw detection
//! - [`game`] - Turn controller
//! - [`session`] - Line-based interactive loop
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use ttt::board::{Board, Player};
//! use ttt::coord::parse_coord;
//! use ttt::game::Game;
//! use ttt::rules::GameState;
//!
//! let mut game = Game::new(Board::new(3)?);
//! for input in ["a0", "a1", "b0", "b1"] {
//!     game.play(parse_coord(input)?)?;
//! }
//! assert_eq!(game.play(parse_coord("c0")?)?, GameState::Won(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;

pub use error::{Error, MoveError};
