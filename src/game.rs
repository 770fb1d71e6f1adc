//! Turn controller.
//!
//! `Game` owns the board for the whole game, validates each move against it,
//! alternates players, and reports the resulting [`GameState`]. A rejected
//! move leaves the board, the turn count, and the player to move untouched.

use tracing::{debug, info};

use crate::board::{Board, Player};
use crate::coord::Move;
use crate::error::MoveError;
use crate::rules::{GameState, is_full, outcome};

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Player whose move is next
    current: Player,
    /// Number of accepted moves
    turns: usize,
}

impl Game {
    /// Start a game on `board` with `X` to move.
    pub fn new(board: Board) -> Self {
        info!(size = board.size(), "new game");
        Self {
            board,
            current: Player::X,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Current state: a completed line wins, otherwise a board filled by
    /// accepted turns is a draw.
    pub fn state(&self) -> GameState {
        let size = self.board.size();
        debug_assert_eq!(is_full(&self.board), self.turns == size * size);
        outcome(&self.board)
    }

    /// Play `mv` for the current player.
    ///
    /// Returns the state after the move, or the reason it was rejected.
    pub fn play(&mut self, mv: Move) -> Result<GameState, MoveError> {
        if self.state().is_finished() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(mv) {
            return Err(MoveError::OutOfBounds {
                mv,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty_at(mv.row, mv.col) {
            return Err(MoveError::Occupied(mv));
        }

        let player = self.current;
        self.board.place(mv.row, mv.col, player);
        self.turns += 1;
        self.current = player.opponent();
        debug!(%player, %mv, turns = self.turns, "move accepted");

        let state = self.state();
        if state.is_finished() {
            info!(?state, turns = self.turns, "game over");
        }
        Ok(state)
    }
}
