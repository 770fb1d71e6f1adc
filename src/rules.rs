//! Win and draw detection.
//!
//! A player wins by filling every cell of one line: any row, any column, or
//! either full-length diagonal. There is no shorter run length.

use tracing::instrument;

use crate::board::{Board, Cell, Player};

/// Derived state of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(Player),
    Draw,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

/// Returns true if `player` owns every cell of at least one line.
#[instrument(level = "trace", skip(board), fields(size = board.size()))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let n = board.size();
    let owns = |row: usize, col: usize| board.get(row, col) == Cell::Mark(player);

    let any_row = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
    let any_col = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
    let main_diag = (0..n).all(|i| owns(i, i));
    let anti_diag = (0..n).all(|i| owns(i, n - 1 - i));

    any_row || any_col || main_diag || anti_diag
}

/// First player (X before O) with a completed line, if any.
pub fn find_winner(board: &Board) -> Option<Player> {
    Player::ALL.into_iter().find(|&p| is_winner(board, p))
}

/// Returns true if no cell is empty.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// Evaluate a board on its own: a winner first, then a full board.
pub fn outcome(board: &Board) -> GameState {
    match find_winner(board) {
        Some(player) => GameState::Won(player),
        None if is_full(board) => GameState::Draw,
        None => GameState::InProgress,
    }
}
