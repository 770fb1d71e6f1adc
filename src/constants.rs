//! Constants for board dimensions, cell glyphs, and player-facing messages.
//!
//! The board size itself is chosen at runtime (see [`crate::board::Board::new`]);
//! this module only holds the bounds every size must satisfy.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board (NxN).
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest playable board. Columns are addressed by a single ASCII letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Board size used when none is given on the command line.
pub const DEFAULT_BOARD_SIZE: usize = 3;

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Empty cell.
pub const EMPTY: char = ' ';

/// Mark of the first player.
pub const MARK_X: char = 'X';

/// Mark of the second player.
pub const MARK_O: char = 'O';

// =============================================================================
// Messages
// =============================================================================

/// Rejection for coordinates outside the grid.
pub const MSG_OFF_BOARD: &str = "That space is not on the board!";

/// Rejection for a cell that already holds a mark.
pub const MSG_TAKEN: &str = "That space is already taken!";

/// Final line of a drawn game.
pub const MSG_DRAW: &str = "No one wins. :(";

/// Leading blank lines printed before every board.
pub const BOARD_SEPARATOR: &str = "\n\n\n";
