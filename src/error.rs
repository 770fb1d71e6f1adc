use crate::coord::Move;

/// Fatal errors: bad configuration, failed allocation, or a broken input stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board size {size} is too small (minimum is {min})")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is too large (maximum is {max})")]
    BoardTooLarge { size: usize, max: usize },

    #[error("error allocating a {size}x{size} board")]
    Allocation { size: usize },

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected move. The same player is asked again and nothing changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("empty input, expected a letter followed by a number (e.g. a0)")]
    Empty,

    #[error("'{0}' is not a column letter")]
    BadColumn(char),

    #[error("missing row number after the column letter")]
    MissingRow,

    #[error("row number is too large")]
    RowOverflow,

    #[error("{mv} is outside the {size}x{size} board")]
    OutOfBounds { mv: Move, size: usize },

    #[error("{0} is already taken")]
    Occupied(Move),

    #[error("the game is already over")]
    GameOver,
}
