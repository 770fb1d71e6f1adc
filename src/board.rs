//! Square grid of cells owned by a single game.
//!
//! The grid is one contiguous buffer indexed by `row * size + col`, allocated
//! once when the board is created and never resized.

use std::fmt;

use crate::constants::{BOARD_SEPARATOR, EMPTY, MARK_O, MARK_X, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::coord::{Move, column_letter};
use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players in the order they move (and the order wins are checked).
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Player::X => MARK_X,
            Player::O => MARK_O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY,
            Cell::Mark(player) => player.mark(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`x`size` board.
    ///
    /// The whole grid is reserved in one step, so a failed allocation leaves
    /// nothing behind to clean up.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size < MIN_BOARD_SIZE {
            return Err(Error::BoardTooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(Error::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        let len = size
            .checked_mul(size)
            .ok_or(Error::Allocation { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { size })?;
        cells.resize(len, Cell::Empty);

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Whether `mv` lies on the board.
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// Cell at `(row, col)`. Panics if either coordinate is off the board;
    /// callers check with [`Board::contains`] first.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) is off a {0}x{0} board",
            self.size
        );
        self.cells[self.idx(row, col)]
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Put `player`'s mark on an empty, in-range cell.
    ///
    /// Overwriting a mark is a caller bug and panics.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        assert!(
            self.is_empty_at(row, col),
            "({row}, {col}) already holds {}",
            self.get(row, col).glyph()
        );
        let i = self.idx(row, col);
        self.cells[i] = Cell::Mark(player);
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Width of the widest row label, used to pad the header and gutter.
    pub fn bump(&self) -> usize {
        self.size.saturating_sub(1).to_string().len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bump = self.bump();

        write!(f, "{BOARD_SEPARATOR} {:bump$}", "")?;
        for col in 0..self.size {
            write!(f, " {}", column_letter(col).to_ascii_uppercase())?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{row:>bump$} |")?;
            for col in 0..self.size {
                write!(f, "{}|", self.get(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
