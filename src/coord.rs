//! Move coordinates and their text form.
//!
//! A move is typed as a column letter followed by a row number, e.g. `a0`
//! for the top-left cell or `C2` for column 2, row 2. Letters are
//! case-insensitive. Parsing does not know the board size; range checks are
//! done by the game when the move is played.

use std::fmt;

use crate::error::MoveError;

/// A `(row, col)` pair, not necessarily on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&str_coord(*self))
    }
}

/// Lowercase letter for column `col` (`0` -> `'a'`). Columns past `z` map to `'?'`.
pub fn column_letter(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .filter(|&c| c < 26)
        .map(|c| (b'a' + c) as char)
        .unwrap_or('?')
}

/// Parse one input line into a move.
///
/// Surrounding whitespace is ignored, whitespace between the letter and the
/// number is allowed, and anything after the row number is discarded.
pub fn parse_coord(line: &str) -> Result<Move, MoveError> {
    let line = line.trim();
    let mut chars = line.chars();

    let letter = chars.next().ok_or(MoveError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(MoveError::BadColumn(letter));
    }
    let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

    let rest = chars.as_str().trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return Err(MoveError::MissingRow);
    }
    let row = digits.parse::<usize>().map_err(|_| MoveError::RowOverflow)?;

    Ok(Move { row, col })
}

/// Convert a move back to its input form (e.g. `"b2"`).
pub fn str_coord(mv: Move) -> String {
    format!("{}{}", column_letter(mv.col), mv.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_basic() {
        assert_eq!(parse_coord("a0"), Ok(Move::new(0, 0)));
        assert_eq!(parse_coord("C2"), Ok(Move::new(2, 2)));
        assert_eq!(parse_coord("c2"), Ok(Move::new(2, 2)));
        assert_eq!(parse_coord("b1"), Ok(Move::new(1, 1)));
    }

    #[test]
    fn test_parse_coord_letter_is_column() {
        let mv = parse_coord("c0").unwrap();
        assert_eq!(mv.col, 2);
        assert_eq!(mv.row, 0);
    }

    #[test]
    fn test_parse_coord_multi_digit_row() {
        assert_eq!(parse_coord("k10"), Ok(Move::new(10, 10)));
        assert_eq!(parse_coord("Z25"), Ok(Move::new(25, 25)));
    }

    #[test]
    fn test_parse_coord_discards_trailing_input() {
        assert_eq!(parse_coord("a1 b2 c0"), Ok(Move::new(1, 0)));
        assert_eq!(parse_coord("b2xyz\n"), Ok(Move::new(2, 1)));
        assert_eq!(parse_coord("  a 2  \r\n"), Ok(Move::new(2, 0)));
    }

    #[test]
    fn test_parse_coord_does_not_range_check() {
        assert_eq!(parse_coord("z99"), Ok(Move::new(99, 25)));
    }

    #[test]
    fn test_parse_coord_failures() {
        assert_eq!(parse_coord(""), Err(MoveError::Empty));
        assert_eq!(parse_coord("   \n"), Err(MoveError::Empty));
        assert_eq!(parse_coord("1a"), Err(MoveError::BadColumn('1')));
        assert_eq!(parse_coord("é1"), Err(MoveError::BadColumn('é')));
        assert_eq!(parse_coord("a"), Err(MoveError::MissingRow));
        assert_eq!(parse_coord("ab1"), Err(MoveError::MissingRow));
        assert_eq!(
            parse_coord("a99999999999999999999999999"),
            Err(MoveError::RowOverflow)
        );
    }

    #[test]
    fn test_str_coord() {
        assert_eq!(str_coord(Move::new(0, 0)), "a0");
        assert_eq!(str_coord(Move::new(2, 1)), "b2");
        assert_eq!(Move::new(10, 25).to_string(), "z10");
        assert_eq!(column_letter(26), '?');
    }
}
