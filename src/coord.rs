//! Board coordinates.
//!
//! A [`Coord`] is an immutable (column, row) pair. Columns are the letters
//! `A`..=`S` (no letter is skipped), rows are `1..=19`. Whether a coordinate
//! fits a particular board is checked separately with [`Coord::fits`] or
//! built in with [`Coord::within`].
//!
//! Coordinates order in *reading order*: ascending row, then ascending
//! column. Every list of coordinates this crate hands out is sorted that way.

use std::fmt;
use std::str::FromStr;

use crate::constants::{FIRST_COLUMN, MAX_SIZE};
use crate::error::GoError;

/// An intersection on the board.
///
/// Field order matters: the derived `Ord` compares `row` first, which is
/// reading order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate from a column letter and a row number, validated
    /// against the largest supported board.
    pub fn new(col: char, row: usize) -> Result<Self, GoError> {
        Self::within(col, row, MAX_SIZE)
    }

    /// Build a coordinate that must lie on an `size`×`size` board.
    pub fn within(col: char, row: usize, size: usize) -> Result<Self, GoError> {
        let invalid = || GoError::InvalidCoordinate(format!("{col}{row}"));
        if !col.is_ascii_uppercase() {
            return Err(invalid());
        }
        let col_index = (col as u8 - FIRST_COLUMN) as usize + 1;
        let bound = size.min(MAX_SIZE);
        if col_index > bound || row == 0 || row > bound {
            return Err(invalid());
        }
        Ok(Self::at(col_index, row))
    }

    /// Build from 1-based column and row indices. Callers guarantee range.
    pub(crate) fn at(col: usize, row: usize) -> Self {
        debug_assert!((1..=MAX_SIZE).contains(&col) && (1..=MAX_SIZE).contains(&row));
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Column letter.
    pub fn col(self) -> char {
        (FIRST_COLUMN + self.col - 1) as char
    }

    /// 1-based column index (`A` = 1).
    pub fn col_index(self) -> usize {
        self.col as usize
    }

    /// Row number, starting at 1.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Whether this coordinate lies on a `size`×`size` board.
    pub fn fits(self, size: usize) -> bool {
        self.col_index() <= size && self.row() <= size
    }

    /// Orthogonal neighbours that lie on a `size`×`size` board, in reading
    /// order (down, left, right, up). Off-board candidates are dropped.
    pub fn adjacent(self, size: usize) -> impl Iterator<Item = Coord> {
        let (col, row) = (self.col_index(), self.row());
        let size = size.min(MAX_SIZE);
        let down = (row > 1).then(|| Coord::at(col, row - 1));
        let left = (col > 1).then(|| Coord::at(col - 1, row));
        let right = (col < size).then(|| Coord::at(col + 1, row));
        let up = (row < size).then(|| Coord::at(col, row + 1));
        [down, left, right, up].into_iter().flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col(), self.row)
    }
}

impl FromStr for Coord {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s)
    }
}

/// Parse a coordinate string such as `"D4"` or `"s19"`.
///
/// The column letter may be lowercase; the row must be a plain decimal
/// number. Validated against the largest supported board; use
/// [`Board::parse_coord`](crate::board::Board::parse_coord) to also check
/// that it fits a given board.
pub fn parse_coord(s: &str) -> Result<Coord, GoError> {
    let trimmed = s.trim();
    let invalid = || GoError::InvalidCoordinate(trimmed.to_string());

    let mut chars = trimmed.chars();
    let col = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    Coord::new(col, row).map_err(|_| invalid())
}

/// Sort coordinates into reading order and drop duplicates.
pub fn sort_reading_order(coords: &mut Vec<Coord>) {
    coords.sort_unstable();
    coords.dedup();
}
