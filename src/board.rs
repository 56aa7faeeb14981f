//! The n×n grid of intersections.
//!
//! [`Board`] is the only type that stores grid cells. Everything else
//! (region finding, rules, scoring) borrows a board and reads or mutates it
//! through [`Board::get`] and [`Board::set`].
//!
//! Copying a board is `Clone`; structural equality of two grids is `==`.

use std::fmt;

use crate::constants::{DEFAULT_SIZE, FIRST_COLUMN, VALID_SIZES};
use crate::coord::{Coord, parse_coord};
use crate::error::GoError;
use crate::stone::Stone;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// An empty board. Fails unless `size` is 9, 13 or 19.
    pub fn empty(size: usize) -> Result<Self, GoError> {
        if !VALID_SIZES.contains(&size) {
            return Err(GoError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    /// An empty board of the same size.
    pub fn cleared(&self) -> Self {
        Self {
            size: self.size,
            cells: vec![Stone::Empty; self.cells.len()],
        }
    }

    /// A board with the given white and black stones placed.
    ///
    /// Fails with [`GoError::InvalidSetup`] if the size is invalid, a
    /// coordinate is off the board, a list repeats a coordinate, or the two
    /// lists overlap.
    pub fn with_stones(size: usize, white: &[Coord], black: &[Coord]) -> Result<Self, GoError> {
        let mut board =
            Self::empty(size).map_err(|e| GoError::InvalidSetup(e.to_string()))?;

        for (stones, stone) in [(white, Stone::White), (black, Stone::Black)] {
            for &c in stones {
                if !board.is_valid_coord(c) {
                    return Err(GoError::InvalidSetup(format!(
                        "{c} is outside a {size}x{size} board"
                    )));
                }
                match board.get(c) {
                    Stone::Empty => board.set(c, stone),
                    prev if prev == stone => {
                        return Err(GoError::InvalidSetup(format!("{c} listed twice")));
                    }
                    _ => {
                        return Err(GoError::InvalidSetup(format!(
                            "{c} given to both players"
                        )));
                    }
                }
            }
        }
        Ok(board)
    }

    /// Like [`Board::with_stones`], from coordinate strings such as `"D4"`.
    pub fn from_notation<S: AsRef<str>>(
        size: usize,
        white: &[S],
        black: &[S],
    ) -> Result<Self, GoError> {
        let parse = |list: &[S]| -> Result<Vec<Coord>, GoError> {
            list.iter()
                .map(|s| parse_coord(s.as_ref()).map_err(|e| GoError::InvalidSetup(e.to_string())))
                .collect()
        };
        Self::with_stones(size, &parse(white)?, &parse(black)?)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `c` lies on this board.
    pub fn is_valid_coord(&self, c: Coord) -> bool {
        c.fits(self.size)
    }

    /// Parse a coordinate string and check it lies on this board.
    pub fn parse_coord(&self, s: &str) -> Result<Coord, GoError> {
        let c = parse_coord(s)?;
        if self.is_valid_coord(c) {
            Ok(c)
        } else {
            Err(GoError::InvalidCoordinate(s.trim().to_string()))
        }
    }

    /// The top-right intersection.
    pub fn last_coord(&self) -> Coord {
        Coord::at(self.size, self.size)
    }

    /// Flat cell index of `c`, row-major from A1.
    pub(crate) fn index(&self, c: Coord) -> usize {
        (c.row() - 1) * self.size + (c.col_index() - 1)
    }

    /// The stone at `c`.
    ///
    /// `c` must lie on the board (see [`Board::is_valid_coord`]); an
    /// off-board coordinate is a programming error.
    pub fn get(&self, c: Coord) -> Stone {
        self.cells[self.index(c)]
    }

    /// Overwrite the intersection at `c`. Same precondition as [`Board::get`].
    pub fn set(&mut self, c: Coord, stone: Stone) {
        let i = self.index(c);
        self.cells[i] = stone;
    }

    pub fn remove(&mut self, c: Coord) {
        self.set(c, Stone::Empty);
    }

    /// Every intersection, in reading order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Coord::at(col, row)))
    }

    /// True when no stone is on the board.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|s| !s.is_player())
    }

    /// Number of (white, black) stones on the board.
    pub fn stone_counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, b), s| match s {
            Stone::White => (w + 1, b),
            Stone::Black => (w, b + 1),
            Stone::Empty => (w, b),
        })
    }

    fn write_columns(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {}", (FIRST_COLUMN + col as u8) as char)?;
        }
        Ok(())
    }
}

impl Default for Board {
    /// An empty board of [`DEFAULT_SIZE`].
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Stone::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

/// Text rendering of a board: column letters above and below, row numbers on
/// both sides, highest row first.
pub fn render(board: &Board) -> String {
    board.to_string()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_columns(f)?;
        writeln!(f)?;
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2}")?;
            for col in 1..=self.size {
                write!(f, " {}", self.get(Coord::at(col, row)).glyph())?;
            }
            let gap = if row < 10 { "  " } else { " " };
            writeln!(f, "{gap}{row}")?;
        }
        self.write_columns(f)
    }
}
