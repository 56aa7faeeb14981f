//! The contents of an intersection.

use std::fmt;

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};

/// What occupies an intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// The other player's stone. `Empty` stays `Empty`.
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for black and white stones.
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            Stone::White => GLYPH_WHITE,
            Stone::Black => GLYPH_BLACK,
            Stone::Empty => GLYPH_EMPTY,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
            Stone::Empty => write!(f, "empty"),
        }
    }
}
