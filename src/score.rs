//! Area scoring.
//!
//! Each player gets one point per stone on the board plus the size of every
//! empty region bordered only by their stones. Regions touching both colours
//! are neutral. There is no komi.

use std::fmt;

use crate::board::Board;
use crate::region::territories;
use crate::rules::liberties;
use crate::stone::Stone;

/// Final points of both players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub white: usize,
    pub black: usize,
}

impl Score {
    /// White wins ties.
    pub fn white_wins(&self) -> bool {
        self.white >= self.black
    }

    /// White's points minus black's points.
    pub fn margin(&self) -> isize {
        self.white as isize - self.black as isize
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "White (O) has {} points\nBlack (X) has {} points",
            self.white, self.black
        )
    }
}

/// Score `board`.
///
/// A board without any stone scores 0 to 0: its single empty region has no
/// border and so belongs to nobody.
pub fn score(board: &Board) -> Score {
    let (white, black) = board.stone_counts();
    let mut result = Score { white, black };
    if board.is_empty() {
        return result;
    }

    for region in territories(board) {
        let border = liberties(board, &region);
        let Some(&first) = border.first() else {
            continue;
        };
        let owner = board.get(first);
        if border.iter().all(|&c| board.get(c) == owner) {
            match owner {
                Stone::White => result.white += region.len(),
                Stone::Black => result.black += region.len(),
                Stone::Empty => {}
            }
        }
    }
    result
}
