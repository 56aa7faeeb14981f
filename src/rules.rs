//! Move execution and legality.
//!
//! [`apply_move`] mutates a board in place: place, capture, then remove the
//! played chain if it ended up with no liberties. [`check_move`] and
//! [`is_legal`] only ever run that sequence on a private copy, so a refused
//! move leaves the caller's board untouched.

use log::debug;

use crate::board::Board;
use crate::coord::{Coord, sort_reading_order};
use crate::error::MoveError;
use crate::region::{Chain, chain_at};
use crate::stone::Stone;

/// What [`apply_move`] did besides placing the stone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opposing stones removed.
    pub captured: usize,
    /// The played chain had no liberties left and was removed.
    pub suicide: bool,
}

/// Intersections adjacent to `chain` that hold a different kind of value.
///
/// For a chain of stones these are its liberties (adjacent empty points).
/// For a chain of empty points it is the border: adjacent points holding a
/// stone of either colour. Sorted in reading order, without duplicates.
pub fn liberties(board: &Board, chain: &Chain) -> Vec<Coord> {
    let want_stones = !chain.stone().is_player();
    let mut out = Vec::new();
    for p in chain {
        for n in p.adjacent(board.size()) {
            if board.get(n).is_player() == want_stones {
                out.push(n);
            }
        }
    }
    sort_reading_order(&mut out);
    out
}

/// Clear every intersection of `chain`.
pub fn remove_chain(board: &mut Board, chain: &Chain) {
    for &p in chain {
        board.remove(p);
    }
}

/// Play `stone` at `coord`, destructively.
///
/// Each neighbouring opposing chain left without liberties is removed, one at
/// a time in neighbour order. Afterwards the chain through `coord` is removed
/// too if it has no liberties (suicide). No legality checks are made; see
/// [`check_move`].
pub fn apply_move(board: &mut Board, coord: Coord, stone: Stone) -> MoveOutcome {
    board.set(coord, stone);
    if !stone.is_player() {
        return MoveOutcome::default();
    }

    let opponent = stone.opponent();
    let mut captured = 0;
    for n in coord.adjacent(board.size()) {
        // an earlier capture may already have cleared this neighbour
        if board.get(n) != opponent {
            continue;
        }
        let chain = chain_at(board, n);
        if liberties(board, &chain).is_empty() {
            debug!("{stone} at {coord} captures {} {opponent} stone(s)", chain.len());
            captured += chain.len();
            remove_chain(board, &chain);
        }
    }

    let own = chain_at(board, coord);
    let suicide = liberties(board, &own).is_empty();
    if suicide {
        debug!("{stone} at {coord} removes its own chain of {}", own.len());
        remove_chain(board, &own);
    }

    MoveOutcome { captured, suicide }
}

/// Check whether `stone` may be played at `coord`.
///
/// `previous` is the board the acting player saw after their own previous
/// move; recreating it is refused. Only that single snapshot is compared, so
/// longer cycles are not detected.
pub fn check_move(
    board: &Board,
    coord: Coord,
    stone: Stone,
    previous: &Board,
) -> Result<(), MoveError> {
    if !stone.is_player() {
        return Err(MoveError::NotAStone);
    }
    if !board.is_valid_coord(coord) {
        return Err(MoveError::OutOfBounds(coord));
    }
    if board.get(coord).is_player() {
        return Err(MoveError::Occupied(coord));
    }

    let mut scratch = board.clone();
    if apply_move(&mut scratch, coord, stone).suicide {
        return Err(MoveError::Suicide(coord));
    }
    if scratch == *previous {
        return Err(MoveError::Repetition(coord));
    }
    Ok(())
}

/// Boolean form of [`check_move`]. Never panics, whatever the input.
pub fn is_legal(board: &Board, coord: Coord, stone: Stone, previous: &Board) -> bool {
    check_move(board, coord, stone, previous).is_ok()
}

/// If `coord` is empty and every orthogonal neighbour holds a stone of one
/// colour, that colour. Such a point may still be a false eye.
pub fn is_eyeish(board: &Board, coord: Coord) -> Option<Stone> {
    if board.get(coord).is_player() {
        return None;
    }
    let mut eye_color = None;
    for n in coord.adjacent(board.size()) {
        let s = board.get(n);
        if !s.is_player() {
            return None;
        }
        match eye_color {
            None => eye_color = Some(s),
            Some(c) if c != s => return None,
            Some(_) => {}
        }
    }
    eye_color
}
