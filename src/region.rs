//! Region finding: maximal orthogonally connected sets of same-valued
//! intersections.
//!
//! A [`Chain`] may hold stones (a group) or empty points (an open region,
//! a territory candidate). Chains are computed on demand from a [`Board`]
//! and never cached; the board may change between two calls.

use crate::board::Board;
use crate::coord::{Coord, sort_reading_order};
use crate::stone::Stone;

/// A connected set of intersections that all hold the same [`Stone`] value.
///
/// Members are kept in reading order, so two chains discovered from
/// different starting points of the same region compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    stone: Stone,
    points: Vec<Coord>,
}

impl Chain {
    /// The value shared by every member.
    pub fn stone(&self) -> Stone {
        self.stone
    }

    /// Members in reading order.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for chains returned by this module.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.points.binary_search(&c).is_ok()
    }

    /// First member in reading order.
    pub fn first(&self) -> Option<Coord> {
        self.points.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The chain through `start`.
///
/// Uses an explicit stack rather than recursion so a board-wide region on
/// 19x19 costs no call depth. `start` must lie on the board.
pub fn chain_at(board: &Board, start: Coord) -> Chain {
    let mut visited = vec![false; board.size() * board.size()];
    collect_chain(board, start, &mut visited)
}

/// Flood-fill from `start`, marking members in `visited`.
fn collect_chain(board: &Board, start: Coord, visited: &mut [bool]) -> Chain {
    let stone = board.get(start);
    let mut points = Vec::new();
    let mut stack = vec![start];
    visited[board.index(start)] = true;

    while let Some(pt) = stack.pop() {
        points.push(pt);
        for n in pt.adjacent(board.size()) {
            let i = board.index(n);
            if !visited[i] && board.get(n) == stone {
                visited[i] = true;
                stack.push(n);
            }
        }
    }

    sort_reading_order(&mut points);
    Chain { stone, points }
}

/// Partition the whole board into chains, ordered by each chain's first
/// member in reading order. Every intersection belongs to exactly one chain.
pub fn all_chains(board: &Board) -> Vec<Chain> {
    let mut visited = vec![false; board.size() * board.size()];
    let mut chains = Vec::new();
    for c in board.coords() {
        if !visited[board.index(c)] {
            chains.push(collect_chain(board, c, &mut visited));
        }
    }
    chains
}

/// The chains of empty intersections, in the same order as [`all_chains`].
pub fn territories(board: &Board) -> Vec<Chain> {
    all_chains(board)
        .into_iter()
        .filter(|chain| chain.stone() == Stone::Empty)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_coord;

    fn c(s: &str) -> Coord {
        parse_coord(s).unwrap()
    }

    fn cs(list: &[&str]) -> Vec<Coord> {
        list.iter().map(|s| c(s)).collect()
    }

    #[test]
    fn test_single_stone_chain() {
        let b = Board::from_notation(9, &[], &["E5"]).unwrap();
        let chain = chain_at(&b, c("E5"));
        assert_eq!(chain.stone(), Stone::Black);
        assert_eq!(chain.points(), cs(&["E5"]).as_slice());
    }

    #[test]
    fn test_chain_is_sorted_and_start_independent() {
        let b = Board::from_notation(9, &["C2"], &["B1", "A1", "A2", "B2", "C1"]).unwrap();
        let from_a1 = chain_at(&b, c("A1"));
        let from_c1 = chain_at(&b, c("C1"));
        assert_eq!(from_a1, from_c1);
        assert_eq!(from_a1.points(), cs(&["A1", "B1", "C1", "A2", "B2"]).as_slice());
        assert!(!from_a1.contains(c("C2")));
    }

    #[test]
    fn test_chain_does_not_cross_other_values() {
        // a white wall on column B splits the empty area
        let wall: Vec<String> = (1..=9).map(|r| format!("B{r}")).collect();
        let b = Board::from_notation(9, wall.as_slice(), &[]).unwrap();
        let left = chain_at(&b, c("A5"));
        assert_eq!(left.len(), 9);
        assert!(left.iter().all(|p| p.col() == 'A'));
        let right = chain_at(&b, c("E5"));
        assert_eq!(right.len(), 63);
        let wall_chain = chain_at(&b, c("B9"));
        assert_eq!(wall_chain.len(), 9);
    }

    #[test]
    fn test_whole_empty_board_is_one_chain() {
        let b = Board::empty(19).unwrap();
        let chain = chain_at(&b, c("K10"));
        assert_eq!(chain.len(), 361);
        assert_eq!(chain.first(), Some(c("A1")));
    }

    #[test]
    fn test_all_chains_partition() {
        let b = Board::from_notation(9, &["E5", "E6"], &["A1", "D5"]).unwrap();
        let chains = all_chains(&b);
        let total: usize = chains.iter().map(Chain::len).sum();
        assert_eq!(total, 81);

        let firsts: Vec<_> = chains.iter().filter_map(Chain::first).collect();
        assert!(firsts.windows(2).all(|w| w[0] < w[1]));

        for p in b.coords() {
            assert_eq!(chains.iter().filter(|ch| ch.contains(p)).count(), 1);
        }
        // A1, the empty rest, D5, and the white pair
        assert_eq!(chains.len(), 4);
        assert_eq!(chains[0].points(), cs(&["A1"]).as_slice());
    }

    #[test]
    fn test_territories() {
        let b = Board::from_notation(9, &[], &["A2", "B1"]).unwrap();
        let regions = territories(&b);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].points(), cs(&["A1"]).as_slice());
        assert_eq!(regions[1].len(), 78);
        assert!(regions.iter().all(|r| r.stone() == Stone::Empty));
    }
}
