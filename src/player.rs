//! Decision providers: where a turn's move comes from.
//!
//! The game loop never reads input itself; it asks a [`Player`] for a move
//! and tells it when the move was refused. This keeps the engine testable
//! with scripted players and lets the binary plug in a console or a random
//! opponent.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::warn;

use crate::constants::{MAX_GAME_LEN_FACTOR, PASS_TOKEN};
use crate::coord::Coord;
use crate::error::{GoError, MoveError};
use crate::game::{Game, Move, parse_move};
use crate::rules::is_eyeish;
use crate::stone::Stone;

pub trait Player {
    /// Choose a move for the colour to move in `game`.
    fn next_move(&mut self, game: &Game) -> Move;

    /// Called when the move returned by [`Player::next_move`] was refused;
    /// the same player is asked again.
    fn rejected(&mut self, _mv: Move, _err: &MoveError) {}
}

/// Replays a fixed list of moves, then passes forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Build from strings such as `"D4"` or `"P"`.
    pub fn from_notation(moves: &[&str]) -> Result<Self, GoError> {
        let moves = moves
            .iter()
            .map(|s| parse_move(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(moves))
    }

    /// Moves not yet handed out.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_move(&mut self, _game: &Game) -> Move {
        self.moves.pop_front().unwrap_or(Move::Pass)
    }
}

/// Plays a uniformly random legal move that does not fill one of its own
/// eyes, or passes when there is none.
///
/// Also passes once the game has lasted `MAX_GAME_LEN_FACTOR * n * n` turns,
/// so that two random players always finish.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic player for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick a move without going through the [`Player`] trait.
    pub fn choose(&mut self, game: &Game) -> Move {
        let Some(stone) = game.to_move() else {
            return Move::Pass;
        };
        let board = game.board();
        let size = board.size();
        if game.moves() >= MAX_GAME_LEN_FACTOR * size * size {
            return Move::Pass;
        }

        let mut candidates: Vec<Coord> = board
            .coords()
            .filter(|&c| board.get(c) == Stone::Empty && is_eyeish(board, c) != Some(stone))
            .collect();
        self.rng.shuffle(&mut candidates);

        candidates
            .into_iter()
            .find(|&c| game.is_legal(c))
            .map_or(Move::Pass, Move::Play)
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, game: &Game) -> Move {
        self.choose(game)
    }
}

/// Reads moves typed by a human, one per line.
///
/// `P` passes. Unparseable input and refused moves prompt again. End of
/// input, or an I/O error, counts as a pass so a closed stream ends the game.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_move(&mut self, stone: Stone) -> std::io::Result<Option<Move>> {
        loop {
            write!(
                self.output,
                "Enter an intersection or '{PASS_TOKEN}' to pass [{}]:",
                stone.glyph()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_move(&line) {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn next_move(&mut self, game: &Game) -> Move {
        let Some(stone) = game.to_move() else {
            return Move::Pass;
        };
        match self.read_move(stone) {
            Ok(Some(mv)) => mv,
            Ok(None) => Move::Pass,
            Err(e) => {
                warn!("console input failed, passing: {e}");
                Move::Pass
            }
        }
    }

    fn rejected(&mut self, _mv: Move, err: &MoveError) {
        if let Err(e) = writeln!(self.output, "{err}") {
            warn!("console output failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::coord::parse_coord;
    use std::io::Cursor;

    fn c(s: &str) -> Coord {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_scripted_player() {
        let game = Game::new(Board::empty(9).unwrap());
        let mut p = ScriptedPlayer::from_notation(&["D4", "P"]).unwrap();
        assert_eq!(p.remaining(), 2);
        assert_eq!(p.next_move(&game), Move::Play(c("D4")));
        assert_eq!(p.next_move(&game), Move::Pass);
        assert_eq!(p.next_move(&game), Move::Pass);
        assert!(ScriptedPlayer::from_notation(&["Z99"]).is_err());
    }

    #[test]
    fn test_random_player_plays_legal_moves() {
        let mut game = Game::new(Board::empty(9).unwrap());
        let mut p = RandomPlayer::with_seed(7);
        for _ in 0..40 {
            let mv = p.choose(&game);
            if let Move::Play(coord) = mv {
                assert!(game.is_legal(coord));
            }
            game.submit(mv).unwrap();
            if game.is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let game = Game::new(Board::empty(13).unwrap());
        let a = RandomPlayer::with_seed(42).choose(&game);
        let b = RandomPlayer::with_seed(42).choose(&game);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_player_keeps_its_eyes() {
        // black's only empty points are two single-point eyes
        let mut black = Vec::new();
        for p in Board::empty(9).unwrap().coords() {
            if p != c("A1") && p != c("C1") {
                black.push(p);
            }
        }
        let board = Board::with_stones(9, &[], &black).unwrap();
        let game = Game::new(board);
        assert_eq!(RandomPlayer::with_seed(1).choose(&game), Move::Pass);
    }

    #[test]
    fn test_console_player_reprompts() {
        let game = Game::new(Board::empty(9).unwrap());
        let input = Cursor::new("hello\nE5\n");
        let mut p = ConsolePlayer::new(input, Vec::new());
        assert_eq!(p.next_move(&game), Move::Play(c("E5")));
        p.rejected(Move::Play(c("E5")), &MoveError::Occupied(c("E5")));

        let (_, out) = p.into_inner();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("to pass [X]:").count(), 2);
        assert!(text.contains("invalid coordinate"));
        assert!(text.contains("E5 is not empty"));
    }

    #[test]
    fn test_console_player_passes() {
        let game = Game::new(Board::empty(9).unwrap());
        let mut p = ConsolePlayer::new(Cursor::new("P\n"), Vec::new());
        assert_eq!(p.next_move(&game), Move::Pass);
        // end of input
        assert_eq!(p.next_move(&game), Move::Pass);
    }
}
