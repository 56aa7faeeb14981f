//! The turn state machine.
//!
//! Black moves first and the players strictly alternate. A turn is either a
//! pass or a legal placement. The game ends as soon as the two most recent
//! turns were both passes, and is then decided by [`score`]: white wins ties.
//!
//! Each player remembers the board as it stood after their own previous
//! turn; a placement that would recreate that board is refused.

use std::fmt;

use log::{debug, info};

use crate::board::Board;
use crate::constants::PASS_TOKEN;
use crate::coord::{Coord, parse_coord};
use crate::error::{GoError, MoveError};
use crate::player::Player;
use crate::rules::{apply_move, check_move};
use crate::score::{Score, score};
use crate::stone::Stone;

/// A turn's action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Play(Coord),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(c) => write!(f, "{c}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// Parse `"D4"`, or `"P"` / `"pass"` (any case) for a pass.
pub fn parse_move(s: &str) -> Result<Move, GoError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(PASS_TOKEN) || s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    parse_coord(s).map(Move::Play)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    BlackTurn,
    WhiteTurn,
    End,
}

/// Outcome of a game, or the standing of one still in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: Score,
    pub white_wins: bool,
    /// Completed turns, passes included.
    pub moves: usize,
}

/// Game state: the live board plus everything the turn loop tracks.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    seen_black: Board,
    seen_white: Board,
    passed_black: bool,
    passed_white: bool,
    moves: usize,
    phase: Phase,
}

impl Game {
    /// Start a game on `board`, black to move.
    pub fn new(board: Board) -> Self {
        Self {
            seen_black: board.clone(),
            seen_white: board.clone(),
            board,
            passed_black: false,
            passed_white: false,
            moves: 0,
            phase: Phase::BlackTurn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::End
    }

    /// Completed turns, passes included.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// The colour to move, or `None` once the game has ended.
    pub fn to_move(&self) -> Option<Stone> {
        match self.phase {
            Phase::BlackTurn => Some(Stone::Black),
            Phase::WhiteTurn => Some(Stone::White),
            Phase::End => None,
        }
    }

    /// The board `stone` saw after its own previous turn.
    pub fn last_seen(&self, stone: Stone) -> &Board {
        match stone {
            Stone::White => &self.seen_white,
            _ => &self.seen_black,
        }
    }

    /// Whether `stone`'s most recent turn was a pass.
    pub fn has_passed(&self, stone: Stone) -> bool {
        match stone {
            Stone::Black => self.passed_black,
            Stone::White => self.passed_white,
            Stone::Empty => false,
        }
    }

    /// Check a placement for the player to move without changing anything.
    pub fn check(&self, coord: Coord) -> Result<(), MoveError> {
        let stone = self.to_move().ok_or(MoveError::GameOver)?;
        check_move(&self.board, coord, stone, self.last_seen(stone))
    }

    pub fn is_legal(&self, coord: Coord) -> bool {
        self.check(coord).is_ok()
    }

    /// Perform one turn for the player to move.
    ///
    /// An illegal placement is refused with the state untouched, and the
    /// same player keeps the turn. Returns the phase after the turn.
    pub fn submit(&mut self, mv: Move) -> Result<Phase, MoveError> {
        let stone = self.to_move().ok_or(MoveError::GameOver)?;
        let passed = match mv {
            Move::Pass => {
                debug!("{stone} passes");
                true
            }
            Move::Play(coord) => {
                if let Err(e) = check_move(&self.board, coord, stone, self.last_seen(stone)) {
                    debug!("{stone} {coord} refused: {e}");
                    return Err(e);
                }
                apply_move(&mut self.board, coord, stone);
                false
            }
        };

        let snapshot = self.board.clone();
        match stone {
            Stone::White => {
                self.passed_white = passed;
                self.seen_white = snapshot;
            }
            _ => {
                self.passed_black = passed;
                self.seen_black = snapshot;
            }
        }
        self.moves += 1;

        self.phase = if self.passed_black && self.passed_white {
            let result = self.result();
            info!(
                "game over after {} turns: white {} black {}",
                self.moves, result.score.white, result.score.black
            );
            Phase::End
        } else if stone == Stone::Black {
            Phase::WhiteTurn
        } else {
            Phase::BlackTurn
        };
        Ok(self.phase)
    }

    /// Ask `player` for moves until one is accepted, reporting each refusal
    /// back to it. Returns the accepted move.
    pub fn play_turn<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<Move, MoveError> {
        loop {
            let mv = player.next_move(self);
            match self.submit(mv) {
                Ok(_) => return Ok(mv),
                Err(MoveError::GameOver) => return Err(MoveError::GameOver),
                Err(e) => player.rejected(mv, &e),
            }
        }
    }

    /// Play until both players pass in a row.
    pub fn run(&mut self, black: &mut dyn Player, white: &mut dyn Player) -> GameResult {
        while let Some(stone) = self.to_move() {
            let player: &mut dyn Player = match stone {
                Stone::White => &mut *white,
                _ => &mut *black,
            };
            if self.play_turn(player).is_err() {
                break;
            }
        }
        self.result()
    }

    /// Score the current board.
    pub fn result(&self) -> GameResult {
        let score = score(&self.board);
        GameResult {
            score,
            white_wins: score.white_wins(),
            moves: self.moves,
        }
    }
}
