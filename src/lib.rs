//! Goban: a Go board engine.
//!
//! This crate models the game of Go on 9x9, 13x13 and 19x19 boards: stone
//! placement, chain detection, captures, suicide, a single-step repetition
//! ban, area scoring and a turn loop that ends after two consecutive passes.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, glyphs and game parameters
//! - [`coord`] - Coordinates and reading order
//! - [`stone`] - Intersection contents
//! - [`board`] - The grid itself and its text rendering
//! - [`region`] - Flood-fill chain discovery
//! - [`rules`] - Liberties, captures and move legality
//! - [`score`] - Area scoring
//! - [`game`] - The turn state machine
//! - [`player`] - Move providers (scripted, random, console)
//! - [`gtp`] - Go Text Protocol front-end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban::board::Board;
//! use goban::game::{Game, Move};
//! use goban::coord::parse_coord;
//!
//! let board = Board::from_notation(9, &["C3"], &["G7"]).unwrap();
//! let mut game = Game::new(board);
//!
//! game.submit(Move::Play(parse_coord("E5").unwrap())).unwrap();
//! game.submit(Move::Pass).unwrap();
//! game.submit(Move::Pass).unwrap();
//!
//! assert!(game.is_over());
//! println!("{}", game.board());
//! println!("{}", game.result().score);
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod gtp;
pub mod player;
pub mod region;
pub mod rules;
pub mod score;
pub mod stone;
