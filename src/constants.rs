//! Constants for board dimensions, glyphs and game parameters.
//!
//! The board size is chosen at runtime (see [`VALID_SIZES`]); everything
//! here is independent of it.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board sizes accepted by [`Board::empty`](crate::board::Board::empty).
pub const VALID_SIZES: [usize; 3] = [9, 13, 19];

/// Largest supported board side. Columns run `A`..=`S`, rows `1..=19`.
pub const MAX_SIZE: usize = 19;

/// Default board size used by the CLI and the GTP engine.
pub const DEFAULT_SIZE: usize = 9;

/// First column letter.
pub const FIRST_COLUMN: u8 = b'A';

// =============================================================================
// Game Parameters
// =============================================================================

/// Self-play stops generating moves after `MAX_GAME_LEN_FACTOR * n * n` turns.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Token a console player types to pass.
pub const PASS_TOKEN: &str = "P";

// =============================================================================
// Glyphs
// =============================================================================

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// Empty intersection.
pub const GLYPH_EMPTY: char = '.';
