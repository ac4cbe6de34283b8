//! Constants for board geometry, labels, and user-facing hint text.
//!
//! The renderer only ever draws a standard chess board, so the dimensions
//! are fixed here rather than selected at build time.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of ranks (rows) on the board.
pub const RANKS: usize = 8;

/// Number of files (columns) on the board.
pub const FILES: usize = 8;

/// First file letter (column 0).
pub const FIRST_FILE: char = 'a';

/// Last file letter (column 7).
pub const LAST_FILE: char = 'h';

// =============================================================================
// Labels
// =============================================================================

/// Footer row printed under the last rank, aligned with the two-character cells.
pub const FILE_LABELS: &str = "  a b c d e f g h";

/// Line printed when the side to move is in check.
pub const CHECK_LINE: &str = "CHECK!";

/// Line printed when the match has ended in checkmate.
pub const CHECKMATE_LINE: &str = "CHECKMATE!";

// =============================================================================
// Coordinates
// =============================================================================

/// Hint carried by every coordinate parse failure.
pub const COORDINATE_HINT: &str = "valid values are a1 to h8";

/// Piece placement field of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
