use std::io;

use crate::constants::COORDINATE_HINT;

/// Errors surfaced by the renderer and its input helpers.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A coordinate token could not be read as `<file a-h><rank 1-8>`.
    #[error("invalid coordinate: {hint}")]
    InvalidCoordinate { hint: &'static str },

    /// A grid did not have the shape the board requires.
    #[error("dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// The piece placement field of a FEN string was malformed.
    #[error("invalid FEN placement: {0}")]
    InvalidFen(String),

    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    pub(crate) fn invalid_coordinate() -> Self {
        RenderError::InvalidCoordinate {
            hint: COORDINATE_HINT,
        }
    }
}

/// Result type alias for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
