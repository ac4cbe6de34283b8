//! chess-term: ANSI terminal rendering for a chess match.
//!
//! This crate is the presentation layer of a console chess application. It
//! turns a board snapshot, an optional move-highlight mask, and captured
//! pieces into colorized terminal text. Rules, move generation, and match
//! state live elsewhere and are passed in already computed.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and label text
//! - [`piece`] - Piece kinds, colors, and glyphs
//! - [`board`] - Board snapshot, highlight mask, captured pieces
//! - [`color`] - Semantic color roles and their composition rules
//! - [`coord`] - Algebraic coordinate parsing
//! - [`render`] - Board, captured-piece, and match summary rendering
//! - [`error`] - Error type shared by the above
//!
//! ## Example
//!
//! ```
//! use chess_term::board::{Board, HighlightMask};
//! use chess_term::coord::parse_position;
//! use chess_term::render::render_board;
//!
//! let board = Board::standard();
//! let targets = [parse_position("e3").unwrap(), parse_position("e4").unwrap()];
//! let mask = HighlightMask::from_positions(&targets);
//!
//! let mut out = std::io::stdout();
//! render_board(&mut out, &board, Some(&mask)).unwrap();
//! ```

pub mod board;
pub mod color;
pub mod constants;
pub mod coord;
pub mod error;
pub mod piece;
pub mod render;
