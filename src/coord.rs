//! Board coordinates in algebraic notation.
//!
//! A coordinate is a file letter `a`-`h` followed by a rank number `1`-`8`.
//! Rank 8 is row 0 of the board grid and file `a` is column 0.

use std::fmt;
use std::str::FromStr;

use crate::constants::{FILES, FIRST_FILE, LAST_FILE, RANKS};
use crate::error::{RenderError, RenderResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    file: char,
    rank: u8,
}

impl ChessPosition {
    /// Build a position, rejecting files outside `a..=h` and ranks outside `1..=8`.
    pub fn new(file: char, rank: u8) -> RenderResult<Self> {
        if !(FIRST_FILE..=LAST_FILE).contains(&file) || rank == 0 || rank as usize > RANKS {
            return Err(RenderError::invalid_coordinate());
        }
        Ok(Self { file, rank })
    }

    pub fn file(&self) -> char {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Grid row, 0 being rank 8.
    pub fn row(&self) -> usize {
        RANKS - self.rank as usize
    }

    /// Grid column, 0 being file a.
    pub fn col(&self) -> usize {
        (self.file as u8 - FIRST_FILE as u8) as usize
    }

    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row >= RANKS || col >= FILES {
            return None;
        }
        Some(Self {
            file: (FIRST_FILE as u8 + col as u8) as char,
            rank: (RANKS - row) as u8,
        })
    }
}

/// Parse a coordinate token such as `e4`.
///
/// The first character is the file; everything after it must be a decimal
/// rank. Every failure maps to [`RenderError::InvalidCoordinate`].
pub fn parse_position(s: &str) -> RenderResult<ChessPosition> {
    let mut chars = s.chars();
    let file = chars.next().ok_or_else(RenderError::invalid_coordinate)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::invalid_coordinate());
    }
    let rank: u8 = digits
        .parse()
        .map_err(|_| RenderError::invalid_coordinate())?;

    ChessPosition::new(file, rank)
}

impl FromStr for ChessPosition {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
