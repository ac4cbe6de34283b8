//! Semantic color roles and the rules that compose them.
//!
//! Render code never writes raw escape strings; it asks for a [`ColorRole`]
//! and this module maps the role to its SGR sequence. The three axes of a
//! cell's look are chosen independently:
//!
//! - square shade, a pure function of `(row + col) % 2`
//! - background, from the shade and whether the square is highlighted
//! - foreground, from the piece color alone

use std::fmt;

use crate::piece::PieceColor;

/// Every color the renderer can emit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    LightSquare,
    DarkSquare,
    HighlightLight,
    HighlightDark,
    WhitePieceText,
    BlackPieceText,
    WhiteCapturedText,
    BlackCapturedText,
    Reset,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::LightSquare,
        ColorRole::DarkSquare,
        ColorRole::HighlightLight,
        ColorRole::HighlightDark,
        ColorRole::WhitePieceText,
        ColorRole::BlackPieceText,
        ColorRole::WhiteCapturedText,
        ColorRole::BlackCapturedText,
        ColorRole::Reset,
    ];

    pub fn sgr(self) -> &'static str {
        match self {
            ColorRole::LightSquare => "\x1b[100m",      // bright black (gray) background
            ColorRole::DarkSquare => "\x1b[44m",        // blue background
            ColorRole::HighlightLight => "\x1b[46m",    // cyan background
            ColorRole::HighlightDark => "\x1b[42m",     // green background
            ColorRole::WhitePieceText => "\x1b[1;37m",  // bold white
            ColorRole::BlackPieceText => "\x1b[30m",    // black
            ColorRole::WhiteCapturedText => "\x1b[37m", // white
            ColorRole::BlackCapturedText => "\x1b[33m", // yellow
            ColorRole::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sgr())
    }
}

/// Checkerboard tone of a square, independent of any highlight.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// a8 (row 0, col 0) is a light square.
pub fn shade_at(row: usize, col: usize) -> Shade {
    if (row + col) % 2 == 0 {
        Shade::Light
    } else {
        Shade::Dark
    }
}

pub fn background_for(shade: Shade, highlighted: bool) -> ColorRole {
    match (shade, highlighted) {
        (Shade::Light, false) => ColorRole::LightSquare,
        (Shade::Dark, false) => ColorRole::DarkSquare,
        (Shade::Light, true) => ColorRole::HighlightLight,
        (Shade::Dark, true) => ColorRole::HighlightDark,
    }
}

pub fn foreground_for(color: PieceColor) -> ColorRole {
    match color {
        PieceColor::White => ColorRole::WhitePieceText,
        PieceColor::Black => ColorRole::BlackPieceText,
    }
}

/// Color of a whole captured-pieces line, keyed by the captured pieces' color.
pub fn captured_label_for(color: PieceColor) -> ColorRole {
    match color {
        PieceColor::White => ColorRole::WhiteCapturedText,
        PieceColor::Black => ColorRole::BlackCapturedText,
    }
}
