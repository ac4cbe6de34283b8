//! Piece values as seen by the renderer.
//!
//! Pieces are owned by the host's match model; the renderer only reads
//! their kind (for the glyph) and color (for the foreground tone).

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

/// Also the label of the captured-pieces line for this color.
impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single-letter glyph drawn on the board and in captured lists.
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a FEN letter of either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::Black)
    }

    /// FEN letters: upper case for white, lower case for black.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some(Self::new(kind, color))
    }
}

/// Pieces print as their glyph; color is conveyed by the terminal tone, not the letter.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_ignores_color() {
        for kind in PieceKind::ALL {
            assert_eq!(
                Piece::white(kind).to_string(),
                Piece::black(kind).to_string()
            );
        }
    }

    #[test]
    fn test_fen_char_case_sets_color() {
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::black(PieceKind::Knight))
        );
        assert_eq!(
            Piece::from_fen_char('Q'),
            Some(Piece::white(PieceKind::Queen))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }

    #[test]
    fn test_kind_roundtrip_through_glyph() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.glyph()), Some(kind));
        }
    }

    #[test]
    fn test_color_labels() {
        assert_eq!(PieceColor::White.to_string(), "White");
        assert_eq!(PieceColor::Black.to_string(), "Black");
    }
}
