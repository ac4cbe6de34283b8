use std::fmt;

use crate::constants::{FILES, RANKS, START_FEN};
use crate::coord::ChessPosition;
use crate::error::{RenderError, RenderResult};
use crate::piece::{Piece, PieceColor};

/// Contents of one square.
pub type Square = Option<Piece>;

/// Read-only 8x8 snapshot of the match board.
///
/// Row 0 is rank 8 and column 0 is file a. Construction is the only place
/// the shape is checked; every `Board` value is exactly 8x8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: vec![None; RANKS * FILES],
        }
    }

    /// The initial chess setup.
    pub fn standard() -> Self {
        Self::from_fen(START_FEN).expect("START_FEN is well formed")
    }

    /// Build a board from row-major rows, failing unless the grid is exactly 8x8.
    pub fn from_rows(rows: Vec<Vec<Square>>) -> RenderResult<Self> {
        check_shape(&rows)?;
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse the piece placement field of a FEN string. Any trailing fields
    /// (side to move, castling, ...) are ignored.
    pub fn from_fen(fen: &str) -> RenderResult<Self> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| RenderError::InvalidFen("empty string".into()))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != RANKS {
            return Err(RenderError::InvalidFen(format!(
                "expected {RANKS} ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Self::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c)
                        .ok_or_else(|| RenderError::InvalidFen(format!("bad piece letter {c:?}")))?;
                    if col >= FILES {
                        return Err(RenderError::InvalidFen(format!("rank {} too long", RANKS - row)));
                    }
                    board.set(row, col, Some(piece));
                    col += 1;
                }
            }
            if col != FILES {
                return Err(RenderError::InvalidFen(format!(
                    "rank {} has {col} files",
                    RANKS - row
                )));
            }
        }
        Ok(board)
    }

    fn idx(row: usize, col: usize) -> usize {
        row * FILES + col
    }

    /// Square at `(row, col)`; out-of-range indices read as empty.
    pub fn get(&self, row: usize, col: usize) -> Square {
        if row >= RANKS || col >= FILES {
            return None;
        }
        self.cells[Self::idx(row, col)]
    }

    pub fn piece_at(&self, pos: ChessPosition) -> Square {
        self.get(pos.row(), pos.col())
    }

    pub fn set(&mut self, row: usize, col: usize, square: Square) {
        if row < RANKS && col < FILES {
            self.cells[Self::idx(row, col)] = square;
        }
    }

    pub fn place(&mut self, pos: ChessPosition, piece: Piece) {
        self.set(pos.row(), pos.col(), Some(piece));
    }
}

/// Uncolored view: FEN letters, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..RANKS {
            for col in 0..FILES {
                let ch = match self.get(row, col) {
                    Some(p) if p.color == PieceColor::White => p.kind.glyph(),
                    Some(p) => p.kind.glyph().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Caller-supplied overlay marking candidate destination squares.
///
/// The shape is not checked here; rendering rejects a mask whose shape
/// differs from the board's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightMask {
    rows: Vec<Vec<bool>>,
}

impl Default for HighlightMask {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightMask {
    /// An 8x8 mask with nothing marked.
    pub fn new() -> Self {
        Self {
            rows: vec![vec![false; FILES]; RANKS],
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn from_positions(positions: &[ChessPosition]) -> Self {
        let mut mask = Self::new();
        for pos in positions {
            mask.rows[pos.row()][pos.col()] = true;
        }
        mask
    }

    /// Fails with `DimensionMismatch` unless the mask is 8x8.
    pub fn check_shape(&self) -> RenderResult<()> {
        check_shape(&self.rows)
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }
}

fn check_shape<T>(rows: &[Vec<T>]) -> RenderResult<()> {
    let bad_row = rows.iter().map(Vec::len).find(|&n| n != FILES);
    if rows.len() == RANKS && bad_row.is_none() {
        return Ok(());
    }
    Err(RenderError::DimensionMismatch {
        expected_rows: RANKS,
        expected_cols: FILES,
        rows: rows.len(),
        cols: bad_row.unwrap_or_else(|| rows.first().map_or(0, Vec::len)),
    })
}

/// Pieces removed from play, grouped by each piece's own color.
///
/// Insertion order is kept within each color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    /// Pieces are filed by their own color regardless of which list they came in.
    pub fn new(white: Vec<Piece>, black: Vec<Piece>) -> Self {
        Self::from_pieces(white.into_iter().chain(black))
    }

    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut captured = Self::default();
        for piece in pieces {
            captured.push(piece);
        }
        captured
    }

    pub fn push(&mut self, piece: Piece) {
        match piece.color {
            PieceColor::White => self.white.push(piece),
            PieceColor::Black => self.black.push(piece),
        }
    }

    pub fn of(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_position;
    use crate::piece::PieceKind;

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        let rows = vec![vec![None; 8]; 7];
        match Board::from_rows(rows) {
            Err(RenderError::DimensionMismatch { rows, cols, .. }) => {
                assert_eq!((rows, cols), (7, 8));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }

        let mut rows = vec![vec![None; 8]; 8];
        rows[3].push(None);
        match Board::from_rows(rows) {
            Err(RenderError::DimensionMismatch { rows, cols, .. }) => {
                assert_eq!((rows, cols), (8, 9));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_from_rows_keeps_layout() {
        let mut rows = vec![vec![None; 8]; 8];
        rows[0][0] = Some(Piece::black(PieceKind::Rook));
        rows[7][4] = Some(Piece::white(PieceKind::King));
        let board = Board::from_rows(rows).unwrap();

        assert_eq!(
            board.piece_at(parse_position("a8").unwrap()),
            Some(Piece::black(PieceKind::Rook))
        );
        assert_eq!(
            board.piece_at(parse_position("e1").unwrap()),
            Some(Piece::white(PieceKind::King))
        );
    }

    #[test]
    fn test_standard_position() {
        let board = Board::standard();
        assert_eq!(board.get(0, 3), Some(Piece::black(PieceKind::Queen)));
        assert_eq!(board.get(6, 0), Some(Piece::white(PieceKind::Pawn)));
        assert_eq!(board.get(4, 4), None);
        assert_eq!(
            board.to_string().lines().next(),
            Some("r n b q k b n r ")
        );
    }

    #[test]
    fn test_from_fen_ignores_trailing_fields() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_from_fen_errors() {
        for fen in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/7",
            "8/8/8/8/8/8/8/9",
            "8/8/8/8/8/8/8/ppppppppp",
            "8/8/8/8/8/8/8/7x",
        ] {
            assert!(
                matches!(Board::from_fen(fen), Err(RenderError::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_mask_shape_check() {
        assert!(HighlightMask::new().check_shape().is_ok());
        assert_eq!(HighlightMask::default(), HighlightMask::new());
        let short = HighlightMask::from_rows(vec![vec![true; 8]; 3]);
        assert!(matches!(
            short.check_shape(),
            Err(RenderError::DimensionMismatch { rows: 3, cols: 8, .. })
        ));
    }

    #[test]
    fn test_mask_from_positions() {
        let e4 = parse_position("e4").unwrap();
        let mask = HighlightMask::from_positions(&[e4]);
        assert!(mask.is_set(4, 4));
        assert_eq!(
            (0..8)
                .flat_map(|r| (0..8).map(move |c| (r, c)))
                .filter(|&(r, c)| mask.is_set(r, c))
                .count(),
            1
        );
    }

    #[test]
    fn test_captured_partition_keeps_order() {
        let captured = CapturedPieces::new(
            vec![
                Piece::white(PieceKind::Pawn),
                Piece::black(PieceKind::Rook),
                Piece::white(PieceKind::Knight),
            ],
            vec![Piece::black(PieceKind::Queen)],
        );
        assert_eq!(
            captured.of(PieceColor::White),
            &[Piece::white(PieceKind::Pawn), Piece::white(PieceKind::Knight)]
        );
        assert_eq!(
            captured.of(PieceColor::Black),
            &[Piece::black(PieceKind::Rook), Piece::black(PieceKind::Queen)]
        );
    }
}
