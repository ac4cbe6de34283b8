//! Terminal rendering of boards, captured pieces, and match summaries.
//!
//! Every operation writes to any [`Write`] sink in reading order (rank 8 to
//! rank 1, file a to file h) and leaves the terminal in the reset state.
//! Each cell closes with a reset, so no color leaks into the next cell or
//! past the board.

use std::io::Write;

use crate::board::{Board, CapturedPieces, HighlightMask, Square};
use crate::color::{ColorRole, background_for, captured_label_for, foreground_for, shade_at};
use crate::constants::{CHECK_LINE, CHECKMATE_LINE, FILE_LABELS, FILES, RANKS};
use crate::error::RenderResult;
use crate::piece::PieceColor;

/// Match metadata shown under the board.
#[derive(Clone, Debug)]
pub struct MatchSummary<'a> {
    pub board: &'a Board,
    pub captured: &'a CapturedPieces,
    pub turn: u32,
    /// Player whose move is awaited.
    pub current_player: &'a str,
    pub check: bool,
    /// Winner label once the match has ended in checkmate.
    pub checkmate_winner: Option<&'a str>,
}

/// Text of one cell, colors included.
pub fn render_cell(square: Square, row: usize, col: usize, highlighted: bool) -> String {
    let bg = background_for(shade_at(row, col), highlighted);
    match square {
        Some(piece) => format!(
            "{bg}{fg}{piece} {reset}",
            fg = foreground_for(piece.color),
            reset = ColorRole::Reset
        ),
        None => format!("{bg}  {}", ColorRole::Reset),
    }
}

/// Render the board, overlaying `mask` when one is given.
///
/// A mask whose shape differs from the board fails with `DimensionMismatch`
/// before anything is written.
pub fn render_board(
    w: &mut impl Write,
    board: &Board,
    mask: Option<&HighlightMask>,
) -> RenderResult<()> {
    if let Some(mask) = mask {
        if let Err(e) = mask.check_shape() {
            tracing::warn!(error = %e, "rejecting highlight mask");
            return Err(e);
        }
    }
    tracing::debug!(highlighted = mask.is_some(), "rendering board");

    for row in 0..RANKS {
        write!(w, "{}{} ", ColorRole::Reset, RANKS - row)?;
        for col in 0..FILES {
            let highlighted = mask.is_some_and(|m| m.is_set(row, col));
            w.write_all(render_cell(board.get(row, col), row, col, highlighted).as_bytes())?;
        }
        writeln!(w, "{}", ColorRole::Reset)?;
    }
    writeln!(w, "{}{FILE_LABELS}", ColorRole::Reset)?;
    Ok(())
}

pub fn render_plain(w: &mut impl Write, board: &Board) -> RenderResult<()> {
    render_board(w, board, None)
}

pub fn render_highlighted(
    w: &mut impl Write,
    board: &Board,
    mask: &HighlightMask,
) -> RenderResult<()> {
    render_board(w, board, Some(mask))
}

/// Two labeled lines, white captures first, each in its own fixed color.
pub fn render_captured(w: &mut impl Write, captured: &CapturedPieces) -> RenderResult<()> {
    for color in [PieceColor::White, PieceColor::Black] {
        let list = captured
            .of(color)
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            w,
            "{}{color}: [{list}]{}",
            captured_label_for(color),
            ColorRole::Reset
        )?;
    }
    Ok(())
}

/// Board, captured pieces, then turn and status lines.
pub fn render_match(w: &mut impl Write, summary: &MatchSummary<'_>) -> RenderResult<()> {
    render_plain(w, summary.board)?;
    writeln!(w)?;
    render_captured(w, summary.captured)?;
    writeln!(w)?;
    writeln!(w, "Turn: {}", summary.turn)?;

    match summary.checkmate_winner {
        Some(winner) => {
            writeln!(w, "{CHECKMATE_LINE}")?;
            writeln!(w, "Winner: {winner}")?;
        }
        None => {
            writeln!(w, "Waiting player: {}", summary.current_player)?;
            if summary.check {
                writeln!(w, "{CHECK_LINE}")?;
            }
        }
    }
    Ok(())
}

fn to_string_with(f: impl FnOnce(&mut Vec<u8>) -> RenderResult<()>) -> RenderResult<String> {
    let mut buf = Vec::new();
    f(&mut buf)?;
    // Everything written above is built from `str`s.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn board_to_string(board: &Board, mask: Option<&HighlightMask>) -> RenderResult<String> {
    to_string_with(|buf| render_board(buf, board, mask))
}

pub fn captured_to_string(captured: &CapturedPieces) -> RenderResult<String> {
    to_string_with(|buf| render_captured(buf, captured))
}

pub fn match_to_string(summary: &MatchSummary<'_>) -> RenderResult<String> {
    to_string_with(|buf| render_match(buf, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::piece::{Piece, PieceKind};

    #[test]
    fn test_empty_cell_has_no_foreground() {
        let cell = render_cell(None, 0, 0, false);
        assert_eq!(cell, "\x1b[100m  \x1b[0m");
    }

    #[test]
    fn test_piece_cell_layout() {
        let cell = render_cell(Some(Piece::black(PieceKind::King)), 0, 1, false);
        assert_eq!(cell, "\x1b[44m\x1b[30mK \x1b[0m");

        let cell = render_cell(Some(Piece::white(PieceKind::Queen)), 0, 0, true);
        assert_eq!(cell, "\x1b[46m\x1b[1;37mQ \x1b[0m");
    }

    #[test]
    fn test_row_prefix_and_suffix() {
        let out = board_to_string(&Board::empty(), None).unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("\x1b[0m8 "));
        assert!(first.ends_with("\x1b[0m\x1b[0m"));
        assert_eq!(out.lines().last(), Some("\x1b[0m  a b c d e f g h"));
    }

    #[test]
    fn test_default_mask_renders_like_plain() {
        let board = Board::standard();
        let lit = board_to_string(&board, Some(&HighlightMask::default())).unwrap();
        assert_eq!(lit, board_to_string(&board, None).unwrap());
    }

    #[test]
    fn test_mismatched_mask_writes_nothing() {
        let mut buf = Vec::new();
        let mask = HighlightMask::from_rows(vec![vec![false; 7]; 8]);
        let result = render_board(&mut buf, &Board::standard(), Some(&mask));
        assert!(matches!(
            result,
            Err(RenderError::DimensionMismatch { rows: 8, cols: 7, .. })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_captured_lines() {
        let captured = CapturedPieces::from_pieces([
            Piece::white(PieceKind::Pawn),
            Piece::black(PieceKind::Bishop),
            Piece::white(PieceKind::Knight),
        ]);
        let out = captured_to_string(&captured).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["\x1b[37mWhite: [P, N]\x1b[0m", "\x1b[33mBlack: [B]\x1b[0m"]);
    }

    #[test]
    fn test_captured_empty_lists() {
        let out = captured_to_string(&CapturedPieces::default()).unwrap();
        assert!(out.contains("White: []"));
        assert!(out.contains("Black: []"));
    }
}
