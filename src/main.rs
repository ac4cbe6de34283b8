//! chess-term: render chess positions to an ANSI terminal.
//!
//! ## Usage
//!
//! - `chess-term` - Show a demo
//! - `chess-term board --fen <FEN> --highlight e3 --highlight e4` - Render a board
//! - `chess-term match --fen <FEN> --turn 3 --player Black --check` - Render a match summary
//! - `chess-term parse e4` - Parse a coordinate

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chess_term::board::{Board, CapturedPieces, HighlightMask};
use chess_term::constants::START_FEN;
use chess_term::coord::{ChessPosition, parse_position};
use chess_term::piece::{Piece, PieceKind};
use chess_term::render::{MatchSummary, render_board, render_match};

/// chess-term: ANSI chess board renderer
#[derive(Parser)]
#[command(name = "chess-term")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a board, optionally highlighting destination squares
    Board {
        /// Piece placement in FEN (trailing fields are ignored)
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Square to highlight, e.g. `e4`; may be repeated
        #[arg(long = "highlight")]
        highlights: Vec<String>,
    },
    /// Render a board with captured pieces and turn status
    Match {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(long, default_value_t = 1)]
        turn: u32,
        #[arg(long, default_value = "White")]
        player: String,
        /// Captured pieces as FEN letters, e.g. `Ppn`
        #[arg(long, default_value = "")]
        captured: String,
        #[arg(long)]
        check: bool,
        /// Announce checkmate with this winner
        #[arg(long)]
        winner: Option<String>,
    },
    /// Parse a coordinate such as `e4`
    Parse { coord: String },
    /// Run a simple demo of the renderer
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Board { fen, highlights }) => {
            let board = Board::from_fen(&fen).context("reading --fen")?;
            let mask = parse_highlights(&highlights)?;
            render_board(&mut stdout, &board, mask.as_ref()).context("rendering board")?;
        }
        Some(Commands::Match {
            fen,
            turn,
            player,
            captured,
            check,
            winner,
        }) => {
            let board = Board::from_fen(&fen).context("reading --fen")?;
            let captured = parse_captured(&captured)?;
            let summary = MatchSummary {
                board: &board,
                captured: &captured,
                turn,
                current_player: &player,
                check,
                checkmate_winner: winner.as_deref(),
            };
            render_match(&mut stdout, &summary).context("rendering match")?;
        }
        Some(Commands::Parse { coord }) => match parse_position(coord.trim()) {
            Ok(pos) => writeln!(stdout, "file {} rank {}", pos.file(), pos.rank())?,
            Err(e) => writeln!(stdout, "{e}")?,
        },
        Some(Commands::Demo) | None => run_demo(&mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}

fn parse_highlights(coords: &[String]) -> Result<Option<HighlightMask>> {
    if coords.is_empty() {
        return Ok(None);
    }
    let positions = coords
        .iter()
        .map(|c| parse_position(c.trim()).with_context(|| format!("reading --highlight {c}")))
        .collect::<Result<Vec<ChessPosition>>>()?;
    Ok(Some(HighlightMask::from_positions(&positions)))
}

fn parse_captured(letters: &str) -> Result<CapturedPieces> {
    let pieces = letters
        .chars()
        .map(|c| Piece::from_fen_char(c).with_context(|| format!("unknown piece letter {c:?}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(CapturedPieces::from_pieces(pieces))
}

fn run_demo(w: &mut impl Write) -> Result<()> {
    writeln!(w, "chess-term: ANSI chess board renderer\n")?;

    // Demo 1: plain starting position
    writeln!(w, "=== Starting Position ===")?;
    let mut board = Board::standard();
    render_board(w, &board, None)?;

    // Demo 2: pawn on e2 selected, e3 and e4 highlighted
    writeln!(w, "\n=== Selected e2 ===")?;
    let targets = [parse_position("e3")?, parse_position("e4")?];
    let mask = HighlightMask::from_positions(&targets);
    render_board(w, &board, Some(&mask))?;

    // Demo 3: 1. e4 d5 2. exd5
    writeln!(w, "\n=== Match Summary ===")?;
    board.set(6, 4, None);
    board.set(1, 3, None);
    board.place(parse_position("d5")?, Piece::white(PieceKind::Pawn));
    let captured = CapturedPieces::from_pieces([Piece::black(PieceKind::Pawn)]);
    let summary = MatchSummary {
        board: &board,
        captured: &captured,
        turn: 3,
        current_player: "BLACK",
        check: false,
        checkmate_winner: None,
    };
    render_match(w, &summary)?;
    Ok(())
}
