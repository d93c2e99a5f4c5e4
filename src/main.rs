//! Move generation driver
//!
//! Sets up a board from the command line and prints the pseudo-legal moves
//! of one square, or of a whole side, in UCI notation (one move per line).
//!
//! ```text
//! movegen e2
//! movegen --empty --place d4=Q --place d7=p d4
//! movegen --place e2=- --side white
//! RUST_LOG=chess_movegen=trace movegen --empty --place a1=R a1
//! ```

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chess_movegen::{piece_moves, pseudo_legal_moves, Board, Color, Piece, Square};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print pseudo-legal chess moves for a square or a side.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["square", "side"])))]
struct Cli {
    /// Square whose piece to generate moves for, e.g. `e2`
    square: Option<Square>,

    /// Generate moves for every piece of this side instead of one square
    #[arg(long, value_enum)]
    side: Option<Side>,

    /// Start from an empty board instead of the standard setup
    #[arg(long, default_value_t = false)]
    empty: bool,

    /// Place (`e4=Q`, `d5=p`) or clear (`e2=-`) a square before generating
    #[arg(long = "place", value_name = "SQUARE=PIECE")]
    placements: Vec<Placement>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Clone, Debug)]
struct Placement {
    square: Square,
    piece: Option<Piece>,
}

impl FromStr for Placement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (square, piece) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected SQUARE=PIECE, got {s:?}"))?;

        let square = square.parse()?;
        let piece = match piece {
            "-" => None,
            symbol => Some(symbol.parse()?),
        };

        Ok(Self { square, piece })
    }
}

fn build_board(cli: &Cli) -> Board {
    let mut board = if cli.empty {
        Board::new()
    } else {
        Board::standard()
    };

    for placement in &cli.placements {
        board.place_piece(placement.square, placement.piece);
    }

    board
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let board = build_board(&cli);
    info!("[BOARD]\n{board}");

    let moves = match (cli.square, cli.side) {
        (Some(square), _) => piece_moves(&board, square)
            .with_context(|| format!("cannot generate moves for {square}"))?,
        (None, Some(side)) => pseudo_legal_moves(&board, side.into()),
        (None, None) => bail!("pass a square or --side"),
    };

    info!("[MOVEGEN] {} candidate moves", moves.len());
    for mv in moves {
        println!("{mv}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_parsing() {
        let placement: Placement = "e4=Q".parse().unwrap();
        assert_eq!(placement.square.to_string(), "e4");
        assert_eq!(placement.piece.map(|p| p.symbol()), Some('Q'));

        let cleared: Placement = "e2=-".parse().unwrap();
        assert_eq!(cleared.piece, None);

        assert!("e4Q".parse::<Placement>().is_err());
        assert!("z9=Q".parse::<Placement>().is_err());
        assert!("e4=X".parse::<Placement>().is_err());
    }

    #[test]
    fn test_cli_builds_board() {
        let cli = Cli::parse_from(["movegen", "--empty", "--place", "d4=n", "d4"]);
        let board = build_board(&cli);

        assert_eq!(board.pieces().count(), 1);
        assert_eq!(piece_moves(&board, cli.square.unwrap()).unwrap().len(), 8);
    }

    #[test]
    fn test_cli_requires_target() {
        assert!(Cli::try_parse_from(["movegen"]).is_err());
        assert!(Cli::try_parse_from(["movegen", "--side", "black"]).is_ok());
    }
}
