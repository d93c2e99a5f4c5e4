//! Error types for move generation
//!
//! Every precondition violation surfaces as a [`MoveGenError`]. Nothing in
//! this crate recovers from one or returns a partial result.

use thiserror::Error;

use crate::board::Square;

/// Errors that can occur while addressing the board or generating moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// Row or column outside 1..8
    #[error("Invalid square: row {row}, column {col} (both must be 1-8)")]
    InvalidSquare { row: i8, col: i8 },

    /// Move generation requested on an empty square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Square text that is not algebraic notation
    #[error("Invalid square notation: {input:?}")]
    InvalidNotation { input: String },

    /// Piece letter outside `KQBNRP` / `kqbnrp`
    #[error("Invalid piece symbol: {symbol:?}")]
    InvalidPiece { symbol: String },
}

/// Result type alias for move generation operations
pub type MoveGenResult<T> = Result<T, MoveGenError>;
