//! Pseudo-legal move generation
//!
//! Given a board and an occupied square, produce every move the occupant's
//! geometry allows, taking board occupancy into account but not king safety.
//!
//! ## Dispatch
//!
//! [`piece_moves`] matches exhaustively on [`PieceType`] and hands off to one
//! of four strategies:
//! - **Sliding** (bishop, rook, queen) - walk each ray until blocked
//! - **King** - one step in any direction
//! - **Knight** - the eight L-shaped jumps
//! - **Pawn** - forward steps, diagonal captures and promotion
//!
//! All strategies append to a caller-owned `Vec<Move>` and never touch the
//! board, so calling twice on an unchanged board yields the same moves.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

use tracing::debug;

use crate::board::*;
use crate::error::{MoveGenError, MoveGenResult};
use crate::types::*;

pub use bishop::generate_bishop_moves;
pub use king::generate_king_moves;
pub use knight::generate_knight_moves;
pub use pawn::generate_pawn_moves;
pub use queen::generate_queen_moves;
pub use rook::generate_rook_moves;

/// Generate every pseudo-legal move for the piece on `square`
///
/// # Errors
///
/// Returns [`MoveGenError::NoPieceAtSquare`] when `square` is empty.
///
/// # Examples
///
/// ```
/// use chess_movegen::{piece_moves, Board, Square};
///
/// let board = Board::standard();
/// let b1: Square = "b1".parse().unwrap();
/// let moves = piece_moves(&board, b1).unwrap();
/// assert_eq!(moves.len(), 2); // Na3, Nc3
/// ```
pub fn piece_moves(board: &Board, square: Square) -> MoveGenResult<Vec<Move>> {
    let piece = board
        .piece_at(square)
        .ok_or(MoveGenError::NoPieceAtSquare { square })?;

    let mut moves = Vec::new();
    let color = piece.color;

    match piece.kind {
        PieceType::King => generate_king_moves(board, square, color, &mut moves),
        PieceType::Queen => generate_queen_moves(board, square, color, &mut moves),
        PieceType::Bishop => generate_bishop_moves(board, square, color, &mut moves),
        PieceType::Knight => generate_knight_moves(board, square, color, &mut moves),
        PieceType::Rook => generate_rook_moves(board, square, color, &mut moves),
        PieceType::Pawn => generate_pawn_moves(board, square, color, &mut moves),
    }

    debug!("[MOVEGEN] {} on {}: {} moves", piece, square, moves.len());
    Ok(moves)
}

/// Generate the pseudo-legal moves of every piece belonging to `color`
///
/// This is the candidate list a game layer filters down to legal moves.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for (square, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        // The square is occupied, so generation cannot fail
        if let Ok(generated) = piece_moves(board, square) {
            moves.extend(generated);
        }
    }

    moves
}

/// Check whether `mv` is among the pseudo-legal moves of its start square
///
/// # Errors
///
/// Returns [`MoveGenError::NoPieceAtSquare`] when `mv.from` is empty.
pub fn is_pseudo_legal(board: &Board, mv: Move) -> MoveGenResult<bool> {
    Ok(piece_moves(board, mv.from)?.contains(&mv))
}

/// True when a piece of `color` may end its move on `square`
///
/// Valid if the square is empty or holds an opponent piece.
#[inline]
pub(crate) fn can_land_on(board: &Board, square: Square, color: Color) -> bool {
    match board.piece_at(square) {
        None => true,
        Some(occupant) => occupant.color != color,
    }
}
