//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks: eight rays,
//! each walked until blocked.

use super::bishop;
use super::rook;
use crate::board::{Board, Square};
use crate::types::*;

/// Generate queen moves from a given square
///
/// Queens move like both bishop and rook, so this generates the diagonal
/// rays followed by the orthogonal ones.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_queen_moves(&board, d1, Color::White, &mut moves);
/// ```
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(board, from, color, moves);
    rook::generate_rook_moves(board, from, color, moves);
}
