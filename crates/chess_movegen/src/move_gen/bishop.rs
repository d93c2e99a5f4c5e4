//! Bishop move generation
//!
//! Bishops are sliding pieces that move diagonally until blocked by another
//! piece or the board edge. They capture the first opponent piece on a
//! diagonal and stop short of their own pieces.

use super::sliding;
use crate::board::{Board, Square};
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
///
/// Delegates to the common sliding piece logic with the four diagonal rays.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_bishop_moves(&board, c1, Color::White, &mut moves);
/// // Moves now contains all pseudo-legal bishop moves from c1
/// ```
pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
