//! Rook move generation
//!
//! Rooks are sliding pieces that move along rows and columns until blocked
//! by another piece or the board edge.

use super::sliding;
use crate::board::{Board, Square};
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
///
/// Delegates to the common sliding piece logic with the four orthogonal rays.
pub fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &ROOK_DIRS, moves);
}
