//! King move generation
//!
//! Kings move one square in any direction (horizontally, vertically, or
//! diagonally).
//!
//! ## King Movement Rules
//!
//! - Up to 8 destinations: 3 in a corner, 5 on an edge
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares
//! - Whether the destination is attacked is left to the game layer
//!
//! Castling is not generated. It depends on move history, which a bare
//! board does not carry.

use super::can_land_on;
use crate::board::{Board, Square};
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// Generate king moves from a given square
///
/// # Arguments
///
/// * `board` - The board to read occupancy from
/// * `from` - Square of the king
/// * `color` - Color of the king
/// * `moves` - Output vector to append valid moves to
pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if can_land_on(board, to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
