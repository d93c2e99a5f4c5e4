//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from interior squares, 2 from a corner
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::can_land_on;
use crate::board::{Board, Square};
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// Knights can jump over pieces, so only the destination squares are
/// checked.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&board, b1, Color::White, &mut moves);
/// // Moves now contains a3 and c3 in the starting position
/// ```
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            if can_land_on(board, to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_offsets_are_the_l_shapes() {
        // Both components in -2..=2, neither zero, absolute values differ by one
        let mut derived = Vec::new();
        for d_row in -2i8..=2 {
            for d_col in -2i8..=2 {
                if d_row != 0 && d_col != 0 && (d_row.abs() - d_col.abs()).abs() == 1 {
                    derived.push((d_row, d_col));
                }
            }
        }

        assert_eq!(derived, KNIGHT_OFFSETS.to_vec());
    }
}
