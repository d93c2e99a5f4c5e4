//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, step outward from the origin one square at a time:
//! 1. Stop at the board edge
//! 2. Empty square: record it and keep walking
//! 3. Opponent piece: record it (capture) and stop
//! 4. Own piece: stop without recording it
//!
//! A ray never visits more than seven squares, so generation is bounded.

use tracing::trace;

use crate::board::*;
use crate::constants::Offset;
use crate::types::*;

/// Generate moves along each ray in `directions`
///
/// # Arguments
///
/// * `board` - The board to read occupancy from
/// * `from` - Square of the moving piece
/// * `color` - Color of the moving piece
/// * `directions` - `(d_row, d_col)` unit steps, one per ray
/// * `moves` - Output vector to append valid moves to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, a1, Color::White, &ROOK_DIRS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Offset],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;

        while let Some(to) = current.offset(d_row, d_col) {
            trace!("[MOVEGEN] ray ({}, {}) from {} visits {}", d_row, d_col, from, to);

            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }

            current = to;
        }
    }
}
