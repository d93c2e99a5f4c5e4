//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion expansion
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, only onto an empty square
//! - **Double push**: from the color's start row, two squares, when both the
//!   intermediate and destination squares are empty
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//! - **Promotion**: when the forward square is the opponent's back rank, each
//!   move becomes four moves, one per [`PromotionType::ALL`] entry
//!
//! En passant is not generated; it needs the opponent's previous move.

use crate::board::{Board, Square};
use crate::types::*;

/// Generate pawn moves from a given square
///
/// A pawn standing on its own promotion row (only possible on a hand-built
/// board) has nowhere to go and yields no moves.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&board, e2, Color::White, &mut moves);
/// // Moves now contains e2-e3, e2-e4, and any diagonal captures
/// ```
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();
    let Some(ahead) = from.offset(forward, 0) else {
        return;
    };

    let mut pawn_moves = Vec::with_capacity(4);

    if board.is_empty(ahead) {
        pawn_moves.push(Move::new(from, ahead));

        if from.row() == color.pawn_start_row() {
            if let Some(two_ahead) = ahead.offset(forward, 0) {
                if board.is_empty(two_ahead) {
                    pawn_moves.push(Move::new(from, two_ahead));
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.color != color)
        {
            pawn_moves.push(Move::new(from, target));
        }
    }

    if ahead.row() == color.promotion_row() {
        for mv in pawn_moves {
            moves.extend(
                PromotionType::ALL
                    .into_iter()
                    .map(|promotion| Move::with_promotion(mv.from, mv.to, promotion)),
            );
        }
    } else {
        moves.extend(pawn_moves);
    }
}
