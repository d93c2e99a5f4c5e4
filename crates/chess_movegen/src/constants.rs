//! # Board geometry constants
//!
//! Movement is encoded as `(d_row, d_col)` offsets in chess coordinates, so a
//! positive `d_row` always points toward row 8 (Black's back rank) and a
//! positive `d_col` toward file h, independent of how `Board` stores squares.
//!
//! Sliding pieces repeat one offset until blocked; king and knight apply each
//! offset once.

use crate::types::PieceType;

/// Number of rows and columns
pub const BOARD_SIZE: i8 = 8;

pub const MIN_COORD: i8 = 1;
pub const MAX_COORD: i8 = BOARD_SIZE;

/// A single row/column displacement
pub type Offset = (i8, i8);

/// Diagonal rays
pub const BISHOP_DIRS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays
pub const ROOK_DIRS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Every square at Chebyshev distance one
pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight L-shaped jumps
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Back-rank layout from file a to file h, shared by both colors
pub const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];
