//! Board addressing and occupancy
//!
//! Provides the two types every other module builds on:
//! - [`Square`] - a range-checked `(row, col)` coordinate in chess notation
//! - [`Board`] - 64 optional pieces with placement and query operations
//!
//! Rows and columns are 1-based. Row 1 is White's back rank. Storage keeps
//! row 8 at index 0 (storage row = 8 - chess row); that inversion never leaks
//! out of this module.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{MoveGenError, MoveGenResult};
use crate::types::*;

/// Check if square coordinates are on the board
#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    (MIN_COORD..=MAX_COORD).contains(&row) && (MIN_COORD..=MAX_COORD).contains(&col)
}

/// A board coordinate, always inside 1..8 x 1..8
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i8, i8)", into = "(i8, i8)")
)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Build a square, failing with [`MoveGenError::InvalidSquare`] when out of range
    pub fn new(row: i8, col: i8) -> MoveGenResult<Self> {
        if is_valid_square(row, col) {
            Ok(Self { row, col })
        } else {
            Err(MoveGenError::InvalidSquare { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// The square displaced by `(d_row, d_col)`, or `None` off the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row.checked_add(d_row)?;
        let col = self.col.checked_add(d_col)?;
        is_valid_square(row, col).then_some(Square { row, col })
    }

    /// All 64 squares, row 1 first, file a to h within a row
    pub fn all() -> impl Iterator<Item = Square> {
        (MIN_COORD..=MAX_COORD)
            .flat_map(|row| (MIN_COORD..=MAX_COORD).map(move |col| Square { row, col }))
    }

    /// File letter `a`..`h`
    pub fn file_char(self) -> char {
        char::from(b'a' + (self.col - MIN_COORD) as u8)
    }

    /// (storage row, storage col) into `Board::squares`
    #[inline]
    fn storage_index(self) -> (usize, usize) {
        ((MAX_COORD - self.row) as usize, (self.col - MIN_COORD) as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.row)
    }
}

impl FromStr for Square {
    type Err = MoveGenError;

    /// Parse algebraic notation such as `e4`
    fn from_str(s: &str) -> MoveGenResult<Self> {
        let invalid = || MoveGenError::InvalidNotation {
            input: s.to_string(),
        };

        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Square::new((rank - b'0') as i8, (file - b'a') as i8 + MIN_COORD)
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = MoveGenError;

    fn try_from((row, col): (i8, i8)) -> MoveGenResult<Self> {
        Square::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

/// An 8x8 grid of optional pieces
///
/// The board is a passive container. It does not check piece counts or
/// placement legality, so positions with no kings or pawns on a back rank
/// are representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// A board in the standard starting position
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_to_standard_setup();
        board
    }

    /// Set or clear the occupant of `square`
    pub fn place_piece(&mut self, square: Square, piece: Option<Piece>) {
        let (row, col) = square.storage_index();
        self.squares[row][col] = piece;
    }

    /// Get the occupant of `square`, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.storage_index();
        self.squares[row][col]
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clear the board and place both armies in their starting arrangement
    pub fn reset_to_standard_setup(&mut self) {
        self.clear();

        for color in Color::ALL {
            for (kind, col) in BACK_ROW.into_iter().zip(MIN_COORD..=MAX_COORD) {
                let back = Square {
                    row: color.back_row(),
                    col,
                };
                let pawn = Square {
                    row: color.pawn_start_row(),
                    col,
                };
                self.place_piece(back, Some(Piece::new(color, kind)));
                self.place_piece(pawn, Some(Piece::new(color, PieceType::Pawn)));
            }
        }
    }

    /// Occupied squares with their pieces, in [`Square::all`] order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl fmt::Display for Board {
    /// Row 8 first, `.` for empty squares
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (MIN_COORD..=MAX_COORD).rev() {
            write!(f, "{row} ")?;
            for col in MIN_COORD..=MAX_COORD {
                match self.piece_at(Square { row, col }) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        f.write_str("  abcdefgh")
    }
}
