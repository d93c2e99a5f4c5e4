//! # Core value types - pieces, colors and moves
//!
//! ## Overview
//!
//! Everything the generator hands back to a caller is plain immutable data:
//! a [`Piece`] is a `(Color, PieceType)` pair and a [`Move`] is a start square,
//! an end square and an optional [`PromotionType`]. None of these types carry
//! capture, check or legality flags. Deciding whether a proposed move is
//! actually playable belongs to whatever game layer sits on top of this crate.
//!
//! ## Color-dependent geometry
//!
//! Pawn direction, starting row and promotion row all depend on color. They
//! are exposed as methods on [`Color`] so that no generator code compares
//! against a literal side:
//!
//! | Color | `forward()` | `back_row()` | `pawn_start_row()` | `promotion_row()` |
//! |-------|-------------|--------------|--------------------|-------------------|
//! | White | +1          | 1            | 2                  | 8                 |
//! | Black | -1          | 8            | 7                  | 1                 |
//!
//! ## Text forms
//!
//! Pieces use FEN letters (`K Q B N R P` for White, lowercase for Black).
//! Moves render in UCI long algebraic form, `e2e4` or `e7e8q`.

use std::fmt;
use std::str::FromStr;

use crate::board::Square;
use crate::error::{MoveGenError, MoveGenResult};

/// Side a piece belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Row delta of a single pawn step
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this side's non-pawn pieces at the start of a game
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Row from which a pawn may double-step
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        self.back_row() + self.forward()
    }

    /// Row on which this side's pawns promote (the opponent's back rank)
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opponent().back_row()
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// The six kinds of chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Lowercase FEN letter
    pub const fn symbol(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        PieceType::ALL
            .into_iter()
            .find(|kind| kind.symbol() == symbol.to_ascii_lowercase())
    }

    /// Whether the piece moves along rays until blocked
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::Bishop | PieceType::Rook)
    }
}

/// A colored piece
///
/// Two pieces are equal iff both color and type match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// FEN letter, uppercase for White
    pub const fn symbol(self) -> char {
        let lower = self.kind.symbol();
        match self.color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        }
    }

    /// True when `other` belongs to the opposing side
    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Piece {
    type Err = MoveGenError;

    fn from_str(s: &str) -> MoveGenResult<Self> {
        let invalid = || MoveGenError::InvalidPiece {
            symbol: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let kind = PieceType::from_symbol(symbol).ok_or_else(invalid)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece::new(color, kind))
    }
}

/// Piece a pawn may turn into when it reaches the last row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromotionType {
    Queen,
    Bishop,
    Rook,
    Knight,
}

impl PromotionType {
    /// Order in which promotion moves are emitted
    pub const ALL: [PromotionType; 4] = [
        PromotionType::Queen,
        PromotionType::Bishop,
        PromotionType::Rook,
        PromotionType::Knight,
    ];
}

impl From<PromotionType> for PieceType {
    fn from(promotion: PromotionType) -> Self {
        match promotion {
            PromotionType::Queen => PieceType::Queen,
            PromotionType::Bishop => PieceType::Bishop,
            PromotionType::Rook => PieceType::Rook,
            PromotionType::Knight => PieceType::Knight,
        }
    }
}

/// A pseudo-legal move proposal
///
/// Carries no capture or check information; it is just geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionType>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(from: Square, to: Square, promotion: PromotionType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", PieceType::from(promotion).symbol())?;
        }
        Ok(())
    }
}
