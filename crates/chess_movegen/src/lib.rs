//! # chess_movegen - Pseudo-legal move generation
//!
//! Computes, for a piece on a board, every square it could move to under its
//! movement geometry and the current occupancy. Rules that need game history
//! or turn order (check, castling, en passant, draw rules) are left to the
//! game layer built on top.
//!
//! ## Module Organization
//!
//! - `board` - [`Square`] addressing and the [`Board`] occupancy grid
//! - `types` - [`Color`], [`PieceType`], [`Piece`], [`PromotionType`], [`Move`]
//! - `constants` - direction and offset tables, back-rank layout
//! - `move_gen` - per-piece generators and the [`piece_moves`] dispatcher
//! - `error` - [`MoveGenError`] and [`MoveGenResult`]
//!
//! ## Example
//!
//! ```
//! use chess_movegen::{piece_moves, Board, Square};
//!
//! let board = Board::standard();
//! let e2: Square = "e2".parse()?;
//! let moves: Vec<String> = piece_moves(&board, e2)?
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(moves, ["e2e3", "e2e4"]);
//! # Ok::<(), chess_movegen::MoveGenError>(())
//! ```
//!
//! ## Logging
//!
//! Generation emits `tracing` events: one `debug` event per [`piece_moves`]
//! call and a `trace` event for every square a sliding ray visits. Nothing is
//! printed unless the application installs a subscriber.

pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;


pub use board::{Board, Square};
pub use error::{MoveGenError, MoveGenResult};
pub use move_gen::{is_pseudo_legal, piece_moves, pseudo_legal_moves};
pub use types::{Color, Move, Piece, PieceType, PromotionType};
