//! Property tests for pseudo-legal move generation
//!
//! Builds many random (and often nonsensical) boards from a fixed seed and
//! checks the invariants every generated move must satisfy, whatever the
//! position looks like.

use chess_movegen::{
    piece_moves, pseudo_legal_moves, Board, Color, Move, MoveGenError, Piece, PieceType, Square,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BOARDS: usize = 300;

/// Fill roughly `density` of the squares with random pieces
fn random_board(rng: &mut StdRng, density: f64) -> Board {
    let mut board = Board::new();
    for square in Square::all() {
        if rng.random_bool(density) {
            let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
            let kind = PieceType::ALL[rng.random_range(0..PieceType::ALL.len())];
            board.place_piece(square, Some(Piece::new(color, kind)));
        }
    }
    board
}

fn random_boards() -> impl Iterator<Item = Board> {
    let mut rng = StdRng::seed_from_u64(0x5eed_c4e5);
    (0..BOARDS).map(move |i| {
        let density = [0.1, 0.3, 0.6][i % 3];
        random_board(&mut rng, density)
    })
}

/// Squares strictly between `mv.from` and `mv.to` along a straight line
fn squares_between(mv: Move) -> Vec<Square> {
    let d_row = (mv.to.row() - mv.from.row()).signum();
    let d_col = (mv.to.col() - mv.from.col()).signum();
    let mut between = Vec::new();
    let mut current = mv.from;
    while let Some(next) = current.offset(d_row, d_col) {
        if next == mv.to {
            break;
        }
        between.push(next);
        current = next;
    }
    between
}

#[test]
fn test_every_move_lands_on_board_and_never_on_a_friend() {
    for board in random_boards() {
        for (square, piece) in board.pieces() {
            for mv in piece_moves(&board, square).unwrap() {
                assert_eq!(mv.from, square);
                assert!((1..=8).contains(&mv.to.row()) && (1..=8).contains(&mv.to.col()));
                assert_ne!(mv.to, mv.from);

                if let Some(target) = board.piece_at(mv.to) {
                    assert_ne!(
                        target.color, piece.color,
                        "{piece} on {square} must not land on its own {target} ({mv})\n{board}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_piece_geometry() {
    //! Each move matches its piece's shape and sliding paths are clear
    for board in random_boards() {
        for (square, piece) in board.pieces() {
            for mv in piece_moves(&board, square).unwrap() {
                let d_row = (mv.to.row() - mv.from.row()).abs();
                let d_col = (mv.to.col() - mv.from.col()).abs();

                let shaped = match piece.kind {
                    PieceType::King => d_row <= 1 && d_col <= 1,
                    PieceType::Knight => (d_row, d_col) == (1, 2) || (d_row, d_col) == (2, 1),
                    PieceType::Bishop => d_row == d_col,
                    PieceType::Rook => d_row == 0 || d_col == 0,
                    PieceType::Queen => d_row == d_col || d_row == 0 || d_col == 0,
                    PieceType::Pawn => {
                        let forward = (mv.to.row() - mv.from.row()) * piece.color.forward();
                        (forward == 1 && d_col <= 1) || (forward == 2 && d_col == 0)
                    }
                };
                assert!(shaped, "{piece} cannot move {mv}\n{board}");

                if piece.kind.is_slider() {
                    for between in squares_between(mv) {
                        assert!(
                            board.is_empty(between),
                            "{piece} {mv} passes through occupied {between}\n{board}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_rays_stop_at_first_blocker() {
    //! Extending a sliding move one more step is only generated if the move
    //! landed on an empty square
    for board in random_boards() {
        for (square, piece) in board.pieces().filter(|(_, p)| p.kind.is_slider()) {
            let moves = piece_moves(&board, square).unwrap();
            for mv in &moves {
                let d_row = (mv.to.row() - mv.from.row()).signum();
                let d_col = (mv.to.col() - mv.from.col()).signum();
                let Some(beyond) = mv.to.offset(d_row, d_col) else {
                    continue;
                };
                let extended = Move::new(square, beyond);

                if board.piece_at(mv.to).is_some() {
                    assert!(
                        !moves.contains(&extended),
                        "{piece} ray continued past a capture on {}\n{board}",
                        mv.to
                    );
                } else if board.piece_at(beyond).map_or(true, |p| p.color != piece.color) {
                    assert!(
                        moves.contains(&extended),
                        "{piece} ray stopped early at {}\n{board}",
                        mv.to
                    );
                }
            }
        }
    }
}

#[test]
fn test_pawn_promotion_only_on_last_row() {
    for board in random_boards() {
        for (square, piece) in board.pieces().filter(|(_, p)| p.kind == PieceType::Pawn) {
            let moves = piece_moves(&board, square).unwrap();
            let promoting = square.row() + piece.color.forward() == piece.color.promotion_row();

            assert!(moves.iter().all(|mv| mv.promotion.is_some() == promoting));
            if promoting {
                assert_eq!(moves.len() % 4, 0);
            }
        }
    }
}

#[test]
fn test_empty_squares_are_errors() {
    for board in random_boards().take(20) {
        for square in Square::all().filter(|&s| board.is_empty(s)) {
            assert_eq!(
                piece_moves(&board, square),
                Err(MoveGenError::NoPieceAtSquare { square })
            );
        }
    }
}

#[test]
fn test_side_generation_is_union_of_pieces() {
    for board in random_boards().take(50) {
        for color in Color::ALL {
            let expected: usize = board
                .pieces()
                .filter(|(_, p)| p.color == color)
                .map(|(square, _)| piece_moves(&board, square).unwrap().len())
                .sum();

            assert_eq!(pseudo_legal_moves(&board, color).len(), expected);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let board = Board::standard();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

    let moves = pseudo_legal_moves(&board, Color::White);
    let json = serde_json::to_string(&moves).unwrap();
    assert_eq!(serde_json::from_str::<Vec<Move>>(&json).unwrap(), moves);

    assert!(serde_json::from_str::<Square>("[9,1]").is_err());
}
