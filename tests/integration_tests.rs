//! Integration tests for checkers-rust
//!
//! These exercise the public API the way a front end would: set up a
//! position, ask for legal moves, apply turns and let the engine reply.

use checkers_rust::apply::apply_move;
use checkers_rust::board::{Board, PieceKind, Side};
use checkers_rust::game::{Game, GameState, MoveError, new_game};
use checkers_rust::movegen::{legal_moves, optional_moves, required_moves};
use checkers_rust::moves::Move;
use checkers_rust::notation::parse_turn;
use checkers_rust::search::{CandidatePolicy, SearchConfig, predict_optimal, predict_turn};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place pieces on an empty board.
/// Each entry is `(x, y, kind)`.
fn setpos(width: usize, height: usize, pieces: &[(usize, usize, PieceKind)]) -> Board {
    let mut board = Board::new(width, height);
    for &(x, y, kind) in pieces {
        board.set_piece(x, y, kind);
    }
    board
}

fn is_capture(board: &Board, mv: &Move) -> bool {
    let mut scratch = board.copy();
    apply_move(&mut scratch, mv)
}

/// A handful of mid-game positions reached by seeded self-play.
fn sample_positions() -> Vec<Board> {
    let mut positions = Vec::new();
    for seed in 0..3 {
        let mut game = Game::with_config(
            8,
            8,
            SearchConfig {
                max_depth: 2,
                policy: CandidatePolicy::EveryPrefix,
            },
            fastrand::Rng::with_seed(seed),
        );
        for _ in 0..30 {
            if game.is_game_over().is_some() {
                break;
            }
            game.play_engine_turn();
            positions.push(game.board().copy());
        }
    }
    positions
}

// =============================================================================
// Rule properties
// =============================================================================

#[test]
fn test_opening_moves() {
    let state = new_game(8, 8);
    let moves = state.legal_moves(Side::White);
    assert_eq!(moves.len(), 7);
    for mv in &moves {
        assert!(!is_capture(&state.board, mv));
        assert_eq!(mv.to_y + 1, mv.from_y, "white steps toward rank y = 0");
        assert_eq!(mv.distance(), 1);
    }
}

#[test]
fn test_forced_capture_invariant() {
    for board in sample_positions() {
        for side in [Side::White, Side::Black] {
            let legal = legal_moves(&board, side);
            if required_moves(&board, side).is_empty() {
                assert_eq!(legal, optional_moves(&board, side));
                assert!(legal.iter().all(|mv| !is_capture(&board, mv)));
            } else {
                assert!(legal.iter().all(|mv| is_capture(&board, mv)));
            }
        }
    }
}

#[test]
fn test_capture_removes_exactly_jumped_pieces() {
    for board in sample_positions() {
        for side in [Side::White, Side::Black] {
            for mv in required_moves(&board, side) {
                let mut after = board.copy();
                apply_move(&mut after, &mv);
                assert_eq!(after.piece_count(), board.piece_count() - 1);

                let (dx, dy) = mv.direction();
                for step in 1..mv.distance() as isize {
                    let x = (mv.from_x as isize + dx * step) as usize;
                    let y = (mv.from_y as isize + dy * step) as usize;
                    assert!(after.piece_at(x, y).is_empty());
                }
            }
        }
    }
}

#[test]
fn test_black_jump_scenario() {
    let board = setpos(
        8,
        8,
        &[(3, 4, PieceKind::BlackRegular), (4, 5, PieceKind::WhiteRegular)],
    );
    let capture = Move::new(3, 4, 5, 6);
    assert!(required_moves(&board, Side::Black).contains(&capture));

    let mut after = board.copy();
    assert!(apply_move(&mut after, &capture));
    assert_eq!(after.piece_at(4, 5), PieceKind::None);
    assert_eq!(after.piece_at(5, 6), PieceKind::BlackRegular);
}

#[test]
fn test_queen_capture_scenario() {
    let board = setpos(
        8,
        8,
        &[(2, 2, PieceKind::WhiteQueen), (4, 4, PieceKind::BlackRegular)],
    );
    let required = required_moves(&board, Side::White);
    assert!(required.contains(&Move::new(2, 2, 5, 5)));
    assert!(required.contains(&Move::new(2, 2, 6, 6)));
    assert!(required.contains(&Move::new(2, 2, 7, 7)));
    assert_eq!(required.len(), 3);
}

#[test]
fn test_queen_captures_land_beyond_one_enemy() {
    for board in sample_positions() {
        for side in [Side::White, Side::Black] {
            for mv in required_moves(&board, side) {
                if !board.piece_at(mv.from_x, mv.from_y).is_queen() {
                    continue;
                }
                assert!(board.piece_at(mv.to_x, mv.to_y).is_empty());
                let (dx, dy) = mv.direction();
                let between: Vec<PieceKind> = (1..mv.distance() as isize)
                    .map(|step| {
                        board.piece_at(
                            (mv.from_x as isize + dx * step) as usize,
                            (mv.from_y as isize + dy * step) as usize,
                        )
                    })
                    .filter(|kind| !kind.is_empty())
                    .collect();
                assert_eq!(between.len(), 1);
                assert_eq!(between[0].side(), side.opposite());
            }
        }
    }
}

#[test]
fn test_promotion_gives_queen_moves() {
    let mut board = setpos(8, 8, &[(2, 1, PieceKind::WhiteRegular)]);
    apply_move(&mut board, &Move::new(2, 1, 3, 0));
    assert_eq!(board.piece_at(3, 0), PieceKind::WhiteQueen);

    // Queen on the back rank slides down both diagonals.
    let moves = legal_moves(&board, Side::White);
    assert!(moves.contains(&Move::new(3, 0, 7, 4)));
    assert!(moves.contains(&Move::new(3, 0, 0, 3)));
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_promotion_mid_chain_continues_as_queen() {
    // White jumps onto the back rank, then the new queen flies on.
    let board = setpos(
        8,
        8,
        &[
            (0, 2, PieceKind::WhiteRegular),
            (1, 1, PieceKind::BlackRegular),
            (4, 2, PieceKind::BlackRegular),
        ],
    );
    let mut state = GameState {
        board,
        turn: Side::White,
    };
    let turn = parse_turn("a6-c8-g4", 8, 8).unwrap();
    assert_eq!(turn[0], Move::new(0, 2, 2, 0));
    assert_eq!(state.try_apply_turn(Side::White, &turn), Ok(()));
    assert_eq!(state.board.piece_at(6, 4), PieceKind::WhiteQueen);
    assert_eq!(state.is_game_over(), Some(Side::Black));
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_predicted_turn_starts_with_own_piece() {
    for (i, board) in sample_positions().into_iter().step_by(5).enumerate() {
        let mut rng = fastrand::Rng::with_seed(i as u64);
        for side in [Side::White, Side::Black] {
            let turn = predict_turn(&board, side, &SearchConfig::default(), &mut rng);
            if let Some(first) = turn.first() {
                assert_eq!(board.piece_at(first.from_x, first.from_y).side(), side);
                assert!(legal_moves(&board, side).contains(first));
            } else {
                assert!(legal_moves(&board, side).is_empty());
            }
        }
    }
}

#[test]
fn test_capturing_last_piece_is_best() {
    // White can take Black's last piece, or step away quietly with the other
    // piece; only the capture is legal and it ends the game.
    let board = setpos(
        8,
        8,
        &[
            (3, 4, PieceKind::WhiteRegular),
            (4, 3, PieceKind::BlackQueen),
            (0, 7, PieceKind::WhiteRegular),
        ],
    );
    let mut rng = fastrand::Rng::with_seed(9);
    let prediction = predict_optimal(&board, Side::White, &SearchConfig::default(), &mut rng);
    assert_eq!(prediction.score, f64::INFINITY);
    assert_eq!(prediction.turn, vec![Move::new(3, 4, 5, 2)]);
}

#[test]
fn test_search_leaves_board_untouched() {
    let mut game = Game::with_seed(8, 8, 4);
    game.apply_turn(Side::White, &[Move::new(1, 6, 2, 5)]);
    let before = game.board().copy();
    let _ = game.predict(Side::Black);
    assert_eq!(game.board(), &before);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_self_play_keeps_invariants() {
    let mut game = Game::with_config(
        8,
        8,
        SearchConfig {
            max_depth: 2,
            policy: CandidatePolicy::LeavesOnly,
        },
        fastrand::Rng::with_seed(2024),
    );
    let mut pieces = game.board().piece_count();
    for _ in 0..120 {
        if game.is_game_over().is_some() {
            break;
        }
        let side = game.turn();
        let turn = game.play_engine_turn();
        assert!(!turn.is_empty());
        assert_eq!(game.turn(), side.opposite());

        let now = game.board().piece_count();
        assert!(now <= pieces);
        pieces = now;
    }
}

#[test]
fn test_human_turn_validation() {
    let mut game = Game::with_seed(8, 8, 1);
    assert_eq!(
        game.try_apply_turn(Side::White, &[Move::new(1, 6, 1, 5)]),
        Err(MoveError::Illegal(Move::new(1, 6, 1, 5)))
    );
    assert_eq!(game.try_apply_turn(Side::White, &[Move::new(1, 6, 0, 5)]), Ok(()));
    assert_eq!(game.turn(), Side::Black);
    let reply = game.predict_turn(Side::Black);
    game.apply_turn(Side::Black, &reply);
    assert_eq!(game.turn(), Side::White);
}
