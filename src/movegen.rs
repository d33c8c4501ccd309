//! Legal move generation.
//!
//! Captures are compulsory: `legal_moves` returns the required (capturing)
//! moves when there are any, and the optional (quiet) moves otherwise.
//!
//! - Regular pieces capture a single adjacent enemy in any of the four
//!   diagonals, but only step forward when not capturing.
//! - Queens fly: they slide any distance along a diagonal, and capture one
//!   enemy per move, landing on any empty cell behind it.

use crate::board::{Board, PieceKind, Side};
use crate::constants::DIAGONALS;
use crate::moves::Move;

/// Moves the side is allowed to play: required moves if any, else optional.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let moves = required_moves(board, side);
    if moves.is_empty() {
        optional_moves(board, side)
    } else {
        moves
    }
}

/// All capturing moves for `side`.
pub fn required_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    if side == Side::None {
        return moves;
    }
    for (x, y, kind) in board.pieces() {
        if kind.side() == side {
            piece_captures(board, x, y, kind, &mut moves);
        }
    }
    moves
}

/// All non-capturing moves for `side`.
pub fn optional_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    if side == Side::None {
        return moves;
    }
    for (x, y, kind) in board.pieces() {
        if kind.side() != side {
            continue;
        }
        if kind.is_queen() {
            for &dir in &DIAGONALS {
                let mut steps = 1;
                while let Some((tx, ty)) = board.offset(x, y, dir, steps) {
                    if !board.piece_at(tx, ty).is_empty() {
                        break;
                    }
                    moves.push(Move::new(x, y, tx, ty));
                    steps += 1;
                }
            }
        } else {
            for &dir in side.forward() {
                if let Some((tx, ty)) = board.offset(x, y, dir, 1) {
                    if board.piece_at(tx, ty).is_empty() {
                        moves.push(Move::new(x, y, tx, ty));
                    }
                }
            }
        }
    }
    moves
}

/// Captures available to the piece standing on `(x, y)`.
///
/// This is how a chain continues: after a capture, the turn goes on only if
/// the same piece, at its landing cell, has one of these.
pub fn continuation_moves(board: &Board, side: Side, x: usize, y: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let kind = board.piece_at(x, y);
    if side != Side::None && kind.side() == side {
        piece_captures(board, x, y, kind, &mut moves);
    }
    moves
}

/// Whether the turn that just played `mv` (with result `captured`) must go on.
pub fn turn_continues(board: &Board, side: Side, mv: &Move, captured: bool) -> bool {
    captured && !continuation_moves(board, side, mv.to_x, mv.to_y).is_empty()
}

fn piece_captures(board: &Board, x: usize, y: usize, kind: PieceKind, out: &mut Vec<Move>) {
    let side = kind.side();
    let enemy = side.opposite();

    if !kind.is_queen() {
        for &dir in &DIAGONALS {
            let (Some((mx, my)), Some((tx, ty))) =
                (board.offset(x, y, dir, 1), board.offset(x, y, dir, 2))
            else {
                continue;
            };
            if board.piece_at(mx, my).side() == enemy && board.piece_at(tx, ty).is_empty() {
                out.push(Move::new(x, y, tx, ty));
            }
        }
        return;
    }

    for &dir in &DIAGONALS {
        let mut jumped = false;
        let mut steps = 1;
        while let Some((cx, cy)) = board.offset(x, y, dir, steps) {
            let here = board.piece_at(cx, cy);
            if !jumped {
                if here.side() == enemy {
                    jumped = true;
                } else if here.side() == side {
                    break;
                }
            } else if here.is_empty() {
                out.push(Move::new(x, y, cx, cy));
            } else {
                break;
            }
            steps += 1;
        }
    }
}
