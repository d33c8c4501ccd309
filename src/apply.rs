//! Move execution: promotion, relocation and capture removal.

use crate::board::{Board, PieceKind, Side};
use crate::moves::Move;

/// Execute `mv` on `board` and return whether any piece was captured.
///
/// A regular piece reaching the far rank is promoted before it moves. Every
/// occupied cell strictly between origin and destination is cleared, so the
/// same procedure handles short jumps and long queen captures.
///
/// Panics if the origin is empty or the move is not diagonal: callers only
/// apply moves taken from `legal_moves`.
pub fn apply_move(board: &mut Board, mv: &Move) -> bool {
    let kind = board.piece_at(mv.from_x, mv.from_y);
    assert!(!kind.is_empty(), "no piece to move at {mv}");
    assert!(mv.is_diagonal(), "move {mv} is not diagonal");

    let promotes = match kind {
        PieceKind::WhiteRegular => mv.to_y == 0,
        PieceKind::BlackRegular => mv.to_y == board.height() - 1,
        _ => false,
    };
    let kind = if promotes { kind.promoted() } else { kind };

    board.set_piece(mv.to_x, mv.to_y, kind);
    board.set_piece(mv.from_x, mv.from_y, PieceKind::None);

    // Walk back from the destination toward the origin.
    let (dx, dy) = mv.direction();
    let mut captured = false;
    for step in 1..mv.distance() as isize {
        let x = (mv.to_x as isize - dx * step) as usize;
        let y = (mv.to_y as isize - dy * step) as usize;
        if !board.piece_at(x, y).is_empty() {
            board.set_piece(x, y, PieceKind::None);
            captured = true;
        }
    }
    captured
}

/// Apply each move in order. Returns whether the last move captured.
pub fn apply_sequence(board: &mut Board, moves: &[Move]) -> bool {
    moves.iter().fold(false, |_, mv| apply_move(board, mv))
}

/// The side owning the piece that would make `mv` on `board`.
pub fn mover(board: &Board, mv: &Move) -> Side {
    board.piece_at(mv.from_x, mv.from_y).side()
}
