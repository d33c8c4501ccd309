//! Bounded-depth prediction of the best turn.
//!
//! The search enumerates move sequences a fixed number of turns deep. Each
//! turn is either a single quiet move or a capture chain by one piece; a
//! chain keeps the same side to move and does not consume depth. Every
//! recorded sequence is replayed on a copy of the real board and scored by
//! the material ratio between the searching side and its opponent. The best
//! sequence is cut down to the searching side's own moves.
//!
//! Branches never share a board: each move is applied to a fresh copy of
//! its parent, and the parent is left as it was.

use log::{debug, trace};

use crate::apply::{apply_move, apply_sequence, mover};
use crate::board::{Board, Side};
use crate::constants::MAX_PREDICTION_DEPTH;
use crate::movegen::{continuation_moves, legal_moves, turn_continues};
use crate::moves::{Move, MoveSequence};

/// Which sequences the enumeration offers for scoring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CandidatePolicy {
    /// Every non-empty sequence reached, including unfinished chains and
    /// lines cut short before the depth limit.
    #[default]
    EveryPrefix,
    /// Only sequences where the enumeration stops: at the depth limit, or
    /// where the side to move has no moves.
    LeavesOnly,
}

/// Search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of completed turns to look ahead.
    pub max_depth: usize,
    pub policy: CandidatePolicy,
}

impl SearchConfig {
    /// Config searching `max_depth` turns ahead. A depth of zero would never
    /// find a move and is rejected.
    pub fn new(max_depth: usize, policy: CandidatePolicy) -> anyhow::Result<Self> {
        anyhow::ensure!(max_depth >= 1, "search depth must be at least 1, got {max_depth}");
        Ok(Self { max_depth, policy })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_PREDICTION_DEPTH,
            policy: CandidatePolicy::default(),
        }
    }
}

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// The chosen turn, holding only the searching side's moves
    pub turn: MoveSequence,
    /// Material ratio of the chosen line (`f64::INFINITY` for a wipe-out)
    pub score: f64,
    /// Number of sequences scored
    pub candidates: usize,
    /// Number of sequences sharing the best score
    pub tied: usize,
}

/// Material ratio of `side` over its opponent on `board`.
///
/// An opponent with no material left gives `f64::INFINITY`.
pub fn material_ratio(board: &Board, side: Side) -> f64 {
    let own = board.material_score(side);
    let other = board.material_score(side.opposite());
    if other == 0 {
        f64::INFINITY
    } else {
        own as f64 / other as f64
    }
}

/// All sequences the search would score for `side`, in enumeration order.
///
/// Sequences run across turns: a sequence starting with `side`'s turn goes
/// on with the opponent's reply and so on, up to `config.max_depth` turns.
pub fn predicted_sequences(board: &Board, side: Side, config: &SearchConfig) -> Vec<MoveSequence> {
    let mut found = Vec::new();
    let mut current = Vec::new();
    enumerate(board, side, 0, &mut current, None, config, &mut found);
    found
}

fn enumerate(
    board: &Board,
    side: Side,
    depth: usize,
    current: &mut Vec<Move>,
    forced: Option<Vec<Move>>,
    config: &SearchConfig,
    found: &mut Vec<MoveSequence>,
) {
    if !current.is_empty() && config.policy == CandidatePolicy::EveryPrefix {
        found.push(current.clone());
    }

    let moves = forced.unwrap_or_else(|| legal_moves(board, side));
    if moves.is_empty() || depth >= config.max_depth {
        if !current.is_empty() && config.policy == CandidatePolicy::LeavesOnly {
            found.push(current.clone());
        }
        return;
    }

    for mv in moves {
        let mut child = board.copy();
        let captured = apply_move(&mut child, &mv);

        current.push(mv);
        if turn_continues(&child, side, &mv, captured) {
            let chain = continuation_moves(&child, side, mv.to_x, mv.to_y);
            enumerate(&child, side, depth, current, Some(chain), config, found);
        } else {
            enumerate(&child, side.opposite(), depth + 1, current, None, config, found);
        }
        current.pop();
    }
}

/// Pick the best turn for `side`, breaking ties with `rng`.
///
/// Returns an empty turn when `side` has no legal moves.
pub fn predict_optimal(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    rng: &mut fastrand::Rng,
) -> Prediction {
    let sequences = predicted_sequences(board, side, config);

    let mut best_score = f64::NEG_INFINITY;
    let mut best: Vec<&MoveSequence> = Vec::new();
    for seq in &sequences {
        let mut scratch = board.copy();
        apply_sequence(&mut scratch, seq);
        let score = material_ratio(&scratch, side);
        trace!("candidate {seq:?} scores {score}");

        if score > best_score {
            best_score = score;
            best.clear();
            best.push(seq);
        } else if score == best_score {
            best.push(seq);
        }
    }

    let turn = if best.is_empty() {
        Vec::new()
    } else {
        own_moves(board, side, best[rng.usize(..best.len())])
    };
    debug!(
        "{side}: {} candidates, {} tied at {best_score}, playing {} move(s)",
        sequences.len(),
        best.len(),
        turn.len()
    );

    Prediction {
        turn,
        score: best_score,
        candidates: sequences.len(),
        tied: best.len(),
    }
}

/// Shorthand for [`predict_optimal`] returning only the turn.
pub fn predict_turn(
    board: &Board,
    side: Side,
    config: &SearchConfig,
    rng: &mut fastrand::Rng,
) -> MoveSequence {
    predict_optimal(board, side, config, rng).turn
}

/// Leading moves of `seq` made by `side`, replayed from `board`.
fn own_moves(board: &Board, side: Side, seq: &[Move]) -> MoveSequence {
    let mut scratch = board.copy();
    let mut turn = Vec::new();
    for mv in seq {
        if mover(&scratch, mv) != side {
            break;
        }
        apply_move(&mut scratch, mv);
        turn.push(*mv);
    }
    turn
}
