//! Game state and the turn-level API used by front ends.
//!
//! A [`Game`] owns the authoritative board, whose turn it is, and the search
//! settings for the automated opponent. Human turns go through
//! [`Game::try_apply_turn`], which checks them against the rules; engine
//! turns come from [`Game::predict_turn`] and are committed with
//! [`Game::apply_turn`].

use std::fmt;

use log::info;

use crate::apply::apply_move;
use crate::board::{Board, Side};
use crate::constants::{X_SIZE, Y_SIZE};
use crate::movegen::{continuation_moves, legal_moves, turn_continues};
use crate::moves::{Move, MoveSequence};
use crate::search::{Prediction, SearchConfig, predict_optimal};

/// Why a submitted turn was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// It is the other side's turn
    WrongSide(Side),
    /// No moves were given
    EmptyTurn,
    /// Move is not among the legal moves at that point of the turn
    Illegal(Move),
    /// Move does not continue the capture chain of the same piece
    BrokenChain(Move),
    /// The piece still has a capture to make
    IncompleteChain,
    /// A side has no moves left
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongSide(side) => write!(f, "Illegal turn: {side} is to move"),
            MoveError::EmptyTurn => write!(f, "Illegal turn: no moves given"),
            MoveError::Illegal(mv) => write!(f, "Illegal move: {mv}"),
            MoveError::BrokenChain(mv) => {
                write!(f, "Illegal move: {mv} does not continue the capture")
            }
            MoveError::IncompleteChain => write!(f, "Illegal turn: capture must continue"),
            MoveError::GameOver => write!(f, "Game over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The authoritative board and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
}

impl GameState {
    /// Standard opening position; White moves first.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            board: Board::starting(width, height),
            turn: Side::White,
        }
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        legal_moves(&self.board, side)
    }

    /// The first side, White then Black, left without legal moves.
    pub fn is_game_over(&self) -> Option<Side> {
        [Side::White, Side::Black]
            .into_iter()
            .find(|&side| self.legal_moves(side).is_empty())
    }

    /// Commit a turn for `side` and pass the move to the opponent.
    ///
    /// Panics if a move is not legal where it is played; the sequence may end
    /// before a chain is exhausted, as an engine turn can.
    pub fn apply_turn(&mut self, side: Side, sequence: &[Move]) {
        let mut chain: Option<Vec<Move>> = None;
        for mv in sequence {
            let allowed = chain.take().unwrap_or_else(|| self.legal_moves(side));
            assert!(allowed.contains(mv), "{side} cannot play {mv}");

            // A quiet move ends the turn, so nothing may follow it.
            let captured = apply_move(&mut self.board, mv);
            chain = Some(if turn_continues(&self.board, side, mv, captured) {
                continuation_moves(&self.board, side, mv.to_x, mv.to_y)
            } else {
                Vec::new()
            });
        }
        self.turn = side.opposite();
    }

    /// Validate a complete turn for `side` and commit it.
    pub fn try_apply_turn(&mut self, side: Side, sequence: &[Move]) -> Result<(), MoveError> {
        if side != self.turn {
            return Err(MoveError::WrongSide(self.turn));
        }
        if self.is_game_over().is_some() {
            return Err(MoveError::GameOver);
        }
        if sequence.is_empty() {
            return Err(MoveError::EmptyTurn);
        }

        let mut scratch = self.board.copy();
        let mut chain: Option<Vec<Move>> = None;
        for (i, mv) in sequence.iter().enumerate() {
            match chain.take() {
                Some(allowed) if !allowed.contains(mv) => return Err(MoveError::BrokenChain(*mv)),
                Some(_) => {}
                None if i > 0 => return Err(MoveError::BrokenChain(*mv)),
                None if !legal_moves(&scratch, side).contains(mv) => {
                    return Err(MoveError::Illegal(*mv));
                }
                None => {}
            }

            let captured = apply_move(&mut scratch, mv);
            if turn_continues(&scratch, side, mv, captured) {
                chain = Some(continuation_moves(&scratch, side, mv.to_x, mv.to_y));
            }
        }
        if chain.is_some() {
            return Err(MoveError::IncompleteChain);
        }

        self.apply_turn(side, sequence);
        Ok(())
    }
}

/// A running game against the engine.
pub struct Game {
    pub state: GameState,
    pub config: SearchConfig,
    rng: fastrand::Rng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(X_SIZE, Y_SIZE)
    }
}

impl Game {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(width, height, SearchConfig::default(), fastrand::Rng::new())
    }

    /// A game whose tie-breaks are reproducible.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_config(
            width,
            height,
            SearchConfig::default(),
            fastrand::Rng::with_seed(seed),
        )
    }

    pub fn with_config(
        width: usize,
        height: usize,
        config: SearchConfig,
        rng: fastrand::Rng,
    ) -> Self {
        Self {
            state: GameState::new(width, height),
            config,
            rng,
        }
    }

    /// Start over on a board of the same size.
    pub fn reset(&mut self) {
        self.state = GameState::new(self.state.board.width(), self.state.board.height());
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Side {
        self.state.turn
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        self.state.legal_moves(side)
    }

    pub fn is_game_over(&self) -> Option<Side> {
        self.state.is_game_over()
    }

    pub fn apply_turn(&mut self, side: Side, sequence: &[Move]) {
        self.state.apply_turn(side, sequence);
    }

    pub fn try_apply_turn(&mut self, side: Side, sequence: &[Move]) -> Result<(), MoveError> {
        self.state.try_apply_turn(side, sequence)?;
        info!("{side} played {} move(s)", sequence.len());
        Ok(())
    }

    /// Search for `side`'s best turn without playing it.
    pub fn predict(&mut self, side: Side) -> Prediction {
        predict_optimal(&self.state.board, side, &self.config, &mut self.rng)
    }

    pub fn predict_turn(&mut self, side: Side) -> MoveSequence {
        self.predict(side).turn
    }

    /// Let the engine play the side to move. Returns the turn played, which
    /// is empty when that side has no moves.
    pub fn play_engine_turn(&mut self) -> MoveSequence {
        let side = self.state.turn;
        let turn = self.predict_turn(side);
        if !turn.is_empty() {
            self.apply_turn(side, &turn);
            info!("engine played {} move(s) for {side}", turn.len());
        }
        if let Some(loser) = self.is_game_over() {
            info!("game over: {loser} has no moves");
        }
        turn
    }
}

/// Standard opening position.
///
/// Square names use one file letter per column, so boards wider than 26
/// columns cannot be written or read in notation.
pub fn new_game(width: usize, height: usize) -> GameState {
    GameState::new(width, height)
}
