//! Checkers-Rust: a checkers (draughts) engine.
//!
//! This crate keeps the board state, generates legal moves under the
//! forced-capture rule (multi-jump chains and flying queens included), and
//! predicts the automated opponent's turn with a bounded-depth search scored
//! by material ratio.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth, weights, directions
//! - [`board`] - Board grid, piece kinds and sides
//! - [`moves`] - Move values
//! - [`movegen`] - Required, optional and legal move generation
//! - [`apply`] - Move execution with promotion and capture removal
//! - [`search`] - Look-ahead search for the best turn
//! - [`game`] - Game state and turn validation
//! - [`notation`] - Square and move notation
//! - [`protocol`] - Text protocol front end
//!
//! ## Example
//!
//! ```
//! use checkers_rust::board::Side;
//! use checkers_rust::game::Game;
//!
//! let mut game = Game::with_seed(8, 8, 1);
//!
//! // White opens with one of its forward steps
//! let opening = game.legal_moves(Side::White);
//! game.apply_turn(Side::White, &opening[..1]);
//!
//! // The engine answers for Black
//! let reply = game.predict_turn(Side::Black);
//! game.apply_turn(Side::Black, &reply);
//! assert_eq!(game.turn(), Side::White);
//! ```

pub mod apply;
pub mod board;
pub mod constants;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod protocol;
pub mod search;
