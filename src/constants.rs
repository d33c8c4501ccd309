//! Constants for board dimensions, search parameters, and move geometry.
//!
//! Coordinates are `(x, y)` with `y = 0` on the top rank (Black's home rank)
//! and `y = height - 1` on the bottom rank (White's home rank).

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board width.
pub const X_SIZE: usize = 8;

/// Default board height.
pub const Y_SIZE: usize = 8;

/// Number of ranks filled with regular pieces for each side at game start.
pub const START_ROWS: usize = 2;

// =============================================================================
// Search Parameters
// =============================================================================

/// Number of completed turns the search looks ahead.
pub const MAX_PREDICTION_DEPTH: usize = 3;

// =============================================================================
// Material Weights
// =============================================================================

/// Weight of a regular piece in the material score.
pub const REGULAR_WEIGHT: u32 = 1;

/// Weight of a queen. Must stay strictly above `REGULAR_WEIGHT`.
pub const QUEEN_WEIGHT: u32 = 3;

// =============================================================================
// Direction Offsets
// =============================================================================

/// The four diagonal directions as `(dx, dy)`.
/// Order: NW, NE, SW, SE. The first two point toward `y = 0`.
pub const DIAGONALS: [(isize, isize); 4] = [
    (-1, -1), // NW
    (1, -1),  // NE
    (-1, 1),  // SW
    (1, 1),   // SE
];

/// Quiet-move directions for a white regular piece (toward `y = 0`).
pub const WHITE_FORWARD: &[(isize, isize)] = &[DIAGONALS[0], DIAGONALS[1]];

/// Quiet-move directions for a black regular piece (toward `y = height - 1`).
pub const BLACK_FORWARD: &[(isize, isize)] = &[DIAGONALS[2], DIAGONALS[3]];
