//! Move values.

use std::fmt;

/// A single step of a turn: one piece moving from one cell to another.
///
/// A move does not know whether it captures; that follows from the geometry
/// and the board it is applied to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_x: usize,
    pub from_y: usize,
    pub to_x: usize,
    pub to_y: usize,
}

/// One full turn: a quiet move, or a chain of captures by the same piece.
pub type MoveSequence = Vec<Move>;

impl Move {
    pub const fn new(from_x: usize, from_y: usize, to_x: usize, to_y: usize) -> Self {
        Self {
            from_x,
            from_y,
            to_x,
            to_y,
        }
    }

    pub fn from(&self) -> (usize, usize) {
        (self.from_x, self.from_y)
    }

    pub fn to(&self) -> (usize, usize) {
        (self.to_x, self.to_y)
    }

    /// Unit step `(dx, dy)` from origin toward destination.
    pub fn direction(&self) -> (isize, isize) {
        (
            (self.to_x as isize - self.from_x as isize).signum(),
            (self.to_y as isize - self.from_y as isize).signum(),
        )
    }

    /// Number of cells travelled. Only meaningful for diagonal moves.
    pub fn distance(&self) -> usize {
        self.from_x.abs_diff(self.to_x)
    }

    pub fn is_diagonal(&self) -> bool {
        self.distance() > 0 && self.from_x.abs_diff(self.to_x) == self.from_y.abs_diff(self.to_y)
    }

    /// Whether `next` starts where this move ends.
    pub fn chains_into(&self, next: &Move) -> bool {
        self.to() == next.from()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from_x, self.from_y, self.to_x, self.to_y
        )
    }
}
