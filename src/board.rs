//! Board representation: piece kinds, sides, and the cell grid.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BLACK_FORWARD, QUEEN_WEIGHT, REGULAR_WEIGHT, START_ROWS, WHITE_FORWARD,
};
use crate::notation::{ParseError, file_char};

/// One of the two players, or `None` as a sentinel that never moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
    None,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
            Side::None => Side::None,
        }
    }

    /// Directions a regular piece of this side may take for a quiet move.
    pub fn forward(self) -> &'static [(isize, isize)] {
        match self {
            Side::White => WHITE_FORWARD,
            Side::Black => BLACK_FORWARD,
            Side::None => &[],
        }
    }

    pub fn regular(self) -> PieceKind {
        match self {
            Side::White => PieceKind::WhiteRegular,
            Side::Black => PieceKind::BlackRegular,
            Side::None => PieceKind::None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
            Side::None => write!(f, "none"),
        }
    }
}

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    None,
    WhiteRegular,
    WhiteQueen,
    BlackRegular,
    BlackQueen,
}

impl PieceKind {
    pub fn side(self) -> Side {
        match self {
            PieceKind::WhiteRegular | PieceKind::WhiteQueen => Side::White,
            PieceKind::BlackRegular | PieceKind::BlackQueen => Side::Black,
            PieceKind::None => Side::None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == PieceKind::None
    }

    pub fn is_queen(self) -> bool {
        matches!(self, PieceKind::WhiteQueen | PieceKind::BlackQueen)
    }

    /// The kind this piece becomes on reaching the far rank.
    /// Queens and empty cells are returned unchanged.
    pub fn promoted(self) -> PieceKind {
        match self {
            PieceKind::WhiteRegular => PieceKind::WhiteQueen,
            PieceKind::BlackRegular => PieceKind::BlackQueen,
            other => other,
        }
    }

    pub fn weight(self) -> u32 {
        match self {
            PieceKind::None => 0,
            PieceKind::WhiteRegular | PieceKind::BlackRegular => REGULAR_WEIGHT,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => QUEEN_WEIGHT,
        }
    }

    fn to_char(self) -> char {
        match self {
            PieceKind::None => '.',
            PieceKind::WhiteRegular => 'w',
            PieceKind::WhiteQueen => 'W',
            PieceKind::BlackRegular => 'b',
            PieceKind::BlackQueen => 'B',
        }
    }

    fn from_char(c: char) -> Option<PieceKind> {
        match c {
            '.' => Some(PieceKind::None),
            'w' => Some(PieceKind::WhiteRegular),
            'W' => Some(PieceKind::WhiteQueen),
            'b' => Some(PieceKind::BlackRegular),
            'B' => Some(PieceKind::BlackQueen),
            _ => None,
        }
    }
}

/// A rectangular checkers board.
///
/// Cells are stored row-major in a flat vector, so `Clone` is a deep,
/// independent copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<PieceKind>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            width,
            height,
            cells: vec![PieceKind::None; width * height],
        }
    }

    /// Create a board with the standard opening layout: regular pieces on the
    /// dark squares of the `START_ROWS` ranks nearest each side.
    pub fn starting(width: usize, height: usize) -> Self {
        assert!(
            height >= START_ROWS * 2,
            "board of height {height} cannot hold {START_ROWS} rows per side"
        );
        let mut board = Self::new(width, height);
        for y in 0..height {
            let side = if y < START_ROWS {
                Side::Black
            } else if y >= height - START_ROWS {
                Side::White
            } else {
                continue;
            };
            for x in 0..width {
                if is_dark(x, y) {
                    board.set_piece(x, y, side.regular());
                }
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn is_within(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The cell `steps` cells away from `(x, y)` along `(dx, dy)`, if on the board.
    pub fn offset(
        &self,
        x: usize,
        y: usize,
        (dx, dy): (isize, isize),
        steps: isize,
    ) -> Option<(usize, usize)> {
        let nx = x as isize + dx * steps;
        let ny = y as isize + dy * steps;
        if self.is_within(nx, ny) {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }

    /// Read a cell. Panics if `(x, y)` is off the board.
    pub fn piece_at(&self, x: usize, y: usize) -> PieceKind {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} board",
            self.width,
            self.height
        );
        self.cells[self.idx(x, y)]
    }

    /// Write a cell. Panics if `(x, y)` is off the board.
    pub fn set_piece(&mut self, x: usize, y: usize, kind: PieceKind) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} board",
            self.width,
            self.height
        );
        let i = self.idx(x, y);
        self.cells[i] = kind;
    }

    /// An independent copy of this board.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// Sum of piece weights owned by `side`.
    pub fn material_score(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .filter(|kind| kind.side() == side && side != Side::None)
            .map(|kind| kind.weight())
            .sum()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|kind| !kind.is_empty()).count()
    }

    /// Iterate over every occupied cell as `(x, y, kind)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, PieceKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| !kind.is_empty())
            .map(|(i, &kind)| (i % self.width, i / self.width, kind))
    }
}

/// Dark squares carry the pieces; `(0, 0)` is light.
pub fn is_dark(x: usize, y: usize) -> bool {
    (x + y) % 2 == 1
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            write!(f, "{:>2} ", self.height - y)?;
            for x in 0..self.width {
                write!(f, "{} ", self.piece_at(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, "{} ", file_char(x))?;
        }
        writeln!(f)
    }
}

/// Parse a board from rows of `.`, `w`, `W`, `b`, `B`.
///
/// The first row is `y = 0`. Whitespace inside a row is ignored and blank
/// lines are skipped, so the output of `Display` minus its coordinates parses.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<PieceKind>> = Vec::new();
        for line in s.lines() {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| PieceKind::from_char(c).ok_or(ParseError::BadPiece(c)))
                .collect::<Result<Vec<_>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(ParseError::RaggedRow {
                expected: width,
                found: bad.len(),
            });
        }

        Ok(Board {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
