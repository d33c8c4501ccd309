//! Text notation for squares, moves and turns.
//!
//! A square is written `<file><rank>`, e.g. `c3`: the file letter counts
//! columns from `a` at `x = 0`, and rank 1 is the bottom row (`y = height - 1`),
//! so White starts on the low ranks as on a printed diagram.
//!
//! A move is two squares joined by `-` or `x` (`c3-d4`, `c3xe5`); a turn is
//! a chain of squares (`c3-e5-c7`) expanding to one move per hop.

use std::fmt;

use crate::moves::{Move, MoveSequence};

/// Error from parsing notation or a textual board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Square text is not `<letter><number>`
    BadSquare(String),
    /// Square lies outside the board
    OffBoard(String),
    /// Move or turn needs at least two squares
    TooShort(String),
    /// Unknown character in a board diagram
    BadPiece(char),
    /// Board diagram rows differ in length
    RaggedRow { expected: usize, found: usize },
    /// Board diagram has no cells
    EmptyBoard,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadSquare(s) => write!(f, "invalid square: {s}"),
            ParseError::OffBoard(s) => write!(f, "square off the board: {s}"),
            ParseError::TooShort(s) => write!(f, "need at least two squares: {s}"),
            ParseError::BadPiece(c) => write!(f, "invalid piece character: {c:?}"),
            ParseError::RaggedRow { expected, found } => {
                write!(f, "row has {found} cells, expected {expected}")
            }
            ParseError::EmptyBoard => write!(f, "board has no cells"),
        }
    }
}

impl std::error::Error for ParseError {}

/// File letter for column `x`.
///
/// Panics if `x` is past column `z`.
pub fn file_char(x: usize) -> char {
    assert!(x < 26, "column {x} has no file letter");
    (b'a' + x as u8) as char
}

/// Convert a cell to its square name (e.g. `(2, 5)` on 8 ranks is `"c3"`).
pub fn str_square(x: usize, y: usize, height: usize) -> String {
    format!("{}{}", file_char(x), height - y)
}

/// Parse a square name into `(x, y)` on a `width` x `height` board.
pub fn parse_square(s: &str, width: usize, height: usize) -> Result<(usize, usize), ParseError> {
    let s = s.trim();
    let mut chars = s.chars();
    let file = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| ParseError::BadSquare(s.to_string()))?;
    let rank: usize = chars
        .as_str()
        .parse()
        .map_err(|_| ParseError::BadSquare(s.to_string()))?;

    let x = (file.to_ascii_lowercase() as u8 - b'a') as usize;
    if x >= width || rank == 0 || rank > height {
        return Err(ParseError::OffBoard(s.to_string()));
    }
    Ok((x, height - rank))
}

pub fn str_move(mv: &Move, height: usize) -> String {
    format!(
        "{}-{}",
        str_square(mv.from_x, mv.from_y, height),
        str_square(mv.to_x, mv.to_y, height)
    )
}

/// Parse a turn such as `c3-e5-c7` into one move per hop.
pub fn parse_turn(s: &str, width: usize, height: usize) -> Result<MoveSequence, ParseError> {
    let squares = s
        .split(['-', 'x', ':'])
        .map(|part| parse_square(part, width, height))
        .collect::<Result<Vec<_>, _>>()?;
    if squares.len() < 2 {
        return Err(ParseError::TooShort(s.to_string()));
    }
    Ok(squares
        .windows(2)
        .map(|pair| Move::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1))
        .collect())
}

/// Parse exactly one move.
pub fn parse_move(s: &str, width: usize, height: usize) -> Result<Move, ParseError> {
    let turn = parse_turn(s, width, height)?;
    match turn.as_slice() {
        [mv] => Ok(*mv),
        _ => Err(ParseError::BadSquare(s.to_string())),
    }
}

/// Write a turn as a square chain when its moves connect, otherwise as
/// space-separated moves.
pub fn str_turn(turn: &[Move], height: usize) -> String {
    let connected = turn.windows(2).all(|pair| pair[0].chains_into(&pair[1]));
    match turn.first() {
        Some(first) if connected => {
            let mut out = str_square(first.from_x, first.from_y, height);
            for mv in turn {
                out.push('-');
                out.push_str(&str_square(mv.to_x, mv.to_y, height));
            }
            out
        }
        _ => turn
            .iter()
            .map(|mv| str_move(mv, height))
            .collect::<Vec<_>>()
            .join(" "),
    }
}
