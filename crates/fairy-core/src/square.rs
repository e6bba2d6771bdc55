//! Board square representation and algebraic notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the square-notation codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{0}': expected a file letter and a rank digit")]
    InvalidLength(String),

    #[error("invalid file '{0}': expected 'a'-'h'")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected '1'-'8'")]
    InvalidRank(char),
}

/// A square on the board as a (row, column) pair.
///
/// Row 0 is Black's back rank and row 7 is White's; column 0 is the a-file.
/// The coordinates are not range-checked on construction so that callers
/// can submit arbitrary coordinates and receive a rejection rather than a
/// panic. Use [`Square::is_in_bounds`] to test validity. Squares produced
/// by [`Square::from_algebraic`] are always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Returns the row (0 = Black's back rank).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Returns the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both coordinates lie in 0-7.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Returns the 0-63 index of an in-bounds square, row-major from a8.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_in_bounds() {
            Some(self.row as usize * 8 + self.col as usize)
        } else {
            None
        }
    }

    /// Returns the square shifted by the given deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Parses a square from algebraic notation (e.g., "e2" is row 6, column 4).
    pub fn from_algebraic(s: &str) -> Result<Self, NotationError> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(NotationError::InvalidLength(s.to_string())),
        };

        let file_lower = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_lower) {
            return Err(NotationError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(NotationError::InvalidRank(rank));
        }

        let col = (file_lower as u8 - b'a') as i8;
        let row = 8 - (rank as u8 - b'0') as i8;
        Ok(Square::new(row, col))
    }

    /// Returns the algebraic notation for an in-bounds square.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_in_bounds() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'0' + (8 - self.row) as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
