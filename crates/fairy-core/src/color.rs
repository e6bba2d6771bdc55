//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players.
///
/// White sits on rows 6 and 7 and moves toward row 0; Black sits on rows 0
/// and 1 and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward step (-1 for White, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the back rank row for this color (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the row this color's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        self.back_rank() + self.forward()
    }

    /// Returns true if `row` is one of this color's two home ranks.
    #[inline]
    pub const fn is_home_rank(self, row: i8) -> bool {
        row == self.back_rank() || row == self.pawn_rank()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
