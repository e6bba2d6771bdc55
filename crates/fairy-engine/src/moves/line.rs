//! Straight and diagonal line tracing for sliding pieces.

use fairy_core::{Color, Square};

use crate::Board;

/// A unit step along a rank, file or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub d_row: i8,
    pub d_col: i8,
}

impl Step {
    /// Returns the unit step leading from `from` to `to`, if the two squares
    /// are distinct and share a rank, file or diagonal.
    ///
    /// Works for any coordinates, including ones far off the board.
    pub fn between(from: Square, to: Square) -> Option<Step> {
        let d_row = i16::from(to.row()) - i16::from(from.row());
        let d_col = i16::from(to.col()) - i16::from(from.col());

        if d_row == 0 && d_col == 0 {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return None;
        }

        Some(Step {
            d_row: d_row.signum() as i8,
            d_col: d_col.signum() as i8,
        })
    }

    /// Returns true for rank and file steps.
    #[inline]
    pub const fn is_straight(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    /// Returns true for diagonal steps.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }

    /// Returns true if the step advances toward the opponent of `color`.
    #[inline]
    pub const fn is_forward(self, color: Color) -> bool {
        self.d_row == color.forward()
    }

    /// Returns true if the step retreats toward `color`'s own back rank.
    #[inline]
    pub const fn is_backward(self, color: Color) -> bool {
        self.d_row == -color.forward()
    }
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `to` must be reachable from `from` by repeating `step`.
pub fn path_is_clear(board: &Board, from: Square, to: Square, step: Step) -> bool {
    let mut current = from.offset(step.d_row, step.d_col);
    while current != to {
        if !current.is_in_bounds() || board.is_occupied(current) {
            return false;
        }
        current = current.offset(step.d_row, step.d_col);
    }
    true
}
