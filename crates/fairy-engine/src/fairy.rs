//! Fairy piece entry.
//!
//! A side may bring its falcon and hunter onto the board from outside, one
//! per turn, once it has lost enough major pieces: the first fairy needs one
//! loss, the second needs two. Each fairy enters at most once per game, on
//! an empty square of the entering side's two home ranks.

use fairy_core::{Color, FairyKind, Piece, Square};
use serde::{Deserialize, Serialize};

use crate::{Board, Rejection};

/// The fairy kinds a side has not yet brought into play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FairyAvailability(u8);

impl FairyAvailability {
    pub const NONE: FairyAvailability = FairyAvailability(0);
    const FALCON: u8 = 0b01;
    const HUNTER: u8 = 0b10;
    pub const ALL: FairyAvailability = FairyAvailability(0b11);

    #[inline]
    const fn flag(kind: FairyKind) -> u8 {
        match kind {
            FairyKind::Falcon => Self::FALCON,
            FairyKind::Hunter => Self::HUNTER,
        }
    }

    /// Returns true if `kind` can still enter.
    #[inline]
    pub const fn contains(self, kind: FairyKind) -> bool {
        (self.0 & Self::flag(kind)) != 0
    }

    /// Marks `kind` as entered. It never becomes available again.
    #[inline]
    pub fn remove(&mut self, kind: FairyKind) {
        self.0 &= !Self::flag(kind);
    }

    /// Returns the number of kinds still available.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true once both fairies have entered.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns how many fairies have already entered.
    #[inline]
    pub const fn introduced(self) -> usize {
        Self::ALL.len() - self.len()
    }

    /// Iterates over the kinds still available, falcon first.
    pub fn iter(self) -> impl Iterator<Item = FairyKind> {
        FairyKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

impl Default for FairyAvailability {
    fn default() -> Self {
        Self::ALL
    }
}

/// Checks whether `side` may enter `kind` on `target`.
///
/// `losses` is the number of major pieces `side` has lost so far.
pub fn check_entry(
    board: &Board,
    side: Color,
    losses: usize,
    available: FairyAvailability,
    kind: FairyKind,
    target: Square,
) -> Result<Piece, Rejection> {
    if !board.is_in_bounds(target) {
        return Err(Rejection::OutOfBounds);
    }
    if !available.contains(kind) {
        return Err(Rejection::AlreadyIntroduced);
    }
    if losses < available.introduced() + 1 {
        return Err(Rejection::InsufficientLosses);
    }
    if !side.is_home_rank(target.row()) {
        return Err(Rejection::NotHomeRank);
    }
    if board.is_occupied(target) {
        return Err(Rejection::SquareOccupied);
    }
    Ok(Piece::new(kind.kind(), side))
}

/// Validates the entry and, if allowed, places the fairy and removes it
/// from `available`.
///
/// On rejection neither the board nor `available` is touched.
pub fn introduce(
    board: &mut Board,
    side: Color,
    losses: usize,
    available: &mut FairyAvailability,
    kind: FairyKind,
    target: Square,
) -> Result<(), Rejection> {
    let piece = check_entry(board, side, losses, *available, kind, target)?;
    board.place(target, piece)?;
    available.remove(kind);
    Ok(())
}
