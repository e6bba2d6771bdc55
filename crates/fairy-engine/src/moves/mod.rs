//! Move validation.
//!
//! [`check_move`] decides whether a piece may travel from one square to
//! another without touching the board; [`validate_and_apply`] performs the
//! same check and then moves the piece. Both run the shared preconditions
//! in a fixed order (bounds, ownership, zero-length move) before handing off
//! to the rule for the moving piece's kind.

pub mod line;
mod pieces;

use fairy_core::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

use crate::{Board, Rejection};

/// The record of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub piece: Piece,
    /// Where it came from.
    pub from: Square,
    /// Where it landed.
    pub to: Square,
    /// The opposing piece that stood on `to`, if any.
    pub captured: Option<Piece>,
}

impl MoveOutcome {
    /// Returns true if the move captured a king.
    #[inline]
    pub fn captured_king(&self) -> bool {
        self.captured.is_some_and(Piece::is_king)
    }
}

/// Checks whether `side` may move the piece on `from` to `to`.
///
/// Returns the outcome the move would have. The board is not modified.
pub fn check_move(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
) -> Result<MoveOutcome, Rejection> {
    if !board.is_in_bounds(from) || !board.is_in_bounds(to) {
        return Err(Rejection::OutOfBounds);
    }

    let piece = board.piece_at(from).ok_or(Rejection::EmptySquare)?;
    if piece.color != side {
        return Err(Rejection::NotYourPiece);
    }

    if from == to {
        return Err(Rejection::MustMove);
    }

    let rule: fn(&Board, Color, Square, Square) -> Result<(), Rejection> = match piece.kind {
        PieceKind::Pawn => pieces::pawn,
        PieceKind::Knight => pieces::knight,
        PieceKind::Bishop => pieces::bishop,
        PieceKind::Rook => pieces::rook,
        PieceKind::Queen => pieces::queen,
        PieceKind::King => pieces::king,
        PieceKind::Falcon => pieces::falcon,
        PieceKind::Hunter => pieces::hunter,
    };
    rule(board, side, from, to)?;

    Ok(MoveOutcome {
        piece,
        from,
        to,
        captured: board.piece_at(to),
    })
}

/// Validates the move and, if legal, carries it out on `board`.
///
/// On rejection the board is untouched.
pub fn validate_and_apply(
    board: &mut Board,
    side: Color,
    from: Square,
    to: Square,
) -> Result<MoveOutcome, Rejection> {
    let outcome = check_move(board, side, from, to)?;
    board.take(from)?;
    board.place(to, outcome.piece)?;
    Ok(outcome)
}
