//! Movement rules for each piece kind.
//!
//! Every function here assumes the shared preconditions already hold: both
//! squares are on the board, `from` holds a piece of `side`, and
//! `from != to`. Each returns `Ok(())` when the piece may make the move.

use fairy_core::{Color, Square};

use super::line::{path_is_clear, Step};
use crate::{Board, Rejection};

/// Pawns step one square forward, two from their starting row, and capture
/// one square diagonally forward.
pub(super) fn pawn(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    let forward = side.forward();
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    if d_col == 0 && d_row == forward {
        if board.is_occupied(to) {
            return Err(Rejection::PathBlocked);
        }
        return Ok(());
    }

    if d_col == 0 && d_row == 2 * forward && from.row() == side.pawn_rank() {
        let middle = from.offset(forward, 0);
        if board.is_occupied(middle) || board.is_occupied(to) {
            return Err(Rejection::PathBlocked);
        }
        return Ok(());
    }

    if d_col.abs() == 1 && d_row == forward {
        return match board.piece_at(to) {
            None => Err(Rejection::IllegalGeometry),
            Some(target) if target.color == side => Err(Rejection::OwnPieceAtDestination),
            Some(_) => Ok(()),
        };
    }

    Err(Rejection::IllegalGeometry)
}

pub(super) fn knight(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    if !matches!((d_row, d_col), (1, 2) | (2, 1)) {
        return Err(Rejection::IllegalGeometry);
    }
    landing(board, side, to)
}

pub(super) fn bishop(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    slide(board, side, from, to, |step| step.is_diagonal())
}

pub(super) fn rook(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    slide(board, side, from, to, |step| step.is_straight())
}

pub(super) fn queen(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    slide(board, side, from, to, |_| true)
}

/// One square in any direction. No castling.
pub(super) fn king(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    if d_row.max(d_col) != 1 {
        return Err(Rejection::IllegalGeometry);
    }
    landing(board, side, to)
}

/// Forward along a diagonal like a bishop, or straight back like a rook.
pub(super) fn falcon(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    slide(board, side, from, to, |step| {
        (step.is_diagonal() && step.is_forward(side))
            || (step.is_straight() && step.is_backward(side))
    })
}

/// Straight forward like a rook, or back along a diagonal like a bishop.
pub(super) fn hunter(board: &Board, side: Color, from: Square, to: Square) -> Result<(), Rejection> {
    slide(board, side, from, to, |step| {
        (step.is_straight() && step.is_forward(side))
            || (step.is_diagonal() && step.is_backward(side))
    })
}

/// Shared sliding rule: the line must match `allowed`, every square in
/// between must be empty, and the destination must not hold a friendly piece.
fn slide(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
    allowed: impl Fn(Step) -> bool,
) -> Result<(), Rejection> {
    let step = Step::between(from, to)
        .filter(|&step| allowed(step))
        .ok_or(Rejection::IllegalGeometry)?;
    if !path_is_clear(board, from, to, step) {
        return Err(Rejection::PathBlocked);
    }
    landing(board, side, to)
}

/// The destination must be empty or hold an opposing piece.
fn landing(board: &Board, side: Color, to: Square) -> Result<(), Rejection> {
    match board.piece_at(to) {
        Some(target) if target.color == side => Err(Rejection::OwnPieceAtDestination),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn pawn_single_and_double_steps() {
        let board = Board::standard();
        assert_eq!(pawn(&board, Color::White, sq("e2"), sq("e3")), Ok(()));
        assert_eq!(pawn(&board, Color::White, sq("e2"), sq("e4")), Ok(()));
        assert_eq!(pawn(&board, Color::Black, sq("d7"), sq("d5")), Ok(()));
        assert_eq!(
            pawn(&board, Color::White, sq("e2"), sq("e5")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn pawn_never_moves_backward() {
        let board = Board::from_placement("4k3/8/8/8/4P3/8/8/4K3").unwrap();
        assert_eq!(
            pawn(&board, Color::White, sq("e4"), sq("e3")),
            Err(Rejection::IllegalGeometry)
        );
        assert_eq!(
            pawn(&board, Color::White, sq("e4"), sq("f4")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn pawn_double_step_only_from_start() {
        let board = Board::from_placement("4k3/8/8/8/8/4P3/8/4K3").unwrap();
        assert_eq!(
            pawn(&board, Color::White, sq("e3"), sq("e5")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn pawn_blocked_straight() {
        let board = Board::from_placement("4k3/8/8/8/4p3/8/4P3/4K3").unwrap();
        assert_eq!(pawn(&board, Color::White, sq("e2"), sq("e3")), Ok(()));
        assert_eq!(
            pawn(&board, Color::White, sq("e2"), sq("e4")),
            Err(Rejection::PathBlocked)
        );

        let board = Board::from_placement("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        assert_eq!(
            pawn(&board, Color::White, sq("e2"), sq("e3")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            pawn(&board, Color::White, sq("e2"), sq("e4")),
            Err(Rejection::PathBlocked)
        );
    }

    #[test]
    fn black_pawn_blocked_straight() {
        let board = Board::from_placement("4k3/3p4/3N4/8/8/8/8/4K3").unwrap();
        assert_eq!(
            pawn(&board, Color::Black, sq("d7"), sq("d6")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            pawn(&board, Color::Black, sq("d7"), sq("d5")),
            Err(Rejection::PathBlocked)
        );

        let board = Board::from_placement("4k3/3p4/8/3N4/8/8/8/4K3").unwrap();
        assert_eq!(pawn(&board, Color::Black, sq("d7"), sq("d6")), Ok(()));
        assert_eq!(
            pawn(&board, Color::Black, sq("d7"), sq("d5")),
            Err(Rejection::PathBlocked)
        );
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board = Board::from_placement("4k3/8/8/3p1P2/4P3/8/8/4K3").unwrap();
        assert_eq!(pawn(&board, Color::White, sq("e4"), sq("d5")), Ok(()));
        assert_eq!(
            pawn(&board, Color::White, sq("e4"), sq("f5")),
            Err(Rejection::OwnPieceAtDestination)
        );
        assert_eq!(
            pawn(&board, Color::Black, sq("d5"), sq("e4")),
            Ok(())
        );
        assert_eq!(
            pawn(&board, Color::Black, sq("d5"), sq("c4")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn knight_jumps() {
        let board = Board::standard();
        assert_eq!(knight(&board, Color::White, sq("g1"), sq("f3")), Ok(()));
        assert_eq!(knight(&board, Color::White, sq("g1"), sq("h3")), Ok(()));
        assert_eq!(
            knight(&board, Color::White, sq("g1"), sq("e2")),
            Err(Rejection::OwnPieceAtDestination)
        );
        assert_eq!(
            knight(&board, Color::White, sq("g1"), sq("g3")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn bishop_slides_diagonally() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/2B1K3").unwrap();
        assert_eq!(bishop(&board, Color::White, sq("c1"), sq("h6")), Ok(()));
        assert_eq!(bishop(&board, Color::White, sq("c1"), sq("a3")), Ok(()));
        assert_eq!(
            bishop(&board, Color::White, sq("c1"), sq("c4")),
            Err(Rejection::IllegalGeometry)
        );

        let board = Board::standard();
        assert_eq!(
            bishop(&board, Color::White, sq("c1"), sq("e3")),
            Err(Rejection::PathBlocked)
        );
    }

    #[test]
    fn rook_blocked_regardless_of_destination() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/R1n1K3").unwrap();
        assert_eq!(
            rook(&board, Color::White, sq("a1"), sq("d1")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            rook(&board, Color::White, sq("a1"), sq("e1")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(rook(&board, Color::White, sq("a1"), sq("c1")), Ok(()));
        assert_eq!(rook(&board, Color::White, sq("a1"), sq("a8")), Ok(()));
        assert_eq!(
            rook(&board, Color::White, sq("a1"), sq("b2")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = Board::from_placement("4k3/8/8/8/3Q4/8/8/4K3").unwrap();
        assert_eq!(queen(&board, Color::White, sq("d4"), sq("d8")), Ok(()));
        assert_eq!(queen(&board, Color::White, sq("d4"), sq("a4")), Ok(()));
        assert_eq!(queen(&board, Color::White, sq("d4"), sq("g7")), Ok(()));
        assert_eq!(queen(&board, Color::White, sq("d4"), sq("a1")), Ok(()));
        assert_eq!(
            queen(&board, Color::White, sq("d4"), sq("e6")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn queen_blocked_on_straight_and_diagonal_lines() {
        let board = Board::from_placement("4k3/8/8/3p1p2/8/1p1Q4/8/4K3").unwrap();
        // file and rank
        assert_eq!(
            queen(&board, Color::White, sq("d3"), sq("d7")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            queen(&board, Color::White, sq("d3"), sq("a3")),
            Err(Rejection::PathBlocked)
        );
        // diagonal
        assert_eq!(
            queen(&board, Color::White, sq("d3"), sq("g6")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(queen(&board, Color::White, sq("d3"), sq("f5")), Ok(()));
        assert_eq!(queen(&board, Color::White, sq("d3"), sq("b3")), Ok(()));
    }

    #[test]
    fn king_steps_once() {
        let board = Board::from_placement("4k3/8/8/8/8/8/4P3/4K3").unwrap();
        assert_eq!(king(&board, Color::White, sq("e1"), sq("d2")), Ok(()));
        assert_eq!(king(&board, Color::White, sq("e1"), sq("f1")), Ok(()));
        assert_eq!(
            king(&board, Color::White, sq("e1"), sq("e2")),
            Err(Rejection::OwnPieceAtDestination)
        );
        assert_eq!(
            king(&board, Color::White, sq("e1"), sq("g1")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn white_falcon() {
        let board = Board::from_placement("4k3/8/8/8/3F4/8/8/4K3").unwrap();
        // forward diagonals
        assert_eq!(falcon(&board, Color::White, sq("d4"), sq("g7")), Ok(()));
        assert_eq!(falcon(&board, Color::White, sq("d4"), sq("a7")), Ok(()));
        // straight back
        assert_eq!(falcon(&board, Color::White, sq("d4"), sq("d1")), Ok(()));
        for illegal in ["d8", "a1", "f2", "h4", "a4", "e6"] {
            assert_eq!(
                falcon(&board, Color::White, sq("d4"), sq(illegal)),
                Err(Rejection::IllegalGeometry),
                "falcon d4-{}",
                illegal
            );
        }
    }

    #[test]
    fn black_falcon_mirrors_white() {
        let board = Board::from_placement("4k3/8/8/3f4/8/8/8/4K3").unwrap();
        assert_eq!(falcon(&board, Color::Black, sq("d5"), sq("g2")), Ok(()));
        assert_eq!(falcon(&board, Color::Black, sq("d5"), sq("d8")), Ok(()));
        assert_eq!(
            falcon(&board, Color::Black, sq("d5"), sq("d1")),
            Err(Rejection::IllegalGeometry)
        );
        assert_eq!(
            falcon(&board, Color::Black, sq("d5"), sq("b7")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn white_hunter() {
        let board = Board::from_placement("4k3/8/8/8/3H4/8/8/4K3").unwrap();
        // straight forward
        assert_eq!(hunter(&board, Color::White, sq("d4"), sq("d8")), Ok(()));
        // back diagonals
        assert_eq!(hunter(&board, Color::White, sq("d4"), sq("a1")), Ok(()));
        assert_eq!(hunter(&board, Color::White, sq("d4"), sq("g1")), Ok(()));
        for illegal in ["d1", "g7", "a7", "a4", "h4"] {
            assert_eq!(
                hunter(&board, Color::White, sq("d4"), sq(illegal)),
                Err(Rejection::IllegalGeometry),
                "hunter d4-{}",
                illegal
            );
        }
    }

    #[test]
    fn black_hunter_mirrors_white() {
        let board = Board::from_placement("4k3/8/8/3h4/8/8/8/4K3").unwrap();
        assert_eq!(hunter(&board, Color::Black, sq("d5"), sq("d1")), Ok(()));
        assert_eq!(hunter(&board, Color::Black, sq("d5"), sq("a8")), Ok(()));
        assert_eq!(
            hunter(&board, Color::Black, sq("d5"), sq("d8")),
            Err(Rejection::IllegalGeometry)
        );
        assert_eq!(
            hunter(&board, Color::Black, sq("d5"), sq("f3")),
            Err(Rejection::IllegalGeometry)
        );
    }

    #[test]
    fn hunter_blocked_on_both_lines() {
        let board = Board::from_placement("4k3/8/8/8/3p4/8/8/3H1K2").unwrap();
        assert_eq!(
            hunter(&board, Color::White, sq("d1"), sq("d6")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(hunter(&board, Color::White, sq("d1"), sq("d4")), Ok(()));

        let board = Board::from_placement("4k3/1p6/8/3h4/8/8/8/4K3").unwrap();
        assert_eq!(
            hunter(&board, Color::Black, sq("d5"), sq("a8")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            hunter(&board, Color::Black, sq("d5"), sq("b7")),
            Err(Rejection::OwnPieceAtDestination)
        );
        assert_eq!(hunter(&board, Color::Black, sq("d5"), sq("d1")), Ok(()));
    }

    #[test]
    fn fairy_paths_and_captures() {
        let board = Board::from_placement("4k3/8/5p2/8/3F4/3P4/8/4K3").unwrap();
        assert_eq!(falcon(&board, Color::White, sq("d4"), sq("f6")), Ok(()));
        assert_eq!(
            falcon(&board, Color::White, sq("d4"), sq("g7")),
            Err(Rejection::PathBlocked)
        );
        assert_eq!(
            falcon(&board, Color::White, sq("d4"), sq("d3")),
            Err(Rejection::OwnPieceAtDestination)
        );
        assert_eq!(
            falcon(&board, Color::White, sq("d4"), sq("d2")),
            Err(Rejection::PathBlocked)
        );
    }
}
