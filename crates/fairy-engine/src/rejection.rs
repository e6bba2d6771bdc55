//! Reasons an action can be refused.

use thiserror::Error;

/// Why a move or fairy entry was rejected.
///
/// Rejections are ordinary values: the session is left exactly as it was
/// and the caller is expected to ask for another action.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("square is off the board")]
    OutOfBounds,

    #[error("there is no piece on this square")]
    EmptySquare,

    #[error("this is not your piece")]
    NotYourPiece,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("you have to move your piece")]
    MustMove,

    #[error("you cannot capture your own piece")]
    OwnPieceAtDestination,

    #[error("there are pieces in the way")]
    PathBlocked,

    #[error("this piece cannot move that way")]
    IllegalGeometry,

    #[error("not enough major pieces lost to enter a fairy piece")]
    InsufficientLosses,

    #[error("this fairy piece has already entered the game")]
    AlreadyIntroduced,

    #[error("fairy pieces may only enter on your two home ranks")]
    NotHomeRank,

    #[error("the entry square is occupied")]
    SquareOccupied,

    #[error("the game has already ended")]
    GameAlreadyOver,
}
