//! Rules engine for Falcon & Hunter chess.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of pieces
//! - [`moves`] - per-piece move validation and application
//! - [`fairy`] - the falcon and hunter entry protocol
//! - [`Session`] - a complete game: turn order, graveyards, fairy
//!   availability and the king-capture win condition
//! - [`Rejection`] - why an action was refused
//!
//! There is no check or checkmate: a game ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use fairy_core::{FairyKind, Square};
//! use fairy_engine::{GameState, Rejection, Session};
//!
//! let mut session = Session::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! session.submit_move(e2, e4).unwrap();
//!
//! // Black has lost nothing, so no fairy may enter yet.
//! let b7 = Square::from_algebraic("b7").unwrap();
//! assert_eq!(
//!     session.submit_fairy_entry(FairyKind::Falcon, b7),
//!     Err(Rejection::InsufficientLosses)
//! );
//! assert_eq!(session.state(), GameState::InProgress);
//! ```

mod board;
pub mod fairy;
mod game;
pub mod moves;
mod rejection;
mod snapshot;

pub use board::Board;
pub use fairy::FairyAvailability;
pub use game::{Action, GameState, Session};
pub use moves::{check_move, validate_and_apply, MoveOutcome};
pub use rejection::Rejection;
pub use snapshot::{SideSnapshot, Snapshot};
