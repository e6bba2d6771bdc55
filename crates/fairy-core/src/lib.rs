//! Core types for Falcon & Hunter chess.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`PieceKind`], [`FairyKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates, with the algebraic square codec
//! - [`Placement`] for the FEN-style board placement codec

mod color;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use piece::{FairyKind, Piece, PieceKind, UnknownFairy};
pub use placement::{Placement, PlacementError, Squares};
pub use square::{NotationError, Square};
