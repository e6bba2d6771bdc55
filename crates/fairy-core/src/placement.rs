//! Board placement notation.
//!
//! A placement string is the piece-placement field of FEN extended with
//! `f`/`F` for the falcon and `h`/`H` for the hunter. Ranks are listed from
//! row 0 (rank 8) down to row 7 (rank 1), separated by `/`, with digits for
//! runs of empty squares.

use thiserror::Error;

use crate::{Piece, Square};

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: usize },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankWidth { rank: usize, squares: usize },
}

/// Contents of all 64 squares, indexed by [`Square::index`].
pub type Squares = [Option<Piece>; 64];

/// Placement string codec.
pub struct Placement;

impl Placement {
    /// The standard starting placement.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a placement string into square contents.
    pub fn parse(placement: &str) -> Result<Squares, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut squares: Squares = [None; 64];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row;
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        squares[row * 8 + col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch, rank });
                }
            }
            if col != 8 {
                return Err(PlacementError::InvalidRankWidth { rank, squares: col });
            }
        }

        Ok(squares)
    }

    /// Formats square contents as a placement string.
    pub fn format(squares: &Squares) -> String {
        let mut out = String::new();

        for row in 0..8i8 {
            let mut empty_count = 0;
            for col in 0..8i8 {
                let occupant = Square::new(row, col)
                    .index()
                    .and_then(|index| squares[index]);
                match occupant {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out
    }
}
