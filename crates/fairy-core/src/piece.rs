//! Piece representation and classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Color;

/// The eight kinds of pieces: the six classic ones plus the two fairy pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
    Falcon = 6,
    Hunter = 7,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Falcon,
        PieceKind::Hunter,
    ];

    /// Returns the index of this kind (0-7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the pieces whose loss unlocks fairy entry:
    /// queen, rook, bishop and knight.
    #[inline]
    pub const fn is_major(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Returns true for the falcon and the hunter.
    #[inline]
    pub const fn is_fairy(self) -> bool {
        matches!(self, PieceKind::Falcon | PieceKind::Hunter)
    }

    /// Returns the placement character for this kind with the given color.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Falcon => 'f',
            PieceKind::Hunter => 'h',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Falcon => "Falcon",
            PieceKind::Hunter => "Hunter",
        };
        write!(f, "{}", name)
    }
}

/// The two fairy pieces that may be entered from outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FairyKind {
    Falcon,
    Hunter,
}

impl FairyKind {
    /// Both fairy kinds.
    pub const ALL: [FairyKind; 2] = [FairyKind::Falcon, FairyKind::Hunter];

    /// Returns the index (0 for Falcon, 1 for Hunter).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            FairyKind::Falcon => 0,
            FairyKind::Hunter => 1,
        }
    }

    /// Returns the board piece kind for this fairy.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            FairyKind::Falcon => PieceKind::Falcon,
            FairyKind::Hunter => PieceKind::Hunter,
        }
    }
}

impl From<FairyKind> for PieceKind {
    fn from(fairy: FairyKind) -> Self {
        fairy.kind()
    }
}

impl fmt::Display for FairyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Error returned when a fairy kind name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fairy piece: '{0}'")]
pub struct UnknownFairy(pub String);

impl FromStr for FairyKind {
    type Err = UnknownFairy;

    /// Accepts `falcon`/`hunter` in any case, or the single letters `f`/`h`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "falcon" | "f" => Ok(FairyKind::Falcon),
            "hunter" | "h" => Ok(FairyKind::Hunter),
            _ => Err(UnknownFairy(s.to_string())),
        }
    }
}

/// A piece on the board: a kind together with the color that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns true if this piece counts toward its owner's graveyard.
    #[inline]
    pub const fn is_major(self) -> bool {
        self.kind.is_major()
    }

    /// Returns true if this piece is a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns the placement character (uppercase for White).
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }

    /// Parses a placement character into a piece.
    pub const fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            'f' => PieceKind::Falcon,
            'h' => PieceKind::Hunter,
            _ => return None,
        };
        Some(Piece { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_set() {
        let majors: Vec<PieceKind> = PieceKind::ALL
            .into_iter()
            .filter(|k| k.is_major())
            .collect();
        assert_eq!(
            majors,
            vec![
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen
            ]
        );
    }

    #[test]
    fn kings_pawns_and_fairies_are_not_major() {
        assert!(!PieceKind::King.is_major());
        assert!(!PieceKind::Pawn.is_major());
        assert!(!PieceKind::Falcon.is_major());
        assert!(!PieceKind::Hunter.is_major());
        assert!(PieceKind::Falcon.is_fairy());
        assert!(PieceKind::Hunter.is_fairy());
        assert!(!PieceKind::Queen.is_fairy());
    }

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).to_char(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).to_char(), 'p');
        assert_eq!(Piece::new(PieceKind::Falcon, Color::White).to_char(), 'F');
        assert_eq!(Piece::new(PieceKind::Hunter, Color::Black).to_char(), 'h');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(
            Piece::from_char('K'),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            Piece::from_char('f'),
            Some(Piece::new(PieceKind::Falcon, Color::Black))
        );
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn fairy_kind_conversion() {
        assert_eq!(PieceKind::from(FairyKind::Falcon), PieceKind::Falcon);
        assert_eq!(FairyKind::Hunter.kind(), PieceKind::Hunter);
        assert_eq!(FairyKind::Falcon.index(), 0);
        assert_eq!(FairyKind::Hunter.index(), 1);
    }

    #[test]
    fn fairy_kind_from_str() {
        assert_eq!("falcon".parse::<FairyKind>(), Ok(FairyKind::Falcon));
        assert_eq!("HUNTER".parse::<FairyKind>(), Ok(FairyKind::Hunter));
        assert_eq!("f".parse::<FairyKind>(), Ok(FairyKind::Falcon));
        assert_eq!(
            "dragon".parse::<FairyKind>(),
            Err(UnknownFairy("dragon".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Piece::new(PieceKind::Queen, Color::Black).to_string(),
            "Black Queen"
        );
        assert_eq!(FairyKind::Falcon.to_string(), "Falcon");
    }
}
