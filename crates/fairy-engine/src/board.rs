//! The 8×8 board.

use fairy_core::{Color, Piece, PieceKind, Placement, PlacementError, Square, Squares};

use crate::Rejection;

/// A fixed 8×8 grid of optional pieces.
///
/// The board knows nothing about legality beyond bounds; every rule lives
/// in [`moves`](crate::moves) and [`fairy`](crate::fairy).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Squares,
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            for color in Color::ALL {
                board.squares[square_index(color.back_rank(), col)] = Some(Piece::new(kind, color));
                board.squares[square_index(color.pawn_rank(), col)] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from a placement string.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            squares: Placement::parse(placement)?,
        })
    }

    /// Converts the board to a placement string.
    pub fn to_placement(&self) -> String {
        Placement::format(&self.squares)
    }

    /// Returns true if the square lies on the board.
    #[inline]
    pub fn is_in_bounds(&self, sq: Square) -> bool {
        sq.is_in_bounds()
    }

    /// Returns the piece on the square, or `None` if it is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|index| self.squares[index])
    }

    /// Returns true if an in-bounds square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Puts a piece on the square, returning whatever stood there before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<Option<Piece>, Rejection> {
        let index = sq.index().ok_or(Rejection::OutOfBounds)?;
        Ok(self.squares[index].replace(piece))
    }

    /// Empties the square.
    pub fn clear(&mut self, sq: Square) -> Result<(), Rejection> {
        self.take(sq).map(|_| ())
    }

    /// Empties the square, returning whatever stood there before.
    pub fn take(&mut self, sq: Square) -> Result<Option<Piece>, Rejection> {
        let index = sq.index().ok_or(Rejection::OutOfBounds)?;
        Ok(self.squares[index].take())
    }

    /// Iterates over every occupied square in row-major order from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(index, occupant)| {
            occupant.map(|piece| (Square::new((index / 8) as i8, (index % 8) as i8), piece))
        })
    }

    /// Finds the square holding the given color's king, if it is still on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is_king() && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Back-rank order from the a-file: queen on d, king on e.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
fn square_index(row: i8, col: i8) -> usize {
    row as usize * 8 + col as usize
}
