//! Text rendering of the board.

use fairy_core::{Color, Piece, PieceKind, Square};
use fairy_engine::Board;

use crate::config::Glyphs;

/// Renders `board` as text, Black's back rank (rank 8) on top.
///
/// Empty squares are drawn as `.`. With `show_coordinates`, rank labels run
/// down the left edge and file labels across the top.
pub fn render_board(board: &Board, glyphs: Glyphs, show_coordinates: bool) -> String {
    let mut out = String::new();

    if show_coordinates {
        out.push_str("  a b c d e f g h\n");
    }

    for row in 0..8i8 {
        if show_coordinates {
            out.push_str(&format!("{} ", 8 - row));
        }
        let cells: Vec<String> = (0..8i8)
            .map(|col| match board.piece_at(Square::new(row, col)) {
                Some(piece) => glyph(piece, glyphs).to_string(),
                None => ".".to_string(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    out
}

/// The character drawn for `piece`.
///
/// Unicode has no symbols for the fairy pieces, so they keep their
/// placement letters in both styles.
pub const fn glyph(piece: Piece, glyphs: Glyphs) -> char {
    if let Glyphs::Ascii = glyphs {
        return piece.to_char();
    }
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '\u{2654}',
        (Color::White, PieceKind::Queen) => '\u{2655}',
        (Color::White, PieceKind::Rook) => '\u{2656}',
        (Color::White, PieceKind::Bishop) => '\u{2657}',
        (Color::White, PieceKind::Knight) => '\u{2658}',
        (Color::White, PieceKind::Pawn) => '\u{2659}',
        (Color::Black, PieceKind::King) => '\u{265A}',
        (Color::Black, PieceKind::Queen) => '\u{265B}',
        (Color::Black, PieceKind::Rook) => '\u{265C}',
        (Color::Black, PieceKind::Bishop) => '\u{265D}',
        (Color::Black, PieceKind::Knight) => '\u{265E}',
        (Color::Black, PieceKind::Pawn) => '\u{265F}',
        (_, PieceKind::Falcon | PieceKind::Hunter) => piece.to_char(),
    }
}
