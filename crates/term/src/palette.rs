//! Piece kind to display colour.
//!
//! Kept outside the core so the board model carries kinds, not colours.

use crossterm::style::Color;

use crate::types::PieceKind;

/// Terminal colour for a piece kind
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Red,
        PieceKind::J => Color::Green,
        PieceKind::L => Color::Yellow,
        PieceKind::O => Color::Blue,
        PieceKind::S => Color::Magenta,
        PieceKind::T => Color::Cyan,
        PieceKind::Z => Color::White,
    }
}
