//! Catalog module - static piece shape and color definitions
//!
//! Shapes are fixed occupancy patterns stored as cell offsets from the anchor
//! (top-left of the bounding box). There is no geometric rotation: a piece's
//! `rotation` index is a display variant that only selects the color for kinds
//! whose color alternates (currently `Rect2x3`).
//!
//! All lookups are total over the closed [`PieceKind`] enum - an unknown kind
//! is unrepresentable, so there is no error path.

use gridlock_types::{Color, PieceKind};

/// Offset of a single cell relative to the piece anchor, as (row, col)
pub type CellOffset = (i8, i8);

const DOT: [CellOffset; 1] = [(0, 0)];
const LINE2: [CellOffset; 2] = [(0, 0), (0, 1)];
const LINE3: [CellOffset; 3] = [(0, 0), (0, 1), (0, 2)];
const LINE4: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (0, 3)];
const LINE5: [CellOffset; 5] = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
const CORNER: [CellOffset; 3] = [(0, 0), (0, 1), (1, 0)];
const BIG_CORNER: [CellOffset; 5] = [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)];
const SQUARE2: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const SQUARE3: [CellOffset; 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
const TEE: [CellOffset; 4] = [(0, 1), (1, 0), (1, 1), (1, 2)];
const ESS: [CellOffset; 4] = [(0, 1), (0, 2), (1, 0), (1, 1)];
const ZED: [CellOffset; 4] = [(0, 0), (0, 1), (1, 1), (1, 2)];
const JAY: [CellOffset; 4] = [(0, 0), (1, 0), (1, 1), (1, 2)];
const ELL: [CellOffset; 4] = [(0, 2), (1, 0), (1, 1), (1, 2)];
const RECT2X3: [CellOffset; 6] = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];

/// Get the cell offsets for a piece kind
pub fn shape(kind: PieceKind) -> &'static [CellOffset] {
    match kind {
        PieceKind::Dot => &DOT,
        PieceKind::Line2 => &LINE2,
        PieceKind::Line3 => &LINE3,
        PieceKind::Line4 => &LINE4,
        PieceKind::Line5 => &LINE5,
        PieceKind::Corner => &CORNER,
        PieceKind::BigCorner => &BIG_CORNER,
        PieceKind::Square2 => &SQUARE2,
        PieceKind::Square3 => &SQUARE3,
        PieceKind::T => &TEE,
        PieceKind::S => &ESS,
        PieceKind::Z => &ZED,
        PieceKind::J => &JAY,
        PieceKind::L => &ELL,
        PieceKind::Rect2x3 => &RECT2X3,
    }
}

/// Number of cells a piece kind occupies
pub fn cell_count(kind: PieceKind) -> usize {
    shape(kind).len()
}

/// Display color for a piece kind at a given rotation variant
///
/// Rotation selects between two colors for `Rect2x3` (by parity) and is
/// ignored for every other kind.
pub fn color(kind: PieceKind, rotation: u8) -> Color {
    match kind {
        PieceKind::Dot => Color::Yellow,
        PieceKind::Line2 => Color::Cyan,
        PieceKind::Line3 => Color::Blue,
        PieceKind::Line4 => Color::Cyan,
        PieceKind::Line5 => Color::Blue,
        PieceKind::Corner => Color::Green,
        PieceKind::BigCorner => Color::Green,
        PieceKind::Square2 => Color::Yellow,
        PieceKind::Square3 => Color::Red,
        PieceKind::T => Color::Purple,
        PieceKind::S => Color::Green,
        PieceKind::Z => Color::Red,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Orange,
        PieceKind::Rect2x3 => {
            if rotation % 2 == 0 {
                Color::Orange
            } else {
                Color::Pink
            }
        }
    }
}

/// An immutable piece instance: a kind plus its display rotation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
}

impl Piece {
    /// Create a piece at the default rotation variant
    pub fn new(kind: PieceKind) -> Self {
        Self { kind, rotation: 0 }
    }

    /// Create a piece with an explicit rotation variant (0-3)
    pub fn with_rotation(kind: PieceKind, rotation: u8) -> Self {
        Self {
            kind,
            rotation: rotation % 4,
        }
    }

    /// Cell offsets for this piece
    pub fn shape(&self) -> &'static [CellOffset] {
        shape(self.kind)
    }

    /// Number of cells this piece occupies
    pub fn cell_count(&self) -> usize {
        cell_count(self.kind)
    }

    /// Display color for this piece
    pub fn color(&self) -> Color {
        color(self.kind, self.rotation)
    }
}
