//! Weights module - danger-interpolated piece selection weights
//!
//! Each piece kind inherits the weight of its size category. Two hand-tuned
//! profiles exist per category: the weights used on a safe board and the
//! weights used on a fully dangerous board. The effective weight is a linear
//! interpolation between the two, driven by the board's danger level. This is
//! the lever that shifts the random draw toward small pieces as a board fills.

use gridlock_types::{PieceKind, SizeCategory, PIECE_KIND_COUNT};

/// Per-category weights on a safe board, indexed by [`SizeCategory::index`]
pub const SAFE_WEIGHTS: [f64; 5] = [5.0, 9.0, 10.0, 7.0, 3.0];

/// Per-category weights on a fully dangerous board
pub const DANGER_WEIGHTS: [f64; 5] = [18.0, 14.0, 6.0, 1.5, 0.25];

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Weight for one category at the given danger level
pub fn category_weight(category: SizeCategory, danger_level: f64) -> f64 {
    let t = danger_level.clamp(0.0, 1.0);
    let i = category.index();
    lerp(SAFE_WEIGHTS[i], DANGER_WEIGHTS[i], t)
}

/// Weight for one piece kind at the given danger level
pub fn weight(kind: PieceKind, danger_level: f64) -> f64 {
    category_weight(kind.category(), danger_level)
}

/// Full per-kind weight table in [`PieceKind::ALL`] enumeration order
pub fn all_weights(danger_level: f64) -> [f64; PIECE_KIND_COUNT] {
    let mut weights = [0.0; PIECE_KIND_COUNT];
    for (i, kind) in PieceKind::ALL.iter().enumerate() {
        weights[i] = weight(*kind, danger_level);
    }
    weights
}
