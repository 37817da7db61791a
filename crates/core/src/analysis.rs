//! Analysis module - board danger level and mobility metrics
//!
//! The danger level is a continuous 0.0-1.0 signal built from three weighted
//! components and raised to the power 1.5. The exponent keeps lightly-loaded
//! boards registering near zero so the generator's rescue behavior only kicks
//! in once a board is strongly saturated.
//!
//! Mobility is sampled, not exhaustive: legal moves are summed over a small
//! fixed subset of representative piece kinds.

use crate::board::Board;
use crate::catalog::Piece;
use gridlock_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Representative piece kinds sampled for the legal-move count
pub const SAMPLE_PIECES: [PieceKind; 5] = [
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::T,
    PieceKind::Square2,
];

/// A row or column counts as near-complete when its empty-cell count is in
/// `[1, NEAR_COMPLETE_MAX_EMPTY]`
pub const NEAR_COMPLETE_MAX_EMPTY: usize = 3;

/// Legal-move count at or below this saturates the mobility danger at 1.0
const MOVES_FLOOR: usize = 30;

/// Legal-move count normalization ceiling
const MOVES_CEILING: f64 = 250.0;

const OCCUPANCY_WEIGHT: f64 = 0.50;
const MOVES_WEIGHT: f64 = 0.40;
const FRAGMENTATION_WEIGHT: f64 = 0.10;

/// Fragmentation danger contribution when many lines are near-complete
const FRAGMENTATION_DANGER: f64 = 0.3;

/// Near-complete line count above which fragmentation danger applies
const FRAGMENTATION_THRESHOLD: usize = 6;

const DANGER_EXPONENT: f64 = 1.5;

/// Derived, ephemeral board metrics; recomputed on every generation call
#[derive(Debug, Clone, PartialEq)]
pub struct BoardAnalysis {
    /// Continuous danger signal in [0, 1]
    pub danger_level: f64,
    /// Count of empty cells
    pub empty_cells: usize,
    /// Valid positions summed over [`SAMPLE_PIECES`]
    pub legal_moves: usize,
    /// Rows with 1..=3 empty cells
    pub near_complete_rows: Vec<usize>,
    /// Columns with 1..=3 empty cells
    pub near_complete_cols: Vec<usize>,
}

/// Rows whose empty-cell count is in `[1, max_empty]`
pub fn near_complete_rows(board: &Board, max_empty: usize) -> Vec<usize> {
    (0..BOARD_HEIGHT as usize)
        .filter(|&row| (1..=max_empty).contains(&board.row_empty_count(row)))
        .collect()
}

/// Columns whose empty-cell count is in `[1, max_empty]`
pub fn near_complete_cols(board: &Board, max_empty: usize) -> Vec<usize> {
    (0..BOARD_WIDTH as usize)
        .filter(|&col| (1..=max_empty).contains(&board.col_empty_count(col)))
        .collect()
}

/// Compute the full analysis with the default near-complete threshold
pub fn analyze(board: &Board) -> BoardAnalysis {
    analyze_with_threshold(board, NEAR_COMPLETE_MAX_EMPTY)
}

/// Compute the full analysis, treating lines with up to `max_empty` empty
/// cells as near-complete
pub fn analyze_with_threshold(board: &Board, max_empty: usize) -> BoardAnalysis {
    let empty_cells = board.empty_cells();

    let legal_moves: usize = SAMPLE_PIECES
        .iter()
        .map(|&kind| board.valid_positions(&Piece::new(kind)).len())
        .sum();

    let near_complete_rows = near_complete_rows(board, max_empty);
    let near_complete_cols = near_complete_cols(board, max_empty);

    let total_cells = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);
    let occupancy_danger = 1.0 - empty_cells as f64 / total_cells as f64;

    let moves_danger = if legal_moves <= MOVES_FLOOR {
        1.0
    } else {
        1.0 - (legal_moves as f64 / MOVES_CEILING).min(1.0)
    };

    let fragmentation_danger =
        if near_complete_rows.len() + near_complete_cols.len() > FRAGMENTATION_THRESHOLD {
            FRAGMENTATION_DANGER
        } else {
            0.0
        };

    let blended = OCCUPANCY_WEIGHT * occupancy_danger
        + MOVES_WEIGHT * moves_danger
        + FRAGMENTATION_WEIGHT * fragmentation_danger;
    let danger_level = blended.powf(DANGER_EXPONENT).clamp(0.0, 1.0);

    BoardAnalysis {
        danger_level,
        empty_cells,
        legal_moves,
        near_complete_rows,
        near_complete_cols,
    }
}
