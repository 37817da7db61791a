//! Solvability module - does-any-piece-fit checks over candidate sets
//!
//! Two strengths: `at_least_one_fits` (some piece has a valid position) and
//! `is_solvable` (every piece has a valid position). The generator only
//! guarantees the weaker property; the stronger one drives its optional
//! piece-replacement pass.

use crate::board::Board;
use crate::catalog::Piece;

/// Result of checking a candidate piece set against a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvabilityCheck {
    /// At least one piece in the set has a valid position
    pub at_least_one_fits: bool,
    /// Every piece in the set has a valid position
    pub is_solvable: bool,
}

/// Check both solvability strengths in one pass
pub fn check_solvability(board: &Board, pieces: &[Piece]) -> SolvabilityCheck {
    let mut any = false;
    let mut all = true;
    for piece in pieces {
        if board.can_place_piece_anywhere(piece) {
            any = true;
        } else {
            all = false;
        }
    }
    SolvabilityCheck {
        at_least_one_fits: any,
        is_solvable: all && !pieces.is_empty(),
    }
}

/// Short-circuiting existential check
pub fn at_least_one_fits(board: &Board, pieces: &[Piece]) -> bool {
    pieces.iter().any(|p| board.can_place_piece_anywhere(p))
}

/// Indices of the pieces that fit somewhere on the board
pub fn fitting_pieces(board: &Board, pieces: &[Piece]) -> Vec<usize> {
    pieces
        .iter()
        .enumerate()
        .filter(|(_, p)| board.can_place_piece_anywhere(p))
        .map(|(i, _)| i)
        .collect()
}
