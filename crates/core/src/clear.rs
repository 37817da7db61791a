//! Clear module - simultaneous row and column clearing
//!
//! A row or column is complete when every cell in it is painted. All complete
//! rows and columns found in a single pass are cleared at once: detection runs
//! before any cell is emptied, so clearing a row never re-triggers a column in
//! the same pass. No gravity - cleared cells simply become empty in place.

use arrayvec::ArrayVec;

use crate::board::Board;
use gridlock_types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Result of a single clearing pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearResult {
    /// Indices of cleared rows, ascending
    pub rows: ArrayVec<usize, { BOARD_HEIGHT as usize }>,
    /// Indices of cleared columns, ascending
    pub cols: ArrayVec<usize, { BOARD_WIDTH as usize }>,
}

impl ClearResult {
    /// Total lines cleared; rows and columns count independently even when
    /// they intersect
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Detect and clear every complete row and column in one shot
pub fn clear_lines(board: &mut Board) -> ClearResult {
    let mut result = ClearResult::default();

    for row in 0..BOARD_HEIGHT as usize {
        if board.is_row_full(row) {
            result.rows.push(row);
        }
    }
    for col in 0..BOARD_WIDTH as usize {
        if board.is_col_full(col) {
            result.cols.push(col);
        }
    }

    for &row in &result.rows {
        board.clear_row(row);
    }
    for &col in &result.cols {
        board.clear_col(col);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_types::Color;

    fn fill_row(board: &mut Board, row: i8) {
        for col in 0..BOARD_WIDTH as i8 {
            board.set(row, col, Some(Color::Red));
        }
    }

    fn fill_col(board: &mut Board, col: i8) {
        for row in 0..BOARD_HEIGHT as i8 {
            board.set(row, col, Some(Color::Blue));
        }
    }

    #[test]
    fn test_full_row_clears_in_place() {
        let mut board = Board::new();
        fill_row(&mut board, 4);
        board.set(2, 3, Some(Color::Green));

        let result = clear_lines(&mut board);
        assert_eq!(result.rows.as_slice(), &[4]);
        assert!(result.cols.is_empty());
        assert_eq!(result.total(), 1);

        // Cleared row is empty, and no other cell moved (no gravity).
        for col in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty(4, col));
        }
        assert!(board.is_occupied(2, 3));
    }

    #[test]
    fn test_almost_full_row_is_not_cleared() {
        let mut board = Board::new();
        for col in 0..(BOARD_WIDTH as i8 - 1) {
            board.set(0, col, Some(Color::Red));
        }

        let result = clear_lines(&mut board);
        assert!(result.is_empty());
        assert!(board.is_occupied(0, 0));
    }

    #[test]
    fn test_intersecting_row_and_column_count_independently() {
        let mut board = Board::new();
        fill_row(&mut board, 3);
        fill_col(&mut board, 5);

        let result = clear_lines(&mut board);
        assert_eq!(result.rows.as_slice(), &[3]);
        assert_eq!(result.cols.as_slice(), &[5]);
        assert_eq!(result.total(), 2);

        // The shared cell (3, 5) clears exactly once; both lines end up empty.
        for col in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty(3, col));
        }
        for row in 0..BOARD_HEIGHT as i8 {
            assert!(board.is_empty(row, 5));
        }
    }

    #[test]
    fn test_detection_runs_before_clearing() {
        // A column missing one cell, where that cell sits on a full row:
        // clearing the row must not retroactively complete the column.
        let mut board = Board::new();
        fill_row(&mut board, 0);
        for row in 1..BOARD_HEIGHT as i8 {
            board.set(row, 2, Some(Color::Blue));
        }

        // Column 2 is full (row 0 contributes), so both clear simultaneously.
        let result = clear_lines(&mut board);
        assert_eq!(result.rows.as_slice(), &[0]);
        assert_eq!(result.cols.as_slice(), &[2]);

        // Second pass finds nothing.
        let result = clear_lines(&mut board);
        assert!(result.is_empty());
    }

    #[test]
    fn test_multiple_rows_clear_simultaneously() {
        let mut board = Board::new();
        fill_row(&mut board, 1);
        fill_row(&mut board, 6);

        let result = clear_lines(&mut board);
        assert_eq!(result.rows.as_slice(), &[1, 6]);
        assert_eq!(result.total(), 2);
        assert_eq!(board.empty_cells(), 64);
    }
}
