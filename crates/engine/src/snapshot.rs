//! Snapshot module - the complete serializable engine state
//!
//! A snapshot is everything a session store needs to persist between
//! requests: the board grid, the current hand, the selector's replayable
//! state, and the score bookkeeping. Whether the game has ended is not
//! stored; it is re-derived from the board and hand on reconstruction.

use gridlock_core::{Piece, SelectorState};
use gridlock_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state handed to and received from the session store
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Board grid, row-major
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Current hand, in slot order
    pub hand: Vec<Piece>,
    /// Selector seed, draw count, and recent-piece history
    pub selector: SelectorState,
    pub score: u32,
    pub combo: u32,
    pub total_lines_cleared: u32,
    pub max_combo: u32,
}
