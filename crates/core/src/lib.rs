//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the board rules, piece catalog, scoring, board analysis,
//! and the adaptive piece generator. It has **zero dependencies** on persistence,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: Same selector seed produces identical piece sequences
//! - **Testable**: Comprehensive unit tests for all placement and generation rules
//! - **Portable**: Can run in any host (web backend, headless simulation, replay checker)
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 game board with placement legality and position enumeration
//! - [`catalog`]: static piece shape/color/category definitions
//! - [`clear`]: simultaneous row/column detection and clearing (no gravity)
//! - [`scoring`]: line bonus and combo multiplier tables
//! - [`analysis`]: board danger level and mobility metrics
//! - [`weights`]: danger-interpolated piece selection weights
//! - [`rng`]: seeded LCG with a replayable draw counter
//! - [`selector`]: weighted adaptive piece generation with solvability guarantees
//! - [`solvability`]: does-any-piece-fit checks over candidate sets
//!
//! # Generation Rules
//!
//! Piece generation is biased, not uniform:
//!
//! - **Danger-adaptive weights**: crowded boards shift probability toward small pieces
//! - **Progressive difficulty**: large pieces become more likely as total cleared
//!   lines approach 100
//! - **Repetition control**: kinds seen in the last 5 draws have their weight halved
//! - **Solvability guarantee**: a generated hand always contains at least one piece
//!   that fits somewhere, unless the board itself is terminal
//!
//! # Example
//!
//! ```
//! use gridlock_core::{Board, PieceSelector};
//!
//! let board = Board::new();
//! let mut selector = PieceSelector::new(12345);
//!
//! let hand = selector.generate(&board, 0, 3);
//! assert_eq!(hand.len(), 3);
//! assert!(hand.iter().any(|p| board.can_place_piece_anywhere(p)));
//! ```

pub mod analysis;
pub mod board;
pub mod catalog;
pub mod clear;
pub mod rng;
pub mod scoring;
pub mod selector;
pub mod solvability;
pub mod weights;

pub use gridlock_types as types;

// Re-export commonly used types for convenience
pub use analysis::{analyze, analyze_with_threshold, BoardAnalysis};
pub use board::{Board, GridShapeError};
pub use catalog::{cell_count, color, shape, Piece};
pub use clear::{clear_lines, ClearResult};
pub use rng::{CountedRng, SimpleRng};
pub use scoring::{calculate_points, combo_multiplier, line_bonus};
pub use selector::{PieceSelector, SelectorState};
pub use solvability::{at_least_one_fits, check_solvability, fitting_pieces, SolvabilityCheck};
pub use weights::{all_weights, category_weight, weight};
