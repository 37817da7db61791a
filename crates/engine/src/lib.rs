//! Engine module - placement transactions over the core puzzle logic
//!
//! The engine composes the board, line clearer, score calculator, and piece
//! selector into a two-state machine: **Playing** until no piece in the
//! current hand fits anywhere, then **Ended** (terminal). Each call to
//! [`Game::place_piece`] is a transaction: an invalid index or a rejected
//! board position reports failure without mutating anything, while a valid
//! placement paints the board, clears lines, scores, and refills the hand
//! once it is exhausted.
//!
//! The engine is reconstructed per request from a [`GameSnapshot`] and
//! discarded after re-serialization. A restored engine is behaviorally
//! identical to one that reached the same state through live play, including
//! exact future piece draws.

pub mod game;
pub mod snapshot;

pub use gridlock_core as core;
pub use gridlock_types as types;

pub use game::{Game, GamePhase, PlacementResult};
pub use snapshot::GameSnapshot;
