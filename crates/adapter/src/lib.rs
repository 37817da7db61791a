//! Adapter module - persisted-state boundary with the session store
//!
//! The engine's only external surface is a state-transfer contract: the
//! collaborator hands in a serialized game snapshot, receives the mutated
//! snapshot back, and gets a placement result for the immediate caller.
//! This crate owns that contract - the JSON shapes, their validation, and
//! the conversion to and from the engine's typed [`GameSnapshot`].
//!
//! # State Shape
//!
//! ```json
//! {
//!   "board": [[null, "red", null, ...], ...],
//!   "hand": [
//!     {"type": "line3", "rotation": 0},
//!     "dot"
//!   ],
//!   "selector": {"seed": 12345, "randomCallCount": 42, "recentHistory": ["dot", "t"]},
//!   "score": 1270,
//!   "combo": 2,
//!   "totalLinesCleared": 9,
//!   "maxCombo": 3
//! }
//! ```
//!
//! - The board is a fixed 8x8 grid of nullable color names.
//! - Hand entries are `{type, rotation}` pairs; a bare type name is the
//!   legacy format and defaults rotation to 0.
//! - The selector blob carries everything needed to rebuild the RNG at the
//!   exact draw it had reached.
//!
//! # Failure Semantics
//!
//! Malformed persisted state (wrong grid dimensions, unknown color or piece
//! names, oversized hand) is fatal to the reconstruction attempt and surfaces
//! as an error from [`decode_state`]; the collaborator decides whether to
//! abort or start a fresh game. Invalid moves are never errors - they come
//! back as a failed [`PlacementOutcome`](state::PlacementOutcome).
//!
//! [`GameSnapshot`]: gridlock_engine::GameSnapshot

pub mod state;

pub use gridlock_core as core;
pub use gridlock_engine as engine;
pub use gridlock_types as types;

pub use state::{
    apply_move, decode_state, encode_state, HandEntry, MoveResponse, PersistedState,
    PlacementOutcome, SelectorBlob, StateError,
};
