//! State module - JSON DTOs and snapshot conversions
//!
//! The persisted shape uses camelCase keys and stringly-typed colors and
//! piece names, matching what the session store keeps in its game-state
//! column. Everything is validated on the way in; the typed [`StateError`]
//! names what was malformed, and the JSON entry points wrap it with context
//! via `anyhow`.

use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use gridlock_core::{Board, GridShapeError, Piece, SelectorState};
use gridlock_engine::{Game, GameSnapshot, PlacementResult};
use gridlock_types::{Cell, Color, PieceKind, HAND_SIZE};

/// What made a persisted state unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    Grid(GridShapeError),
    UnknownColor(String),
    UnknownPiece(String),
    OversizedHand(usize),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Grid(err) => write!(f, "bad board grid: {}", err),
            StateError::UnknownColor(name) => write!(f, "unknown color {:?}", name),
            StateError::UnknownPiece(name) => write!(f, "unknown piece type {:?}", name),
            StateError::OversizedHand(len) => {
                write!(f, "hand has {} entries, at most {} allowed", len, HAND_SIZE)
            }
        }
    }
}

impl std::error::Error for StateError {}

impl From<GridShapeError> for StateError {
    fn from(err: GridShapeError) -> Self {
        StateError::Grid(err)
    }
}

/// One hand slot as persisted
///
/// The current format is a `{type, rotation}` pair; the legacy format is a
/// bare type name, which defaults rotation to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandEntry {
    Piece {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        rotation: u8,
    },
    Legacy(String),
}

impl HandEntry {
    fn to_piece(&self) -> Result<Piece, StateError> {
        let (name, rotation) = match self {
            HandEntry::Piece { kind, rotation } => (kind.as_str(), *rotation),
            HandEntry::Legacy(name) => (name.as_str(), 0),
        };
        let kind =
            PieceKind::from_str(name).ok_or_else(|| StateError::UnknownPiece(name.to_string()))?;
        Ok(Piece::with_rotation(kind, rotation))
    }
}

impl From<Piece> for HandEntry {
    fn from(piece: Piece) -> Self {
        HandEntry::Piece {
            kind: piece.kind.as_str().to_string(),
            rotation: piece.rotation,
        }
    }
}

/// The selector's persisted RNG state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorBlob {
    pub seed: u32,
    pub random_call_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_history: Option<Vec<String>>,
}

impl SelectorBlob {
    fn to_state(&self) -> Result<SelectorState, StateError> {
        let mut recent_history = Vec::new();
        if let Some(names) = &self.recent_history {
            for name in names {
                let kind = PieceKind::from_str(name)
                    .ok_or_else(|| StateError::UnknownPiece(name.clone()))?;
                recent_history.push(kind);
            }
        }
        Ok(SelectorState {
            seed: self.seed,
            random_call_count: self.random_call_count,
            recent_history,
        })
    }
}

impl From<&SelectorState> for SelectorBlob {
    fn from(state: &SelectorState) -> Self {
        Self {
            seed: state.seed,
            random_call_count: state.random_call_count,
            recent_history: Some(
                state
                    .recent_history
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect(),
            ),
        }
    }
}

/// The complete game state as the session store persists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// 8x8 grid of nullable color names, row-major
    pub board: Vec<Vec<Option<String>>>,
    pub hand: Vec<HandEntry>,
    pub selector: SelectorBlob,
    pub score: u32,
    pub combo: u32,
    pub total_lines_cleared: u32,
    pub max_combo: u32,
}

impl PersistedState {
    /// Project an engine snapshot into the persisted shape
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            board: snapshot
                .board
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.map(|color| color.as_str().to_string()))
                        .collect()
                })
                .collect(),
            hand: snapshot.hand.iter().map(|&piece| piece.into()).collect(),
            selector: (&snapshot.selector).into(),
            score: snapshot.score,
            combo: snapshot.combo,
            total_lines_cleared: snapshot.total_lines_cleared,
            max_combo: snapshot.max_combo,
        }
    }

    /// Validate and convert into the engine's typed snapshot
    pub fn to_snapshot(&self) -> Result<GameSnapshot, StateError> {
        let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(self.board.len());
        for row in &self.board {
            let mut cells: Vec<Cell> = Vec::with_capacity(row.len());
            for name in row {
                cells.push(match name {
                    Some(name) => Some(
                        Color::from_str(name)
                            .ok_or_else(|| StateError::UnknownColor(name.clone()))?,
                    ),
                    None => None,
                });
            }
            grid.push(cells);
        }
        let board = Board::from_grid(&grid)?;

        if self.hand.len() > HAND_SIZE {
            return Err(StateError::OversizedHand(self.hand.len()));
        }
        let hand = self
            .hand
            .iter()
            .map(|entry| entry.to_piece())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameSnapshot {
            board: board.to_array(),
            hand,
            selector: self.selector.to_state()?,
            score: self.score,
            combo: self.combo,
            total_lines_cleared: self.total_lines_cleared,
            max_combo: self.max_combo,
        })
    }
}

/// Placement result in the shape returned to the immediate caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOutcome {
    pub success: bool,
    pub points: u32,
    pub lines_cleared: usize,
    pub combo: u32,
    pub game_over: bool,
    pub pieces_remaining: usize,
    pub new_turn_started: bool,
}

impl From<PlacementResult> for PlacementOutcome {
    fn from(result: PlacementResult) -> Self {
        Self {
            success: result.success,
            points: result.points,
            lines_cleared: result.lines_cleared,
            combo: result.combo,
            game_over: result.game_over,
            pieces_remaining: result.pieces_remaining,
            new_turn_started: result.new_turn_started,
        }
    }
}

/// Mutated state plus the placement result, ready to hand back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub state: PersistedState,
    pub result: PlacementOutcome,
}

/// Parse and validate a persisted JSON state
pub fn decode_state(json: &str) -> anyhow::Result<GameSnapshot> {
    let state: PersistedState =
        serde_json::from_str(json).context("persisted game state is not valid JSON")?;
    let snapshot = state
        .to_snapshot()
        .context("persisted game state failed validation")?;
    Ok(snapshot)
}

/// Serialize an engine snapshot to its persisted JSON form
pub fn encode_state(snapshot: &GameSnapshot) -> anyhow::Result<String> {
    serde_json::to_string(&PersistedState::from_snapshot(snapshot))
        .context("failed to serialize game state")
}

/// The full state-in/state-out transaction
///
/// Rebuilds the engine from `json`, applies one placement, and returns the
/// re-serialized state with the placement outcome. Invalid moves come back
/// as a failed outcome with the state unchanged; only malformed input is an
/// error.
pub fn apply_move(json: &str, piece_index: usize, row: i8, col: i8) -> anyhow::Result<MoveResponse> {
    let snapshot = decode_state(json)?;
    let mut game = Game::from_snapshot(&snapshot);
    let result = game.place_piece(piece_index, row, col);
    Ok(MoveResponse {
        state: PersistedState::from_snapshot(&game.snapshot()),
        result: result.into(),
    })
}
