//! Selector module - weighted adaptive piece generation
//!
//! The generator draws a hand of pieces biased by the board's danger level,
//! total score progression, and recent-piece history, while guaranteeing that
//! a non-terminal board always receives at least one piece that fits.
//!
//! A candidate hand is drawn one piece at a time by walking the kind list and
//! accumulating weight until the roll is covered. Hands where nothing fits
//! escalate the working danger level and retry up to a fixed cap; exhausting
//! the cap falls back to emergency generation from a fixed priority list.
//! Neither path can fail: even a board where no catalog piece fits returns a
//! full hand, and the caller detects game over on its next check.
//!
//! Every draw against the underlying random source increments the selector's
//! call counter exactly once, in call order. A persisted
//! `(seed, call count, history)` triple therefore rebuilds a selector whose
//! future draws are bit-identical to the instance that was serialized.

use arrayvec::ArrayVec;

use crate::analysis::analyze;
use crate::board::Board;
use crate::catalog::Piece;
use crate::rng::CountedRng;
use crate::solvability::{at_least_one_fits, check_solvability};
use crate::weights::all_weights;
use gridlock_types::{PieceKind, SizeCategory, HISTORY_CAPACITY, PIECE_KIND_COUNT};

/// Retry cap for the weight-escalation loop
pub const MAX_GENERATION_RETRIES: usize = 50;

/// Added to the working danger level after each candidate set that fits nowhere
const DANGER_ESCALATION: f64 = 0.2;

/// Working danger above which an accepted-but-not-fully-solvable hand has its
/// largest piece swapped for one that fits
const REPLACEMENT_DANGER: f64 = 0.8;

/// Working danger above which the final hand must contain a rescue piece
const RESCUE_DANGER: f64 = 0.7;

/// Largest cell count that still counts as a rescue piece
const RESCUE_MAX_CELLS: usize = 2;

/// Total cleared lines at which progressive difficulty saturates
const PROGRESS_SATURATION_LINES: u32 = 100;

/// Weight factor applied once per occurrence of a kind in recent history
const REPETITION_PENALTY: f64 = 0.5;

/// The emergency draw spreads uniformly over at most this many leading fits
const EMERGENCY_DRAW_SPAN: usize = 3;

/// Piece kinds ordered by ascending cell count, ties in enumeration order
const SIZE_ASCENDING: [PieceKind; PIECE_KIND_COUNT] = [
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::Corner,
    PieceKind::Line4,
    PieceKind::Square2,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
    PieceKind::Line5,
    PieceKind::BigCorner,
    PieceKind::Rect2x3,
    PieceKind::Square3,
];

/// Fixed fallback order for emergency generation, smallest first
const EMERGENCY_PRIORITY: [PieceKind; PIECE_KIND_COUNT] = [
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::Corner,
    PieceKind::Square2,
    PieceKind::Line4,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
    PieceKind::Line5,
    PieceKind::BigCorner,
    PieceKind::Rect2x3,
    PieceKind::Square3,
];

/// Progressive-difficulty weight multiplier for one category
///
/// `progress` is the saturated fraction of [`PROGRESS_SATURATION_LINES`].
/// Large pieces ramp up to 1.5x, huge to 1.8x, tiny and small drop to 0.7x.
fn difficulty_multiplier(category: SizeCategory, progress: f64) -> f64 {
    match category {
        SizeCategory::Tiny | SizeCategory::Small => 1.0 - 0.3 * progress,
        SizeCategory::Medium => 1.0,
        SizeCategory::Large => 1.0 + 0.5 * progress,
        SizeCategory::Huge => 1.0 + 0.8 * progress,
    }
}

/// Index of the largest piece in the hand, first wins on ties
fn largest_index(hand: &[Piece]) -> usize {
    let mut best = 0;
    for (i, piece) in hand.iter().enumerate() {
        if piece.cell_count() > hand[best].cell_count() {
            best = i;
        }
    }
    best
}

/// Smallest catalog kind with at least one valid position on the board
fn smallest_fitting_kind(board: &Board) -> Option<PieceKind> {
    SIZE_ASCENDING
        .iter()
        .copied()
        .find(|&kind| board.can_place_piece_anywhere(&Piece::new(kind)))
}

/// Persistable selector state
///
/// Restoring replays `random_call_count` draws against a freshly seeded
/// generator, so the rebuilt selector continues the exact same sequence.
/// `recent_history` is ordered oldest first; entries past the ring capacity
/// are dropped from the front on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    pub seed: u32,
    pub random_call_count: u64,
    pub recent_history: Vec<PieceKind>,
}

/// The adaptive piece generator
///
/// Owns the counted RNG and the bounded recent-piece history. All board
/// inputs are read-only; the selector never mutates the board it generates
/// for.
#[derive(Debug, Clone)]
pub struct PieceSelector {
    rng: CountedRng,
    history: ArrayVec<PieceKind, HISTORY_CAPACITY>,
}

impl PieceSelector {
    /// Create a freshly seeded selector with empty history
    pub fn new(seed: u32) -> Self {
        Self {
            rng: CountedRng::new(seed),
            history: ArrayVec::new(),
        }
    }

    /// Rebuild a selector from persisted state
    pub fn restore(state: &SelectorState) -> Self {
        let mut selector = Self {
            rng: CountedRng::restore(state.seed, state.random_call_count),
            history: ArrayVec::new(),
        };
        for &kind in &state.recent_history {
            selector.remember(kind);
        }
        selector
    }

    /// Snapshot the selector for persistence
    pub fn state(&self) -> SelectorState {
        SelectorState {
            seed: self.rng.seed(),
            random_call_count: self.rng.calls(),
            recent_history: self.history.to_vec(),
        }
    }

    /// Generate `count` pieces for the given board
    ///
    /// `total_lines_cleared` drives the progressive-difficulty multiplier.
    /// The returned hand contains at least one piece with a valid position
    /// whenever any catalog piece has one.
    pub fn generate(&mut self, board: &Board, total_lines_cleared: u32, count: usize) -> Vec<Piece> {
        if count == 0 {
            return Vec::new();
        }

        let mut danger = analyze(board).danger_level;

        let mut hand = None;
        for _ in 0..MAX_GENERATION_RETRIES {
            let weights = self.effective_weights(danger, total_lines_cleared);
            let candidates: Vec<Piece> = (0..count)
                .map(|_| Piece::new(self.draw_kind(&weights)))
                .collect();

            let check = check_solvability(board, &candidates);
            if check.at_least_one_fits {
                let mut accepted = candidates;
                if !check.is_solvable && danger > REPLACEMENT_DANGER {
                    // Swap the largest piece for the smallest kind that fits.
                    if let Some(kind) = smallest_fitting_kind(board) {
                        let idx = largest_index(&accepted);
                        accepted[idx] = Piece::new(kind);
                    }
                }
                hand = Some(accepted);
                break;
            }
            danger = (danger + DANGER_ESCALATION).min(1.0);
        }

        let mut hand = match hand {
            Some(hand) => hand,
            None => self.emergency_hand(board, count),
        };

        // Rescue bias: a crowded board always gets at least one 1- or 2-cell
        // piece, chosen by coin flip.
        if danger > RESCUE_DANGER && !hand.iter().any(|p| p.cell_count() <= RESCUE_MAX_CELLS) {
            let kind = if self.rng.next_f64() < 0.5 {
                PieceKind::Dot
            } else {
                PieceKind::Line2
            };
            let idx = largest_index(&hand);
            hand[idx] = Piece::new(kind);
        }

        // Absolute final guarantee: if the hand still fits nowhere, force the
        // first slot to the smallest kind with a valid position. When the
        // whole catalog fits nowhere the board is terminal and the hand is
        // returned unchanged.
        if !at_least_one_fits(board, &hand) {
            if let Some(kind) = smallest_fitting_kind(board) {
                hand[0] = Piece::new(kind);
            }
        }

        for piece in &hand {
            self.remember(piece.kind);
        }
        hand
    }

    /// Per-kind weights with difficulty and repetition adjustments applied
    fn effective_weights(&self, danger: f64, total_lines_cleared: u32) -> [f64; PIECE_KIND_COUNT] {
        let progress = total_lines_cleared.min(PROGRESS_SATURATION_LINES) as f64
            / PROGRESS_SATURATION_LINES as f64;

        let mut weights = all_weights(danger);
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            weights[i] *= difficulty_multiplier(kind.category(), progress);
            let repeats = self.history.iter().filter(|&&seen| seen == *kind).count();
            weights[i] *= REPETITION_PENALTY.powi(repeats as i32);
        }
        weights
    }

    /// One weighted draw: the first kind whose cumulative weight covers the
    /// roll wins, in enumeration order
    fn draw_kind(&mut self, weights: &[f64; PIECE_KIND_COUNT]) -> PieceKind {
        let total: f64 = weights.iter().sum();
        let roll = self.rng.next_f64() * total;

        let mut cumulative = 0.0;
        for (i, &kind) in PieceKind::ALL.iter().enumerate() {
            cumulative += weights[i];
            if roll <= cumulative {
                return kind;
            }
        }
        // Float accumulation can leave the roll a hair past the final sum.
        PieceKind::ALL[PIECE_KIND_COUNT - 1]
    }

    /// Fallback hand once retries exhaust: draw from the fitting prefix of the
    /// priority list, or all smallest kinds when nothing fits at all
    fn emergency_hand(&mut self, board: &Board, count: usize) -> Vec<Piece> {
        let fitting: Vec<PieceKind> = EMERGENCY_PRIORITY
            .iter()
            .copied()
            .filter(|&kind| board.can_place_piece_anywhere(&Piece::new(kind)))
            .collect();

        if fitting.is_empty() {
            return vec![Piece::new(EMERGENCY_PRIORITY[0]); count];
        }

        let span = fitting.len().min(EMERGENCY_DRAW_SPAN);
        (0..count)
            .map(|_| {
                let idx = (self.rng.next_f64() * span as f64) as usize;
                Piece::new(fitting[idx.min(span - 1)])
            })
            .collect()
    }

    /// Record a drawn kind, evicting the oldest entry when the ring is full
    fn remember(&mut self, kind: PieceKind) {
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(kind);
    }
}
