//! Game module - the placement transaction orchestrator
//!
//! Ties the core components together: board placement, simultaneous line
//! clearing, combo/score bookkeeping, hand refill through the adaptive
//! selector, and game-over detection.

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;
use gridlock_core::{
    at_least_one_fits, calculate_points, clear_lines, Board, Piece, PieceSelector,
};
use gridlock_types::HAND_SIZE;

/// The two engine states; `Ended` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Ended,
}

/// Outcome of one [`Game::place_piece`] call
///
/// Failures carry the unchanged bookkeeping values so the caller can surface
/// a rejected move without re-reading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementResult {
    pub success: bool,
    /// Points earned by this placement
    pub points: u32,
    /// Rows plus columns cleared by this placement
    pub lines_cleared: usize,
    /// Combo value after this placement
    pub combo: u32,
    pub game_over: bool,
    /// Pieces left in the current hand
    pub pieces_remaining: usize,
    /// True when this placement exhausted the hand and a fresh one was drawn
    pub new_turn_started: bool,
}

/// The game engine
///
/// Stateless between requests: construct from a seed for a new session or
/// from a [`GameSnapshot`] for an existing one, apply placements, then
/// snapshot again for persistence.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    hand: ArrayVec<Piece, HAND_SIZE>,
    selector: PieceSelector,
    score: u32,
    combo: u32,
    total_lines_cleared: u32,
    max_combo: u32,
    phase: GamePhase,
}

impl Game {
    /// Start a new game: empty board, freshly seeded selector, first hand drawn
    pub fn new(seed: u32) -> Self {
        let board = Board::new();
        let mut selector = PieceSelector::new(seed);
        let mut hand = ArrayVec::new();
        hand.extend(selector.generate(&board, 0, HAND_SIZE));

        Self {
            board,
            hand,
            selector,
            score: 0,
            combo: 0,
            total_lines_cleared: 0,
            max_combo: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Reconstruct a game from persisted state
    ///
    /// The phase is re-derived: a hand with no placeable piece means the game
    /// already ended. The rebuilt engine reproduces the exact piece draws the
    /// serialized one would have made.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let board = Board::from_array(&snapshot.board);
        let mut hand = ArrayVec::new();
        hand.extend(snapshot.hand.iter().copied().take(HAND_SIZE));

        let phase = if at_least_one_fits(&board, &hand) {
            GamePhase::Playing
        } else {
            GamePhase::Ended
        };

        Self {
            board,
            hand,
            selector: PieceSelector::restore(&snapshot.selector),
            score: snapshot.score,
            combo: snapshot.combo,
            total_lines_cleared: snapshot.total_lines_cleared,
            max_combo: snapshot.max_combo,
            phase,
        }
    }

    /// Read-only snapshot projection for persistence
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_array(),
            hand: self.hand.to_vec(),
            selector: self.selector.state(),
            score: self.score,
            combo: self.combo,
            total_lines_cleared: self.total_lines_cleared,
            max_combo: self.max_combo,
        }
    }

    /// Place the hand piece at `index` with its anchor at (row, col)
    ///
    /// Rejections (bad index, board refusal, game already ended) report
    /// failure and mutate nothing. A success paints the board, clears lines,
    /// scores against the pre-update combo, and refills the hand once all of
    /// it has been placed.
    pub fn place_piece(&mut self, index: usize, row: i8, col: i8) -> PlacementResult {
        if self.phase == GamePhase::Ended {
            return self.rejected();
        }
        let Some(piece) = self.hand.get(index).copied() else {
            return self.rejected();
        };
        if !self.board.try_place_piece(&piece, row, col) {
            return self.rejected();
        }

        self.hand.remove(index);

        let cleared = clear_lines(&mut self.board);
        let lines = cleared.total();

        let points = calculate_points(lines as i32, self.combo as i32);
        self.score += points;
        self.combo = if lines > 0 { self.combo + 1 } else { 0 };
        self.max_combo = self.max_combo.max(self.combo);
        self.total_lines_cleared += lines as u32;

        let mut new_turn_started = false;
        if self.hand.is_empty() {
            self.hand
                .extend(self.selector.generate(&self.board, self.total_lines_cleared, HAND_SIZE));
            new_turn_started = true;
        }

        if !at_least_one_fits(&self.board, &self.hand) {
            self.phase = GamePhase::Ended;
        }

        PlacementResult {
            success: true,
            points,
            lines_cleared: lines,
            combo: self.combo,
            game_over: self.phase == GamePhase::Ended,
            pieces_remaining: self.hand.len(),
            new_turn_started,
        }
    }

    fn rejected(&self) -> PlacementResult {
        PlacementResult {
            success: false,
            points: 0,
            lines_cleared: 0,
            combo: self.combo,
            game_over: self.phase == GamePhase::Ended,
            pieces_remaining: self.hand.len(),
            new_turn_started: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &[Piece] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.total_lines_cleared
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::SelectorState;
    use gridlock_types::{Color, PieceKind};

    fn snapshot_with(board: &Board, hand: Vec<Piece>) -> GameSnapshot {
        GameSnapshot {
            board: board.to_array(),
            hand,
            selector: SelectorState {
                seed: 42,
                random_call_count: 0,
                recent_history: Vec::new(),
            },
            score: 0,
            combo: 0,
            total_lines_cleared: 0,
            max_combo: 0,
        }
    }

    #[test]
    fn test_new_game_starts_playing_with_full_hand() {
        let game = Game::new(12345);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.hand().len(), HAND_SIZE);
        assert_eq!(game.score(), 0);
        assert_eq!(game.combo(), 0);
    }

    #[test]
    fn test_new_game_is_deterministic() {
        assert_eq!(Game::new(7).snapshot(), Game::new(7).snapshot());
    }

    #[test]
    fn test_invalid_index_is_rejected_without_mutation() {
        let mut game = Game::new(1);
        let before = game.snapshot();

        let result = game.place_piece(HAND_SIZE, 0, 0);
        assert!(!result.success);
        assert_eq!(result.points, 0);
        assert_eq!(result.pieces_remaining, HAND_SIZE);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_board_rejection_is_reported_without_mutation() {
        let board = Board::new();
        let hand = vec![Piece::new(PieceKind::Line3)];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));
        let before = game.snapshot();

        // Anchor too far right for a 3-long piece.
        let result = game.place_piece(0, 0, 6);
        assert!(!result.success);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_placement_consumes_hand_piece() {
        let board = Board::new();
        let hand = vec![
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Line2),
            Piece::new(PieceKind::Corner),
        ];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));

        let result = game.place_piece(1, 4, 4);
        assert!(result.success);
        assert_eq!(result.points, 0);
        assert_eq!(result.lines_cleared, 0);
        assert_eq!(result.pieces_remaining, 2);
        assert!(!result.new_turn_started);
        assert_eq!(
            game.hand(),
            &[Piece::new(PieceKind::Dot), Piece::new(PieceKind::Corner)]
        );
    }

    #[test]
    fn test_row_clear_scores_with_pre_update_combo() {
        let mut board = Board::new();
        for col in 0..5 {
            board.set(3, col, Some(Color::Blue));
        }
        let hand = vec![Piece::new(PieceKind::Line3), Piece::new(PieceKind::Dot)];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));

        let result = game.place_piece(0, 3, 5);
        assert!(result.success);
        assert_eq!(result.lines_cleared, 1);
        // First clear scores at combo 0: 127 * 1.0.
        assert_eq!(result.points, 127);
        assert_eq!(result.combo, 1);
        assert_eq!(game.score(), 127);

        // The cleared row is empty again.
        for col in 0..8 {
            assert!(game.board().is_empty(3, col));
        }
    }

    #[test]
    fn test_combo_chain_and_reset() {
        let mut board = Board::new();
        for col in 0..7 {
            board.set(2, col, Some(Color::Green));
            board.set(5, col, Some(Color::Green));
        }
        let hand = vec![
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Dot),
        ];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));

        let first = game.place_piece(0, 2, 7);
        assert_eq!(first.points, 127);
        assert_eq!(first.combo, 1);

        // Second consecutive clear: 127 * 1.5 truncated.
        let second = game.place_piece(0, 5, 7);
        assert_eq!(second.points, 190);
        assert_eq!(second.combo, 2);
        assert_eq!(game.score(), 317);
        assert_eq!(game.max_combo(), 2);
        assert_eq!(game.total_lines_cleared(), 2);

        // A placement that clears nothing resets the combo but keeps max.
        let third = game.place_piece(0, 0, 0);
        assert!(third.success);
        assert_eq!(third.combo, 0);
        assert_eq!(game.max_combo(), 2);
    }

    #[test]
    fn test_hand_refill_on_exhaustion() {
        let board = Board::new();
        let hand = vec![
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Dot),
        ];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));

        assert!(!game.place_piece(0, 0, 0).new_turn_started);
        assert!(!game.place_piece(0, 0, 2).new_turn_started);

        let third = game.place_piece(0, 0, 4);
        assert!(third.success);
        assert!(third.new_turn_started);
        assert_eq!(third.pieces_remaining, HAND_SIZE);
        assert_eq!(game.hand().len(), HAND_SIZE);
    }

    #[test]
    fn test_game_over_transition_and_terminal_rejection() {
        // Full board except four isolated cells, two per affected row and
        // column so placing one dot completes nothing.
        let mut board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                board.set(row, col, Some(Color::Red));
            }
        }
        for &(row, col) in &[(0, 0), (0, 2), (3, 0), (3, 2)] {
            board.set(row, col, None);
        }
        let hand = vec![
            Piece::new(PieceKind::Dot),
            Piece::new(PieceKind::Line2),
            Piece::new(PieceKind::Square2),
        ];
        let mut game = Game::from_snapshot(&snapshot_with(&board, hand));
        assert_eq!(game.phase(), GamePhase::Playing);

        let result = game.place_piece(0, 0, 0);
        assert!(result.success);
        assert_eq!(result.lines_cleared, 0);
        // Neither remaining piece fits in isolated single-cell gaps.
        assert!(result.game_over);
        assert_eq!(game.phase(), GamePhase::Ended);

        let after = game.place_piece(0, 3, 0);
        assert!(!after.success);
        assert!(after.game_over);
        assert_eq!(game.hand().len(), 2);
    }

    #[test]
    fn test_restored_game_replays_identically() {
        let mut live = Game::new(99);

        // Drive a few placements, snapshotting and restoring midway.
        let pos = live.board().valid_positions(&live.hand()[0])[0];
        assert!(live.place_piece(0, pos.0, pos.1).success);

        let mut restored = Game::from_snapshot(&live.snapshot());
        assert_eq!(live.snapshot(), restored.snapshot());

        for _ in 0..6 {
            if live.is_over() || live.hand().is_empty() {
                break;
            }
            let positions = live.board().valid_positions(&live.hand()[0]);
            let Some(&(row, col)) = positions.first() else {
                break;
            };
            let a = live.place_piece(0, row, col);
            let b = restored.place_piece(0, row, col);
            assert_eq!(a, b);
            assert_eq!(live.snapshot(), restored.snapshot());
        }
    }

    #[test]
    fn test_snapshot_of_ended_game_restores_as_ended() {
        let mut board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                board.set(row, col, Some(Color::Purple));
            }
        }
        let hand = vec![Piece::new(PieceKind::Dot)];
        let game = Game::from_snapshot(&snapshot_with(&board, hand));
        assert!(game.is_over());

        let restored = Game::from_snapshot(&game.snapshot());
        assert!(restored.is_over());
    }
}
