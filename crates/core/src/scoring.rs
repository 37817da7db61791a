//! Scoring module - line bonus and combo multiplier tables
//!
//! The reward curve is hand-tuned and deliberately non-round; persisted replays
//! are validated against these exact values, so the tables and the truncation
//! rule must be reproduced bit-for-bit.

use gridlock_types::{COMBO_MULTIPLIERS, COMBO_MULTIPLIER_STEP, LINE_BONUS, LINE_BONUS_STEP};

/// Base points for clearing `lines` lines in one placement
///
/// Negative input yields 0. Past 5 lines each extra line adds a flat step.
pub fn line_bonus(lines: i32) -> u32 {
    if lines <= 0 {
        return 0;
    }
    let lines = lines as usize;
    if lines < LINE_BONUS.len() {
        LINE_BONUS[lines]
    } else {
        LINE_BONUS[5] + (lines as u32 - 5) * LINE_BONUS_STEP
    }
}

/// Multiplier applied for the current combo count
///
/// Negative input is clamped to 1.0. Past 5 each combo step adds 0.5.
pub fn combo_multiplier(combo: i32) -> f64 {
    if combo <= 0 {
        return COMBO_MULTIPLIERS[0];
    }
    let combo = combo as usize;
    if combo < COMBO_MULTIPLIERS.len() {
        COMBO_MULTIPLIERS[combo]
    } else {
        COMBO_MULTIPLIERS[5] + (combo as f64 - 5.0) * COMBO_MULTIPLIER_STEP
    }
}

/// Points for a placement: `floor(line_bonus * combo_multiplier)`
///
/// Truncates toward zero to an integer result.
pub fn calculate_points(lines: i32, combo: i32) -> u32 {
    (line_bonus(lines) as f64 * combo_multiplier(combo)) as u32
}
