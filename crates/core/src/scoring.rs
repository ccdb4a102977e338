//! Scoring module - line clear points, levels and gravity speed
//!
//! - A clear of `n` lines awards `LINE_SCORES[n] * level` (n clamped to 4).
//! - Level is `lines / 10 + 1`.
//! - The fall interval shrinks by 50ms per level down to a 50ms floor.

use crate::types::{
    FALL_INTERVAL_STEP_MS, INITIAL_FALL_INTERVAL_MS, LINES_PER_LEVEL, LINE_SCORES,
    MIN_FALL_INTERVAL_MS, STARTING_LEVEL,
};

/// Outcome of one line clear event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this clear.
    pub points: u32,
    /// Running line total after this clear.
    pub lines: u32,
    /// Level after this clear.
    pub level: u32,
    /// Fall interval for the new level.
    pub fall_interval_ms: u32,
}

impl ScoreResult {
    pub fn leveled_up(&self, previous_level: u32) -> bool {
        self.level > previous_level
    }
}

/// Calculate line clear score
/// lines: number of lines cleared at once (values above 4 count as 4)
/// level: level at the time of the clear (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Level for a running line total
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Gravity interval for a level, in milliseconds
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(STARTING_LEVEL)
        .saturating_mul(FALL_INTERVAL_STEP_MS);
    INITIAL_FALL_INTERVAL_MS
        .saturating_sub(speedup)
        .max(MIN_FALL_INTERVAL_MS)
}

/// Score a clear of `lines` rows given the totals before it.
///
/// Points use the level in effect before the clear; the level and interval
/// are recomputed from the new line total afterwards.
pub fn calculate_score(lines: usize, level: u32, total_lines: u32) -> ScoreResult {
    let points = calculate_line_score(lines, level);
    let lines = total_lines.saturating_add(lines as u32);
    let level = calculate_level(lines);

    ScoreResult {
        points,
        lines,
        level,
        fall_interval_ms: fall_interval_ms(level),
    }
}
