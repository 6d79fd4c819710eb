//! Scoring module - line-clear points, level progression, gravity curve
//!
//! Score changes only on line-clear events; movement and drops award
//! nothing. The reward curve is the classic non-linear table, scaled by
//! level.

use crate::types::{
    FALL_INTERVALS_MS, FALL_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows at the given level
///
/// 0 lines scores nothing; 1-4 lines use the non-linear table scaled by
/// (level + 1).
pub fn score_for_lines(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Level for a cumulative cleared-line count (one level per 10 lines)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, in milliseconds per row
///
/// Levels past the table use the floor interval.
pub fn fall_interval_ms(level: u32) -> u32 {
    FALL_INTERVALS_MS
        .get(level as usize)
        .copied()
        .unwrap_or(FALL_INTERVAL_FLOOR_MS)
}
