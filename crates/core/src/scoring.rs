//! Scoring module - line clear points, level progression and descent speed
//!
//! Classic fixed rules:
//! - A lock that clears `k` rows scores `LINE_SCORES[k]` times the level that
//!   was in effect while the piece was falling.
//! - A hard drop scores 2 points per row descended.
//! - The level is `lines / 10 + 1`.
//! - The descent interval shrinks by 100ms per level down to a 100ms floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points for clearing `lines` rows in a single lock at `level`.
///
/// Counts above 4 cannot happen with four-block pieces and score nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .map_or(0, |&base| base.saturating_mul(level))
}

/// Points for a hard drop of `distance` rows.
pub fn hard_drop_points(distance: u32) -> u32 {
    distance.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level for a running total of cleared rows (1-based).
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic descent interval in milliseconds for a level.
///
/// `max(100, 1000 - (level - 1) * 100)`; levels below 1 are treated as 1.
pub fn drop_speed_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    BASE_DROP_MS
        .saturating_sub(steps.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
