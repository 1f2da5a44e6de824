//! Scoring module - points, leveling and gravity speed
//!
//! All three are pure functions; the state machine stores their results but
//! never computes them any other way, so `level` and `drop_delay_ms` can
//! always be recomputed from the cumulative cleared-line count.

use blockfall_types::{DROP_MS_MIN, DROP_MS_START, DROP_MS_STEP, LINES_PER_LEVEL, LINE_SCORES};

/// Points for a single locking event that cleared `cleared` lines
///
/// The non-linear multi-line bonus curve: 1 -> 100, 2 -> 300, 3 -> 500,
/// 4 -> 800; zero (or out-of-table) clears score nothing.
pub fn line_clear_points(cleared: usize) -> u32 {
    LINE_SCORES.get(cleared).copied().unwrap_or(0)
}

/// Level for a cumulative cleared-line count (level 1 at zero lines)
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, clamped at the floor
pub fn drop_delay_for_level(level: u32) -> u32 {
    let reduction = DROP_MS_STEP.saturating_mul(level.saturating_sub(1));
    DROP_MS_START.saturating_sub(reduction).max(DROP_MS_MIN)
}
