//! Scoring module - line clear points, drop points and level pacing
//!
//! - Line clears score from a table indexed by how many rows one landing
//!   removed, multiplied by the level. A multi-row clear is scored once from
//!   the table, never as a sum of single-row awards.
//! - Soft drop earns 1 point per row, hard drop 2 points per row fallen.
//! - The level is `total_lines / lines_per_level + 1`; each level above 1
//!   shortens the gravity interval by a fixed step down to a floor.

use crate::config::SessionConfig;
use crate::types::{HARD_DROP_POINTS, LINE_SCORES, SOFT_DROP_POINTS};

/// Points for clearing `lines` rows with one landing at `level`
///
/// A single piece spans at most 4 rows, so anything beyond 4 is scored as 4.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Points for a manual descent of `cells` rows
pub fn drop_points(cells: u32, hard_drop: bool) -> u32 {
    let per_cell = if hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}

/// Level reached after clearing `total_lines` (levels start at 1)
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level.max(1) + 1
}

/// Gravity interval for a level, clamped at the configured floor
pub fn drop_interval_ms(level: u32, config: &SessionConfig) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(config.level_speed_step_ms);
    config
        .initial_drop_interval_ms
        .saturating_sub(speedup)
        .max(config.min_drop_interval_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 40);
        assert_eq!(line_clear_points(2, 1), 100);
        assert_eq!(line_clear_points(3, 1), 300);
        assert_eq!(line_clear_points(4, 1), 1200);

        // Level multiplies
        assert_eq!(line_clear_points(1, 5), 40 * 5);
        assert_eq!(line_clear_points(4, 3), 1200 * 3);
    }

    #[test]
    fn test_multi_row_clear_is_not_a_sum() {
        assert_ne!(line_clear_points(4, 1), 4 * line_clear_points(1, 1));
        assert_eq!(line_clear_points(6, 1), 1200);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(drop_points(10, false), 10);
        assert_eq!(drop_points(10, true), 20);
        assert_eq!(drop_points(0, true), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0, 10), 1);
        assert_eq!(level_for_lines(9, 10), 1);
        assert_eq!(level_for_lines(10, 10), 2);
        assert_eq!(level_for_lines(29, 10), 3);
        assert_eq!(level_for_lines(100, 10), 11);
        assert_eq!(level_for_lines(6, 3), 3);
    }

    #[test]
    fn test_drop_intervals() {
        let c = SessionConfig::default();
        assert_eq!(drop_interval_ms(1, &c), 1000);
        assert_eq!(drop_interval_ms(2, &c), 900);
        assert_eq!(drop_interval_ms(10, &c), 100);
        assert_eq!(drop_interval_ms(11, &c), 50); // 1000 - 1000 floors at 50
        assert_eq!(drop_interval_ms(500, &c), 50);
    }
}
