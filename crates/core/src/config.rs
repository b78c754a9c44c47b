//! Session configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shapes::MAX_SPAN;
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_DROP_INTERVAL_MS, LEVEL_SPEED_STEP_MS, LINES_PER_LEVEL,
    MIN_DROP_INTERVAL_MS,
};

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIDE: u16 = 100;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is too small, both sides must be at least {min}")]
    BoardTooSmall { width: u16, height: u16, min: u16 },
    #[error("board {width}x{height} is too large, both sides must be at most {max}")]
    BoardTooLarge { width: u16, height: u16, max: u16 },
    #[error("lines_per_level must be greater than zero")]
    ZeroLinesPerLevel,
    #[error("min_drop_interval_ms must be greater than zero")]
    ZeroMinInterval,
    #[error("min_drop_interval_ms ({min}) is above initial_drop_interval_ms ({initial})")]
    MinIntervalAboveInitial { min: u32, initial: u32 },
}

/// Board size and pacing for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    /// Gravity interval at level 1
    pub initial_drop_interval_ms: u32,
    /// Gravity never gets faster than this
    pub min_drop_interval_ms: u32,
    /// Interval removed per level above 1
    pub level_speed_step_ms: u32,
    pub lines_per_level: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            min_drop_interval_ms: MIN_DROP_INTERVAL_MS,
            level_speed_step_ms: LEVEL_SPEED_STEP_MS,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}

impl SessionConfig {
    /// Defaults overlaid with `TETRIS_*` environment variables
    ///
    /// Unset or unparseable variables keep the default value.
    pub fn from_env() -> Self {
        use std::env;

        fn var<T: std::str::FromStr>(name: &str, default: T) -> T {
            env::var(name)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        let d = Self::default();
        Self {
            width: var("TETRIS_BOARD_WIDTH", d.width),
            height: var("TETRIS_BOARD_HEIGHT", d.height),
            initial_drop_interval_ms: var("TETRIS_INITIAL_DROP_MS", d.initial_drop_interval_ms),
            min_drop_interval_ms: var("TETRIS_MIN_DROP_MS", d.min_drop_interval_ms),
            level_speed_step_ms: var("TETRIS_LEVEL_STEP_MS", d.level_speed_step_ms),
            lines_per_level: var("TETRIS_LINES_PER_LEVEL", d.lines_per_level),
        }
    }

    /// Check that a session built from this config can actually be played
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = MAX_SPAN as u16;
        if self.width < min || self.height < min {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        if self.width > MAX_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_SIDE,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.min_drop_interval_ms == 0 {
            return Err(ConfigError::ZeroMinInterval);
        }
        if self.min_drop_interval_ms > self.initial_drop_interval_ms {
            return Err(ConfigError::MinIntervalAboveInitial {
                min: self.min_drop_interval_ms,
                initial: self.initial_drop_interval_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SessionConfig::default();
        assert_eq!((c.width, c.height), (10, 20));
        assert_eq!(c.initial_drop_interval_ms, 1000);
        assert_eq!(c.min_drop_interval_ms, 50);
        assert_eq!(c.level_speed_step_ms, 100);
        assert_eq!(c.lines_per_level, 10);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unplayable_values() {
        let small = SessionConfig {
            width: 3,
            ..SessionConfig::default()
        };
        assert!(matches!(
            small.validate(),
            Err(ConfigError::BoardTooSmall { width: 3, .. })
        ));

        let huge = SessionConfig {
            width: 60_000,
            ..SessionConfig::default()
        };
        assert_eq!(
            huge.validate(),
            Err(ConfigError::BoardTooLarge {
                width: 60_000,
                height: 20,
                max: MAX_BOARD_SIDE
            })
        );
        let largest = SessionConfig {
            width: MAX_BOARD_SIDE,
            height: MAX_BOARD_SIDE,
            ..SessionConfig::default()
        };
        assert_eq!(largest.validate(), Ok(()));

        let no_levels = SessionConfig {
            lines_per_level: 0,
            ..SessionConfig::default()
        };
        assert_eq!(no_levels.validate(), Err(ConfigError::ZeroLinesPerLevel));

        let zero_floor = SessionConfig {
            min_drop_interval_ms: 0,
            ..SessionConfig::default()
        };
        assert_eq!(zero_floor.validate(), Err(ConfigError::ZeroMinInterval));

        let inverted = SessionConfig {
            initial_drop_interval_ms: 40,
            ..SessionConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::MinIntervalAboveInitial {
                min: 50,
                initial: 40
            })
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: SessionConfig = serde_json::from_str(r#"{"width": 12, "lines_per_level": 5}"#)
            .expect("valid json");
        assert_eq!(c.width, 12);
        assert_eq!(c.lines_per_level, 5);
        assert_eq!(c.height, 20);
        assert_eq!(c.initial_drop_interval_ms, 1000);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroLinesPerLevel.to_string(),
            "lines_per_level must be greater than zero"
        );
    }
}
