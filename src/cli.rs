//! Run configuration for the terminal binary.
//!
//! Sources, lowest precedence first: built-in defaults, `TETRIS_*`
//! environment variables, command-line flags. `--config <file.json>` replaces
//! the whole session block with the file's contents (missing keys take their
//! defaults).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use crate::core::SessionConfig;

pub const USAGE: &str = "\
usage: tetris-arena [options]

options:
  --seed <u64>          fixed piece sequence (default: random)
  --config <file.json>  session settings (board size, pacing)
  --log <path>          write a log file
  --log-level <level>   off, error, warn, info, debug, trace (default: info)
  --print-stats         print the final stats as JSON on exit
  -h, --help            show this message

environment:
  TETRIS_SEED, TETRIS_LOG_PATH, TETRIS_LOG_LEVEL, TETRIS_BOARD_WIDTH,
  TETRIS_BOARD_HEIGHT, TETRIS_INITIAL_DROP_MS, TETRIS_MIN_DROP_MS,
  TETRIS_LEVEL_STEP_MS, TETRIS_LINES_PER_LEVEL
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub session: SessionConfig,
    /// `None` seeds the piece sequence from the OS
    pub seed: Option<u64>,
    /// No path means no logger is installed
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub print_stats: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
            print_stats: false,
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with the environment; bad values are ignored.
    pub fn from_env() -> Self {
        use std::env;

        let non_empty = |name: &str| {
            env::var(name)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            session: SessionConfig::from_env(),
            seed: non_empty("TETRIS_SEED").and_then(|s| s.parse().ok()),
            log_path: non_empty("TETRIS_LOG_PATH").map(PathBuf::from),
            log_level: non_empty("TETRIS_LOG_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
            print_stats: false,
        }
    }
}

/// Read a session config from a JSON file
pub fn load_session_config(path: &Path) -> Result<SessionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("config: cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("config: invalid JSON in {}", path.display()))
}

/// Apply command-line flags (without the program name) on top of `base`.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_run_args(args: &[String], base: RunConfig) -> Result<Option<RunConfig>> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--print-stats" => config.print_stats = true,
            flag @ ("--seed" | "--config" | "--log" | "--log-level") => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--seed" => {
                        config.seed = Some(
                            v.parse::<u64>()
                                .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                        );
                    }
                    "--config" => config.session = load_session_config(Path::new(v))?,
                    "--log" => config.log_path = Some(PathBuf::from(v)),
                    _ => {
                        config.log_level = v
                            .parse::<LevelFilter>()
                            .map_err(|_| anyhow!("invalid --log-level value: {}", v))?;
                    }
                }
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}
