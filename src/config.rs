//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_KEY_RELEASE_MS: u64 = 180;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub best_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub tick_ms: u32,
    /// `None` when the user disabled auto-release (`CLOUD_JUMP_KEY_RELEASE_MS=0`).
    pub key_release_timeout: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            best_path: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tick_ms: TICK_MS,
            key_release_timeout: Some(Duration::from_millis(DEFAULT_KEY_RELEASE_MS)),
        }
    }
}

impl GameConfig {
    /// Create from `CLOUD_JUMP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    ///
    /// Blank values count as unset; numbers that fail to parse fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("CLOUD_JUMP_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = var("CLOUD_JUMP_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let key_release_ms = var("CLOUD_JUMP_KEY_RELEASE_MS").and_then(|s| s.parse().ok());
        let key_release_timeout = match key_release_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => Some(Duration::from_millis(DEFAULT_KEY_RELEASE_MS)),
        };

        Self {
            seed,
            best_path: var("CLOUD_JUMP_BEST_PATH").map(PathBuf::from),
            log_path: var("CLOUD_JUMP_LOG_PATH").map(PathBuf::from),
            log_filter: var("CLOUD_JUMP_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            tick_ms,
            key_release_timeout,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    (nanos ^ (nanos >> 32)) as u32
}
