//! Engine configuration.
//!
//! Defaults are usable as-is; hosts can override them from JSON (e.g. a
//! settings file) or from the environment.

use serde::{Deserialize, Serialize};

/// Default number of registry slots reserved up front.
const DEFAULT_TASK_CAPACITY: usize = 16;
/// Largest capacity the engine will reserve up front.
pub const MAX_TASK_CAPACITY: usize = 1 << 16;

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid engine config: {0}")]
    Invalid(&'static str),
}

/// Runtime configuration for an [`AnimationEngine`](crate::AnimationEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Registry capacity reserved when the engine is created.
    #[serde(default = "EngineConfig::default_capacity")]
    pub initial_capacity: usize,
    /// Log a warning for every task still active when the engine is dropped.
    #[serde(default = "EngineConfig::default_warn")]
    pub warn_on_leaked_tasks: bool,
}

impl EngineConfig {
    fn default_capacity() -> usize {
        DEFAULT_TASK_CAPACITY
    }

    fn default_warn() -> bool {
        true
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.initial_capacity > MAX_TASK_CAPACITY {
            return Err(ConfigError::Invalid("initial_capacity exceeds 65536"));
        }
        Ok(config)
    }

    /// Defaults overridden by `TINCT_TASK_CAPACITY` and `TINCT_WARN_LEAKS`.
    ///
    /// Unparseable values, and capacities above [`MAX_TASK_CAPACITY`], fall
    /// back to the default. `TINCT_WARN_LEAKS` accepts `0`/`false`/`no` to
    /// disable the warning.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("TINCT_TASK_CAPACITY").ok().as_deref(),
            std::env::var("TINCT_WARN_LEAKS").ok().as_deref(),
        )
    }

    fn from_vars(capacity: Option<&str>, warn_leaks: Option<&str>) -> Self {
        let initial_capacity = match capacity.map(|s| s.trim().parse::<usize>()) {
            None => DEFAULT_TASK_CAPACITY,
            Some(Ok(n)) if n <= MAX_TASK_CAPACITY => n,
            Some(_) => {
                tracing::warn!(
                    "ignoring TINCT_TASK_CAPACITY={:?}, using {DEFAULT_TASK_CAPACITY}",
                    capacity.unwrap_or_default()
                );
                DEFAULT_TASK_CAPACITY
            }
        };
        Self {
            initial_capacity,
            warn_on_leaked_tasks: warn_leaks
                .map(|s| !matches!(s.trim(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TASK_CAPACITY,
            warn_on_leaked_tasks: true,
        }
    }
}
