//! Game configuration.
//!
//! A `GameConfig` is built once and handed to [`Game::new`](crate::engine::Game::new):
//! - `seed`: fixed seed for reproducible sessions, or `None` for OS entropy
//! - `think_delay`: pause before the computer's move is applied
//! - `policy`: how the computer picks among empty cells

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Default pause before the computer moves.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(1000);

/// Longest think delay accepted by [`GameConfig::validate`].
pub const MAX_THINK_DELAY: Duration = Duration::from_secs(10);

/// Computer move selection strategy. Both are uniform over empty cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Pick directly from the list of empty cells.
    #[default]
    EmptyCells,
    /// Sample any cell and retry until an empty one comes up.
    RejectionSampling,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Delay between the computer taking the turn and its move landing.
    pub think_delay: Duration,

    /// Computer move selection strategy.
    pub policy: PolicyKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            think_delay: DEFAULT_THINK_DELAY,
            policy: PolicyKind::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the think delay.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Remove the think delay entirely (tests, autoplay).
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_think_delay(Duration::ZERO)
    }

    /// Set the computer move selection strategy.
    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.think_delay > MAX_THINK_DELAY {
            return Err(ConfigError::ThinkDelayTooLong {
                delay: self.think_delay,
                max: MAX_THINK_DELAY,
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
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.think_delay, Duration::from_millis(1000));
        assert_eq!(config.policy, PolicyKind::EmptyCells);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(7)
            .with_think_delay(Duration::from_millis(250))
            .with_policy(PolicyKind::RejectionSampling);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.think_delay, Duration::from_millis(250));
        assert_eq!(config.policy, PolicyKind::RejectionSampling);
        assert_eq!(config.instant().think_delay, Duration::ZERO);
    }

    #[test]
    fn test_validate_rejects_long_delay() {
        let config = GameConfig::new().with_think_delay(Duration::from_secs(11));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThinkDelayTooLong {
                delay: Duration::from_secs(11),
                max: MAX_THINK_DELAY,
            })
        );

        let at_limit = GameConfig::new().with_think_delay(MAX_THINK_DELAY);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(3).instant();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
