//! Game configuration
//!
//! Every field has a default; `from_env` overrides them from `SPINTRIS_*`
//! variables and silently keeps the default for anything missing or
//! unparsable. Call [`GameConfig::validate`] before building a game.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;
use crate::shapes::max_extent;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, ROTATE_COOLDOWN_MS, SPAWN_MARGIN};

/// Tunables for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Board width at start and after restart.
    pub width: usize,
    /// Board height at start and after restart.
    pub height: usize,
    /// Depth of the spawn band; the line right after it is the game-over sentinel.
    pub spawn_margin: usize,
    /// Minimum game-clock gap between two accepted piece rotations.
    pub rotate_cooldown_ms: u32,
    /// Fixed gravity interval replacing the level table.
    pub gravity_interval_ms: Option<u32>,
    pub seed: u32,
    /// Zero score, level and lines on restart.
    pub reset_score_on_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            rotate_cooldown_ms: ROTATE_COOLDOWN_MS,
            gravity_interval_ms: None,
            seed: 1,
            reset_score_on_restart: true,
        }
    }
}

impl GameConfig {
    /// Load from the process environment.
    ///
    /// `SPINTRIS_SEED` falls back to the wall clock so unseeded games differ.
    pub fn from_env() -> Self {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok());
        if std::env::var("SPINTRIS_SEED").is_err() {
            config.seed = clock_seed();
        }
        config
    }

    /// Load from an arbitrary key lookup; missing seed keeps the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let width = parse("SPINTRIS_WIDTH")
            .map(|v| v as usize)
            .unwrap_or(defaults.width);
        let height = parse("SPINTRIS_HEIGHT")
            .map(|v| v as usize)
            .unwrap_or(defaults.height);
        let spawn_margin = parse("SPINTRIS_SPAWN_MARGIN")
            .map(|v| v as usize)
            .unwrap_or(defaults.spawn_margin);
        let rotate_cooldown_ms = parse("SPINTRIS_ROTATE_COOLDOWN_MS")
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(defaults.rotate_cooldown_ms);
        let gravity_interval_ms = parse("SPINTRIS_GRAVITY_MS").and_then(|v| u32::try_from(v).ok());
        let seed = parse("SPINTRIS_SEED")
            .map(|v| v as u32)
            .unwrap_or(defaults.seed);
        let reset_score_on_restart = lookup("SPINTRIS_RESET_SCORE")
            .map(|s| !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.reset_score_on_restart);

        Self {
            width,
            height,
            spawn_margin,
            rotate_cooldown_ms,
            gravity_interval_ms,
            seed,
            reset_score_on_restart,
        }
    }

    /// Reject configurations the engine cannot run.
    ///
    /// Both dimensions must hold the spawn band, the sentinel line and at
    /// least one more line, since rotation swaps them. The band must be deep
    /// enough for the largest template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extent = max_extent();
        if self.spawn_margin < extent {
            return Err(ConfigError::MarginTooSmall {
                margin: self.spawn_margin,
                extent,
            });
        }
        if self.width.min(self.height) < self.spawn_margin + 2 {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                margin: self.spawn_margin,
            });
        }
        if self.width > i16::MAX as usize || self.height > i16::MAX as usize {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.gravity_interval_ms == Some(0) {
            return Err(ConfigError::ZeroGravityInterval);
        }
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
