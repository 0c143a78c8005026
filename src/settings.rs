//! Game settings
//!
//! Every tunable of a run lives here. Settings are validated once, when a
//! game loop is constructed; an invalid value never reaches the simulation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} interval must be non-zero")]
    ZeroInterval { name: &'static str },
    #[error("spawn multiplier must be at least 1")]
    ZeroSpawnMultiplier,
    #[error("spawn interval {refresh:?} x {multiplier} overflows")]
    IntervalOverflow { refresh: Duration, multiplier: u32 },
    #[error("gap size {0} is outside (0, 100)")]
    GapOutOfRange(f32),
    #[error("scroll step {0} must be positive")]
    NonPositiveStep(f32),
    #[error("thresholds out of order: removal {removal} < scoring {scoring} < spawn {spawn} required")]
    ThresholdOrder {
        removal: f32,
        scoring: f32,
        spawn: f32,
    },
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base refresh cadence (obstacle scroll, collision, scoring)
    #[serde(rename = "refresh_interval_us", with = "micros")]
    pub refresh_interval: Duration,
    /// Spawn cadence as a multiple of the refresh cadence
    pub spawn_multiplier: u32,
    /// Flyer trajectory cadence
    #[serde(rename = "flight_interval_us", with = "micros")]
    pub flight_interval: Duration,

    /// Vertical gap between the barriers of a pair
    pub gap_size: f32,
    /// Offset new pairs enter at
    pub spawn_offset: f32,
    /// Offset at which a pair counts as passed
    pub scoring_threshold: f32,
    /// Offset at which a pair is discarded
    pub removal_threshold: f32,
    /// Offset lost by every pair on each refresh tick
    pub scroll_step: f32,

    /// Obstacle RNG seed; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(REFRESH_INTERVAL_MS),
            spawn_multiplier: SPAWN_MULTIPLIER,
            flight_interval: Duration::from_millis(FLIGHT_INTERVAL_MS),

            gap_size: GAP_SIZE,
            spawn_offset: SPAWN_OFFSET,
            scoring_threshold: SCORING_THRESHOLD,
            removal_threshold: REMOVAL_THRESHOLD,
            scroll_step: SCROLL_STEP,

            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a different base refresh cadence
    pub fn with_refresh_interval(refresh_interval: Duration) -> Self {
        Self {
            refresh_interval,
            ..Self::default()
        }
    }

    /// Spawn cadence, always a whole multiple of the refresh cadence
    ///
    /// Saturates for settings `validate` would reject.
    pub fn spawn_interval(&self) -> Duration {
        self.refresh_interval
            .checked_mul(self.spawn_multiplier)
            .unwrap_or(Duration::MAX)
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { name: "refresh" });
        }
        if self.flight_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { name: "flight" });
        }
        if self.spawn_multiplier == 0 {
            return Err(ConfigError::ZeroSpawnMultiplier);
        }
        if self.refresh_interval.checked_mul(self.spawn_multiplier).is_none() {
            return Err(ConfigError::IntervalOverflow {
                refresh: self.refresh_interval,
                multiplier: self.spawn_multiplier,
            });
        }
        if !(self.gap_size > FIELD_MIN && self.gap_size < FIELD_MAX) {
            return Err(ConfigError::GapOutOfRange(self.gap_size));
        }
        if !(self.scroll_step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.scroll_step));
        }
        if !(self.removal_threshold < self.scoring_threshold
            && self.scoring_threshold < self.spawn_offset)
        {
            return Err(ConfigError::ThresholdOrder {
                removal: self.removal_threshold,
                scoring: self.scoring_threshold,
                spawn: self.spawn_offset,
            });
        }
        Ok(())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Intervals in JSON are whole microseconds
mod micros {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(interval: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let us = u64::try_from(interval.as_micros()).unwrap_or(u64::MAX);
        serializer.serialize_u64(us)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}
