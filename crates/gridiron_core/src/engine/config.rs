//! # Engine Configuration
//!
//! Pacing and safety limits for a simulated game.
//!
//! ## Usage
//! ```rust
//! use gridiron_core::engine::config::{EngineConfig, Tempo};
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.tempo, Tempo::Normal);
//! let quick = EngineConfig::quick();
//! assert_eq!(quick.tempo, Tempo::HurryUp);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{GameError, Result};

/// Seconds in one quarter.
pub const QUARTER_SECONDS: u32 = 900;
/// Regulation length; there is no overtime.
pub const QUARTERS: u8 = 4;

/// How much game clock a play consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tempo {
    HurryUp,
    #[default]
    Normal,
    Slow,
}

impl Tempo {
    /// Clock runoff per play, in seconds.
    pub fn runoff_range(self) -> RangeInclusive<u32> {
        match self {
            Tempo::HurryUp => 15..=25,
            Tempo::Normal => 20..=35,
            Tempo::Slow => 35..=45,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tempo::HurryUp => "hurry-up",
            Tempo::Normal => "normal",
            Tempo::Slow => "slow",
        }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tempo {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hurry-up" | "hurry_up" | "hurryup" => Ok(Tempo::HurryUp),
            "normal" => Ok(Tempo::Normal),
            "slow" => Ok(Tempo::Slow),
            other => Err(GameError::InvalidConfig(format!("unknown tempo '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tempo at kickoff; the session can change it between plays.
    pub tempo: Tempo,
    /// Play ceiling for skip-to-end (기본: 500)
    pub skip_to_end_ceiling: u32,
    /// Play ceiling for skip-to-next-drive (기본: 50)
    pub skip_to_drive_ceiling: u32,
    pub timeouts_per_half: u8,
    /// Rating used for an empty position group.
    pub default_strength: f32,
    /// Pause live playback until the human side supplies a call.
    pub require_human_calls: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tempo: Tempo::Normal,
            skip_to_end_ceiling: 500,
            skip_to_drive_ceiling: 50,
            timeouts_per_half: 3,
            default_strength: 70.0,
            require_human_calls: true,
        }
    }
}

impl EngineConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Hurry-up pacing throughout; more plays per game.
    pub fn quick() -> Self {
        Self { tempo: Tempo::HurryUp, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.skip_to_end_ceiling == 0 {
            return Err(GameError::InvalidConfig("skip_to_end_ceiling must be > 0".into()));
        }
        if self.skip_to_drive_ceiling == 0 {
            return Err(GameError::InvalidConfig("skip_to_drive_ceiling must be > 0".into()));
        }
        if !(1.0..=100.0).contains(&self.default_strength) {
            return Err(GameError::InvalidConfig(format!(
                "default_strength must be within 1..=100, got {}",
                self.default_strength
            )));
        }
        Ok(())
    }
}
