//! Runtime configuration read from the environment.
//!
//! Gameplay tuning lives in `skirmish_core::constants`; this is only what a
//! host may change per run.

use std::env;
use std::fmt;
use std::time::Duration;

use skirmish_core::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use skirmish_core::enums::WeaponType;
use skirmish_core::types::Viewport;
use skirmish_sim::SimConfig;

pub const VIEWPORT_WIDTH_VAR: &str = "SKIRMISH_VIEWPORT_WIDTH";
pub const VIEWPORT_HEIGHT_VAR: &str = "SKIRMISH_VIEWPORT_HEIGHT";
pub const FRAME_RATE_VAR: &str = "SKIRMISH_FRAME_RATE";
pub const RUN_FRAMES_VAR: &str = "SKIRMISH_RUN_FRAMES";

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_RUN_FRAMES: u64 = 180;
pub const MAX_FRAME_RATE: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The variable is set but does not parse.
    Invalid { var: &'static str, value: String },
    /// The variable parses but is outside the accepted range.
    OutOfRange { var: &'static str, value: String },
    UnknownWeapon(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { var, value } => write!(f, "{var} is not a valid number: {value:?}"),
            Self::OutOfRange { var, value } => write!(f, "{var} is out of range: {value}"),
            Self::UnknownWeapon(name) => {
                write!(f, "unknown weapon {name:?} (expected \"ranged\" or \"melee\")")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub viewport: Viewport,
    pub frame_rate: u32,
    /// Frames the scripted session runs before shutting down.
    pub run_frames: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            run_frames: DEFAULT_RUN_FRAMES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the config from any variable source. Unset variables fall back
    /// to their defaults; set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let width = parse_var(&lookup, VIEWPORT_WIDTH_VAR, DEFAULT_VIEWPORT_WIDTH)?;
        let height = parse_var(&lookup, VIEWPORT_HEIGHT_VAR, DEFAULT_VIEWPORT_HEIGHT)?;
        for (var, value) in [(VIEWPORT_WIDTH_VAR, width), (VIEWPORT_HEIGHT_VAR, height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    var,
                    value: value.to_string(),
                });
            }
        }

        let frame_rate = parse_var(&lookup, FRAME_RATE_VAR, DEFAULT_FRAME_RATE)?;
        if frame_rate == 0 || frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::OutOfRange {
                var: FRAME_RATE_VAR,
                value: frame_rate.to_string(),
            });
        }

        let run_frames = parse_var(&lookup, RUN_FRAMES_VAR, DEFAULT_RUN_FRAMES)?;

        Ok(Self {
            viewport: Viewport::new(width, height),
            frame_rate,
            run_frames,
        })
    }

    /// Wall-clock time between frames.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            viewport: self.viewport,
            ..SimConfig::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

/// Parse the weapon named on the command line.
pub fn parse_weapon(arg: &str) -> Result<WeaponType, ConfigError> {
    match arg.trim().to_ascii_lowercase().as_str() {
        "ranged" | "gun" => Ok(WeaponType::Ranged),
        "melee" | "sword" => Ok(WeaponType::Melee),
        _ => Err(ConfigError::UnknownWeapon(arg.to_string())),
    }
}
