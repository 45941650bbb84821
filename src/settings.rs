//! Scenario settings
//!
//! Read from a JSON file; any missing field falls back to the intro scenario.

use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::FrameClock;
use crate::consts::*;
use crate::error::SimError;
use crate::sim::{AxisMask, LaunchParams};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Launch parameters as they appear in the settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchSettings {
    /// Launch speed (m/s)
    pub speed: f64,
    /// Launch angle above horizontal (degrees)
    pub angle_deg: f64,
    /// Gravitational acceleration magnitude (m/s²), pointing down
    pub gravity: f64,
    /// Launch point
    pub origin: [f64; 3],
    /// Animation speed multiplier applied to every frame delta
    pub time_scale: f64,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            speed: INTRO_SPEED,
            angle_deg: INTRO_ANGLE_DEG,
            gravity: GRAVITY,
            origin: [0.0; 3],
            time_scale: INTRO_TIME_SCALE,
        }
    }
}

impl LaunchSettings {
    pub fn params(&self, mask: AxisMask) -> LaunchParams {
        LaunchParams::new(self.speed, self.angle_deg)
            .origin(DVec3::from_array(self.origin))
            .acceleration(DVec3::new(0.0, -self.gravity, 0.0))
            .time_scale(self.time_scale)
            .mask(mask)
    }
}

/// Frame pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    pub fps: f64,
    /// Relative frame-time jitter in [0, 1); 0 gives a fixed clock
    pub jitter: f64,
    pub seed: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            jitter: 0.0,
            seed: 0,
        }
    }
}

impl ClockSettings {
    pub fn build(&self) -> Result<FrameClock, SimError> {
        FrameClock::jittered(self.fps, self.jitter, self.seed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub launch: LaunchSettings,
    pub clock: ClockSettings,
    /// Real time the scene waits after launching (seconds)
    pub wait_secs: f64,
    /// Also fly horizontal-only and vertical-only copies
    pub variants: bool,
    /// Record every Nth frame into the trace (0 disables sampling)
    pub sample_every: u32,
}

impl Default for Settings {
    /// Intro scenario: 35 m/s at 45°, animation speed 1.5, ten second wait
    fn default() -> Self {
        Self {
            launch: LaunchSettings::default(),
            clock: ClockSettings::default(),
            wait_secs: INTRO_WAIT_SECS,
            variants: false,
            sample_every: 1,
        }
    }
}

impl Settings {
    /// Parse settings; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise (or on failure) use the intro scenario
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
