//! Configuration for the radar display
//!
//! Loaded from a TOML file. Every section and field has a default, so a
//! file only needs to name what it changes.

use crate::constants::{
    DEFAULT_ACQUIRE_TIMEOUT_MS, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_SCALE,
    DEFAULT_SWEEP_INTERVAL_MS, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE,
};
use crate::error::{RadarError, Result};
use crate::projection::ProjectionParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RadarConfig {
    pub display: DisplayConfig,
    pub source: SourceConfig,
    pub run: RunConfig,
}

/// Window and projection settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Side of the square window in pixels
    pub size: u32,
    /// Pixels per meter
    pub scale: f64,
    /// Added to every beam angle. `-90` puts angle 0 at the top.
    pub rotation_degrees: f64,
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Simulated,
    Replay,
}

/// Where scans come from
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Directory of recorded sweeps, used by `replay`
    pub replay_dir: PathBuf,
    /// Pause between two sweeps of the producer
    pub sweep_interval_ms: u64,
    pub room_width_m: f32,
    pub room_height_m: f32,
    pub sensor_x_m: f32,
    pub sensor_y_m: f32,
    pub max_range_m: f32,
    /// Every n-th simulated ray gets no return. `0` disables.
    pub miss_every: usize,
}

/// Run loop settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Longest wait for a scan before the frame is skipped
    pub acquire_timeout_ms: u64,
    /// Pause after a skipped frame
    pub retry_backoff_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            scale: DEFAULT_SCALE,
            rotation_degrees: 0.,
            title: "LiDAR radar".to_string(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Simulated,
            replay_dir: PathBuf::from("scan"),
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            room_width_m: 4.,
            room_height_m: 3.,
            sensor_x_m: 1.5,
            sensor_y_m: 1.,
            max_range_m: 8.,
            miss_every: 7,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            acquire_timeout_ms: DEFAULT_ACQUIRE_TIMEOUT_MS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}

impl RadarConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: RadarConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.size == 0 || display.size > MAX_WINDOW_SIZE {
            return Err(RadarError::InvalidConfig(format!(
                "display.size must be between 1 and {MAX_WINDOW_SIZE}, got {}",
                display.size
            )));
        }
        if !display.scale.is_finite() || display.scale <= 0. {
            return Err(RadarError::InvalidConfig(format!(
                "display.scale must be a positive number, got {}",
                display.scale
            )));
        }
        if !display.rotation_degrees.is_finite() {
            return Err(RadarError::InvalidConfig(format!(
                "display.rotation_degrees must be finite, got {}",
                display.rotation_degrees
            )));
        }
        if self.run.acquire_timeout_ms == 0 {
            return Err(RadarError::InvalidConfig(
                "run.acquire_timeout_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Projection centered on the square window.
    pub fn projection(&self) -> ProjectionParams {
        let size = self.display.size;
        ProjectionParams::centered(size, size, self.display.scale, self.display.rotation_degrees)
    }
}

impl RunConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }
}
