use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Demo configuration.
///
/// Every field has a default, so a JSON file only needs the keys it wants to
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Period of the sensor polling schedule.
    pub interval_ms: u64,
    /// How long the demo keeps running after sampling the decorated sensor.
    pub demo_duration_ms: u64,
    pub report_path: PathBuf,
    pub lux_threshold: f64,
    pub temp_threshold: f64,
    pub smoothing_window: usize,
    /// Reads of the decorated temperature chain taken alongside the schedule.
    pub sample_count: usize,
    pub sample_pause_ms: u64,
    /// Fixed RNG seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            demo_duration_ms: 3000,
            report_path: PathBuf::from("out").join("report.csv"),
            lux_threshold: 200.0,
            temp_threshold: 27.0,
            smoothing_window: 3,
            sample_count: 10,
            sample_pause_ms: 300,
            seed: None,
        }
    }
}

impl Config {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn demo_duration(&self) -> Duration {
        Duration::from_millis(self.demo_duration_ms)
    }

    pub fn sample_pause(&self) -> Duration {
        Duration::from_millis(self.sample_pause_ms)
    }
}
