//! Fan control from temperature readings.

use super::ActionStrategy;
use crate::device::Device;
use crate::error::Result;
use crate::sensors::{MeasurementType, SensorReading};
use std::sync::Arc;

/// Turns the fan on at or above `temp_threshold`, off below it.
pub struct CoolingStrategy {
    fan: Arc<dyn Device>,
    temp_threshold: f64,
}

impl CoolingStrategy {
    pub fn new(fan: Arc<dyn Device>, temp_threshold: f64) -> Self {
        Self {
            fan,
            temp_threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.temp_threshold
    }
}

impl ActionStrategy for CoolingStrategy {
    fn name(&self) -> &str {
        "cooling"
    }

    fn apply(&self, reading: &SensorReading) -> Result<()> {
        if reading.kind() != MeasurementType::Temperature {
            return Ok(());
        }
        self.fan.set(reading.value() >= self.temp_threshold);
        Ok(())
    }
}
