//! Light control from presence and ambient light.

use super::ActionStrategy;
use crate::device::Device;
use crate::error::Result;
use crate::sensors::presence_sensor::PRESENT;
use crate::sensors::{MeasurementType, SensorReading};
use std::sync::Arc;

/// Turns the light on when someone is present and the room is darker than
/// `lux_threshold`; turns it off on every other presence reading.
///
/// The luminosity comes from `latest_lux`, usually
/// [`LatestValueTable::supplier`](crate::monitoring::LatestValueTable::supplier),
/// since it is produced by a different sensor. Exactly `lux_threshold` counts
/// as lit enough.
pub struct PresenceLightStrategy<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    light: Arc<dyn Device>,
    latest_lux: F,
    lux_threshold: f64,
}

impl<F> PresenceLightStrategy<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    pub fn new(light: Arc<dyn Device>, latest_lux: F, lux_threshold: f64) -> Self {
        Self {
            light,
            latest_lux,
            lux_threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.lux_threshold
    }
}

impl<F> ActionStrategy for PresenceLightStrategy<F>
where
    F: Fn() -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        "presence-light"
    }

    fn apply(&self, reading: &SensorReading) -> Result<()> {
        if reading.kind() != MeasurementType::Presence {
            return Ok(());
        }
        let present = reading.value() >= PRESENT;
        let dark = (self.latest_lux)() < self.lux_threshold;
        self.light.set(present && dark);
        Ok(())
    }
}
