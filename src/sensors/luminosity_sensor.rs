//! Simulated ambient light sensor.

use super::helpers::{ReadingGenerator, SimulatedSensor};
use super::MeasurementType;
use rand::Rng;
use rand::rngs::StdRng;

pub const MIN_LUX: f64 = 50.0;
pub const MAX_LUX: f64 = 600.0;

/// Uniform illuminance in `[MIN_LUX, MAX_LUX)`.
pub struct Luminosity;

impl ReadingGenerator for Luminosity {
    const KIND: MeasurementType = MeasurementType::Luminosity;

    fn sample(rng: &mut StdRng) -> f64 {
        rng.gen_range(MIN_LUX..MAX_LUX)
    }
}

/// Luminosity sensor.
///
/// Type alias for [`SimulatedSensor`] driven by the [`Luminosity`] generator.
pub type LuminositySensor = SimulatedSensor<Luminosity>;
