//! Simulated room thermometer.

use super::helpers::{ReadingGenerator, SimulatedSensor};
use super::MeasurementType;
use rand::Rng;
use rand::rngs::StdRng;

/// Lowest temperature the simulation produces (°C).
pub const MIN_CELSIUS: f64 = 20.0;
/// Upper bound (exclusive) of simulated temperatures (°C).
pub const MAX_CELSIUS: f64 = 35.0;

/// Uniform temperature in `[MIN_CELSIUS, MAX_CELSIUS)`.
pub struct Temperature;

impl ReadingGenerator for Temperature {
    const KIND: MeasurementType = MeasurementType::Temperature;

    fn sample(rng: &mut StdRng) -> f64 {
        rng.gen_range(MIN_CELSIUS..MAX_CELSIUS)
    }
}

/// Temperature sensor.
///
/// Type alias for [`SimulatedSensor`] driven by the [`Temperature`] generator.
pub type TemperatureSensor = SimulatedSensor<Temperature>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Sensor;

    #[test]
    fn test_values_stay_in_range() {
        let sensor = TemperatureSensor::with_seed("T1", 1);
        for _ in 0..500 {
            let reading = sensor.read();
            assert_eq!(reading.kind(), MeasurementType::Temperature);
            assert!((MIN_CELSIUS..MAX_CELSIUS).contains(&reading.value()));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = TemperatureSensor::with_seed("T1", 99);
        let b = TemperatureSensor::with_seed("T2", 99);
        for _ in 0..10 {
            assert_eq!(a.read().value(), b.read().value());
        }
    }
}
