//! Simulated occupancy detector.

use super::helpers::{ReadingGenerator, SimulatedSensor};
use super::MeasurementType;
use rand::Rng;
use rand::rngs::StdRng;

/// Value reported when someone is in the room.
pub const PRESENT: f64 = 1.0;
/// Value reported when the room is empty.
pub const ABSENT: f64 = 0.0;

/// Presence or absence with equal probability.
pub struct Presence;

impl ReadingGenerator for Presence {
    const KIND: MeasurementType = MeasurementType::Presence;

    fn sample(rng: &mut StdRng) -> f64 {
        if rng.gen_bool(0.5) { PRESENT } else { ABSENT }
    }
}

/// Presence sensor.
///
/// Type alias for [`SimulatedSensor`] driven by the [`Presence`] generator.
pub type PresenceSensor = SimulatedSensor<Presence>;
