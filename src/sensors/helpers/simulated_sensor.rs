//! Generic randomized sensor.
//!
//! A [`SimulatedSensor`] pairs an id and an observer list with a
//! [`ReadingGenerator`] that decides the value range. The concrete sensors
//! (temperature, presence, luminosity) are type aliases over this struct.

use super::observer_list::ObserverList;
use crate::sensors::{MeasurementType, Sensor, SensorObserver, SensorReading};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::marker::PhantomData;
use std::sync::Arc;

/// Value generation rule for one kind of simulated sensor.
pub trait ReadingGenerator: Send + Sync + 'static {
    const KIND: MeasurementType;

    /// Draw one value. Never fails.
    fn sample(rng: &mut StdRng) -> f64;
}

/// Thread-safe simulated sensor.
///
/// Each instance owns its own RNG, so independent sensors can be read from
/// different threads at the same time.
pub struct SimulatedSensor<G: ReadingGenerator> {
    id: String,
    rng: Mutex<StdRng>,
    observers: ObserverList,
    _generator: PhantomData<fn() -> G>,
}

impl<G: ReadingGenerator> SimulatedSensor<G> {
    /// Create a sensor seeded from OS entropy.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_rng(id, StdRng::from_entropy())
    }

    /// Create a sensor with a fixed seed, producing a reproducible sequence.
    pub fn with_seed(id: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(id: impl Into<String>, rng: StdRng) -> Self {
        Self {
            id: id.into(),
            rng: Mutex::new(rng),
            observers: ObserverList::new(),
            _generator: PhantomData,
        }
    }

    /// Number of live observers registered on this sensor.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<G: ReadingGenerator> Sensor for SimulatedSensor<G> {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> MeasurementType {
        G::KIND
    }

    fn read(&self) -> SensorReading {
        // Release the RNG before notifying; observers may take their own locks.
        let value = G::sample(&mut self.rng.lock());
        let reading = SensorReading::new(self.id.clone(), G::KIND, value);
        self.notify_observers(&reading);
        reading
    }

    fn add_observer(&self, observer: &Arc<dyn SensorObserver>) {
        self.observers.add(observer);
    }

    fn remove_observer(&self, observer: &Arc<dyn SensorObserver>) {
        self.observers.remove(observer);
    }

    fn notify_observers(&self, reading: &SensorReading) {
        self.observers.notify(self, reading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::test_support::RecordingObserver;

    struct Constant;

    impl ReadingGenerator for Constant {
        const KIND: MeasurementType = MeasurementType::Temperature;

        fn sample(_rng: &mut StdRng) -> f64 {
            42.0
        }
    }

    #[test]
    fn test_read_notifies_before_returning() {
        let sensor = SimulatedSensor::<Constant>::new("C1");
        let observer = Arc::new(RecordingObserver::default());
        let observer_dyn: Arc<dyn SensorObserver> = observer.clone();
        sensor.add_observer(&observer_dyn);

        let reading = sensor.read();
        let seen = observer.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "C1");
        assert_eq!(seen[0].1, reading);
    }

    #[test]
    fn test_removed_observer_stops_receiving() {
        let sensor = SimulatedSensor::<Constant>::new("C1");
        let observer = Arc::new(RecordingObserver::default());
        let observer_dyn: Arc<dyn SensorObserver> = observer.clone();
        sensor.add_observer(&observer_dyn);
        sensor.read();
        sensor.remove_observer(&observer_dyn);
        sensor.read();

        assert_eq!(observer.count(), 1);
        assert_eq!(sensor.observer_count(), 0);
    }

    #[test]
    fn test_identity() {
        let sensor = SimulatedSensor::<Constant>::with_seed("C9", 7);
        assert_eq!(sensor.id(), "C9");
        assert_eq!(sensor.kind(), MeasurementType::Temperature);
        assert_eq!(sensor.read().value(), 42.0);
    }
}
