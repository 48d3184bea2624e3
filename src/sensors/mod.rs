//! Simulated room sensors.
//!
//! Every sensor produces a fresh [`SensorReading`] on [`Sensor::read`] and
//! pushes it to its registered [`SensorObserver`]s synchronously, in
//! registration order, before returning it to the caller.
//!
//! Sensors can be wrapped in decorators (see [`decorators`]) that alter or
//! tee the reading while keeping the wrapped sensor's identity and observer
//! wiring.

pub mod decorators;
pub mod helpers;
pub mod luminosity_sensor;
pub mod presence_sensor;
pub mod reading;
pub mod temperature_sensor;

pub use decorators::{LoggingSensorDecorator, SensorDecorator, SmoothingSensorDecorator};
pub use helpers::{ObserverList, ReadingGenerator, SimulatedSensor};
pub use luminosity_sensor::LuminositySensor;
pub use presence_sensor::PresenceSensor;
pub use reading::{MeasurementType, SensorReading};
pub use temperature_sensor::TemperatureSensor;

use std::sync::Arc;

/// Listener notified whenever a sensor it is registered on produces a reading.
///
/// Sensors hold observers weakly: registering does not keep the observer
/// alive, the caller owns it.
pub trait SensorObserver: Send + Sync {
    /// Called synchronously on the thread that invoked `read()`.
    fn update(&self, source: &dyn Sensor, reading: &SensorReading);
}

/// A source of readings.
///
/// Implemented by the simulated sensors and by every decorator, so decorated
/// and plain sensors are interchangeable.
pub trait Sensor: Send + Sync {
    fn id(&self) -> &str;

    fn kind(&self) -> MeasurementType;

    /// Produce a new reading and notify observers with it before returning.
    fn read(&self) -> SensorReading;

    /// Register an observer. The sensor keeps only a weak reference.
    fn add_observer(&self, observer: &Arc<dyn SensorObserver>);

    /// Deregister an observer. Unknown observers are ignored.
    fn remove_observer(&self, observer: &Arc<dyn SensorObserver>);

    /// Push a reading to every live observer, in registration order.
    fn notify_observers(&self, reading: &SensorReading);
}

impl<T: Sensor + ?Sized> Sensor for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn kind(&self) -> MeasurementType {
        (**self).kind()
    }

    fn read(&self) -> SensorReading {
        (**self).read()
    }

    fn add_observer(&self, observer: &Arc<dyn SensorObserver>) {
        (**self).add_observer(observer)
    }

    fn remove_observer(&self, observer: &Arc<dyn SensorObserver>) {
        (**self).remove_observer(observer)
    }

    fn notify_observers(&self, reading: &SensorReading) {
        (**self).notify_observers(reading)
    }
}

impl<T: Sensor + ?Sized> Sensor for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn kind(&self) -> MeasurementType {
        (**self).kind()
    }

    fn read(&self) -> SensorReading {
        (**self).read()
    }

    fn add_observer(&self, observer: &Arc<dyn SensorObserver>) {
        (**self).add_observer(observer)
    }

    fn remove_observer(&self, observer: &Arc<dyn SensorObserver>) {
        (**self).remove_observer(observer)
    }

    fn notify_observers(&self, reading: &SensorReading) {
        (**self).notify_observers(reading)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Sensors and observers with predictable behaviour for unit tests.

    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Sensor that replays a fixed list of values, then repeats the last one.
    pub struct ScriptedSensor {
        id: String,
        kind: MeasurementType,
        values: Mutex<VecDeque<f64>>,
        last: Mutex<f64>,
        observers: ObserverList,
    }

    impl ScriptedSensor {
        pub fn new(id: &str, kind: MeasurementType, values: &[f64]) -> Self {
            Self {
                id: id.to_string(),
                kind,
                values: Mutex::new(values.iter().copied().collect()),
                last: Mutex::new(0.0),
                observers: ObserverList::new(),
            }
        }
    }

    impl Sensor for ScriptedSensor {
        fn id(&self) -> &str {
            &self.id
        }

        fn kind(&self) -> MeasurementType {
            self.kind
        }

        fn read(&self) -> SensorReading {
            let value = match self.values.lock().pop_front() {
                Some(v) => {
                    *self.last.lock() = v;
                    v
                }
                None => *self.last.lock(),
            };
            let reading = SensorReading::new(self.id.clone(), self.kind, value);
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

    /// Observer that records every reading it receives.
    #[derive(Default)]
    pub struct RecordingObserver {
        pub seen: Mutex<Vec<(String, SensorReading)>>,
    }

    impl RecordingObserver {
        pub fn values(&self) -> Vec<f64> {
            self.seen.lock().iter().map(|(_, r)| r.value()).collect()
        }

        pub fn count(&self) -> usize {
            self.seen.lock().len()
        }
    }

    impl SensorObserver for RecordingObserver {
        fn update(&self, source: &dyn Sensor, reading: &SensorReading) {
            self.seen
                .lock()
                .push((source.id().to_string(), reading.clone()));
        }
    }
}
