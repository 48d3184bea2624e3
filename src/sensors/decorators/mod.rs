//! Sensor decorators.
//!
//! A decorator wraps exactly one delegate sensor and implements [`Sensor`]
//! itself. Identity and observer registration are forwarded unchanged to the
//! delegate, so observers registered before or after wrapping keep firing;
//! only `read()` is intercepted.
//!
//! Decorators take their delegate by value (an owned sensor, a `Box`, or a
//! shared `Arc`). A decorator does not exist until its delegate does, so a
//! chain can never loop back on itself.
//!
//! ```ignore
//! let temp = Arc::new(TemperatureSensor::new("T1"));
//! let chain = LoggingSensorDecorator::new(SmoothingSensorDecorator::new(temp, 3)?);
//! let smoothed = chain.read();
//! ```

use super::Sensor;

/// A sensor that wraps another sensor.
pub trait SensorDecorator: Sensor {
    type Inner: Sensor;

    /// The wrapped sensor.
    fn delegate(&self) -> &Self::Inner;

    /// Remove this layer and return the wrapped sensor.
    fn into_inner(self) -> Self::Inner
    where
        Self: Sized;
}

/// Expands to the `Sensor` methods every decorator forwards verbatim to
/// `self.delegate`.
macro_rules! forward_to_delegate {
    () => {
        fn id(&self) -> &str {
            self.delegate.id()
        }

        fn kind(&self) -> $crate::sensors::MeasurementType {
            self.delegate.kind()
        }

        fn add_observer(
            &self,
            observer: &::std::sync::Arc<dyn $crate::sensors::SensorObserver>,
        ) {
            self.delegate.add_observer(observer)
        }

        fn remove_observer(
            &self,
            observer: &::std::sync::Arc<dyn $crate::sensors::SensorObserver>,
        ) {
            self.delegate.remove_observer(observer)
        }

        fn notify_observers(&self, reading: &$crate::sensors::SensorReading) {
            self.delegate.notify_observers(reading)
        }
    };
}

pub(crate) use forward_to_delegate;

pub mod logging;
pub mod smoothing;

pub use logging::LoggingSensorDecorator;
pub use smoothing::SmoothingSensorDecorator;
