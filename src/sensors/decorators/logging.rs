//! Pass-through decorator that writes every reading to the log.

use super::{SensorDecorator, forward_to_delegate};
use crate::sensors::{Sensor, SensorReading};
use log::Level;

/// Logs each reading returned by the delegate and passes it through unchanged.
///
/// Does not notify observers itself; the delegate already did. Whether the
/// logged values are raw or smoothed depends on what it wraps.
pub struct LoggingSensorDecorator<S: Sensor> {
    delegate: S,
    level: Level,
}

impl<S: Sensor> LoggingSensorDecorator<S> {
    /// Wrap `delegate`, logging at `info` level.
    pub fn new(delegate: S) -> Self {
        Self::with_level(delegate, Level::Info)
    }

    pub fn with_level(delegate: S, level: Level) -> Self {
        Self { delegate, level }
    }
}

impl<S: Sensor> Sensor for LoggingSensorDecorator<S> {
    forward_to_delegate!();

    fn read(&self) -> SensorReading {
        let reading = self.delegate.read();
        log::log!(self.level, "[Log] {}", reading);
        reading
    }
}

impl<S: Sensor> SensorDecorator for LoggingSensorDecorator<S> {
    type Inner = S;

    fn delegate(&self) -> &S {
        &self.delegate
    }

    fn into_inner(self) -> S {
        self.delegate
    }
}
