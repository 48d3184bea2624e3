//! Moving-average decorator.

use super::{SensorDecorator, forward_to_delegate};
use crate::error::{Result, RoomError};
use crate::sensors::{Sensor, SensorReading};
use log::debug;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Replaces each raw reading with the mean of the last `window` raw values.
///
/// Before `window` reads have happened the mean covers every value seen so
/// far. The smoothed reading keeps the delegate's sensor id and kind, gets a
/// fresh timestamp, and is pushed to the delegate's observers in addition to
/// the raw reading the delegate already published. A history observer on the
/// delegate therefore grows by two entries per smoothed read.
pub struct SmoothingSensorDecorator<S: Sensor> {
    delegate: S,
    window: NonZeroUsize,
    values: Mutex<VecDeque<f64>>,
}

impl<S: Sensor> SmoothingSensorDecorator<S> {
    /// Wrap `delegate`. Fails with [`RoomError::InvalidWindow`] if `window` is 0.
    pub fn new(delegate: S, window: usize) -> Result<Self> {
        let window = NonZeroUsize::new(window).ok_or(RoomError::InvalidWindow(window))?;
        Ok(Self {
            delegate,
            window,
            values: Mutex::new(VecDeque::with_capacity(window.get() + 1)),
        })
    }

    pub fn window(&self) -> usize {
        self.window.get()
    }

    /// Push a raw value and return the mean of the retained ones.
    fn push(&self, raw: f64) -> f64 {
        let mut values = self.values.lock();
        values.push_back(raw);
        if values.len() > self.window.get() {
            values.pop_front();
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}

impl<S: Sensor> Sensor for SmoothingSensorDecorator<S> {
    forward_to_delegate!();

    fn read(&self) -> SensorReading {
        let raw = self.delegate.read();
        let mean = self.push(raw.value());
        debug!(
            "[Smooth] {} raw={:.2} mean={:.2} (window {})",
            raw.sensor_id(),
            raw.value(),
            mean,
            self.window
        );

        let smoothed = SensorReading::new(raw.sensor_id(), raw.kind(), mean);
        self.notify_observers(&smoothed);
        smoothed
    }
}

impl<S: Sensor> SensorDecorator for SmoothingSensorDecorator<S> {
    type Inner = S;

    fn delegate(&self) -> &S {
        &self.delegate
    }

    fn into_inner(self) -> S {
        self.delegate
    }
}
