//! Reading one sensor repeatedly off the async runtime.

use crate::sensors::{Sensor, SensorReading};
use log::debug;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Read `sensor` `count` times on a blocking thread, pausing `pause`
/// between reads, and return the readings it produced.
///
/// Runs concurrently with a [`Scheduler`](super::Scheduler) polling other
/// sensors. Must be called from within a Tokio runtime.
pub fn run_sampling_loop<S>(
    sensor: S,
    count: usize,
    pause: Duration,
) -> JoinHandle<Vec<SensorReading>>
where
    S: Sensor + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut readings = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 {
                std::thread::sleep(pause);
            }
            let reading = sensor.read();
            debug!("[Sample] {}/{} {}", i + 1, count, reading);
            readings.push(reading);
        }
        readings
    })
}
