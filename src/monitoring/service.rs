//! Central observer: keeps the reading history and runs strategies.

use crate::sensors::{Sensor, SensorObserver, SensorReading};
use crate::strategy::ActionStrategy;
use log::{debug, warn};
use parking_lot::RwLock;
use std::sync::Arc;

/// Records every reading from the sensors it observes and evaluates the
/// registered strategies against it.
///
/// Sensors may be read concurrently from different threads, so history and
/// strategy list are lock-protected. Strategies run in registration order on
/// the thread that delivered the reading.
///
/// A strategy that returns an error is logged and skipped; the remaining
/// strategies still run and the sensor read is unaffected.
#[derive(Default)]
pub struct MonitoringService {
    history: RwLock<Vec<SensorReading>>,
    strategies: RwLock<Vec<Arc<dyn ActionStrategy>>>,
}

impl MonitoringService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_strategy(&self, strategy: Arc<dyn ActionStrategy>) {
        debug!("[Monitor] registered strategy {}", strategy.name());
        self.strategies.write().push(strategy);
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.read().len()
    }

    /// Point-in-time copy of the history. Later readings are not reflected.
    pub fn history(&self) -> Vec<SensorReading> {
        self.history.read().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    /// Append `reading` to the history, then apply every strategy to it.
    ///
    /// Returns the number of strategies that failed.
    pub fn process(&self, reading: &SensorReading) -> usize {
        self.history.write().push(reading.clone());

        // Clone the handles so strategies run without holding the lock.
        let strategies: Vec<Arc<dyn ActionStrategy>> = self.strategies.read().clone();
        let mut failures = 0;
        for strategy in &strategies {
            if let Err(e) = strategy.apply(reading) {
                failures += 1;
                warn!(
                    "[Monitor] strategy {} failed on {}: {}",
                    strategy.name(),
                    reading,
                    e
                );
            }
        }
        failures
    }
}

impl SensorObserver for MonitoringService {
    fn update(&self, source: &dyn Sensor, reading: &SensorReading) {
        debug!("[Monitor] {} -> {}", source.id(), reading);
        self.process(reading);
    }
}
