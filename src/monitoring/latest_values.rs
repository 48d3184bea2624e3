//! Per-measurement-type cache of the most recent value.
//!
//! Strategies that need another sensor's context (the presence/light rule
//! needs the current luminosity) read it from here.

use crate::sensors::{MeasurementType, Sensor, SensorObserver, SensorReading};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe map from measurement type to the last observed value.
#[derive(Default)]
pub struct LatestValueTable {
    values: RwLock<HashMap<MeasurementType, f64>>,
}

impl LatestValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value seen for `kind`, or `None` before the first reading.
    pub fn get(&self, kind: MeasurementType) -> Option<f64> {
        self.values.read().get(&kind).copied()
    }

    /// Last value seen for `kind`, defaulting to 0.0.
    pub fn latest(&self, kind: MeasurementType) -> f64 {
        self.get(kind).unwrap_or(0.0)
    }

    pub fn record(&self, reading: &SensorReading) {
        self.values.write().insert(reading.kind(), reading.value());
    }

    /// Closure returning the current latest value for `kind` on every call.
    pub fn supplier(
        self: &Arc<Self>,
        kind: MeasurementType,
    ) -> impl Fn() -> f64 + Send + Sync + use<> {
        let table = Arc::clone(self);
        move || table.latest(kind)
    }
}

impl SensorObserver for LatestValueTable {
    fn update(&self, _source: &dyn Sensor, reading: &SensorReading) {
        self.record(reading);
    }
}
