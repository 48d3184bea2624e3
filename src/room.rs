//! Smart room facade.
//!
//! Wires factories, sensors, devices, the monitoring observer, strategies
//! and the polling schedule behind one type.

use crate::device::Device;
use crate::error::{Result, RoomError};
use crate::factory::{DeviceFactory, SensorFactory};
use crate::monitoring::{LatestValueTable, MonitoringService};
use crate::report;
use crate::sensors::{MeasurementType, Sensor, SensorObserver, SensorReading};
use crate::simulation::{Scheduler, SensorSet};
use crate::strategy::ActionStrategy;
use log::info;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// A room full of simulated sensors and devices.
///
/// Every sensor added here is observed first by the latest-value table and
/// then by the monitoring service, so a strategy evaluating a reading already
/// sees that reading's value in the table.
pub struct SmartRoom {
    sensor_factory: SensorFactory,
    device_factory: DeviceFactory,
    sensors: SensorSet,
    devices: RwLock<HashMap<String, Arc<dyn Device>>>,
    monitoring: Arc<MonitoringService>,
    latest: Arc<LatestValueTable>,
    scheduler: Mutex<Option<Scheduler>>,
}

impl Default for SmartRoom {
    fn default() -> Self {
        Self::new()
    }
}

impl SmartRoom {
    pub fn new() -> Self {
        Self::with_sensor_factory(SensorFactory::new())
    }

    pub fn with_sensor_factory(sensor_factory: SensorFactory) -> Self {
        Self {
            sensor_factory,
            device_factory: DeviceFactory::new(),
            sensors: Arc::new(RwLock::new(Vec::new())),
            devices: RwLock::new(HashMap::new()),
            monitoring: Arc::new(MonitoringService::new()),
            latest: Arc::new(LatestValueTable::new()),
            scheduler: Mutex::new(None),
        }
    }

    /// Build a sensor by type name, wire it to the room's observers and
    /// register it for polling.
    pub fn add_sensor(&self, type_name: &str, id: &str) -> Result<Arc<dyn Sensor>> {
        let kind = SensorFactory::parse_kind(type_name)?;
        let mut sensors = self.sensors.write();
        if sensors.iter().any(|s| s.id() == id) {
            return Err(RoomError::DuplicateId(id.to_string()));
        }

        let sensor = self.sensor_factory.create_kind(kind, id);
        self.attach(sensor.as_ref());
        sensors.push(Arc::clone(&sensor));
        info!("[Room] added {} sensor {}", kind, id);
        Ok(sensor)
    }

    /// Register an already-built sensor (custom or decorated) like
    /// [`SmartRoom::add_sensor`] does.
    pub fn register_sensor(&self, sensor: Arc<dyn Sensor>) -> Result<()> {
        let mut sensors = self.sensors.write();
        if sensors.iter().any(|s| s.id() == sensor.id()) {
            return Err(RoomError::DuplicateId(sensor.id().to_string()));
        }

        self.attach(sensor.as_ref());
        info!("[Room] registered {} sensor {}", sensor.kind(), sensor.id());
        sensors.push(sensor);
        Ok(())
    }

    fn attach(&self, sensor: &dyn Sensor) {
        let latest: Arc<dyn SensorObserver> = self.latest.clone();
        let monitoring: Arc<dyn SensorObserver> = self.monitoring.clone();
        sensor.add_observer(&latest);
        sensor.add_observer(&monitoring);
    }

    /// Build a device by type name and register it under `id`.
    pub fn add_device(&self, type_name: &str, id: &str) -> Result<Arc<dyn Device>> {
        let kind = DeviceFactory::parse_kind(type_name)?;
        let mut devices = self.devices.write();
        if devices.contains_key(id) {
            return Err(RoomError::DuplicateId(id.to_string()));
        }

        let device = self.device_factory.create(kind.as_ref(), id)?;
        devices.insert(id.to_string(), Arc::clone(&device));
        info!("[Room] added {} {}", kind, id);
        Ok(device)
    }

    pub fn add_strategy<S: ActionStrategy + 'static>(&self, strategy: S) {
        self.monitoring.register_strategy(Arc::new(strategy));
    }

    /// Closure yielding the latest value observed for `kind` (0.0 before any).
    pub fn latest_of(&self, kind: MeasurementType) -> impl Fn() -> f64 + Send + Sync + use<> {
        self.latest.supplier(kind)
    }

    pub fn device(&self, id: &str) -> Result<Arc<dyn Device>> {
        self.devices
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RoomError::UnknownDevice(id.to_string()))
    }

    pub fn sensor(&self, id: &str) -> Option<Arc<dyn Sensor>> {
        self.sensors.read().iter().find(|s| s.id() == id).cloned()
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.read().len()
    }

    /// Read every registered sensor once, in registration order.
    pub fn read_all(&self) -> Vec<SensorReading> {
        let snapshot: Vec<Arc<dyn Sensor>> = self.sensors.read().clone();
        snapshot.iter().map(|sensor| sensor.read()).collect()
    }

    /// Start polling all sensors every `period`, replacing any running
    /// schedule. Must be called from within a Tokio runtime.
    pub fn schedule_read_all(&self, period: Duration) -> Result<()> {
        let scheduler = Scheduler::start(Arc::clone(&self.sensors), period)?;
        if let Some(previous) = self.scheduler.lock().replace(scheduler) {
            previous.stop();
        }
        Ok(())
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduler
            .lock()
            .as_ref()
            .is_some_and(Scheduler::is_running)
    }

    pub fn history(&self) -> Vec<SensorReading> {
        self.monitoring.history()
    }

    pub fn latest_values(&self) -> &Arc<LatestValueTable> {
        &self.latest
    }

    /// Write the current history to `path` as CSV.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        report::export_csv(&self.history(), path)
    }

    /// Stop the schedule and wait for its task to finish.
    pub async fn shutdown(&self) {
        let scheduler = self.scheduler.lock().take();
        if let Some(scheduler) = scheduler {
            scheduler.shutdown().await;
            info!("[Room] schedule stopped after {} tick(s)", scheduler.ticks());
        }
    }
}
