//! Builds sensors and devices from their type names.
//!
//! Type names are matched case-insensitively. Anything else fails with an
//! invalid-argument error and builds nothing.

use crate::device::{Device, DeviceKind, OnOffDevice};
use crate::error::{Result, RoomError};
use crate::sensors::{
    LuminositySensor, MeasurementType, PresenceSensor, Sensor, TemperatureSensor,
};
use std::str::FromStr;
use std::sync::Arc;
use xxhash_rust::xxh64::xxh64;

/// Creates simulated sensors: `"temperature"`, `"presence"`, `"luminosity"`.
#[derive(Debug, Default, Clone)]
pub struct SensorFactory {
    seed: Option<u64>,
}

impl SensorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose sensors are seeded deterministically from `seed` and
    /// the sensor id, so runs are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn parse_kind(type_name: &str) -> Result<MeasurementType> {
        MeasurementType::from_str(type_name.trim())
            .map_err(|_| RoomError::UnknownSensorType(type_name.to_string()))
    }

    pub fn create(&self, type_name: &str, id: &str) -> Result<Arc<dyn Sensor>> {
        let kind = Self::parse_kind(type_name)?;
        Ok(self.create_kind(kind, id))
    }

    pub fn create_kind(&self, kind: MeasurementType, id: &str) -> Arc<dyn Sensor> {
        match self.seed {
            Some(seed) => {
                let seed = xxh64(id.as_bytes(), seed);
                match kind {
                    MeasurementType::Temperature => {
                        Arc::new(TemperatureSensor::with_seed(id, seed))
                    }
                    MeasurementType::Presence => Arc::new(PresenceSensor::with_seed(id, seed)),
                    MeasurementType::Luminosity => {
                        Arc::new(LuminositySensor::with_seed(id, seed))
                    }
                }
            }
            None => match kind {
                MeasurementType::Temperature => Arc::new(TemperatureSensor::new(id)),
                MeasurementType::Presence => Arc::new(PresenceSensor::new(id)),
                MeasurementType::Luminosity => Arc::new(LuminositySensor::new(id)),
            },
        }
    }
}

/// Creates devices: `"light"`, `"fan"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeviceFactory;

impl DeviceFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_kind(type_name: &str) -> Result<DeviceKind> {
        DeviceKind::from_str(type_name.trim())
            .map_err(|_| RoomError::UnknownDeviceType(type_name.to_string()))
    }

    pub fn create(&self, type_name: &str, id: &str) -> Result<Arc<dyn Device>> {
        let kind = Self::parse_kind(type_name)?;
        Ok(Arc::new(OnOffDevice::new(kind, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_every_sensor_type() {
        let factory = SensorFactory::new();
        for (name, kind) in [
            ("temperature", MeasurementType::Temperature),
            ("presence", MeasurementType::Presence),
            ("luminosity", MeasurementType::Luminosity),
        ] {
            let sensor = factory.create(name, "S1").unwrap();
            assert_eq!(sensor.kind(), kind);
            assert_eq!(sensor.id(), "S1");
            assert_eq!(sensor.read().kind(), kind);
        }
    }

    #[test]
    fn test_type_names_are_case_insensitive() {
        let factory = SensorFactory::new();
        assert!(factory.create("Temperature", "T1").is_ok());
        assert!(DeviceFactory::new().create("FAN", "F1").is_ok());
    }

    #[test]
    fn test_unknown_sensor_type_fails() {
        let err = SensorFactory::new().create("humidity", "H1").err().unwrap();
        assert!(matches!(err, RoomError::UnknownSensorType(ref name) if name == "humidity"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_unknown_device_type_fails() {
        let err = DeviceFactory::new().create("heater", "H1").err().unwrap();
        assert!(matches!(err, RoomError::UnknownDeviceType(_)));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_creates_devices_switched_off() {
        let factory = DeviceFactory::new();
        let light = factory.create("light", "L1").unwrap();
        let fan = factory.create("fan", "F1").unwrap();
        assert_eq!(light.kind(), DeviceKind::Light);
        assert_eq!(fan.kind(), DeviceKind::Fan);
        assert!(!light.is_on() && !fan.is_on());
    }

    #[test]
    fn test_seeded_factory_is_reproducible() {
        let a = SensorFactory::seeded(11).create("temperature", "T1").unwrap();
        let b = SensorFactory::seeded(11).create("temperature", "T1").unwrap();
        let c = SensorFactory::seeded(11).create("temperature", "T2").unwrap();
        let first: Vec<f64> = (0..5).map(|_| a.read().value()).collect();
        let second: Vec<f64> = (0..5).map(|_| b.read().value()).collect();
        let other: Vec<f64> = (0..5).map(|_| c.read().value()).collect();
        assert_eq!(first, second);
        assert_ne!(first, other);

        let reseeded = SensorFactory::seeded(12).create("temperature", "T1").unwrap();
        let reseeded: Vec<f64> = (0..5).map(|_| reseeded.read().value()).collect();
        assert_ne!(first, reseeded);
    }
}
