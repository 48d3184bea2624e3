//! Sensor readings and the measurement types they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// What a sensor measures.
///
/// Parses case-insensitively from its lowercase name (`"temperature"`,
/// `"presence"`, `"luminosity"`) and prints back in lowercase, which is also
/// the form written to CSV reports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    Temperature,
    Presence,
    Luminosity,
}

impl MeasurementType {
    /// Unit suffix for display. Presence is unitless.
    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementType::Temperature => "°C",
            MeasurementType::Presence => "",
            MeasurementType::Luminosity => "lux",
        }
    }
}

/// One timestamped sample produced by a sensor.
///
/// Immutable once built: the timestamp is fixed at creation and a new
/// reading is produced on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    sensor_id: String,
    kind: MeasurementType,
    value: f64,
    timestamp: DateTime<Utc>,
}

impl SensorReading {
    /// Create a reading stamped with the current time.
    pub fn new(sensor_id: impl Into<String>, kind: MeasurementType, value: f64) -> Self {
        Self::at(sensor_id, kind, value, Utc::now())
    }

    /// Create a reading with an explicit timestamp.
    pub fn at(
        sensor_id: impl Into<String>,
        kind: MeasurementType,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            kind,
            value,
            timestamp,
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn kind(&self) -> MeasurementType {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}={:.2}{} @ {}",
            self.sensor_id,
            self.kind,
            self.value,
            self.kind.unit(),
            self.timestamp.to_rfc3339()
        )
    }
}
