//! CSV report of the reading history.
//!
//! Layout: a `timestamp,sensorId,type,value` header, then one row per
//! reading in history order. Timestamps are RFC 3339 UTC with microsecond
//! precision; values are written with two decimals.

use crate::error::{Result, RoomError};
use crate::sensors::{MeasurementType, SensorReading};
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["timestamp", "sensorId", "type", "value"];

/// One parsed report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "sensorId")]
    pub sensor_id: String,
    #[serde(rename = "type")]
    pub kind: MeasurementType,
    pub value: f64,
}

impl ReportRow {
    pub fn into_reading(self) -> SensorReading {
        SensorReading::at(self.sensor_id, self.kind, self.value, self.timestamp)
    }
}

/// Write `history` as CSV to any writer.
pub fn write_csv<W: Write>(history: &[SensorReading], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for reading in history {
        let timestamp = reading
            .timestamp()
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        let value = format!("{:.2}", reading.value());
        writer.write_record([
            timestamp.as_str(),
            reading.sensor_id(),
            reading.kind().as_ref(),
            value.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Export `history` to `path`, creating missing parent directories.
///
/// Returns the path written.
pub fn export_csv(history: &[SensorReading], path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(path)?;
    write_csv(history, file)?;
    info!("[Report] wrote {} reading(s) to {}", history.len(), path.display());
    Ok(path.to_path_buf())
}

/// Load a report written by [`export_csv`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<ReportRow>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    if headers.iter().ne(HEADER) {
        return Err(RoomError::InvalidReport {
            row: 0,
            reason: format!("unexpected header: {}", headers.iter().collect::<Vec<_>>().join(",")),
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<ReportRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
