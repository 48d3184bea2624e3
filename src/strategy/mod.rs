//! Rules that turn readings into device actions.
//!
//! Each strategy looks at the reading's measurement type first and ignores
//! anything that is not its subject. When it does act, it always drives its
//! device to a definite state (no "leave unchanged", no hysteresis), so a
//! value hovering around a threshold makes the device flip back and forth.

pub mod cooling;
pub mod presence_light;

pub use cooling::CoolingStrategy;
pub use presence_light::PresenceLightStrategy;

use crate::error::Result;
use crate::sensors::SensorReading;

/// A rule evaluated against every reading the monitoring service receives.
pub trait ActionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Evaluate the rule for `reading`, switching devices as needed.
    fn apply(&self, reading: &SensorReading) -> Result<()>;
}
