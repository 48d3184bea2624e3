//! Cooling fan.

use super::{DeviceKind, OnOffDevice};

/// Fan actuator.
///
/// Type alias for [`OnOffDevice`]; build one with [`fan`].
pub type Fan = OnOffDevice;

/// Create a fan that starts switched off.
pub fn fan(id: impl Into<String>) -> Fan {
    OnOffDevice::new(DeviceKind::Fan, id)
}
