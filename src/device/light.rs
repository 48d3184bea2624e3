//! Room light.

use super::{DeviceKind, OnOffDevice};

/// Light actuator.
///
/// Type alias for [`OnOffDevice`]; build one with [`light`].
pub type Light = OnOffDevice;

/// Create a light that starts switched off.
pub fn light(id: impl Into<String>) -> Light {
    OnOffDevice::new(DeviceKind::Light, id)
}
