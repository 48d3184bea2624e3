//! Simulated on/off actuators.
//!
//! Devices are driven by strategies and read by the demo. All state is
//! atomic, so a device can be shared across threads behind an `Arc`.

pub mod fan;
pub mod light;
pub mod on_off_device;

pub use fan::Fan;
pub use light::Light;
pub use on_off_device::OnOffDevice;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Kinds of device the factory can build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Fan,
}

/// A named boolean actuator.
pub trait Device: Send + Sync {
    fn id(&self) -> &str;

    fn kind(&self) -> DeviceKind;

    /// Switch on. Idempotent.
    fn on(&self);

    /// Switch off. Idempotent.
    fn off(&self);

    fn is_on(&self) -> bool;

    /// Number of times the state actually changed.
    fn switch_count(&self) -> u32;

    /// Switch to `on`, calling [`Device::on`] or [`Device::off`].
    fn set(&self, on: bool) {
        if on { self.on() } else { self.off() }
    }
}
