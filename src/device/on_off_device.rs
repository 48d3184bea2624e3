//! Generic binary actuator state.
//!
//! Provides thread-safe on/off state that strategies write from whichever
//! thread delivered the reading, and that the demo reads at the end.

use super::{Device, DeviceKind};
use log::info;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Thread-safe on/off device.
///
/// The switch count tracks actual state changes, so repeated `on()` calls
/// leave it untouched while a flip from off to on bumps it.
pub struct OnOffDevice {
    id: String,
    kind: DeviceKind,
    state: AtomicBool,
    version: AtomicU32,
}

impl OnOffDevice {
    /// Create a device that starts switched off.
    pub fn new(kind: DeviceKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            state: AtomicBool::new(false),
            version: AtomicU32::new(0),
        }
    }

    fn store(&self, value: bool) {
        let old = self.state.swap(value, Ordering::SeqCst);
        if old != value {
            self.version.fetch_add(1, Ordering::SeqCst);
            info!("[Device] {} {} switched {}", self.kind, self.id, on_off(value));
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

impl Device for OnOffDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> DeviceKind {
        self.kind
    }

    fn on(&self) {
        self.store(true);
    }

    fn off(&self) {
        self.store(false);
    }

    fn is_on(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    fn switch_count(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }
}

impl fmt::Display for OnOffDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}, on={}}}", self.kind, self.id, self.is_on())
    }
}
