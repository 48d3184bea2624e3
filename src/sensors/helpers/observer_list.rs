//! Weak, ordered observer registry shared by all concrete sensors.
//!
//! Sensors do not own their observers. The list keeps `Weak` handles and
//! skips any observer whose owner has gone away, pruning it on the next
//! notification.

use crate::sensors::{Sensor, SensorObserver, SensorReading};
use log::debug;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// Thread-safe list of observers, notified in registration order.
///
/// Registering the same observer twice yields two notifications per
/// reading; removing it drops every registration.
#[derive(Default)]
pub struct ObserverList {
    observers: RwLock<Vec<Weak<dyn SensorObserver>>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, observer: &Arc<dyn SensorObserver>) {
        self.observers.write().push(Arc::downgrade(observer));
    }

    pub fn remove(&self, observer: &Arc<dyn SensorObserver>) {
        let target = Arc::as_ptr(observer) as *const ();
        self.observers
            .write()
            .retain(|weak| weak.as_ptr() as *const () != target);
    }

    /// Number of registrations whose observer is still alive.
    pub fn len(&self) -> usize {
        self.observers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify every live observer with `reading`.
    ///
    /// The list is snapshotted first, so observers may register or
    /// deregister from inside `update` without deadlocking.
    pub fn notify(&self, source: &dyn Sensor, reading: &SensorReading) {
        let snapshot: Vec<Weak<dyn SensorObserver>> = self.observers.read().clone();
        let mut stale = false;

        for weak in &snapshot {
            match weak.upgrade() {
                Some(observer) => observer.update(source, reading),
                None => stale = true,
            }
        }

        if stale {
            let mut observers = self.observers.write();
            let before = observers.len();
            observers.retain(|weak| weak.strong_count() > 0);
            debug!(
                "[{}] pruned {} dropped observer(s)",
                source.id(),
                before - observers.len()
            );
        }
    }
}
