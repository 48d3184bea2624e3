//! Drives sensors over time.
//!
//! The [`Scheduler`] polls every registered sensor at a fixed period on a
//! Tokio task; [`run_sampling_loop`] reads one (typically decorated) sensor
//! on a blocking thread alongside it.

pub mod sampling;
pub mod scheduler;

pub use sampling::run_sampling_loop;
pub use scheduler::{Scheduler, SensorSet};
