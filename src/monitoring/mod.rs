//! Observers that record readings and drive strategies.

pub mod latest_values;
pub mod service;

pub use latest_values::LatestValueTable;
pub use service::MonitoringService;
