//! Smart room simulation library.
//!
//! Simulated sensors (temperature, presence, luminosity) produce randomized
//! readings; decorators smooth or log them; a monitoring observer records
//! history and runs threshold strategies that switch simulated devices; a
//! scheduler polls everything periodically and the history can be exported
//! as CSV.

pub mod config;
pub mod device;
pub mod error;
pub mod factory;
pub mod monitoring;
pub mod report;
pub mod room;
pub mod sensors;
pub mod simulation;
pub mod strategy;

pub use error::{Result, RoomError};
pub use room::SmartRoom;
