//! Building blocks shared by the concrete sensors.

pub mod observer_list;
pub mod simulated_sensor;

pub use observer_list::ObserverList;
pub use simulated_sensor::{ReadingGenerator, SimulatedSensor};
