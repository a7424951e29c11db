//! Standalone elevator dispatch simulation
//!
//! Everything here is synchronous and driven by the caller: a test, the
//! headless traffic driver, or a hardware layer pushing buttons and polling
//! state.

mod controller;
mod elevator;
mod floor_topology;
mod request_queue;
mod traffic;
mod types;

pub use controller::{BuildingController, ControllerError};
pub use elevator::Elevator;
pub use floor_topology::FloorTopology;
pub use request_queue::{QueueDirection, RequestQueue};
pub use traffic::{TrafficConfig, TrafficSim, TrafficStats};
pub use types::{Door, Floor, FloorNumber, Movement, INVALID_ID, LOAD_LIMIT};
