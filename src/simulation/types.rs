//! Core types for the elevator simulation
//!
//! Plain data shared by the topology, the request queues and the elevator.

use std::fmt;

/// Signed floor number. Negative values are basements.
pub type FloorNumber = i32;

/// Maximum load (lbs) an elevator will still move with
pub const LOAD_LIMIT: i32 = 2000;

/// ID carried by an elevator that was never registered with a controller
pub const INVALID_ID: i32 = -1;

/// Travel intent of an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    Idle,
    Up,
    Down,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Idle => write!(f, "idle"),
            Movement::Up => write!(f, "moving up"),
            Movement::Down => write!(f, "moving down"),
        }
    }
}

/// Door state of an elevator car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Door {
    #[default]
    Open,
    Closed,
}

/// A single floor served by an elevator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floor {
    pub number: FloorNumber,
    /// Secured floors reject new destination requests
    pub secured: bool,
}

impl Floor {
    pub fn new(number: FloorNumber) -> Self {
        Self {
            number,
            secured: false,
        }
    }
}
