//! Elevator state machine and request scheduling
//!
//! Each call advances the elevator by at most one step; nothing moves on its own.

use log::debug;
use std::fmt;

use super::floor_topology::FloorTopology;
use super::request_queue::{QueueDirection, RequestQueue};
use super::types::{Door, Floor, FloorNumber, Movement, INVALID_ID, LOAD_LIMIT};

/// A single elevator car and the floors it serves
#[derive(Debug, Clone)]
pub struct Elevator {
    id: i32,
    topology: FloorTopology,
    movement: Movement,
    door: Door,
    /// Set by a passenger, only cleared by the building controller
    emergency: bool,
    /// Current load in lbs, never negative
    load: i32,
    up_requests: RequestQueue,
    down_requests: RequestQueue,
}

impl Default for Elevator {
    fn default() -> Self {
        Self::new(INVALID_ID)
    }
}

impl Elevator {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            topology: FloorTopology::new(),
            movement: Movement::Idle,
            door: Door::Open,
            emergency: false,
            load: 0,
            up_requests: RequestQueue::new(QueueDirection::Up),
            down_requests: RequestQueue::new(QueueDirection::Down),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn door(&self) -> Door {
        self.door
    }

    pub fn is_emergency(&self) -> bool {
        self.emergency
    }

    pub fn load(&self) -> i32 {
        self.load
    }

    pub fn current_floor(&self) -> Option<FloorNumber> {
        self.topology.current().map(|floor| floor.number)
    }

    pub fn bottom_floor(&self) -> Option<FloorNumber> {
        self.topology.bottom().map(|floor| floor.number)
    }

    pub fn top_floor(&self) -> Option<FloorNumber> {
        self.topology.top().map(|floor| floor.number)
    }

    pub fn floor_count(&self) -> usize {
        self.topology.len()
    }

    pub fn floors(&self) -> &[Floor] {
        self.topology.floors()
    }

    /// Pending up requests in the order they will be served
    pub fn pending_up(&self) -> Vec<FloorNumber> {
        self.up_requests.floors()
    }

    /// Pending down requests in the order they will be served
    pub fn pending_down(&self) -> Vec<FloorNumber> {
        self.down_requests.floors()
    }

    /// Create the floors `[first, last]`. Only the first call has any effect.
    pub fn setup(&mut self, first: FloorNumber, last: FloorNumber) {
        self.topology.setup(first, last);
    }

    /// Add a sub-basement below the bottom floor and move the car there
    pub fn insert_floor(&mut self, floor: FloorNumber) -> bool {
        self.topology.insert_floor(floor)
    }

    pub fn check_secure(&self, floor: FloorNumber) -> bool {
        self.topology.check_secure(floor)
    }

    pub(crate) fn set_secure(&mut self, floor: FloorNumber, secured: bool) -> bool {
        self.topology.set_secure(floor, secured)
    }

    /// Queue a destination floor.
    ///
    /// Rejected when there are no floors, the floor does not exist, the car is
    /// already there, or the floor is secured. An idle elevator starts moving
    /// toward the new request.
    pub fn push_button(&mut self, floor: FloorNumber) -> bool {
        let Some(current) = self.current_floor() else {
            return false;
        };
        let Some(target) = self.topology.find(floor) else {
            return false;
        };
        if target.number == current || target.secured {
            return false;
        }

        if floor < current {
            self.down_requests.push(floor);
            if self.movement == Movement::Idle {
                self.movement = Movement::Down;
            }
        } else {
            self.up_requests.push(floor);
            if self.movement == Movement::Idle {
                self.movement = Movement::Up;
            }
        }

        debug!(
            "Elevator {} queued floor {} (now {:?})",
            self.id, floor, self.movement
        );
        true
    }

    /// Only `true` has an effect; clearing goes through the building controller
    pub fn push_emergency(&mut self, pushed: bool) {
        if pushed {
            self.emergency = true;
        }
    }

    pub(crate) fn clear_emergency(&mut self) {
        self.emergency = false;
    }

    /// Load enters the car. Overloading is allowed but blocks further travel.
    pub fn enter(&mut self, load: i32) {
        self.load = self.load.saturating_add(load).max(0);
    }

    /// Load leaves the car. Returns the remaining load, never below zero.
    pub fn exit(&mut self, load: i32) -> i32 {
        self.load = self.load.saturating_sub(load).max(0);
        self.load
    }

    /// Serve the nearest pending stop in the direction of travel.
    ///
    /// Returns false without changing anything when overloaded, in emergency,
    /// idle, or when nothing is queued in the current direction. Movement is
    /// left as is once the queue runs dry.
    pub fn process_next_request(&mut self) -> bool {
        if self.load > LOAD_LIMIT || self.emergency {
            return false;
        }

        let queue = match self.movement {
            Movement::Up => &mut self.up_requests,
            Movement::Down => &mut self.down_requests,
            Movement::Idle => return false,
        };

        let Some(next) = queue.peek() else {
            return false;
        };
        if !self.topology.move_to(next) {
            return false;
        }
        queue.pop();
        self.door = Door::Open;

        debug!("Elevator {} arrived at floor {}", self.id, next);
        true
    }

    /// Moving in a direction with nothing left to serve that way
    pub fn is_stalled(&self) -> bool {
        match self.movement {
            Movement::Up => self.up_requests.is_empty(),
            Movement::Down => self.down_requests.is_empty(),
            Movement::Idle => false,
        }
    }

    /// Explicit direction reset for a stalled car.
    ///
    /// Turns toward whatever is still queued, or goes idle if nothing is.
    /// Returns false without changes when the car is not stalled.
    pub fn reset_direction(&mut self) -> bool {
        if !self.is_stalled() {
            return false;
        }

        self.movement = if !self.up_requests.is_empty() {
            Movement::Up
        } else if !self.down_requests.is_empty() {
            Movement::Down
        } else {
            Movement::Idle
        };
        debug!("Elevator {} direction reset to {:?}", self.id, self.movement);
        true
    }

    /// Back to the freshly constructed state, floors included
    pub fn clear(&mut self) {
        self.topology.clear();
        self.up_requests.clear();
        self.down_requests.clear();
        self.movement = Movement::Idle;
        self.door = Door::Open;
        self.emergency = false;
        self.load = 0;
    }

    /// Print the state dump to stdout
    pub fn dump(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevator {} is {}.", self.id, self.movement)?;
        if self.emergency {
            writeln!(f, "someone pushed the emergency button!")?;
        }
        if self.topology.is_empty() {
            return Ok(());
        }

        let current = self.current_floor();
        writeln!(f, "Top")?;
        for floor in self.topology.floors().iter().rev() {
            write!(f, "{}", floor.number)?;
            if Some(floor.number) == current {
                write!(f, " current ")?;
            }
            if floor.secured {
                write!(f, " secured ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Bottom")
    }
}
