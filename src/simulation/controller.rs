//! Building-wide registry of elevators
//!
//! Owns a fixed number of elevator slots and forwards commands that only
//! building staff may issue (floor security, emergency reset).

use log::warn;
use thiserror::Error;

use super::elevator::Elevator;
use super::types::FloorNumber;

/// Invalid arguments when creating a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("Building ID cannot be negative (got {0})")]
    NegativeBuildingId(i32),
    #[error("Number of elevators cannot be negative (got {0})")]
    NegativeElevatorCount(i32),
}

/// Central command for all elevators in one building
#[derive(Debug)]
pub struct BuildingController {
    building_id: i32,
    /// One slot per elevator ID, `None` until an elevator is added
    slots: Vec<Option<Elevator>>,
}

impl BuildingController {
    pub fn new(num_elevators: i32, building_id: i32) -> Result<Self, ControllerError> {
        if building_id < 0 {
            return Err(ControllerError::NegativeBuildingId(building_id));
        }
        let capacity = usize::try_from(num_elevators)
            .map_err(|_| ControllerError::NegativeElevatorCount(num_elevators))?;

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self { building_id, slots })
    }

    pub fn building_id(&self) -> i32 {
        self.building_id
    }

    /// Number of slots, occupied or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn elevator_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn slot_index(&self, id: i32) -> Option<usize> {
        usize::try_from(id)
            .ok()
            .filter(|&index| index < self.slots.len())
    }

    /// Install a new elevator serving `[bottom, top]` at slot `id`,
    /// replacing whatever was there.
    pub fn add_elevator(&mut self, id: i32, bottom: FloorNumber, top: FloorNumber) -> bool {
        let Some(index) = self.slot_index(id) else {
            return false;
        };
        if bottom > top {
            return false;
        }

        let mut elevator = Elevator::new(id);
        elevator.setup(bottom, top);
        self.slots[index] = Some(elevator);
        true
    }

    pub fn get_elevator(&self, id: i32) -> Option<&Elevator> {
        self.slot_index(id)
            .and_then(|index| self.slots[index].as_ref())
    }

    pub fn get_elevator_mut(&mut self, id: i32) -> Option<&mut Elevator> {
        self.slot_index(id)
            .and_then(|index| self.slots[index].as_mut())
    }

    /// Iterate over all installed elevators in ID order
    pub fn elevators(&self) -> impl Iterator<Item = &Elevator> {
        self.slots.iter().flatten()
    }

    /// Lock or unlock a floor for one elevator
    pub fn set_secure(&mut self, id: i32, floor: FloorNumber, secured: bool) -> bool {
        let building_id = self.building_id;
        match self.get_elevator_mut(id) {
            Some(elevator) => elevator.set_secure(floor, secured),
            None => {
                warn!(
                    "Building {}: cannot secure floor {} on missing elevator {}",
                    building_id, floor, id
                );
                false
            }
        }
    }

    /// Reset the emergency flag of one elevator
    pub fn clear_emergency(&mut self, id: i32) -> bool {
        let building_id = self.building_id;
        match self.get_elevator_mut(id) {
            Some(elevator) => {
                elevator.clear_emergency();
                true
            }
            None => {
                warn!(
                    "Building {}: cannot clear emergency on missing elevator {}",
                    building_id, id
                );
                false
            }
        }
    }
}
