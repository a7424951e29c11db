//! Floor topology for a single elevator
//!
//! An ordered run of floors, bottom first. Buildings only ever grow downward,
//! so the only extension is a prepend below the current bottom.

use log::warn;

use super::types::{Floor, FloorNumber};

/// The floors an elevator can stop at, in strictly increasing order
#[derive(Debug, Clone, Default)]
pub struct FloorTopology {
    floors: Vec<Floor>,
    /// Index of the floor the car is at (None while empty)
    current: Option<usize>,
}

impl FloorTopology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn bottom(&self) -> Option<&Floor> {
        self.floors.first()
    }

    pub fn top(&self) -> Option<&Floor> {
        self.floors.last()
    }

    pub fn current(&self) -> Option<&Floor> {
        self.current.and_then(|index| self.floors.get(index))
    }

    /// Build one floor per number in `[first, last]`.
    ///
    /// Does nothing if floors already exist. A reversed range is logged and
    /// leaves the topology empty.
    pub fn setup(&mut self, first: FloorNumber, last: FloorNumber) {
        if !self.floors.is_empty() {
            return;
        }
        if first > last {
            warn!(
                "First floor number {} is greater than last floor number {}",
                first, last
            );
            return;
        }

        self.floors = (first..=last).map(Floor::new).collect();
        self.current = Some(0);
    }

    /// Prepend a floor below the current bottom and move the car there.
    ///
    /// On an empty topology the floor becomes bottom, top and current.
    /// Returns false without changes if `number` is not below the bottom.
    pub fn insert_floor(&mut self, number: FloorNumber) -> bool {
        if let Some(bottom) = self.bottom() {
            if number >= bottom.number {
                return false;
            }
        }

        self.floors.insert(0, Floor::new(number));
        self.current = Some(0);
        true
    }

    /// Whether `number` lies within `[bottom, top]`
    pub fn in_range(&self, number: FloorNumber) -> bool {
        match (self.bottom(), self.top()) {
            (Some(bottom), Some(top)) => bottom.number <= number && number <= top.number,
            _ => false,
        }
    }

    /// Index of the floor with this number, if the topology has one
    pub fn index_of(&self, number: FloorNumber) -> Option<usize> {
        if !self.in_range(number) {
            return None;
        }
        self.floors
            .binary_search_by_key(&number, |floor| floor.number)
            .ok()
    }

    pub fn find(&self, number: FloorNumber) -> Option<&Floor> {
        self.index_of(number).map(|index| &self.floors[index])
    }

    /// Move the car to the floor with this number. Returns false if absent.
    pub fn move_to(&mut self, number: FloorNumber) -> bool {
        match self.index_of(number) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    /// Secured flag of a floor; false when the floor does not exist
    pub fn check_secure(&self, number: FloorNumber) -> bool {
        self.find(number).is_some_and(|floor| floor.secured)
    }

    /// Set the secured flag of a floor. Returns false when the floor does not exist.
    pub fn set_secure(&mut self, number: FloorNumber, secured: bool) -> bool {
        match self.index_of(number) {
            Some(index) => {
                self.floors[index].secured = secured;
                true
            }
            None => false,
        }
    }

    /// Drop every floor
    pub fn clear(&mut self) {
        self.floors.clear();
        self.current = None;
    }
}
