//! Pending destination requests for one direction of travel
//!
//! Requests are kept ordered by distance in the direction of travel, so the
//! next stop is always at the front. Duplicates of the same floor are kept
//! and served oldest first.

use sorted_vec::SortedVec;

use super::types::FloorNumber;

/// Direction a queue serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueDirection {
    /// Lowest floor first
    Up,
    /// Highest floor first
    Down,
}

/// Sort key: field order gives (nearest stop, then oldest request)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueuedStop {
    rank: i64,
    seq: u64,
    floor: FloorNumber,
}

#[derive(Debug, Clone)]
pub struct RequestQueue {
    direction: QueueDirection,
    stops: SortedVec<QueuedStop>,
    next_seq: u64,
}

impl RequestQueue {
    pub fn new(direction: QueueDirection) -> Self {
        Self {
            direction,
            stops: SortedVec::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    fn rank(&self, floor: FloorNumber) -> i64 {
        match self.direction {
            QueueDirection::Up => i64::from(floor),
            QueueDirection::Down => -i64::from(floor),
        }
    }

    pub fn push(&mut self, floor: FloorNumber) {
        let stop = QueuedStop {
            rank: self.rank(floor),
            seq: self.next_seq,
            floor,
        };
        self.next_seq += 1;
        self.stops.insert(stop);
    }

    /// The stop that would be served next
    pub fn peek(&self) -> Option<FloorNumber> {
        self.stops.first().map(|stop| stop.floor)
    }

    /// Remove and return the next stop
    pub fn pop(&mut self) -> Option<FloorNumber> {
        if self.stops.is_empty() {
            return None;
        }
        Some(self.stops.remove_index(0).floor)
    }

    /// Pending floors in service order
    pub fn floors(&self) -> Vec<FloorNumber> {
        self.stops.iter().map(|stop| stop.floor).collect()
    }

    pub fn clear(&mut self) {
        self.stops = SortedVec::new();
        self.next_seq = 0;
    }
}
