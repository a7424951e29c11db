//! Random passenger traffic for headless runs
//!
//! Drives a `BuildingController` one step at a time with button presses, load
//! changes and the occasional emergency, and keeps count of what happened.
//!
//! Elevators never go idle on their own once a direction's queue runs dry, so
//! requests behind the car would wait forever. The driver plays the operator
//! and issues `Elevator::reset_direction` to any stalled car before asking it
//! to serve the next stop.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::controller::BuildingController;
use super::types::{FloorNumber, LOAD_LIMIT};

/// Chance per elevator and step that a passenger hits the emergency button
const EMERGENCY_CHANCE: f64 = 0.02;
/// Chance per step that building staff clears an active emergency
const EMERGENCY_CLEAR_CHANCE: f64 = 0.25;
/// Largest single load change in lbs
const MAX_LOAD_CHANGE: i32 = 400;

/// Shape of the simulated building
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    pub building_id: i32,
    pub elevators: i32,
    /// Lowest floor is `-floors_below`
    pub floors_below: i32,
    /// Highest floor is `floors_above`
    pub floors_above: i32,
    /// Seed for reproducible runs; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            building_id: 0,
            elevators: 4,
            floors_below: 2,
            floors_above: 12,
            seed: None,
        }
    }
}

/// Running totals for a traffic run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficStats {
    pub steps: u32,
    pub buttons_accepted: u32,
    pub buttons_rejected: u32,
    pub stops_serviced: u32,
    pub steps_blocked: u32,
    pub emergencies_raised: u32,
    pub emergencies_cleared: u32,
    pub security_changes: u32,
    pub direction_resets: u32,
}

pub struct TrafficSim {
    pub controller: BuildingController,
    pub stats: TrafficStats,
    bottom: FloorNumber,
    top: FloorNumber,
    rng: Option<StdRng>,
}

impl TrafficSim {
    pub fn new(config: &TrafficConfig) -> Result<Self> {
        let bottom = -config.floors_below;
        let top = config.floors_above;
        if bottom > top {
            bail!("Building has no floors: bottom {} is above top {}", bottom, top);
        }

        let mut controller = BuildingController::new(config.elevators, config.building_id)
            .context("Failed to create building controller")?;
        for id in 0..config.elevators {
            if !controller.add_elevator(id, bottom, top) {
                bail!("Failed to add elevator {}", id);
            }
        }

        Ok(Self {
            controller,
            stats: TrafficStats::default(),
            bottom,
            top,
            rng: config.seed.map(StdRng::seed_from_u64),
        })
    }

    fn random_range(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn random_bool(&mut self, chance: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(chance),
            None => rand::rng().random_bool(chance),
        }
    }

    /// Apply one round of passenger actions to every elevator, then let each
    /// elevator serve at most one stop.
    pub fn step(&mut self) {
        self.stats.steps += 1;
        let ids: Vec<i32> = self.controller.elevators().map(|e| e.id()).collect();

        for id in ids {
            self.passenger_action(id);

            let emergency = self
                .controller
                .get_elevator(id)
                .is_some_and(|elevator| elevator.is_emergency());
            if emergency
                && self.random_bool(EMERGENCY_CLEAR_CHANCE)
                && self.controller.clear_emergency(id)
            {
                self.stats.emergencies_cleared += 1;
            }

            let Some(elevator) = self.controller.get_elevator_mut(id) else {
                continue;
            };
            if elevator.is_stalled() && elevator.reset_direction() {
                self.stats.direction_resets += 1;
            }
            if elevator.process_next_request() {
                self.stats.stops_serviced += 1;
            } else {
                self.stats.steps_blocked += 1;
            }
        }
    }

    fn passenger_action(&mut self, id: i32) {
        if self.random_bool(EMERGENCY_CHANCE) {
            if let Some(elevator) = self.controller.get_elevator_mut(id) {
                elevator.push_emergency(true);
                self.stats.emergencies_raised += 1;
                debug!("Emergency raised in elevator {}", id);
            }
            return;
        }

        let floor = self.random_range(self.bottom..=self.top);
        match self.random_range(0..=9) {
            0 => {
                let secured = self.random_bool(0.5);
                if self.controller.set_secure(id, floor, secured) {
                    self.stats.security_changes += 1;
                }
            }
            1 | 2 => {
                let amount = self.random_range(1..=MAX_LOAD_CHANGE);
                if let Some(elevator) = self.controller.get_elevator_mut(id) {
                    if elevator.load().saturating_add(amount) <= LOAD_LIMIT + MAX_LOAD_CHANGE {
                        elevator.enter(amount);
                    }
                }
            }
            3 => {
                let amount = self.random_range(1..=MAX_LOAD_CHANGE);
                if let Some(elevator) = self.controller.get_elevator_mut(id) {
                    elevator.exit(amount);
                }
            }
            _ => {
                let accepted = self
                    .controller
                    .get_elevator_mut(id)
                    .is_some_and(|elevator| elevator.push_button(floor));
                if accepted {
                    self.stats.buttons_accepted += 1;
                } else {
                    self.stats.buttons_rejected += 1;
                }
            }
        }
    }

    /// Run `steps` rounds and return the totals
    pub fn run(&mut self, steps: u32) -> &TrafficStats {
        for _ in 0..steps {
            self.step();
        }
        &self.stats
    }

    pub fn log_summary(&self) {
        let stats = &self.stats;
        info!("=== SIMULATION COMPLETE ===");
        info!("Building: {}", self.controller.building_id());
        info!("Elevators: {}", self.controller.elevator_count());
        info!("Steps: {}", stats.steps);
        info!("Buttons accepted: {}", stats.buttons_accepted);
        info!("Buttons rejected: {}", stats.buttons_rejected);
        info!("Stops serviced: {}", stats.stops_serviced);
        info!("Steps blocked: {}", stats.steps_blocked);
        info!("Emergencies raised: {}", stats.emergencies_raised);
        info!("Emergencies cleared: {}", stats.emergencies_cleared);
        info!("Security changes: {}", stats.security_changes);
        info!("Direction resets: {}", stats.direction_resets);
    }
}
