use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use elevator_sim::simulation::{BuildingController, Elevator, TrafficConfig, TrafficSim};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Headless elevator dispatch simulation")]
struct Cli {
    /// Replay the reference scenarios instead of random traffic
    #[arg(long)]
    scenario: bool,

    /// Number of simulation steps to run
    #[arg(long, default_value = "200")]
    steps: u32,

    /// Number of elevators in the building
    #[arg(long, default_value = "4")]
    elevators: i32,

    /// Number of basement floors
    #[arg(long, default_value = "2")]
    floors_below: i32,

    /// Highest floor number
    #[arg(long, default_value = "12")]
    floors_above: i32,

    /// Building ID
    #[arg(long, default_value = "0")]
    building_id: i32,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Print every elevator after the run
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.scenario {
        run_scenarios()
    } else {
        let config = TrafficConfig {
            building_id: cli.building_id,
            elevators: cli.elevators,
            floors_below: cli.floors_below,
            floors_above: cli.floors_above,
            seed: cli.seed,
        };
        run_headless(&config, cli.steps, cli.dump)
    }
}

/// Run random traffic through the building and log the totals
fn run_headless(config: &TrafficConfig, steps: u32, dump: bool) -> Result<()> {
    info!(
        "Running {} steps with {} elevators on floors {}..={}",
        steps, config.elevators, -config.floors_below, config.floors_above
    );

    let mut sim = TrafficSim::new(config)?;
    sim.run(steps);
    sim.log_summary();

    if dump {
        for elevator in sim.controller.elevators() {
            elevator.dump();
            println!();
        }
    }
    Ok(())
}

fn separator() {
    println!("\n=====================\n");
}

fn press(elevator: &mut Elevator, floor: i32) {
    if !elevator.push_button(floor) {
        warn!(
            "Elevator {}: request for floor {} rejected",
            elevator.id(),
            floor
        );
    }
}

fn advance(elevator: &mut Elevator) {
    if !elevator.process_next_request() {
        warn!("Elevator {}: no request processed", elevator.id());
    }
}

/// Replay the two reference walkthroughs, dumping state between steps
fn run_scenarios() -> Result<()> {
    // Scenario 1: a lone elevator heading up to 8
    let mut elevator = Elevator::new(10);
    elevator.setup(0, 12);
    press(&mut elevator, 8);
    elevator.dump();
    separator();
    advance(&mut elevator);
    elevator.dump();
    separator();

    // Scenario 2: building controller with floor 4 locked
    let mut controller = BuildingController::new(10, 0)?;
    if !controller.add_elevator(6, -5, 12) {
        bail!("Failed to add elevator 6");
    }
    if !controller.set_secure(6, 4, true) {
        warn!("Elevator 6: could not secure floor 4");
    }
    let elevator = controller
        .get_elevator_mut(6)
        .context("Elevator 6 was not installed")?;
    elevator.dump();
    separator();

    press(elevator, 2);
    advance(elevator);
    elevator.dump();
    separator();

    // Floor 4 is secured, so both steps are expected to be rejected
    press(elevator, 4);
    advance(elevator);
    elevator.dump();
    separator();

    press(elevator, 12);
    advance(elevator);
    elevator.dump();

    info!("=== SCENARIOS COMPLETE ===");
    Ok(())
}
