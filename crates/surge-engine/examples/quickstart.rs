//! Surge quickstart: a complete console run of the crowd-flow model.
//!
//! Demonstrates:
//!   1. Building a [`SimConfig`] and constructing a [`Simulation`]
//!   2. Advancing the grid step by step
//!   3. Extracting density frames and rendering them as ASCII art
//!   4. Reading the per-step flow accounting
//!
//! Run with:
//!   cargo run --example quickstart

use surge_engine::{SimConfig, Simulation};
use surge_obs::{render_ascii, DensityFrame};

const STEPS: u64 = 20;

fn main() {
    let config = SimConfig {
        width: 10,
        height: 10,
        num_people: 100,
        seed: 42,
    };
    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "crowd flow on a {}x{} floor, {} people, seed {}",
        config.width, config.height, config.num_people, config.seed
    );
    println!("{}\n", render_ascii(&DensityFrame::extract(sim.grid(), sim.step_id())));

    for _ in 0..STEPS {
        let result = sim.advance();
        let frame = DensityFrame::extract(result.grid, result.step_id);
        println!("{}", render_ascii(&frame));
        println!(
            "  stageward {:.0}  exitward {:.0}  lost {:.0}\n",
            result.flows.moved_stageward,
            result.flows.moved_exitward,
            result.flows.lost(),
        );
    }

    println!(
        "finished after {STEPS} steps: {:.0} of {} still on the floor",
        sim.grid().total_occupancy(),
        config.num_people
    );
}
