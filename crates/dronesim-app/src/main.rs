//! Headless host loop for the DroneSim core.
//!
//! Stands in for the renderer: sets the world up, ticks the simulation at a
//! fixed rate with an idle input snapshot, and prints the final state as
//! JSON. Useful for profiling, soak-testing, and eyeballing determinism.

use clap::Parser;
use log::info;

use dronesim_core::config::SimConfig;
use dronesim_sim::input::InputSnapshot;
use dronesim_sim::terrain::ProceduralTerrain;
use dronesim_sim::Orchestrator;

/// Fixed frame time, 60 Hz.
const DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "dronesim", about = "Headless drone simulation runner")]
struct Args {
    /// RNG seed for terrain and AI retargeting.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Number of AI drones.
    #[arg(long, default_value_t = 9)]
    drones: usize,

    /// Print a snapshot every N ticks (0 = only the final one).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig {
        seed: args.seed,
        ai_drone_count: args.drones,
        ..Default::default()
    };

    let mut orchestrator = Orchestrator::new(config);
    let mut terrain = ProceduralTerrain::new(args.seed);
    orchestrator.setup(&mut terrain);
    info!("setup complete, running {} ticks", args.ticks);

    let idle = InputSnapshot::default();
    for tick in 0..args.ticks {
        orchestrator.tick(DT, &idle);
        if args.snapshot_every > 0 && tick % args.snapshot_every == 0 {
            print_snapshot(&orchestrator);
        }
    }

    print_snapshot(&orchestrator);
}

fn print_snapshot(orchestrator: &Orchestrator) {
    match serde_json::to_string(&orchestrator.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}
