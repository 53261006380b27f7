//! Zombies headless driver
//!
//! Runs the simulation in demo mode (the survivor plays itself) and logs
//! what happens. Rendering and real input belong to a graphical host.
//!
//! Usage: `zombies [tuning.json] [--realtime] [--frames COUNT] [--seed N]`

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use zombies::consts::FRAME_MS;
use zombies::platform::{Clock, ManualClock, SystemClock};
use zombies::sim::{SimEvent, SimulationState, autopilot, tick};
use zombies::{Tuning, capture};

#[derive(Debug, Parser)]
#[command(name = "zombies", about = "Headless survivor vs. zombie-wave simulation")]
struct Cli {
    /// JSON file overriding the default game balance
    tuning: Option<PathBuf>,
    /// Pace frames against the wall clock instead of stepping a fixed clock
    #[arg(long)]
    realtime: bool,
    /// Stop after this many frames
    #[arg(long, value_name = "COUNT", default_value_t = 60 * 60)]
    frames: u64,
    /// Seed for spawn placement
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

/// Step the simulation once per frame until `frames` have run or the
/// survivor is gone. `wait` is called between frames.
fn run<C: Clock>(
    state: &mut SimulationState,
    clock: &mut C,
    frames: u64,
    mut wait: impl FnMut(&mut C),
) -> u64 {
    let mut knocked_back = 0;
    for _ in 0..frames {
        let input = autopilot(state);
        tick(state, &input, clock.now_ms());

        for event in state.events() {
            match event {
                SimEvent::ZombieHit { .. } => knocked_back += 1,
                SimEvent::SurvivorKilled { by } => {
                    log::info!("Frame {}: caught by zombie {by}", state.frame)
                }
                _ => {}
            }
        }

        if state.frame % 60 == 0 {
            let snap = capture(state);
            log::info!(
                "Frame {}: survivor at ({:.0}, {:.0}), {} zombies, {} bullets",
                snap.frame,
                snap.survivor.pos.x,
                snap.survivor.pos.y,
                snap.zombies.len(),
                snap.bullets.len()
            );
        }

        if !state.survivor.alive {
            break;
        }
        wait(clock);
    }
    knocked_back
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Zombies (headless) starting...");

    let options = Cli::parse();
    let tuning = match &options.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let mut state = SimulationState::new(
        Default::default(),
        Default::default(),
        tuning,
        options.seed,
    );

    let knocked_back = if options.realtime {
        run(&mut state, &mut SystemClock::new(), options.frames, |_| {
            std::thread::sleep(Duration::from_millis(FRAME_MS))
        })
    } else {
        // Fixed step: the clock advances exactly one frame period per tick
        run(&mut state, &mut ManualClock::new(), options.frames, |clock| {
            clock.advance(FRAME_MS)
        })
    };

    log::info!(
        "Finished after {} frames: {} zombies knocked back, survivor {}",
        state.frame,
        knocked_back,
        if state.survivor.alive { "alive" } else { "dead" }
    );

    match serde_json::to_string_pretty(&capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialise final snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A browser host drives the simulation directly through the library
}
