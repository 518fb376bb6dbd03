//! Terminal playback of an animated beam propagation scene.
//!
//! Drives the simulation clock at a fixed time increment, recomposes the
//! scene every frame, and redraws the ASCII profile plus the metrics
//! readout. The loop here is the "external collaborator" of the model: the
//! core receives only the clock's time and stays cadence-agnostic.
//!
//! Usage:
//! ```
//! cargo run --release --bin beam_playback -- --laser he-ne --frames 200
//! cargo run --release --bin beam_playback -- --aperture 4.0 --still
//! ```

use beamsim::scene::Scene;
use beamsim::shared_args::SharedBeamArgs;
use beamsim::SimulationClock;
use clap::Parser;
use log::debug;
use std::time::Duration;
use viz::profile::{render_profile, ProfileConfig};
use viz::readout::{station_table, summary_block};

#[derive(Parser)]
#[command(name = "beam_playback")]
#[command(about = "Animate a beam propagation scene in the terminal")]
#[command(version)]
struct Args {
    #[command(flatten)]
    shared: SharedBeamArgs,

    /// Number of frames to render
    #[arg(long, default_value_t = 100)]
    frames: usize,

    /// Simulation time increment per frame, in seconds
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Delay between frames, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,

    /// Render a single frame at the start time and exit
    #[arg(long)]
    still: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let laser = args.shared.laser_config();
    let train = args.shared.train_config();
    let noise = args.shared.noise_config();

    let profile_config = ProfileConfig {
        title: Some("Beam Propagation"),
        ..Default::default()
    };

    let mut clock = SimulationClock::starting_at(args.shared.time);
    clock.play();

    let frames = if args.still { 1 } else { args.frames };
    for frame in 0..frames {
        let scene = Scene::compose(&laser, &train, &noise, clock.time())?;
        debug!("frame {frame} at t = {:.2}", clock.time());

        if !args.still {
            // Clear screen and home the cursor between frames
            print!("\x1b[2J\x1b[H");
        }
        println!("{}", render_profile(&scene, &profile_config)?);
        println!("t = {:.2} s", clock.time());
        println!();
        println!("{}", summary_block(&scene)?);
        println!("{}", station_table(&scene)?);

        clock.tick(Duration::from_secs_f64(args.step));
        if !args.still {
            std::thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    Ok(())
}
