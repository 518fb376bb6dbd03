//! Noise factor table generator.
//!
//! Prints the time evolution of the intensity-noise and energy-jitter
//! factors, and the resulting opacity at each station of a reference bench,
//! as a markdown table.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example noise_trace
//! ```

use beamsim::hardware::laser::models::HE_NE;
use beamsim::hardware::OpticalTrainConfig;
use beamsim::noise::NoiseConfig;
use beamsim::scene::Scene;
use beamsim::units::{Frequency, FrequencyExt, Length, LengthExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let laser = HE_NE.clone();
    let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0));
    let noise = NoiseConfig::new(-130.0, Frequency::from_gigahertz(1.5), 5.0, 10.0);

    println!("Noise Factors Over Time");
    println!("=======================");
    println!(
        "Source: {} | RIN {} dBc/Hz | jitter {}%",
        laser.name, noise.rin_dbc_per_hz, noise.energy_jitter_pct
    );
    println!();

    print!("| t (s) | Intensity factor | Energy factor |");
    for frac in beamsim::scene::STATION_FRACTIONS {
        print!(" Opacity @ {:.0} mm |", 1000.0 * frac);
    }
    println!();

    print!("|-------|------------------|---------------|");
    for _ in beamsim::scene::STATION_FRACTIONS {
        print!("------------------|");
    }
    println!();

    for step in 0..=20 {
        let t = step as f64 * 0.25;
        let scene = Scene::compose(&laser, &train, &noise, t)?;

        print!(
            "| {:5.2} | {:16.9} | {:13.4} |",
            t,
            noise.intensity_noise_factor(t),
            noise.energy_jitter_factor(t)
        );
        for station in &scene.stations {
            print!(" {:16.4} |", station.opacity);
        }
        println!();
    }

    Ok(())
}
