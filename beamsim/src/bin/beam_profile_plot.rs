//! Beam propagation chart generator.
//!
//! Renders one scene (envelope, station markers, aperture rails and lens
//! plane) as a PNG chart. This is a reference consumer of the scene
//! description: all physics lives in the library, this tool only draws.
//!
//! Usage:
//! ```
//! cargo run --release --bin beam_profile_plot -- --laser he-ne
//! cargo run --release --bin beam_profile_plot -- --laser nd-yag --aperture 4.0 -t 2.5
//! ```

use beamsim::scene::Scene;
use beamsim::shared_args::SharedBeamArgs;
use clap::Parser;
use plotters::prelude::*;

/// Marker colors for the five stations, waist to far field
const STATION_PALETTE: [RGBColor; 5] = [
    RGBColor(236, 72, 153),
    RGBColor(168, 85, 247),
    RGBColor(6, 182, 212),
    RGBColor(16, 185, 129),
    RGBColor(245, 158, 11),
];

const ENVELOPE_COLOR: RGBColor = RGBColor(96, 165, 250);
const APERTURE_COLOR: RGBColor = RGBColor(251, 191, 36);
const LENS_COLOR: RGBColor = RGBColor(139, 92, 246);

#[derive(Parser)]
#[command(name = "beam_profile_plot")]
#[command(about = "Render a beam propagation scene to a PNG chart")]
#[command(version)]
struct Args {
    #[command(flatten)]
    shared: SharedBeamArgs,

    /// Output file for the chart
    #[arg(long, default_value = "beam_propagation.png")]
    output: String,

    /// Chart size in pixels, WIDTHxHEIGHT
    #[arg(long, default_value = "1024x640")]
    size: String,
}

fn parse_size(s: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let (w, h) = s
        .split_once('x')
        .ok_or("size must be in WIDTHxHEIGHT format")?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let laser = args.shared.laser_config();
    let train = args.shared.train_config();
    let noise = args.shared.noise_config();

    let scene = Scene::compose(&laser, &train, &noise, args.shared.time)?;

    println!("Beam Propagation Chart");
    println!("======================");
    println!("Source: {}", scene.summary.source_name);
    println!(
        "Rayleigh range: {:.1} mm",
        scene.summary.rayleigh_range_m * 1e3
    );
    println!("Divergence: {:.3} mrad", scene.summary.divergence_rad * 1e3);
    println!("Coherence: {:.3} m", scene.summary.coherence_length_m);
    println!("Spot @ L: {:.3} mm", scene.summary.spot_radius_mm);

    let size = parse_size(&args.size)?;
    draw_scene(&scene, &args.output, size)?;

    println!("Chart saved to: {}", args.output);
    Ok(())
}

fn draw_scene(
    scene: &Scene,
    output_path: &str,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let span_mm = scene.span_mm();
    let y_max = scene.max_radius_mm() * 1.15;
    let title = format!("Beam Propagation - {}", scene.summary.source_name);

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..span_mm.max(1.0), -y_max..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Distance (mm)")
        .y_desc("Radius (mm)")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    // Envelope, upper and mirrored lower branch
    let upper: Vec<(f64, f64)> = scene
        .envelope
        .iter()
        .map(|p| (p.distance_mm, p.radius_mm))
        .collect();
    let lower: Vec<(f64, f64)> = scene
        .envelope
        .iter()
        .map(|p| (p.distance_mm, -p.radius_mm))
        .collect();
    chart
        .draw_series(LineSeries::new(upper, ENVELOPE_COLOR.stroke_width(2)))?
        .label("Envelope")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], ENVELOPE_COLOR.stroke_width(3))
        });
    chart.draw_series(LineSeries::new(lower, ENVELOPE_COLOR.stroke_width(2)))?;

    // Aperture rails
    if let Some(aperture) = &scene.aperture {
        for sign in [1.0, -1.0] {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![
                    (0.0, sign * aperture.radius_mm),
                    (span_mm, sign * aperture.radius_mm),
                ],
                APERTURE_COLOR.stroke_width(2),
            )))?;
        }
    }

    // Lens plane
    if let Some(lens) = &scene.lens {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(lens.distance_mm, -y_max), (lens.distance_mm, y_max)],
            LENS_COLOR.stroke_width(2),
        )))?;
    }

    // Station markers at both envelope branches, faded by opacity
    for station in &scene.stations {
        let color = STATION_PALETTE[station.color_index % STATION_PALETTE.len()];
        for sign in [1.0, -1.0] {
            chart.draw_series(std::iter::once(Circle::new(
                (station.distance_mm, sign * station.radius_mm),
                7,
                color.mix(station.opacity).filled(),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .label_font(("sans-serif", 14))
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
