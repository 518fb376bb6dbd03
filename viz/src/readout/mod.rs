//! Derived-optics readout formatting.
//!
//! Formats the summary block of a scene as the text panel an interactive
//! frontend would show next to the plot: Rayleigh range, divergence,
//! coherence length with a qualitative grade, spot size, and a markdown
//! table of the station markers.

use crate::Result;
use beamsim::noise::coherence_grade;
use beamsim::scene::Scene;
use std::fmt::Write;

/// Format the derived-optics summary of a scene.
pub fn summary_block(scene: &Scene) -> Result<String> {
    let summary = &scene.summary;
    let grade = coherence_grade(summary.coherence_length_m);

    let mut out = String::new();
    writeln!(
        out,
        "Source: {} ({:.1} nm)",
        summary.source_name, summary.wavelength_nm
    )?;
    writeln!(
        out,
        "Rayleigh range: {:.1} mm",
        summary.rayleigh_range_m * 1e3
    )?;
    writeln!(out, "Divergence: {:.3} mrad", summary.divergence_rad * 1e3)?;
    writeln!(
        out,
        "Coherence: {:.2} m ({:.0} mm), {}",
        summary.coherence_length_m,
        summary.coherence_length_m * 1e3,
        grade
    )?;
    writeln!(out, "Spot @ L: {:.3} mm", summary.spot_radius_mm)?;
    Ok(out)
}

/// Format the station markers of a scene as a markdown table.
pub fn station_table(scene: &Scene) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "| Station | z (mm) | Radius (mm) | Opacity |")?;
    writeln!(out, "|---------|--------|-------------|---------|")?;
    for (index, station) in scene.stations.iter().enumerate() {
        writeln!(
            out,
            "| {} | {:.1} | {:.3} | {:.3} |",
            index + 1,
            station.distance_mm,
            station.radius_mm,
            station.opacity
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamsim::hardware::laser::models::HE_NE;
    use beamsim::units::{Frequency, FrequencyExt, Length, LengthExt};
    use beamsim::{NoiseConfig, OpticalTrainConfig, Scene};

    fn bench_scene() -> Scene {
        let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0));
        let noise = NoiseConfig::new(-140.0, Frequency::from_gigahertz(1.5), 5.0, 2.0);
        Scene::compose(&HE_NE, &train, &noise, 0.0).unwrap()
    }

    #[test]
    fn test_summary_block_contents() {
        let text = summary_block(&bench_scene()).unwrap();
        assert!(text.contains("He-Ne"));
        assert!(text.contains("632.8 nm"));
        assert!(text.contains("Rayleigh range: 1128.3 mm"));
        assert!(text.contains("Short")); // 0.2 m coherence is short
    }

    #[test]
    fn test_station_table_has_all_stations() {
        let scene = bench_scene();
        let table = station_table(&scene).unwrap();
        // Header, separator, and one row per station
        assert_eq!(table.lines().count(), 2 + scene.stations.len());
        assert!(table.contains("| 1 | 0.0 |"));
        assert!(table.contains("| 5 | 1000.0 |"));
    }
}
