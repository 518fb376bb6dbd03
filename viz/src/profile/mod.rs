//! ASCII side-view rendering of a beam propagation scene.
//!
//! Draws the scene the way a bench diagram would: the optical axis runs left
//! to right, the envelope opens around it, aperture rails run horizontally,
//! the lens plane is a vertical column, and the five stations sit on the
//! envelope with a glyph that tracks their opacity.
//!
//! # Rendering Algorithm
//!
//! 1. **Grid allocation**: a (2·half_height+1) × width character grid with
//!    the optical axis on the center row.
//! 2. **Column mapping**: column j covers distance span·j/(width-1); the
//!    envelope radius for a column is read from the nearest envelope sample
//!    (the envelope is uniformly sampled, so the lookup is exact).
//! 3. **Row mapping**: a radius maps to round(r/r_max · half_height) rows
//!    above and below the axis, where r_max is the larger of the envelope
//!    maximum and the aperture radius.
//! 4. **Layering**: axis, aperture rails and lens column first, envelope
//!    branches on top, stations last so they are never hidden.
//! 5. **Station glyphs**: opacity in [0, 1] indexes a low-to-high character
//!    ramp, so flicker and coherence fade-out are visible frame to frame.
//!
//! # Usage
//!
//! ```rust
//! use beamsim::hardware::laser::models::HE_NE;
//! use beamsim::units::{Frequency, FrequencyExt, Length, LengthExt};
//! use beamsim::{NoiseConfig, OpticalTrainConfig, Scene};
//! use viz::profile::{render_profile, ProfileConfig};
//!
//! let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0))
//!     .with_lens(Length::from_millimeters(200.0));
//! let noise = NoiseConfig::new(-140.0, Frequency::from_gigahertz(1.5), 5.0, 2.0);
//! let scene = Scene::compose(&HE_NE, &train, &noise, 0.0).unwrap();
//!
//! let text = render_profile(&scene, &ProfileConfig::default()).unwrap();
//! println!("{}", text);
//! ```

use crate::{Result, VizError};
use beamsim::scene::Scene;
use std::fmt::Write;

/// Character drawn along the optical axis
const AXIS_CHAR: char = '-';
/// Character drawn on the envelope branches
const ENVELOPE_CHAR: char = '*';
/// Character drawn on the aperture rails
const APERTURE_CHAR: char = '=';
/// Character drawn down the lens plane column
const LENS_CHAR: char = '|';

/// Configuration for the ASCII beam profile.
#[derive(Debug, Clone)]
pub struct ProfileConfig<'a> {
    /// Optional title displayed above the profile, underlined with '='
    pub title: Option<&'a str>,

    /// Grid width in character columns (the full propagation span)
    pub width: usize,

    /// Grid rows above and below the optical axis
    pub half_height: usize,

    /// Station glyph ramp from fully faded (first) to fully opaque (last).
    /// Must contain at least one character.
    pub station_glyphs: &'a str,
}

impl Default for ProfileConfig<'_> {
    fn default() -> Self {
        Self {
            title: None,
            width: 72,
            half_height: 10,
            station_glyphs: " .:oO@",
        }
    }
}

/// Render a scene as an ASCII side view.
///
/// # Arguments
/// * `scene` - Scene description from the model
/// * `config` - Grid geometry and glyph configuration
///
/// # Returns
/// * `Ok(String)` - Complete profile with labels
/// * `Err(VizError)` - Invalid configuration or unrenderable scene
pub fn render_profile(scene: &Scene, config: &ProfileConfig) -> Result<String> {
    if config.width < 2 {
        return Err(VizError::ProfileError(format!(
            "profile width must be at least 2 columns, got {}",
            config.width
        )));
    }
    if config.half_height < 1 {
        return Err(VizError::ProfileError(
            "profile half_height must be at least 1 row".to_string(),
        ));
    }
    let glyphs: Vec<char> = config.station_glyphs.chars().collect();
    if glyphs.is_empty() {
        return Err(VizError::ProfileError(
            "station glyph ramp is empty".to_string(),
        ));
    }
    if scene.envelope.is_empty() {
        return Err(VizError::ProfileError("scene envelope is empty".to_string()));
    }

    let span_mm = scene.span_mm();
    let r_max = scene.max_radius_mm();
    if r_max <= 0.0 {
        return Err(VizError::ProfileError(
            "scene has no positive radius to scale against".to_string(),
        ));
    }

    let rows = 2 * config.half_height + 1;
    let axis_row = config.half_height;
    let mut grid = vec![vec![' '; config.width]; rows];

    let row_offset = |radius_mm: f64| -> usize {
        let offset = (radius_mm / r_max * config.half_height as f64).round() as usize;
        offset.min(config.half_height)
    };
    let column_of = |distance_mm: f64| -> usize {
        if span_mm > 0.0 {
            let col = (distance_mm / span_mm * (config.width - 1) as f64).round() as usize;
            col.min(config.width - 1)
        } else {
            0
        }
    };

    // Axis
    for cell in grid[axis_row].iter_mut() {
        *cell = AXIS_CHAR;
    }

    // Aperture rails, above and below the axis
    if let Some(aperture) = &scene.aperture {
        let offset = row_offset(aperture.radius_mm);
        for row in [axis_row - offset, axis_row + offset] {
            for cell in grid[row].iter_mut() {
                if *cell == ' ' {
                    *cell = APERTURE_CHAR;
                }
            }
        }
    }

    // Lens plane column
    if let Some(lens) = &scene.lens {
        let col = column_of(lens.distance_mm);
        for row in grid.iter_mut() {
            if row[col] == ' ' || row[col] == AXIS_CHAR {
                row[col] = LENS_CHAR;
            }
        }
    }

    // Envelope branches: nearest-sample lookup per column
    let samples = scene.envelope.len();
    for col in 0..config.width {
        let index =
            ((col as f64 / (config.width - 1) as f64) * (samples - 1) as f64).round() as usize;
        let offset = row_offset(scene.envelope[index].radius_mm);
        grid[axis_row - offset][col] = ENVELOPE_CHAR;
        grid[axis_row + offset][col] = ENVELOPE_CHAR;
    }

    // Stations last, so markers stay visible
    for station in &scene.stations {
        let col = column_of(station.distance_mm);
        let offset = row_offset(station.radius_mm);
        let glyph_index =
            (station.opacity.clamp(0.0, 1.0) * (glyphs.len() - 1) as f64).round() as usize;
        let glyph = glyphs[glyph_index];
        // A blank glyph means the station has faded out entirely; leave the
        // envelope visible underneath instead of punching a hole in it.
        if glyph != ' ' {
            grid[axis_row - offset][col] = glyph;
            grid[axis_row + offset][col] = glyph;
        }
    }

    // Assemble output
    let mut out = String::new();
    if let Some(title) = config.title {
        writeln!(out, "{title}")?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    }
    writeln!(out, "+{r_max:.2} mm")?;
    for row in &grid {
        let line: String = row.iter().collect();
        writeln!(out, "{line}")?;
    }
    writeln!(out, "-{r_max:.2} mm")?;
    writeln!(out, "0 to {span_mm:.0} mm")?;

    Ok(out)
}
