//! Beam scene modeling: one simulation instant as a renderable description.
//!
//! A [`Scene`] captures everything a rendering backend needs to draw the
//! beam at a given simulation time: the radius envelope along the bench, the
//! five station markers with their noise-modulated opacities, the optional
//! aperture and lens overlays, and a summary block of derived optics for
//! readout panels.
//!
//! # Scene Architecture
//!
//! A scene is a plain value object in millimeter/scalar units, rebuilt in
//! full on every evaluation:
//! - **Envelope**: the positive branch of r(z) sampled at
//!   [`ENVELOPE_SAMPLES`] evenly spaced points over \[0, L\]. The curve is
//!   symmetric about the optical axis; renderers mirror it for the lower
//!   branch.
//! - **Stations**: markers at the [`STATION_FRACTIONS`] of the span. All
//!   stations within one evaluation share the same time-sampled noise
//!   factors; only the coherence fade varies with position.
//! - **Overlays**: descriptive only. The aperture marks a radius without
//!   computing clipping loss, and the lens is drawn at the fixed midpoint of
//!   the span.
//!
//! Construction is deterministic and performs no I/O: identical inputs
//! produce identical scenes, and the core never consults a wall clock.
//!
//! # Usage
//!
//! ```rust
//! use beamsim::hardware::laser::models::HE_NE;
//! use beamsim::units::{Frequency, FrequencyExt, Length, LengthExt};
//! use beamsim::{NoiseConfig, OpticalTrainConfig, Scene};
//!
//! let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0))
//!     .with_lens(Length::from_millimeters(200.0));
//! let noise = NoiseConfig::new(-140.0, Frequency::from_gigahertz(1.5), 5.0, 2.0);
//!
//! let scene = Scene::compose(&HE_NE, &train, &noise, 0.0).unwrap();
//! assert_eq!(scene.stations.len(), 5);
//! ```

use crate::hardware::{LaserConfig, OpticalTrainConfig};
use crate::noise::NoiseConfig;
use crate::optics;
use crate::units::{FrequencyExt, Length, LengthExt};
use crate::{BeamError, Result};
use serde::{Deserialize, Serialize};

/// Number of evenly spaced envelope samples over the propagation span.
pub const ENVELOPE_SAMPLES: usize = 200;

/// Fractional station positions along the propagation span.
pub const STATION_FRACTIONS: [f64; 5] = [0.0, 0.2, 0.5, 0.8, 1.0];

/// One sample of the beam envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    /// Distance from the waist in millimeters
    pub distance_mm: f64,
    /// Beam radius in millimeters (positive branch)
    pub radius_mm: f64,
}

/// A cross-section marker at a fixed fraction of the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationMarker {
    /// Distance from the waist in millimeters
    pub distance_mm: f64,
    /// Beam radius at the station in millimeters
    pub radius_mm: f64,
    /// Combined noise/coherence opacity in [0, 1]
    pub opacity: f64,
    /// Index into the renderer's station palette
    pub color_index: usize,
}

/// Aperture marking: where the boundary should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApertureOverlay {
    /// Aperture radius in millimeters; rendered at ± this value
    pub radius_mm: f64,
}

/// Lens marking at its plane on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensOverlay {
    /// Lens plane distance from the waist in millimeters
    pub distance_mm: f64,
}

/// Derived optics block for readout panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticsSummary {
    /// Source model name
    pub source_name: String,
    /// Vacuum wavelength in nanometers
    pub wavelength_nm: f64,
    /// Rayleigh range in meters
    pub rayleigh_range_m: f64,
    /// Far-field divergence half-angle in radians
    pub divergence_rad: f64,
    /// Temporal coherence length in meters
    pub coherence_length_m: f64,
    /// Beam radius at the end of the span, in millimeters
    pub spot_radius_mm: f64,
}

/// Complete renderable description of the beam at one simulation instant.
///
/// A value object rebuilt fully on every evaluation; no incremental mutation
/// and no hidden state. Serializable so any backend (chart library, terminal
/// plot, test harness) can consume it without touching the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Positive branch of the radius envelope over \[0, L\]
    pub envelope: Vec<EnvelopePoint>,
    /// The five station markers, in order of distance
    pub stations: Vec<StationMarker>,
    /// Aperture marking, when the aperture is enabled
    pub aperture: Option<ApertureOverlay>,
    /// Lens marking, when a lens is present
    pub lens: Option<LensOverlay>,
    /// Derived optics for readout panels
    pub summary: OpticsSummary,
}

impl Scene {
    /// Build the scene for one simulation instant.
    ///
    /// This is the single validating entry point of the model: the whole
    /// parameter bundle is checked against its physical domain here, and the
    /// pure math layers below assume validated inputs. On success the scene
    /// is a deterministic function of the arguments alone.
    ///
    /// # Arguments
    /// * `laser` - Source parameters
    /// * `train` - Propagation span, lens and aperture
    /// * `noise` - Noise and coherence parameters
    /// * `time_s` - Simulation time, owned by the caller's clock
    ///
    /// # Errors
    /// [`BeamError::InvalidParameter`] when any parameter violates its
    /// domain (λ ≤ 0, w0 ≤ 0, M² < 1, L < 0, f ≤ 0 when present, aperture
    /// radius ≤ 0 when present, Δν ≤ 0, RIN ≥ 0, energy jitter < 0, or a
    /// negative/non-finite time).
    pub fn compose(
        laser: &LaserConfig,
        train: &OpticalTrainConfig,
        noise: &NoiseConfig,
        time_s: f64,
    ) -> Result<Scene> {
        validate(laser, train, noise, time_s)?;

        let span_mm = train.propagation_distance.as_millimeters();
        log::debug!(
            "composing scene for {} over {span_mm} mm at t = {time_s}",
            laser.name
        );

        // Envelope: N samples inclusive of both ends of the span
        let step_mm = span_mm / (ENVELOPE_SAMPLES - 1) as f64;
        let envelope: Vec<EnvelopePoint> = (0..ENVELOPE_SAMPLES)
            .map(|i| {
                let z_mm = i as f64 * step_mm;
                EnvelopePoint {
                    distance_mm: z_mm,
                    radius_mm: laser
                        .beam_radius_at(Length::from_millimeters(z_mm))
                        .as_millimeters(),
                }
            })
            .collect();

        // One time-sampled noise factor pair is shared by every station in
        // this evaluation; only the coherence fade varies with position.
        let noise_modulation =
            noise.intensity_noise_factor(time_s) * noise.energy_jitter_factor(time_s);

        let stations: Vec<StationMarker> = STATION_FRACTIONS
            .iter()
            .enumerate()
            .map(|(color_index, frac)| {
                let z = Length::from_millimeters(span_mm * frac);
                let fade = noise.coherence_fade(z);
                StationMarker {
                    distance_mm: z.as_millimeters(),
                    radius_mm: laser.beam_radius_at(z).as_millimeters(),
                    opacity: (noise_modulation * fade).clamp(0.0, 1.0),
                    color_index,
                }
            })
            .collect();

        let aperture = train.aperture_radius.map(|radius| ApertureOverlay {
            radius_mm: radius.as_millimeters(),
        });

        let lens = train.lens_plane().map(|plane| LensOverlay {
            distance_mm: plane.as_millimeters(),
        });

        let (rayleigh_range_m, divergence_rad) = optics::rayleigh_range_and_divergence(
            laser.wavelength.as_meters(),
            laser.waist_radius.as_meters(),
            laser.beam_quality,
        );
        let summary = OpticsSummary {
            source_name: laser.name.clone(),
            wavelength_nm: laser.wavelength.as_nanometers(),
            rayleigh_range_m,
            divergence_rad,
            coherence_length_m: noise.coherence_length().as_meters(),
            spot_radius_mm: laser
                .beam_radius_at(train.propagation_distance)
                .as_millimeters(),
        };

        Ok(Scene {
            envelope,
            stations,
            aperture,
            lens,
            summary,
        })
    }

    /// Total propagation span of the scene in millimeters
    pub fn span_mm(&self) -> f64 {
        self.envelope.last().map_or(0.0, |p| p.distance_mm)
    }

    /// Largest radius a renderer has to fit: the envelope maximum or the
    /// aperture radius, whichever is greater
    pub fn max_radius_mm(&self) -> f64 {
        let envelope_max = self
            .envelope
            .iter()
            .map(|p| p.radius_mm)
            .fold(0.0, f64::max);
        match &self.aperture {
            Some(aperture) => envelope_max.max(aperture.radius_mm),
            None => envelope_max,
        }
    }
}

fn validate(
    laser: &LaserConfig,
    train: &OpticalTrainConfig,
    noise: &NoiseConfig,
    time_s: f64,
) -> Result<()> {
    let checks = [
        (
            "wavelength",
            laser.wavelength.as_nanometers(),
            laser.wavelength.as_meters() > 0.0,
            "> 0 nm",
        ),
        (
            "waist_radius",
            laser.waist_radius.as_millimeters(),
            laser.waist_radius.as_meters() > 0.0,
            "> 0 mm",
        ),
        (
            "beam_quality",
            laser.beam_quality,
            laser.beam_quality >= 1.0,
            ">= 1",
        ),
        (
            "propagation_distance",
            train.propagation_distance.as_millimeters(),
            train.propagation_distance.as_meters() >= 0.0,
            ">= 0 mm",
        ),
        (
            "focal_length",
            train.focal_length.map_or(0.0, |f| f.as_millimeters()),
            train.focal_length.map_or(true, |f| f.as_meters() > 0.0),
            "> 0 mm when a lens is present",
        ),
        (
            "aperture_radius",
            train.aperture_radius.map_or(0.0, |r| r.as_millimeters()),
            train.aperture_radius.map_or(true, |r| r.as_meters() > 0.0),
            "> 0 mm when the aperture is enabled",
        ),
        (
            "rin",
            noise.rin_dbc_per_hz,
            noise.rin_dbc_per_hz < 0.0,
            "< 0 dBc/Hz",
        ),
        (
            "linewidth",
            noise.linewidth.as_gigahertz(),
            noise.linewidth.as_hertz() > 0.0,
            "> 0 GHz",
        ),
        (
            "pointing_jitter",
            noise.pointing_jitter_urad,
            noise.pointing_jitter_urad >= 0.0,
            ">= 0 urad",
        ),
        (
            "energy_jitter",
            noise.energy_jitter_pct,
            noise.energy_jitter_pct >= 0.0,
            ">= 0 %",
        ),
        (
            "time",
            time_s,
            time_s.is_finite() && time_s >= 0.0,
            "finite and >= 0",
        ),
    ];

    for (name, value, ok, constraint) in checks {
        if !ok {
            return Err(BeamError::InvalidParameter {
                name,
                value,
                constraint,
            });
        }
    }
    Ok(())
}
