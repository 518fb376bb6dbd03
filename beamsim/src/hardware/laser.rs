//! Laser source configuration and models for beam propagation simulation.
//!
//! This module provides laser source descriptions with the optical
//! characteristics needed by the propagation model: wavelength, waist radius,
//! beam-quality factor, optical power and pulse timing. It exposes the
//! derived beam geometry (Rayleigh range, divergence, spot size at distance)
//! through typed wrappers over the closed forms in [`crate::optics`].
//!
//! # Source Models
//!
//! The module includes several representative configurations:
//! - **HE_NE**: Helium-Neon alignment laser, the visible-bench workhorse
//! - **FIBER_1550**: Telecom-band fiber laser
//! - **ND_YAG_1064**: Diode-pumped Nd:YAG
//! - **TI_SAPPHIRE_800**: Ti:Sapphire ultrafast oscillator
//!
//! # Examples
//!
//! ```rust
//! use beamsim::hardware::laser::models::HE_NE;
//! use beamsim::units::{Length, LengthExt};
//!
//! let laser = HE_NE.clone();
//! let z_r = laser.rayleigh_range();
//! let theta = laser.divergence_rad();
//! let spot = laser.beam_radius_at(Length::from_millimeters(1000.0));
//!
//! println!("Rayleigh range: {:.1} mm", z_r.as_millimeters());
//! println!("Divergence: {:.3} mrad", theta * 1e3);
//! println!("Spot @ 1 m: {:.2} mm", spot.as_millimeters());
//! ```

use crate::optics;
use crate::units::{Length, LengthExt};
use once_cell::sync::Lazy;

/// Laser source configuration.
///
/// Represents a laser with the parameters that drive the propagation model.
/// An immutable value type: evaluations never mutate it, and user input
/// replaces it wholesale between frames.
#[derive(Debug, Clone)]
pub struct LaserConfig {
    /// Source model name or identifier
    pub name: String,
    /// Vacuum wavelength (typically specified in nanometers)
    pub wavelength: Length,
    /// Beam waist radius w0 (typically specified in millimeters)
    pub waist_radius: Length,
    /// Beam-quality factor M² (1.0 = ideal Gaussian)
    pub beam_quality: f64,
    /// Average optical power in milliwatts
    pub power_mw: f64,
    /// Pulse width in nanoseconds
    pub pulse_width_ns: f64,
    /// Pulse repetition rate in kilohertz
    pub rep_rate_khz: f64,
}

impl LaserConfig {
    /// Create a new laser source configuration
    pub fn new(
        name: impl Into<String>,
        wavelength: Length,
        waist_radius: Length,
        beam_quality: f64,
        power_mw: f64,
        pulse_width_ns: f64,
        rep_rate_khz: f64,
    ) -> Self {
        Self {
            name: name.into(),
            wavelength,
            waist_radius,
            beam_quality,
            power_mw,
            pulse_width_ns,
            rep_rate_khz,
        }
    }

    /// Rayleigh range z_R = π·w0²/(λ·M²).
    pub fn rayleigh_range(&self) -> Length {
        Length::from_meters(optics::rayleigh_range_m(
            self.wavelength.as_meters(),
            self.waist_radius.as_meters(),
            self.beam_quality,
        ))
    }

    /// Far-field divergence half-angle θ = λ·M²/(π·w0), in radians.
    pub fn divergence_rad(&self) -> f64 {
        optics::divergence_rad(
            self.wavelength.as_meters(),
            self.waist_radius.as_meters(),
            self.beam_quality,
        )
    }

    /// Beam radius at distance `z` from the waist.
    ///
    /// At z = 0 this is the quality-scaled waist w0·M² (see [`crate::optics`]
    /// for why the M² scaling applies at the waist in this model).
    pub fn beam_radius_at(&self, z: Length) -> Length {
        Length::from_meters(optics::beam_radius_m(
            z.as_meters(),
            self.waist_radius.as_meters(),
            self.wavelength.as_meters(),
            self.beam_quality,
        ))
    }

    /// Pulse energy in microjoules, from average power and repetition rate.
    pub fn pulse_energy_uj(&self) -> f64 {
        // P_avg [mW] / f_rep [kHz] = E [µJ]
        self.power_mw / self.rep_rate_khz
    }

    /// Create a new configuration with a modified waist radius
    pub fn with_waist_radius(&self, waist_radius: Length) -> LaserConfig {
        LaserConfig {
            waist_radius,
            ..self.clone()
        }
    }

    /// Create a new configuration with a modified beam-quality factor
    pub fn with_beam_quality(&self, beam_quality: f64) -> LaserConfig {
        LaserConfig {
            beam_quality,
            ..self.clone()
        }
    }
}

/// Standard laser source models
pub mod models {
    use super::*;

    /// Helium-Neon alignment laser
    pub static HE_NE: Lazy<LaserConfig> = Lazy::new(|| {
        LaserConfig::new(
            "He-Ne",
            Length::from_nanometers(632.8),
            Length::from_millimeters(0.5),
            1.1, // M²
            5.0, // mW
            5.0, // ns
            10.0, // kHz
        )
    });

    /// Telecom-band fiber laser
    pub static FIBER_1550: Lazy<LaserConfig> = Lazy::new(|| {
        LaserConfig::new(
            "Fiber 1550",
            Length::from_nanometers(1550.0),
            Length::from_millimeters(0.5),
            1.05,  // M²
            140.0, // mW
            5.0,   // ns
            10.0,  // kHz
        )
    });

    /// Diode-pumped Nd:YAG
    pub static ND_YAG_1064: Lazy<LaserConfig> = Lazy::new(|| {
        LaserConfig::new(
            "Nd:YAG",
            Length::from_nanometers(1064.0),
            Length::from_millimeters(1.0),
            1.2,     // M²
            10000.0, // mW
            5.0,     // ns
            10.0,    // kHz
        )
    });

    /// Ti:Sapphire ultrafast oscillator
    pub static TI_SAPPHIRE_800: Lazy<LaserConfig> = Lazy::new(|| {
        LaserConfig::new(
            "Ti:Sapphire",
            Length::from_nanometers(800.0),
            Length::from_millimeters(0.6),
            1.08,   // M²
            1000.0, // mW
            5.0,    // ns
            10.0,   // kHz
        )
    });

    /// All predefined sources, for sweep and comparison tools
    pub static ALL_LASERS: Lazy<Vec<LaserConfig>> = Lazy::new(|| {
        vec![
            HE_NE.clone(),
            FIBER_1550.clone(),
            ND_YAG_1064.clone(),
            TI_SAPPHIRE_800.clone(),
        ]
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn he_ne() -> LaserConfig {
        models::HE_NE.clone()
    }

    #[test]
    fn test_rayleigh_range() {
        let laser = he_ne();
        assert_relative_eq!(laser.rayleigh_range().as_meters(), 1.1283, epsilon = 0.001);
    }

    #[test]
    fn test_divergence() {
        let laser = he_ne();
        assert_relative_eq!(laser.divergence_rad() * 1e3, 0.4431, epsilon = 0.001);
    }

    #[test]
    fn test_waist_radius_at_origin() {
        let laser = he_ne();
        let r0 = laser.beam_radius_at(Length::from_millimeters(0.0));
        assert_relative_eq!(
            r0.as_millimeters(),
            0.5 * 1.1, // w0·M²
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_spot_at_bench_distance() {
        let laser = he_ne();
        let spot = laser.beam_radius_at(Length::from_millimeters(1000.0));
        assert_relative_eq!(spot.as_millimeters(), 0.7349, epsilon = 0.001);
    }

    #[test]
    fn test_pulse_energy() {
        let laser = he_ne();
        // 5 mW / 10 kHz = 0.5 µJ
        assert_relative_eq!(laser.pulse_energy_uj(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_with_modifiers() {
        let laser = he_ne().with_beam_quality(2.0);
        assert_eq!(laser.beam_quality, 2.0);
        assert_eq!(laser.name, "He-Ne");

        let wide = laser.with_waist_radius(Length::from_millimeters(1.5));
        assert_relative_eq!(wide.waist_radius.as_millimeters(), 1.5, epsilon = 1e-9);
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_predefined_sources() {
        assert_eq!(models::HE_NE.name, "He-Ne");
        assert_relative_eq!(models::HE_NE.wavelength.as_nanometers(), 632.8, epsilon = 1e-9);
        assert_eq!(models::HE_NE.beam_quality, 1.1);

        assert_relative_eq!(
            models::FIBER_1550.wavelength.as_nanometers(),
            1550.0,
            epsilon = 1e-9
        );
        assert_eq!(models::ND_YAG_1064.power_mw, 10000.0);
        assert_eq!(models::TI_SAPPHIRE_800.beam_quality, 1.08);

        assert_eq!(models::ALL_LASERS.len(), 4);
    }
}
