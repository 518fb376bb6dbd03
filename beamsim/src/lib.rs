//! Laser beam propagation and stability simulation
//!
//! This crate provides functionality for modeling the propagation of a real
//! (non-ideal) laser beam through free space and a simple optical train,
//! including beam-quality degradation, aperture and lens marking, temporal
//! coherence decay, and time-varying intensity/energy noise.
//!
//! The central entry point is [`Scene::compose`], which turns a parameter
//! bundle (source, optical train, noise) plus a simulation time into a
//! complete, renderer-agnostic scene description. Rendering backends (chart
//! tools, terminal plots, test harnesses) consume the [`Scene`] value; the
//! core performs no I/O and owns no clock.

use thiserror::Error;

pub mod clock;
pub mod hardware;
pub mod noise;
pub mod optics;
pub mod scene;
pub mod shared_args;
pub mod units;

// Re-exports for easier access
pub use clock::SimulationClock;
pub use hardware::laser::LaserConfig;
pub use hardware::train::OpticalTrainConfig;
pub use noise::NoiseConfig;
pub use scene::Scene;

/// Error type for beam model evaluation.
///
/// The model is closed-form and allocation-free, so the only failure mode is
/// a parameter outside its stated physical domain. Validation happens once,
/// at [`Scene::compose`]; the pure math layers assume validated inputs.
#[derive(Debug, Error)]
pub enum BeamError {
    /// A parameter violated its physical domain (for example a non-positive
    /// wavelength or a beam-quality factor below 1).
    #[error("invalid parameter {name}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable domain constraint
        constraint: &'static str,
    },
}

/// Standard Result type for beam model operations.
pub type Result<T> = std::result::Result<T, BeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_parameter() {
        let err = BeamError::InvalidParameter {
            name: "wavelength",
            value: -1.0,
            constraint: "> 0 nm",
        };
        let msg = err.to_string();
        assert!(msg.contains("wavelength"));
        assert!(msg.contains("> 0 nm"));
    }
}
