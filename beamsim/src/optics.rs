//! Closed-form Gaussian-beam propagation math.
//!
//! Pure, stateless functions over raw f64 SI scalars. Unit conversion happens
//! at the caller (see [`crate::units`]); everything here is meters, hertz and
//! radians.
//!
//! # Physics Models
//!
//! ## Beam expansion
//! The beam radius follows the standard expansion law scaled by the beam
//! quality factor:
//! - **Rayleigh range**: z_R = π·w0²/(λ·M²)
//! - **Divergence half-angle**: θ = λ·M²/(π·w0)
//! - **Radius**: r(z) = w0·M²·√(1+(z/z_R)²)
//!
//! The M² factor scales the waist itself (r(0) = w0·M²) rather than entering
//! only through the divergence term. That differs from the textbook embedded
//! Gaussian treatment and is kept deliberately: the model trades physical
//! rigor for a single monotone quality knob.
//!
//! ## Temporal coherence
//! Coherence length from source linewidth: L_c = c/Δν.
//!
//! # Preconditions
//! Inputs are assumed pre-validated (λ > 0, w0 > 0, M² ≥ 1, Δν > 0); see
//! [`crate::scene::Scene::compose`] for the validating boundary. Out-of-domain
//! values produce NaN/∞ rather than panics.

use std::f64::consts::PI;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_M_PER_S: f64 = 2.998e8;

/// Rayleigh range in meters: z_R = π·w0²/(λ·M²).
///
/// Distance from the waist at which the beam radius has grown by √2.
pub fn rayleigh_range_m(wavelength_m: f64, waist_m: f64, beam_quality: f64) -> f64 {
    PI * waist_m * waist_m / (wavelength_m * beam_quality)
}

/// Far-field divergence half-angle in radians: θ = λ·M²/(π·w0).
pub fn divergence_rad(wavelength_m: f64, waist_m: f64, beam_quality: f64) -> f64 {
    wavelength_m * beam_quality / (PI * waist_m)
}

/// Rayleigh range and divergence as a pair, for callers that report both.
pub fn rayleigh_range_and_divergence(
    wavelength_m: f64,
    waist_m: f64,
    beam_quality: f64,
) -> (f64, f64) {
    (
        rayleigh_range_m(wavelength_m, waist_m, beam_quality),
        divergence_rad(wavelength_m, waist_m, beam_quality),
    )
}

/// Beam radius in meters at distance `z_m` from the waist.
///
/// Implements r(z) = w0·M²·√(1+(z/z_R)²) with the Rayleigh range recomputed
/// from the source parameters. O(1); recomputation is cheaper than caching.
pub fn beam_radius_m(z_m: f64, waist_m: f64, wavelength_m: f64, beam_quality: f64) -> f64 {
    let z_r = rayleigh_range_m(wavelength_m, waist_m, beam_quality);
    let ratio = z_m / z_r;
    waist_m * beam_quality * (1.0 + ratio * ratio).sqrt()
}

/// Temporal coherence length in meters: L_c = c/Δν.
///
/// Strictly decreasing in the linewidth; Δν is constrained to be positive at
/// the validation boundary, so no division by zero occurs in practice.
pub fn coherence_length_m(linewidth_hz: f64) -> f64 {
    SPEED_OF_LIGHT_M_PER_S / linewidth_hz
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use float_cmp::approx_eq;

    // He-Ne reference case used throughout: λ = 632.8 nm, w0 = 0.5 mm, M² = 1.1
    const LAMBDA_M: f64 = 632.8e-9;
    const WAIST_M: f64 = 0.5e-3;
    const M2: f64 = 1.1;

    #[test]
    fn test_rayleigh_range_reference_value() {
        // Hand-computed: π·(5e-4)²/(632.8e-9·1.1) ≈ 1.1283 m
        let z_r = rayleigh_range_m(LAMBDA_M, WAIST_M, M2);
        assert_relative_eq!(z_r, 1.1283, epsilon = 0.001);
    }

    #[test]
    fn test_divergence_reference_value() {
        // Hand-computed: (632.8e-9·1.1)/(π·5e-4) ≈ 0.4431 mrad
        let theta = divergence_rad(LAMBDA_M, WAIST_M, M2);
        assert_relative_eq!(theta, 4.431e-4, epsilon = 1e-6);
    }

    #[test]
    fn test_rayleigh_divergence_product_is_waist() {
        // z_R·θ = w0 is an exact identity under this model
        let (z_r, theta) = rayleigh_range_and_divergence(LAMBDA_M, WAIST_M, M2);
        assert!(approx_eq!(f64, z_r * theta, WAIST_M, epsilon = 1e-12));
    }

    #[test]
    fn test_waist_invariant() {
        // r(0) = w0·M², the quality-scaled waist
        let r0 = beam_radius_m(0.0, WAIST_M, LAMBDA_M, M2);
        assert!(approx_eq!(f64, r0, WAIST_M * M2, epsilon = 1e-15));

        // Ideal beam collapses to the physical waist
        let r0_ideal = beam_radius_m(0.0, WAIST_M, LAMBDA_M, 1.0);
        assert!(approx_eq!(f64, r0_ideal, WAIST_M, epsilon = 1e-15));
    }

    #[test]
    fn test_radius_monotone_in_distance() {
        let mut previous = beam_radius_m(0.0, WAIST_M, LAMBDA_M, M2);
        for i in 1..=100 {
            let z = i as f64 * 0.05; // out to 5 m
            let r = beam_radius_m(z, WAIST_M, LAMBDA_M, M2);
            assert!(
                r >= previous,
                "radius shrank between z = {} and z = {}",
                (i - 1) as f64 * 0.05,
                z
            );
            previous = r;
        }
    }

    #[test]
    fn test_radius_at_rayleigh_range() {
        // At z = z_R the radius has grown by √2
        let z_r = rayleigh_range_m(LAMBDA_M, WAIST_M, M2);
        let r = beam_radius_m(z_r, WAIST_M, LAMBDA_M, M2);
        assert_relative_eq!(r, WAIST_M * M2 * 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_spot_size_at_one_meter() {
        // End-to-end reference: He-Ne at 1000 mm ⇒ ≈ 0.7349 mm
        let r = beam_radius_m(1.0, WAIST_M, LAMBDA_M, M2);
        assert_relative_eq!(r * 1e3, 0.7349, epsilon = 0.001);
    }

    #[test]
    fn test_coherence_length_reference_value() {
        // 1.5 GHz ⇒ ≈ 0.19987 m
        let l_c = coherence_length_m(1.5e9);
        assert_relative_eq!(l_c, 0.19987, epsilon = 1e-4);
    }

    #[test]
    fn test_coherence_length_strictly_decreasing() {
        let linewidths_hz = [1e5, 1e6, 1e8, 1.5e9, 1e12, 1e13];
        for pair in linewidths_hz.windows(2) {
            assert!(coherence_length_m(pair[0]) > coherence_length_m(pair[1]));
        }
    }

    #[test]
    fn test_divergence_grows_with_beam_quality() {
        let ideal = divergence_rad(LAMBDA_M, WAIST_M, 1.0);
        let degraded = divergence_rad(LAMBDA_M, WAIST_M, 2.5);
        assert!(degraded > ideal);
    }

    #[test]
    fn test_rayleigh_range_shrinks_with_beam_quality() {
        let ideal = rayleigh_range_m(LAMBDA_M, WAIST_M, 1.0);
        let degraded = rayleigh_range_m(LAMBDA_M, WAIST_M, 2.5);
        assert!(degraded < ideal);
    }
}
