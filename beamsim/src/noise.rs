//! Source noise and temporal coherence model.
//!
//! Produces the dimensionless modulation factors that animate the rendered
//! beam: a relative-intensity-noise factor, a pulse-energy jitter factor, and
//! a coherence fade that attenuates stations beyond the coherence length.
//!
//! The intensity and energy factors are stylized sinusoidal proxies, not
//! spectral-density integrals: each oscillates around 1 with an amplitude set
//! by the corresponding noise parameter. They exist to give smooth, visible
//! feedback as the parameters move, and they are deterministic functions of
//! the externally supplied simulation time.

use crate::optics;
use crate::units::{Frequency, FrequencyExt, Length, LengthExt};
use std::fmt;

/// Base amplitude scale of the intensity-noise oscillation.
pub const INTENSITY_NOISE_SCALE: f64 = 0.01;

/// Angular rate of the intensity-noise oscillation, rad per time unit.
pub const INTENSITY_NOISE_RATE: f64 = 10.0;

/// Angular rate of the energy-jitter oscillation, rad per time unit.
pub const ENERGY_JITTER_RATE: f64 = 3.0;

/// Coherence length above which a source is rated Excellent, in meters.
pub const EXCELLENT_COHERENCE_M: f64 = 10.0;

/// Coherence length above which a source is rated Good, in meters.
pub const GOOD_COHERENCE_M: f64 = 1.0;

/// Noise and stability parameters of a laser source.
#[derive(Debug, Clone)]
pub struct NoiseConfig {
    /// Relative intensity noise in dBc/Hz (negative; e.g. -140)
    pub rin_dbc_per_hz: f64,
    /// Source linewidth Δν (typically specified in gigahertz)
    pub linewidth: Frequency,
    /// Pointing jitter in microradians.
    ///
    /// Carried through the parameter bundle but not yet applied to any
    /// computed quantity.
    // TODO: displace station centers by a jitter-scaled transverse offset
    pub pointing_jitter_urad: f64,
    /// Pulse-energy jitter in percent of nominal energy
    pub energy_jitter_pct: f64,
}

impl NoiseConfig {
    /// Create a new noise parameter set
    pub fn new(
        rin_dbc_per_hz: f64,
        linewidth: Frequency,
        pointing_jitter_urad: f64,
        energy_jitter_pct: f64,
    ) -> Self {
        Self {
            rin_dbc_per_hz,
            linewidth,
            pointing_jitter_urad,
            energy_jitter_pct,
        }
    }

    /// Multiplicative intensity modulation at simulation time `t`:
    /// 1 + 0.01·10^(RIN/20)·sin(10·t).
    ///
    /// The amplitude scales with RIN in dB; at realistic RIN levels the
    /// excursion is far below a part per million.
    pub fn intensity_noise_factor(&self, t: f64) -> f64 {
        let amplitude = INTENSITY_NOISE_SCALE * 10f64.powf(self.rin_dbc_per_hz / 20.0);
        1.0 + amplitude * (INTENSITY_NOISE_RATE * t).sin()
    }

    /// Multiplicative pulse-energy modulation at simulation time `t`:
    /// 1 + (jitter%/100)·sin(3·t).
    pub fn energy_jitter_factor(&self, t: f64) -> f64 {
        1.0 + (self.energy_jitter_pct / 100.0) * (ENERGY_JITTER_RATE * t).sin()
    }

    /// Temporal coherence length L_c = c/Δν of this source.
    pub fn coherence_length(&self) -> Length {
        Length::from_meters(optics::coherence_length_m(self.linewidth.as_hertz()))
    }

    /// Coherence fade of a station at distance `z` from the waist.
    pub fn coherence_fade(&self, z: Length) -> f64 {
        coherence_fade(z.as_meters(), self.coherence_length().as_meters())
    }

    /// Combined station opacity at distance `z` and time `t`.
    ///
    /// The product of the two oscillating factors and the coherence fade can
    /// leave [0, 1]; excursions are saturated into the valid opacity range.
    pub fn station_opacity(&self, z: Length, t: f64) -> f64 {
        let product =
            self.intensity_noise_factor(t) * self.energy_jitter_factor(t) * self.coherence_fade(z);
        product.clamp(0.0, 1.0)
    }

    /// Qualitative coherence rating of this source
    pub fn grade(&self) -> CoherenceGrade {
        coherence_grade(self.coherence_length().as_meters())
    }
}

/// Coherence fade as a function of distance and coherence length, both in
/// meters.
///
/// Unity inside the coherence length, exponential decay beyond it:
/// exp(-(z-L_c)/L_c). Continuous at z = L_c and strictly decreasing past it.
pub fn coherence_fade(z_m: f64, coherence_length_m: f64) -> f64 {
    if z_m < coherence_length_m {
        1.0
    } else {
        (-(z_m - coherence_length_m) / coherence_length_m).exp()
    }
}

/// Qualitative rating of a source's temporal coherence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoherenceGrade {
    /// Coherence length above 10 m
    Excellent,
    /// Coherence length above 1 m
    Good,
    /// Coherence length of 1 m or less
    Short,
}

impl fmt::Display for CoherenceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CoherenceGrade::Excellent => "Excellent",
            CoherenceGrade::Good => "Good",
            CoherenceGrade::Short => "Short",
        };
        write!(f, "{label}")
    }
}

/// Rate a coherence length in meters
pub fn coherence_grade(coherence_length_m: f64) -> CoherenceGrade {
    if coherence_length_m > EXCELLENT_COHERENCE_M {
        CoherenceGrade::Excellent
    } else if coherence_length_m > GOOD_COHERENCE_M {
        CoherenceGrade::Good
    } else {
        CoherenceGrade::Short
    }
}
