//! Type-safe physical units for beam propagation modeling
//!
//! This module provides strongly-typed units using the `uom` crate to prevent
//! unit confusion errors at compile time. Wavelengths arrive in nanometers,
//! waist radii and propagation distances in millimeters, linewidths in
//! gigahertz; everything is converted to SI at this boundary and computed in
//! raw f64 inside the model.

use uom::si::frequency::{gigahertz, hertz};
use uom::si::length::{meter, micrometer, millimeter, nanometer};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Type alias for spectral linewidth measurements
pub type Frequency = uom::si::f64::Frequency;

/// Extension trait for length conversions commonly used in laser optics
pub trait LengthExt {
    /// Create length from nanometers (wavelengths)
    fn from_nanometers(nm: f64) -> Self;

    /// Get length in nanometers
    fn as_nanometers(&self) -> f64;

    /// Create length from micrometers (spot sizes)
    fn from_micrometers(um: f64) -> Self;

    /// Get length in micrometers
    fn as_micrometers(&self) -> f64;

    /// Create length from millimeters (waists, bench distances)
    fn from_millimeters(mm: f64) -> Self;

    /// Get length in millimeters
    fn as_millimeters(&self) -> f64;

    /// Create length from meters
    fn from_meters(m: f64) -> Self;

    /// Get length in meters
    fn as_meters(&self) -> f64;
}

/// Extension trait for frequency conversions used for source linewidths
pub trait FrequencyExt {
    /// Create frequency from gigahertz (linewidth sliders)
    fn from_gigahertz(ghz: f64) -> Self;

    /// Get frequency in gigahertz
    fn as_gigahertz(&self) -> f64;

    /// Get frequency in hertz
    fn as_hertz(&self) -> f64;
}

impl LengthExt for Length {
    fn from_nanometers(nm: f64) -> Self {
        Length::new::<nanometer>(nm)
    }

    fn as_nanometers(&self) -> f64 {
        self.get::<nanometer>()
    }

    fn from_micrometers(um: f64) -> Self {
        Length::new::<micrometer>(um)
    }

    fn as_micrometers(&self) -> f64 {
        self.get::<micrometer>()
    }

    fn from_millimeters(mm: f64) -> Self {
        Length::new::<millimeter>(mm)
    }

    fn as_millimeters(&self) -> f64 {
        self.get::<millimeter>()
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }
}

impl FrequencyExt for Frequency {
    fn from_gigahertz(ghz: f64) -> Self {
        Frequency::new::<gigahertz>(ghz)
    }

    fn as_gigahertz(&self) -> f64 {
        self.get::<gigahertz>()
    }

    fn as_hertz(&self) -> f64 {
        self.get::<hertz>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        // Wavelength conversions
        let wavelength = Length::from_nanometers(632.8);
        assert_relative_eq!(wavelength.as_nanometers(), 632.8, epsilon = 0.001);
        assert_relative_eq!(wavelength.as_micrometers(), 0.6328, epsilon = 0.0001);
        assert_relative_eq!(wavelength.as_meters(), 632.8e-9, epsilon = 1e-12);

        // Waist radius conversions
        let waist = Length::from_millimeters(0.5);
        assert_relative_eq!(waist.as_millimeters(), 0.5, epsilon = 0.001);
        assert_relative_eq!(waist.as_micrometers(), 500.0, epsilon = 0.01);
        assert_relative_eq!(waist.as_meters(), 5e-4, epsilon = 1e-9);

        // Bench distance conversions
        let bench = Length::from_meters(1.0);
        assert_relative_eq!(bench.as_millimeters(), 1000.0, epsilon = 0.001);
    }

    #[test]
    fn test_frequency_conversions() {
        let linewidth = Frequency::from_gigahertz(1.5);
        assert_relative_eq!(linewidth.as_gigahertz(), 1.5, epsilon = 1e-9);
        assert_relative_eq!(linewidth.as_hertz(), 1.5e9, epsilon = 1.0);
    }

    #[test]
    fn test_length_math() {
        let a = Length::from_millimeters(0.4);
        let b = Length::from_millimeters(0.1);

        let sum = a + b;
        assert_relative_eq!(sum.as_millimeters(), 0.5, epsilon = 1e-9);

        let doubled = a * 2.0;
        assert_relative_eq!(doubled.as_millimeters(), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_typical_source_values() {
        let visible = Length::from_nanometers(632.8);
        let fiber = Length::from_nanometers(1550.0);
        assert!(visible < fiber);

        let narrow = Frequency::from_gigahertz(0.001);
        let broad = Frequency::from_gigahertz(1000.0);
        assert!(narrow < broad);
    }
}
