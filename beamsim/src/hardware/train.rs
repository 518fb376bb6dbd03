//! Optical train configuration: propagation distance, lens and aperture.
//!
//! The train is purely descriptive. A lens, when present, is drawn at the
//! fixed midpoint of the propagation span regardless of its focal length (a
//! visual convention, not a ray trace), and the aperture marks a radius
//! without computing clipping loss.

use crate::units::{Length, LengthExt};

/// Free-space propagation span with an optional lens and aperture.
#[derive(Debug, Clone)]
pub struct OpticalTrainConfig {
    /// Total propagation distance L from the waist
    pub propagation_distance: Length,
    /// Focal length of the single lens; `None` means no lens in the train
    pub focal_length: Option<Length>,
    /// Aperture radius; `None` means the aperture is disabled
    pub aperture_radius: Option<Length>,
}

impl OpticalTrainConfig {
    /// Create a bare free-space span with no lens and no aperture
    pub fn free_space(propagation_distance: Length) -> Self {
        Self {
            propagation_distance,
            focal_length: None,
            aperture_radius: None,
        }
    }

    /// Create a new train configuration with a lens of the given focal length
    pub fn with_lens(&self, focal_length: Length) -> OpticalTrainConfig {
        OpticalTrainConfig {
            focal_length: Some(focal_length),
            ..self.clone()
        }
    }

    /// Create a new train configuration with an aperture of the given radius
    pub fn with_aperture(&self, aperture_radius: Length) -> OpticalTrainConfig {
        OpticalTrainConfig {
            aperture_radius: Some(aperture_radius),
            ..self.clone()
        }
    }

    /// Distance of the lens plane from the waist, when a lens is present.
    ///
    /// Always the midpoint L/2 of the propagation span; the focal length only
    /// gates presence.
    pub fn lens_plane(&self) -> Option<Length> {
        self.focal_length
            .map(|_| self.propagation_distance / 2.0)
    }

    /// Whether an aperture is marked on the train
    pub fn has_aperture(&self) -> bool {
        self.aperture_radius.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_space_has_no_overlays() {
        let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0));
        assert!(train.lens_plane().is_none());
        assert!(!train.has_aperture());
    }

    #[test]
    fn test_lens_plane_is_midpoint() {
        let train = OpticalTrainConfig::free_space(Length::from_millimeters(1000.0))
            .with_lens(Length::from_millimeters(200.0));

        let plane = train.lens_plane().unwrap();
        assert_relative_eq!(plane.as_millimeters(), 500.0, epsilon = 1e-9);

        // The focal value does not move the plane
        let long_focal = train.with_lens(Length::from_millimeters(900.0));
        assert_relative_eq!(
            long_focal.lens_plane().unwrap().as_millimeters(),
            500.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_aperture_marking() {
        let train = OpticalTrainConfig::free_space(Length::from_millimeters(500.0))
            .with_aperture(Length::from_millimeters(5.0));
        assert!(train.has_aperture());
        assert_relative_eq!(
            train.aperture_radius.unwrap().as_millimeters(),
            5.0,
            epsilon = 1e-9
        );
    }
}
