//! Common arguments shared across the simulation binaries.

use crate::hardware::laser::models;
use crate::hardware::{LaserConfig, OpticalTrainConfig};
use crate::noise::NoiseConfig;
use crate::units::{Frequency, FrequencyExt, Length, LengthExt};
use clap::{Parser, ValueEnum};
use std::fmt;

/// Predefined laser source selection for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LaserModel {
    /// Helium-Neon alignment laser (632.8 nm)
    HeNe,
    /// Telecom-band fiber laser (1550 nm)
    Fiber,
    /// Diode-pumped Nd:YAG (1064 nm)
    NdYag,
    /// Ti:Sapphire oscillator (800 nm)
    TiSapphire,
}

impl LaserModel {
    /// Resolve the selection to its source configuration
    pub fn to_config(&self) -> LaserConfig {
        match self {
            LaserModel::HeNe => models::HE_NE.clone(),
            LaserModel::Fiber => models::FIBER_1550.clone(),
            LaserModel::NdYag => models::ND_YAG_1064.clone(),
            LaserModel::TiSapphire => models::TI_SAPPHIRE_800.clone(),
        }
    }
}

impl fmt::Display for LaserModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_config().name)
    }
}

/// Common arguments shared across multiple simulation binaries
#[derive(Parser, Debug, Clone)]
pub struct SharedBeamArgs {
    /// Laser source preset
    #[arg(short, long, value_enum, default_value_t = LaserModel::HeNe)]
    pub laser: LaserModel,

    /// Override the preset wavelength, in nanometers
    #[arg(long)]
    pub wavelength: Option<f64>,

    /// Override the preset waist radius, in millimeters
    #[arg(long)]
    pub waist: Option<f64>,

    /// Override the preset beam-quality factor M²
    #[arg(long)]
    pub beam_quality: Option<f64>,

    /// Propagation distance L in millimeters
    #[arg(long, default_value_t = 1000.0)]
    pub distance: f64,

    /// Lens focal length in millimeters (0 removes the lens)
    #[arg(long, default_value_t = 200.0)]
    pub focal: f64,

    /// Aperture radius in millimeters (omit to disable the aperture)
    #[arg(long)]
    pub aperture: Option<f64>,

    /// Relative intensity noise in dBc/Hz
    #[arg(long, default_value_t = -140.0, allow_hyphen_values = true)]
    pub rin: f64,

    /// Source linewidth in gigahertz
    #[arg(long, default_value_t = 1.5)]
    pub linewidth: f64,

    /// Pointing jitter in microradians
    #[arg(long, default_value_t = 5.0)]
    pub pointing: f64,

    /// Pulse-energy jitter in percent
    #[arg(long, default_value_t = 2.0)]
    pub energy_jitter: f64,

    /// Simulation time in seconds
    #[arg(short, long, default_value_t = 0.0)]
    pub time: f64,
}

impl SharedBeamArgs {
    /// Source configuration: the selected preset with overrides applied
    pub fn laser_config(&self) -> LaserConfig {
        let mut laser = self.laser.to_config();
        if let Some(nm) = self.wavelength {
            laser.wavelength = Length::from_nanometers(nm);
        }
        if let Some(mm) = self.waist {
            laser.waist_radius = Length::from_millimeters(mm);
        }
        if let Some(m2) = self.beam_quality {
            laser.beam_quality = m2;
        }
        laser
    }

    /// Optical train from the distance/focal/aperture arguments.
    ///
    /// A focal length of 0 maps to "no lens", matching the slider convention
    /// this tool inherits.
    pub fn train_config(&self) -> OpticalTrainConfig {
        let mut train =
            OpticalTrainConfig::free_space(Length::from_millimeters(self.distance));
        if self.focal > 0.0 {
            train = train.with_lens(Length::from_millimeters(self.focal));
        }
        if let Some(radius) = self.aperture {
            train = train.with_aperture(Length::from_millimeters(radius));
        }
        train
    }

    /// Noise parameters from the stability arguments
    pub fn noise_config(&self) -> NoiseConfig {
        NoiseConfig::new(
            self.rin,
            Frequency::from_gigahertz(self.linewidth),
            self.pointing,
            self.energy_jitter,
        )
    }
}
