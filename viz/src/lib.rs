//! ASCII visualization toolkit for beam propagation scenes.
//!
//! This crate renders [`beamsim::Scene`] values in plain text: a side-view
//! profile of the beam envelope with its stations and overlays, and a
//! metrics readout for the derived optics. Text output works in any
//! terminal, diffs cleanly in version control, and embeds directly in logs
//! and reports, which makes it a natural harness for a model that keeps all
//! rendering outside the core.
//!
//! # Core Modules
//!
//! - [`profile`]: character-grid side view with the mirrored envelope,
//!   aperture rails, lens column and opacity-graded station glyphs.
//! - [`readout`]: derived-optics summary and per-station table.
//!
//! Both consume the scene description only; nothing here reaches back into
//! the physics.

use std::fmt;
use thiserror::Error;

/// Error types for visualization operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Invalid profile configuration or an unrenderable scene
    #[error("Profile error: {0}")]
    ProfileError(String),

    /// Text formatting error during output generation
    #[error("Formatting error: {0}")]
    FmtError(#[from] fmt::Error),
}

/// Standard Result type for all visualization operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod profile;
pub mod readout;
