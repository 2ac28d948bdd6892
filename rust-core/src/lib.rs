//! Compound-eye retina model
//!
//! This library builds the hexagonal ommatidia lattice of an insect compound eye
//! and resolves the neural-superposition wiring of its photoreceptors.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod optic_axis;
pub mod projection;
pub mod retina;

pub use error::{EyeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
