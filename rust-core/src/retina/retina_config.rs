use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_ACCEPTANCE_FACTOR, DEFAULT_NEUROPIL_NAME, DEFAULT_RADIUS, DEFAULT_RINGS, MAX_RINGS,
};
use crate::error::{EyeError, Result};
use crate::interfaces::Winding;
use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot};

/// How lattice positions are carried onto the eye's sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectionConfig {
    /// Keep planar positions
    Planar,
    /// Inverse equal-area projection with an optional sphere rotation
    Albers { euler_angles: [f64; 3] },
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig::Albers {
            euler_angles: [0.0; 3],
        }
    }
}

/// Which optic axis rule each ommatidium receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleSelection {
    /// `SuperpositionTop` for y >= 0, `SuperpositionBottom` below
    #[default]
    Hemispheric,
    /// The same rule everywhere
    Fixed(OpticAxisRule),
}

impl RuleSelection {
    /// Rule for an element at planar height `y`.
    pub fn rule_at(self, y: f64) -> OpticAxisRule {
        match self {
            RuleSelection::Fixed(rule) => rule,
            RuleSelection::Hemispheric if y >= 0.0 => OpticAxisRule::SuperpositionTop,
            RuleSelection::Hemispheric => OpticAxisRule::SuperpositionBottom,
        }
    }
}

/// Parameters of a retina model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetinaConfig {
    /// Rings around the central ommatidium
    pub rings: usize,
    /// Radius of the lattice disc (and of the projection sphere)
    pub radius: f64,
    pub winding: Winding,
    /// Acceptance angle as a multiple of the interommatidial angle
    pub acceptance_factor: f64,
    /// Photoreceptors added to each ommatidium; repeated names are numbered
    pub photoreceptors: Vec<PhotoreceptorSlot>,
    pub projection: ProjectionConfig,
    pub rule: RuleSelection,
    pub neuropil_name: String,
}

impl Default for RetinaConfig {
    fn default() -> Self {
        Self {
            rings: DEFAULT_RINGS,
            radius: DEFAULT_RADIUS,
            winding: Winding::Clockwise,
            acceptance_factor: DEFAULT_ACCEPTANCE_FACTOR,
            photoreceptors: PhotoreceptorSlot::ALL.to_vec(),
            projection: ProjectionConfig::default(),
            rule: RuleSelection::default(),
            neuropil_name: DEFAULT_NEUROPIL_NAME.to_string(),
        }
    }
}

impl RetinaConfig {
    pub fn with_rings(mut self, rings: usize) -> Self {
        self.rings = rings;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_rule(mut self, rule: RuleSelection) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_acceptance_factor(mut self, factor: f64) -> Self {
        self.acceptance_factor = factor;
        self
    }

    /// Check every parameter before anything is built.
    pub fn validate(&self) -> Result<()> {
        if self.rings > MAX_RINGS {
            return Err(EyeError::InvalidRingCount {
                rings: self.rings,
                max: MAX_RINGS,
            });
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(EyeError::InvalidRadius(self.radius));
        }
        if !self.acceptance_factor.is_finite() || self.acceptance_factor < 0.0 {
            return Err(EyeError::InvalidAcceptanceFactor(self.acceptance_factor));
        }
        Ok(())
    }
}
