// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Numbering order of the lattice. Right eyes run clockwise, left eyes counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn is_clockwise(self) -> bool {
        self == Winding::Clockwise
    }
}

/// A direction on the eye's sphere, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalDirection {
    pub elevation: f64,
    pub azimuth: f64,
}

impl SphericalDirection {
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self { elevation, azimuth }
    }

    /// Unit vector with `elevation` measured from the z axis.
    pub fn to_unit_vector(self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(
            self.elevation.sin() * self.azimuth.cos(),
            self.elevation.sin() * self.azimuth.sin(),
            self.elevation.cos(),
        )
    }

    /// Great-circle angle to `other`, in radians.
    pub fn angle_to(self, other: SphericalDirection) -> f64 {
        let dot = self.to_unit_vector().dot(&other.to_unit_vector());
        dot.clamp(-1.0, 1.0).acos()
    }
}
