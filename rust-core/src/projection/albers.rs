use nalgebra::{Rotation3, Vector2};
use serde::{Deserialize, Serialize};

use crate::interfaces::SphericalDirection;
use crate::projection::plane_transform::PlaneTransform;

/// Inverse equal-area projection of a planar disc onto a hemisphere.
///
/// A point at distance `rho` from the origin lands at elevation (polar angle)
/// `acos(1 - rho² / radius²)` and azimuth `atan2(y, x)`, so the disc of `radius`
/// covers the hemisphere and equal areas stay equal. Points beyond `sqrt(2) * radius`
/// are outside the domain and map to NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlbersProjection {
    pub radius: f64,
    /// Rotation of the sphere (roll, pitch, yaw) applied after the projection
    pub euler_angles: [f64; 3],
}

impl AlbersProjection {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            euler_angles: [0.0; 3],
        }
    }

    pub fn with_euler_angles(mut self, euler_angles: [f64; 3]) -> Self {
        self.euler_angles = euler_angles;
        self
    }

    fn rotation(&self) -> Option<Rotation3<f64>> {
        let [roll, pitch, yaw] = self.euler_angles;
        if roll == 0.0 && pitch == 0.0 && yaw == 0.0 {
            return None;
        }
        Some(Rotation3::from_euler_angles(roll, pitch, yaw))
    }

    /// Spherical direction of a planar point.
    pub fn inverse_map(&self, point: Vector2<f64>) -> SphericalDirection {
        let z = 1.0 - point.norm_squared() / (self.radius * self.radius);
        if !(-1.0..=1.0).contains(&z) {
            return SphericalDirection::new(f64::NAN, f64::NAN);
        }
        let direction = SphericalDirection::new(z.acos(), point.y.atan2(point.x));

        match self.rotation() {
            None => direction,
            Some(rotation) => {
                let v = rotation * direction.to_unit_vector();
                SphericalDirection::new(v.z.clamp(-1.0, 1.0).acos(), v.y.atan2(v.x))
            }
        }
    }
}

impl PlaneTransform for AlbersProjection {
    fn apply(&self, point: Vector2<f64>) -> Vector2<f64> {
        let direction = self.inverse_map(point);
        Vector2::new(direction.elevation, direction.azimuth)
    }
}
