// Projection module: coordinate transforms applied to lattice positions
// This module maps the planar lattice onto the eye's sphere for downstream consumers

// ======================== MODULE DECLARATIONS ========================
pub mod albers;
pub mod plane_transform;


// ======================== TRANSFORMS ========================
pub use plane_transform::PlaneTransform; // trait - maps a planar point to application coordinates
// PlaneTransform trait methods:
//   apply(&self, point: Vector2<f64>) -> Vector2<f64>   - transformed point
// Implemented for every Fn(Vector2<f64>) -> Vector2<f64>

pub use albers::AlbersProjection; // struct - inverse equal-area projection of the disc onto the hemisphere
// AlbersProjection impl methods:
//   new(radius: f64) -> Self                                      - projection without rotation
//   with_euler_angles(self, angles: [f64; 3]) -> Self             - adds a sphere rotation (roll, pitch, yaw)
//   inverse_map(&self, point: Vector2<f64>) -> SphericalDirection - (elevation, azimuth) of a planar point
