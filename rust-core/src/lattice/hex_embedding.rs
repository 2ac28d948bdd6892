use nalgebra::{Matrix2x3, Vector2, Vector3};

use crate::interfaces::Winding;
use crate::lattice::hex_coordinates::HexCoordinate;
use crate::lattice::hex_directions::HexDirection;

/// Direction from the center to the first element of each section,
/// in units of the first three grid axes (up, upper-right, lower-right).
pub const REF_DIRS: [[i64; 3]; 6] = [
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    [-1, 0, 0],
    [0, -1, 0],
    [0, 0, -1],
];

/// Direction of travel along each section, in the same units as [`REF_DIRS`].
pub const REF_LOCS: [[i64; 3]; 6] = [
    [0, 0, 1],
    [-1, 0, 0],
    [0, -1, 0],
    [0, 0, -1],
    [1, 0, 0],
    [0, 1, 0],
];

/// Maps the symbolic 3-axis hexagonal encoding to Euclidean 2D.
///
/// Columns are the unit axes of directions 1, 2 and 3 (60° apart).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexBasis {
    axes: Matrix2x3<f64>,
}

impl HexBasis {
    pub fn new(spacing: f64, winding: Winding) -> Self {
        let axes = Matrix2x3::from_columns(&[
            HexDirection::Up.unit_axis(spacing, winding),
            HexDirection::UpperRight.unit_axis(spacing, winding),
            HexDirection::LowerRight.unit_axis(spacing, winding),
        ]);
        Self { axes }
    }

    pub fn axes(&self) -> &Matrix2x3<f64> {
        &self.axes
    }

    /// Symbolic 3-vector of a coordinate: `ring * REF_DIRS[section] + local * REF_LOCS[section]`.
    pub fn symbolic(coord: &HexCoordinate) -> Vector3<i64> {
        let dir = Vector3::from(REF_DIRS[coord.section]);
        let loc = Vector3::from(REF_LOCS[coord.section]);
        dir * coord.ring as i64 + loc * coord.local as i64
    }

    /// Euclidean position of a coordinate.
    pub fn embed(&self, coord: &HexCoordinate) -> Vector2<f64> {
        let v = Self::symbolic(coord).map(|c| c as f64);
        self.axes * v
    }

    /// Euclidean positions of a batch of coordinates.
    pub fn embed_all(&self, coords: &[HexCoordinate]) -> Vec<Vector2<f64>> {
        coords.iter().map(|c| self.embed(c)).collect()
    }
}
