use nalgebra::Vector2;

use crate::config::DISC_TOLERANCE;
use crate::lattice::hex_coordinates::HexCoordinate;

/// Keep the coordinates whose Euclidean position lies within `max_radius` of the origin.
///
/// Survivors keep their generation order and are re-indexed densely from 0.
/// The crop runs on untransformed positions so projection never alters topology.
pub fn filter_to_disc(
    coords: Vec<HexCoordinate>,
    positions: Vec<Vector2<f64>>,
    max_radius: f64,
) -> (Vec<HexCoordinate>, Vec<Vector2<f64>>) {
    let limit = max_radius * (1.0 + DISC_TOLERANCE);
    coords
        .into_iter()
        .zip(positions)
        .filter(|(_, pos)| pos.norm() <= limit)
        .unzip()
}
