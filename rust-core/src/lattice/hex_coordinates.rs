use serde::{Deserialize, Serialize};

use crate::config::BUFFER_RINGS;

/// Position of a lattice element in ring/section/local coordinates.
///
/// Ring 0 is the center. Every ring `i > 0` holds `6 * i` elements split into six
/// sections of `i` elements each; `local` counts from the first element of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoordinate {
    pub ring: usize,
    pub section: usize,
    pub local: usize,
}

impl HexCoordinate {
    pub fn new(ring: usize, section: usize, local: usize) -> Self {
        Self {
            ring,
            section,
            local,
        }
    }

    pub fn center() -> Self {
        Self::new(0, 0, 0)
    }

    /// Build the coordinate of the `local_id`-th element of `ring`.
    pub fn from_ring_index(ring: usize, local_id: usize) -> Self {
        if ring == 0 {
            return Self::center();
        }
        Self::new(ring, local_id / ring, local_id % ring)
    }

    /// Index of this element within its ring (`section * ring + local`).
    pub fn ring_index(&self) -> usize {
        self.section * self.ring + self.local
    }
}

/// Number of elements on ring `ring`.
pub fn ring_size(ring: usize) -> usize {
    if ring == 0 { 1 } else { 6 * ring }
}

/// Total number of generated rings for a requested ring count.
///
/// Two buffer rings are added, then enough rings to cover the circle that
/// circumscribes the buffered hexagon: `ceil((R + 2) * 2 / sqrt(3))`.
pub fn generated_ring_count(num_rings: usize) -> usize {
    let all_rings = (num_rings + BUFFER_RINGS) as f64;
    (all_rings * 2.0 / 3.0_f64.sqrt()).ceil() as usize
}

/// Generate the coordinates of rings `0..=last_ring`, ring by ring.
pub fn generate_ring_coordinates(last_ring: usize) -> Vec<HexCoordinate> {
    (0..=last_ring)
        .flat_map(|ring| (0..ring_size(ring)).map(move |i| HexCoordinate::from_ring_index(ring, i)))
        .collect()
}

/// Generate the over-sized hexagon of coordinates needed for `num_rings` requested rings.
pub fn generate_hex_coordinates(num_rings: usize) -> Vec<HexCoordinate> {
    generate_ring_coordinates(generated_ring_count(num_rings))
}
