// Lattice module: hexagonal ommatidia lattice and its neighbor graph
// This module generates ring/section/local coordinates, embeds them in the plane,
// crops them to a disc and links every element to its six neighbors

// ======================== MODULE DECLARATIONS ========================
pub mod disc_filter;
pub mod equator_bands;
pub mod hex_coordinates;
pub mod hex_directions;
pub mod hex_embedding;
pub mod hex_lattice;
pub mod mirror;
pub mod neighbors;

// Test modules
mod _tests_equator_bands;

// ======================== COORDINATES & EMBEDDING ========================
pub use hex_coordinates::{
    HexCoordinate,             // struct - (ring, section, local) position of an element
    generate_hex_coordinates,  // fn(num_rings: usize) -> Vec<HexCoordinate> - buffered hexagon of coordinates
    generate_ring_coordinates, // fn(last_ring: usize) -> Vec<HexCoordinate> - rings 0..=last_ring
    generated_ring_count,      // fn(num_rings: usize) -> usize - rings generated before cropping
    ring_size,                 // fn(ring: usize) -> usize - elements on one ring
};

pub use hex_directions::{
    HexDirection,          // enum - the six grid directions (Up, UpperRight, ..., UpperLeft)
    MAX_DIRECTION_CODE,    // const - largest direction code (composites included)
    expand_direction_code, // fn(code: u8) -> Result<&[HexDirection]> - hops of a direction code
};
// HexDirection impl methods:
//   from_code(code: u8) -> Option<Self>                        - direction for codes 1-6
//   opposite(self) -> Self                                     - direction d + 3 (wrapped)
//   unit_axis(self, spacing: f64, winding: Winding) -> Vector2 - displacement of one step

pub use hex_embedding::{
    HexBasis, // struct - 3-axis hexagonal basis mapping symbolic coordinates to the plane
    REF_DIRS, // const - section start direction per section
    REF_LOCS, // const - in-section travel direction per section
};

pub use disc_filter::filter_to_disc; // fn(coords, positions, max_radius) -> (coords, positions)

// ======================== NEIGHBORS & SYMMETRY ========================
pub use neighbors::{
    NEIGHBOR_SLOTS,             // const - self + six directions
    find_neighbors_in_direction, // fn(positions, offset, tolerance) -> Vec<(usize, usize)>
    resolve_neighbors,          // fn(positions, spacing, winding) -> Result<Vec<[ElementRef; 7]>>
};

pub use equator_bands::{
    EquatorBand,           // enum - symmetry band ("6", "7", "8a", "8b")
    classify_equator_band, // fn(y: f64, spacing: f64) -> EquatorBand
};

pub use mirror::mirror_coordinate; // fn(coord: &HexCoordinate) -> HexCoordinate

// ======================== LATTICE ========================
pub use hex_lattice::{
    ElementRef,     // enum - arena index or the dummy sentinel
    HexLattice,     // struct - immutable disc lattice with neighbor graph
    LatticeConfig,  // struct - construction parameters summary
    LatticeElement, // struct - one lattice position
};
// HexLattice impl methods:
//   new(num_rings, radius, transform: Option<&dyn PlaneTransform>, winding) -> Result<Self>
//   num_elements(&self) -> usize                                    - element count (dummy excluded)
//   position(&self, id) -> Result<Vector2<f64>>                     - Euclidean position
//   projected_position(&self, id) -> Result<Vector2<f64>>           - transformed position
//   ring/section/local(&self, id) -> Result<usize>                  - coordinate components
//   neighbor_id(&self, id, path: &[u8]) -> Result<Option<usize>>    - walk a direction path
//   mirror_id(&self, id) -> Result<usize>                           - bilateral mirror element
//   equator_band(&self, id) -> Result<EquatorBand>                  - symmetry band
//   spacing(&self) / max_radius(&self) -> f64                       - distance parameters

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{ElementRef, HexDirection, HexLattice};
}
