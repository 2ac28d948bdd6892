use log::{debug, info};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{BUFFER_RINGS, MAX_RINGS};
use crate::error::{EyeError, Result};
use crate::interfaces::Winding;
use crate::lattice::disc_filter::filter_to_disc;
use crate::lattice::equator_bands::{EquatorBand, classify_equator_band};
use crate::lattice::hex_coordinates::{HexCoordinate, generate_hex_coordinates};
use crate::lattice::hex_directions::{HexDirection, expand_direction_code};
use crate::lattice::hex_embedding::HexBasis;
use crate::lattice::mirror::mirror_coordinate;
use crate::lattice::neighbors::{NEIGHBOR_SLOTS, resolve_neighbors};
use crate::projection::PlaneTransform;

/// Reference to a slot in the element arena, or to the shared dummy element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRef {
    Element(usize),
    Dummy,
}

impl ElementRef {
    pub fn id(self) -> Option<usize> {
        match self {
            ElementRef::Element(id) => Some(id),
            ElementRef::Dummy => None,
        }
    }

    pub fn is_dummy(self) -> bool {
        self == ElementRef::Dummy
    }
}

/// One position of the hexagonal lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeElement {
    /// Own reference (`Dummy` for the sentinel element)
    pub id: ElementRef,
    pub coordinate: HexCoordinate,
    /// Euclidean position
    pub position: Vector2<f64>,
    /// Position after the lattice's coordinate transform, if any
    pub transformed: Option<Vector2<f64>>,
    pub band: EquatorBand,
    /// Slot 0 is the element itself, slots 1-6 follow [`HexDirection`]
    pub neighbors: [ElementRef; NEIGHBOR_SLOTS],
}

impl LatticeElement {
    /// The sentinel standing in for "no neighbor". All its neighbors are itself.
    pub fn dummy() -> Self {
        Self {
            id: ElementRef::Dummy,
            coordinate: HexCoordinate::center(),
            position: Vector2::zeros(),
            transformed: None,
            band: EquatorBand::Six,
            neighbors: [ElementRef::Dummy; NEIGHBOR_SLOTS],
        }
    }

    pub fn gid(&self) -> Option<usize> {
        self.id.id()
    }

    pub fn is_dummy(&self) -> bool {
        self.id.is_dummy()
    }

    pub fn neighbor(&self, direction: HexDirection) -> ElementRef {
        self.neighbors[direction.slot()]
    }

    /// Transformed position, falling back to the Euclidean one.
    pub fn projected(&self) -> Vector2<f64> {
        self.transformed.unwrap_or(self.position)
    }
}

/// Construction parameters of a lattice, as reported back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeConfig {
    pub num_rings: usize,
    pub radius: f64,
    pub all_rings: usize,
}

/// A disc-shaped hexagonal lattice with a fixed neighbor graph.
///
/// Elements live in a dense arena indexed by id; neighbor links are [`ElementRef`]s into
/// that arena. The lattice is immutable once [`HexLattice::new`] returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexLattice {
    num_rings: usize,
    radius: f64,
    winding: Winding,
    elements: Vec<LatticeElement>,
    dummy: LatticeElement,
}

impl HexLattice {
    /// Build a lattice of `num_rings` rings inside a disc of `radius`.
    ///
    /// # Arguments
    /// * `num_rings` - Rings around the center element
    /// * `radius` - Radius of the disc; element spacing is `radius / (num_rings + 2)`
    /// * `transform` - Optional map applied to Euclidean positions after cropping
    /// * `winding` - Numbering order of the lattice
    pub fn new(
        num_rings: usize,
        radius: f64,
        transform: Option<&dyn PlaneTransform>,
        winding: Winding,
    ) -> Result<Self> {
        if num_rings > MAX_RINGS {
            return Err(EyeError::InvalidRingCount {
                rings: num_rings,
                max: MAX_RINGS,
            });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EyeError::InvalidRadius(radius));
        }

        let spacing = radius / (num_rings + BUFFER_RINGS) as f64;
        let basis = HexBasis::new(spacing, winding);

        // 1) Over-generate a hexagon, then crop to the disc
        let coords = generate_hex_coordinates(num_rings);
        let generated = coords.len();
        let positions = basis.embed_all(&coords);
        let (coords, positions) = filter_to_disc(coords, positions, num_rings as f64 * spacing);
        debug!(
            "Cropped {} generated coordinates to {} inside radius {:.6}",
            generated,
            coords.len(),
            num_rings as f64 * spacing
        );

        // 2) Neighbor graph on untransformed positions
        let neighbor_table = resolve_neighbors(&positions, spacing, winding)?;

        // 3) Assemble the arena
        let elements: Vec<LatticeElement> = coords
            .into_iter()
            .zip(positions)
            .zip(neighbor_table)
            .enumerate()
            .map(|(id, ((coordinate, position), neighbors))| LatticeElement {
                id: ElementRef::Element(id),
                coordinate,
                position,
                transformed: transform.map(|t| t.apply(position)),
                band: classify_equator_band(position.y, spacing),
                neighbors,
            })
            .collect();

        info!(
            "Built hexagonal lattice: {} rings, {} elements, spacing {:.6}",
            num_rings,
            elements.len(),
            spacing
        );

        Ok(Self {
            num_rings,
            radius,
            winding,
            elements,
            dummy: LatticeElement::dummy(),
        })
    }

    pub fn num_rings(&self) -> usize {
        self.num_rings
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Total number of elements, not counting the dummy.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[LatticeElement] {
        &self.elements
    }

    pub fn dummy(&self) -> &LatticeElement {
        &self.dummy
    }

    pub fn element(&self, id: usize) -> Option<&LatticeElement> {
        self.elements.get(id)
    }

    /// Resolve a reference that came out of this lattice's neighbor table.
    pub(crate) fn resolve(&self, element: ElementRef) -> &LatticeElement {
        match element {
            ElementRef::Element(id) => &self.elements[id],
            ElementRef::Dummy => &self.dummy,
        }
    }

    fn checked(&self, id: usize) -> Result<&LatticeElement> {
        self.elements.get(id).ok_or(EyeError::ElementOutOfRange {
            element: id,
            count: self.elements.len(),
        })
    }

    /// Distance between two neighboring elements.
    pub fn spacing(&self) -> f64 {
        self.radius / (self.num_rings + BUFFER_RINGS) as f64
    }

    /// Radius of the disc the elements were cropped to.
    pub fn max_radius(&self) -> f64 {
        self.num_rings as f64 * self.spacing()
    }

    pub fn unit_axis(&self, direction: HexDirection) -> Vector2<f64> {
        direction.unit_axis(self.spacing(), self.winding)
    }

    pub fn config(&self) -> LatticeConfig {
        LatticeConfig {
            num_rings: self.num_rings,
            radius: self.radius,
            all_rings: self.num_rings + BUFFER_RINGS,
        }
    }

    /// Euclidean position of an element.
    pub fn position(&self, id: usize) -> Result<Vector2<f64>> {
        Ok(self.checked(id)?.position)
    }

    /// Transformed position of an element (Euclidean if no transform was given).
    pub fn projected_position(&self, id: usize) -> Result<Vector2<f64>> {
        Ok(self.checked(id)?.projected())
    }

    pub fn coordinate(&self, id: usize) -> Result<HexCoordinate> {
        Ok(self.checked(id)?.coordinate)
    }

    pub fn ring(&self, id: usize) -> Result<usize> {
        Ok(self.checked(id)?.coordinate.ring)
    }

    pub fn section(&self, id: usize) -> Result<usize> {
        Ok(self.checked(id)?.coordinate.section)
    }

    pub fn local(&self, id: usize) -> Result<usize> {
        Ok(self.checked(id)?.coordinate.local)
    }

    pub fn equator_band(&self, id: usize) -> Result<EquatorBand> {
        Ok(self.checked(id)?.band)
    }

    /// Walk a direction path from `start`, one hop at a time.
    ///
    /// Codes 7-18 expand into two hops. Once the walk reaches the dummy it stays there.
    pub fn walk(&self, start: ElementRef, path: &[u8]) -> Result<ElementRef> {
        if let ElementRef::Element(id) = start {
            self.checked(id)?;
        }
        let mut current = start;
        for &code in path {
            for direction in expand_direction_code(code)? {
                current = self.resolve(current).neighbor(*direction);
            }
        }
        Ok(current)
    }

    /// Id of the element reached from `id` along `path`, or `None` if it leaves the lattice.
    pub fn neighbor_id(&self, id: usize, path: &[u8]) -> Result<Option<usize>> {
        self.checked(id)?;
        Ok(self.walk(ElementRef::Element(id), path)?.id())
    }

    pub fn is_neighbor_dummy(&self, id: usize, direction: HexDirection) -> Result<bool> {
        Ok(self.checked(id)?.neighbor(direction).is_dummy())
    }

    /// Id of the element mirrored across the vertical axis.
    pub fn mirror_id(&self, id: usize) -> Result<usize> {
        let target = mirror_coordinate(&self.checked(id)?.coordinate);
        self.elements
            .iter()
            .position(|el| el.coordinate == target)
            .ok_or(EyeError::MirrorNotFound { element: id })
    }
}
