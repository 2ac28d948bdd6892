use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::interfaces::SphericalDirection;
use crate::optic_axis::PhotoreceptorSlot;

/// One light-sensing cell of an ommatidium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photoreceptor {
    pub slot: PhotoreceptorSlot,
    /// Id of the owning ommatidium
    pub ommatidium: usize,
    /// Position among photoreceptors with the same name in the ommatidium
    pub sequence_number: usize,
    /// Planar position, inherited from the ommatidium
    pub position: Vector2<f64>,
    /// Position on the sphere, inherited from the ommatidium
    pub sphere_pos: SphericalDirection,
    /// Ommatidium the optic axis points through, `None` if the rule leaves the lattice
    pub target: Option<usize>,
    /// Optic axis direction, copied from the target (or the home ommatidium)
    pub direction: SphericalDirection,
}

impl Photoreceptor {
    pub fn name(&self) -> &'static str {
        self.slot.name()
    }

    pub fn uid(&self) -> String {
        format!("{}-{}", self.slot, self.ommatidium)
    }
}
