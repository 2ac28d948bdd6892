use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::interfaces::SphericalDirection;
use crate::lattice::EquatorBand;
use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot};
use crate::retina::photoreceptor::Photoreceptor;

/// One lattice unit of the eye and the photoreceptors it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ommatidium {
    id: usize,
    position: Vector2<f64>,
    sphere_pos: SphericalDirection,
    band: EquatorBand,
    rule: OpticAxisRule,
    /// Photoreceptors grouped by name, names in the order they were first added.
    photoreceptors: Vec<(PhotoreceptorSlot, Vec<Photoreceptor>)>,
    next_in_turn: Vec<usize>,
}

impl Ommatidium {
    pub fn new(
        id: usize,
        position: Vector2<f64>,
        sphere_pos: SphericalDirection,
        band: EquatorBand,
        rule: OpticAxisRule,
    ) -> Self {
        Self {
            id,
            position,
            sphere_pos,
            band,
            rule,
            photoreceptors: Vec::new(),
            next_in_turn: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn uid(&self) -> String {
        format!("ommatidium_{}", self.id)
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn sphere_pos(&self) -> SphericalDirection {
        self.sphere_pos
    }

    pub fn equator_band(&self) -> EquatorBand {
        self.band
    }

    pub fn rule(&self) -> OpticAxisRule {
        self.rule
    }

    pub(crate) fn set_rule(&mut self, rule: OpticAxisRule) {
        self.rule = rule;
    }

    /// Add a photoreceptor pointing through `target` in `direction`.
    ///
    /// Position and sphere position are taken from this ommatidium; the sequence number
    /// counts earlier photoreceptors with the same name.
    pub fn add_photoreceptor(
        &mut self,
        slot: PhotoreceptorSlot,
        target: Option<usize>,
        direction: SphericalDirection,
    ) -> &Photoreceptor {
        let index = match self.slot_index(slot) {
            Some(index) => index,
            None => {
                self.photoreceptors.push((slot, Vec::new()));
                self.next_in_turn.push(0);
                self.photoreceptors.len() - 1
            }
        };
        let list = &mut self.photoreceptors[index].1;
        list.push(Photoreceptor {
            slot,
            ommatidium: self.id,
            sequence_number: list.len(),
            position: self.position,
            sphere_pos: self.sphere_pos,
            target,
            direction,
        });
        &list[list.len() - 1]
    }

    /// Re-point every photoreceptor of `slot`.
    pub(crate) fn retarget(
        &mut self,
        slot: PhotoreceptorSlot,
        target: Option<usize>,
        direction: SphericalDirection,
    ) {
        if let Some(index) = self.slot_index(slot) {
            for photor in &mut self.photoreceptors[index].1 {
                photor.target = target;
                photor.direction = direction;
            }
        }
    }

    /// All photoreceptors named `slot`.
    pub fn photoreceptors_named(&self, slot: PhotoreceptorSlot) -> &[Photoreceptor] {
        self.slot_index(slot)
            .map(|index| self.photoreceptors[index].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn photoreceptor(&self, slot: PhotoreceptorSlot, number: usize) -> Option<&Photoreceptor> {
        self.photoreceptors_named(slot).get(number)
    }

    /// Next photoreceptor named `slot`, cycling through duplicates.
    pub fn photoreceptor_round_robin(&mut self, slot: PhotoreceptorSlot) -> Option<&Photoreceptor> {
        let index = self.slot_index(slot)?;
        let list = &self.photoreceptors[index].1;
        let current = self.next_in_turn[index];
        self.next_in_turn[index] = (current + 1) % list.len();
        list.get(current)
    }

    /// Every photoreceptor, names in insertion order, then by sequence number.
    pub fn photoreceptors(&self) -> impl Iterator<Item = &Photoreceptor> {
        self.photoreceptors.iter().flat_map(|(_, list)| list)
    }

    pub fn num_photoreceptors(&self) -> usize {
        self.photoreceptors.iter().map(|(_, list)| list.len()).sum()
    }

    /// Position of `slot` among the distinct names, in the order they were first added.
    pub fn slot_index(&self, slot: PhotoreceptorSlot) -> Option<usize> {
        self.photoreceptors.iter().position(|(s, _)| *s == slot)
    }
}
