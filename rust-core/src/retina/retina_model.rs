use log::{debug, info};
use nalgebra::Vector2;

use crate::config::SINGLE_OMMATIDIUM_ANGLE_DEG;
use crate::error::{EyeError, Result};
use crate::interfaces::SphericalDirection;
use crate::lattice::{HexDirection, HexLattice};
use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot, WiringMap};
use crate::projection::{AlbersProjection, PlaneTransform};
use crate::retina::ommatidium::Ommatidium;
use crate::retina::photoreceptor::Photoreceptor;
use crate::retina::retina_config::{ProjectionConfig, RetinaConfig};

/// The compound-eye model: one ommatidium per lattice element.
#[derive(Debug, Clone)]
pub struct Retina {
    config: RetinaConfig,
    lattice: HexLattice,
    ommatidia: Vec<Ommatidium>,
    interommatidial_angle: f64,
    acceptance_angle: f64,
}

fn sphere_direction(position: Vector2<f64>) -> SphericalDirection {
    SphericalDirection::new(position.x, position.y)
}

impl Retina {
    /// Build a retina using the projection named in `config`.
    pub fn new(config: RetinaConfig) -> Result<Self> {
        match config.projection {
            ProjectionConfig::Planar => Self::build(config, None),
            ProjectionConfig::Albers { euler_angles } => {
                let projection =
                    AlbersProjection::new(config.radius).with_euler_angles(euler_angles);
                Self::build(config, Some(&projection))
            }
        }
    }

    /// Build a retina with a caller supplied transform, ignoring `config.projection`.
    pub fn with_transform(config: RetinaConfig, transform: &dyn PlaneTransform) -> Result<Self> {
        Self::build(config, Some(transform))
    }

    fn build(config: RetinaConfig, transform: Option<&dyn PlaneTransform>) -> Result<Self> {
        config.validate()?;

        let lattice = HexLattice::new(config.rings, config.radius, transform, config.winding)?;

        let ommatidia = lattice
            .elements()
            .iter()
            .filter_map(|el| {
                el.gid().map(|id| {
                    Ommatidium::new(
                        id,
                        el.position,
                        sphere_direction(el.projected()),
                        el.band,
                        config.rule.rule_at(el.position.y),
                    )
                })
            })
            .collect();

        let mut retina = Self {
            config,
            lattice,
            ommatidia,
            interommatidial_angle: 0.0,
            acceptance_angle: 0.0,
        };

        for id in 0..retina.ommatidia.len() {
            retina.add_photoreceptors(id)?;
        }

        retina.interommatidial_angle = retina.compute_interommatidial_angle();
        retina.acceptance_angle = retina.interommatidial_angle * retina.config.acceptance_factor;

        info!(
            "Built retina '{}': {} ommatidia, {} photoreceptors, acceptance angle {:.3}°",
            retina.config.neuropil_name,
            retina.num_ommatidia(),
            retina.num_photoreceptors(),
            retina.acceptance_angle
        );
        Ok(retina)
    }

    /// Target and direction of `slot` in ommatidium `id` under its own rule.
    fn resolve_direction(
        &self,
        id: usize,
        slot: PhotoreceptorSlot,
    ) -> Result<(Option<usize>, SphericalDirection)> {
        let omma = &self.ommatidia[id];
        let target = self.lattice.neighbor_id(id, omma.rule().send_path(slot))?;
        let direction = match target {
            Some(t) => self.ommatidia[t].sphere_pos(),
            None => omma.sphere_pos(),
        };
        Ok((target, direction))
    }

    fn add_photoreceptors(&mut self, id: usize) -> Result<()> {
        for i in 0..self.config.photoreceptors.len() {
            let slot = self.config.photoreceptors[i];
            let (target, direction) = self.resolve_direction(id, slot)?;
            self.ommatidia[id].add_photoreceptor(slot, target, direction);
        }
        Ok(())
    }

    /// Angle in degrees between the first two ommatidia, 90° if there is only one.
    fn compute_interommatidial_angle(&self) -> f64 {
        match (self.ommatidia.first(), self.ommatidia.get(1)) {
            (Some(a), Some(b)) => a.sphere_pos().angle_to(b.sphere_pos()).to_degrees(),
            _ => SINGLE_OMMATIDIUM_ANGLE_DEG,
        }
    }

    /// Re-derive each ommatidium's rule from its position.
    ///
    /// Photoreceptors of ommatidia whose rule changed are re-pointed. Calling it again
    /// without intervening changes does nothing.
    pub fn reassign_hemispheres(&mut self) -> Result<usize> {
        let mut changed = 0;
        for id in 0..self.ommatidia.len() {
            let rule = self.config.rule.rule_at(self.ommatidia[id].position().y);
            if rule == self.ommatidia[id].rule() {
                continue;
            }
            self.ommatidia[id].set_rule(rule);
            for slot in PhotoreceptorSlot::ALL {
                let (target, direction) = self.resolve_direction(id, slot)?;
                self.ommatidia[id].retarget(slot, target, direction);
            }
            changed += 1;
        }
        debug!("Hemisphere reassignment changed {} ommatidia", changed);
        Ok(changed)
    }

    /// Wiring of the whole eye, each element using its own ommatidium's rule.
    ///
    /// This view applies conflict resolution and can disagree with the per-photoreceptor
    /// directions at hemisphere boundaries.
    pub fn wiring_map(&self) -> Result<WiringMap> {
        WiringMap::resolve(&self.lattice, |el| match el.gid() {
            Some(id) => self.ommatidia[id].rule(),
            None => OpticAxisRule::Plain,
        })
    }

    pub fn config(&self) -> &RetinaConfig {
        &self.config
    }

    pub fn lattice(&self) -> &HexLattice {
        &self.lattice
    }

    pub fn ommatidia(&self) -> &[Ommatidium] {
        &self.ommatidia
    }

    pub fn ommatidium(&self, id: usize) -> Option<&Ommatidium> {
        self.ommatidia.get(id)
    }

    pub fn ommatidium_mut(&mut self, id: usize) -> Option<&mut Ommatidium> {
        self.ommatidia.get_mut(id)
    }

    fn checked(&self, id: usize) -> Result<&Ommatidium> {
        self.ommatidia.get(id).ok_or(EyeError::ElementOutOfRange {
            element: id,
            count: self.ommatidia.len(),
        })
    }

    pub fn num_ommatidia(&self) -> usize {
        self.ommatidia.len()
    }

    pub fn num_photoreceptors(&self) -> usize {
        self.ommatidia.iter().map(Ommatidium::num_photoreceptors).sum()
    }

    pub fn all_photoreceptors(&self) -> impl Iterator<Item = &Photoreceptor> {
        self.ommatidia.iter().flat_map(Ommatidium::photoreceptors)
    }

    /// `(sphere position, optic axis direction)` of every photoreceptor.
    pub fn photoreceptor_directions(&self) -> Vec<(SphericalDirection, SphericalDirection)> {
        self.all_photoreceptors()
            .map(|p| (p.sphere_pos, p.direction))
            .collect()
    }

    pub fn ommatidia_positions(&self) -> Vec<SphericalDirection> {
        self.ommatidia.iter().map(Ommatidium::sphere_pos).collect()
    }

    pub fn photoreceptors(&self, id: usize) -> Result<Vec<&Photoreceptor>> {
        Ok(self.checked(id)?.photoreceptors().collect())
    }

    pub fn equator_band(&self, id: usize) -> Result<crate::lattice::EquatorBand> {
        Ok(self.checked(id)?.equator_band())
    }

    /// Optic axis direction of photoreceptor `slot` (first of its name) in ommatidium `id`.
    pub fn photoreceptor_direction(
        &self,
        id: usize,
        slot: PhotoreceptorSlot,
    ) -> Result<Option<SphericalDirection>> {
        Ok(self.checked(id)?.photoreceptor(slot, 0).map(|p| p.direction))
    }

    pub fn neighbor_id(&self, id: usize, path: &[u8]) -> Result<Option<usize>> {
        self.lattice.neighbor_id(id, path)
    }

    pub fn is_neighbor_dummy(&self, id: usize, direction: HexDirection) -> Result<bool> {
        self.lattice.is_neighbor_dummy(id, direction)
    }

    pub fn slot_index(&self, id: usize, slot: PhotoreceptorSlot) -> Result<Option<usize>> {
        Ok(self.checked(id)?.slot_index(slot))
    }

    /// Angle between neighboring ommatidia, in degrees.
    pub fn interommatidial_angle(&self) -> f64 {
        self.interommatidial_angle
    }

    /// Photoreceptor acceptance angle, in degrees.
    pub fn acceptance_angle(&self) -> f64 {
        self.acceptance_angle
    }

    pub fn radius(&self) -> f64 {
        self.lattice.radius()
    }

    pub fn neuropil_name(&self) -> &str {
        &self.config.neuropil_name
    }
}
