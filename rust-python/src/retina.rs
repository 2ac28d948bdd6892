//! Python bindings for Retina

use compound_eye::optic_axis::PhotoreceptorSlot;
use compound_eye::retina::{Retina, RetinaConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::utils::{parse_winding, to_py_err};
use crate::wiring::PyWiringMap;

/// Python wrapper for Retina
#[pyclass(name = "Retina")]
#[derive(Clone)]
pub struct PyRetina {
    pub(crate) inner: Retina,
}

#[pymethods]
impl PyRetina {
    /// Build a retina model
    ///
    /// Args:
    ///     rings: Rings around the central ommatidium
    ///     radius: Radius of the lattice disc and the projection sphere
    ///     counter_clockwise: Number the lattice counter-clockwise (left eye)
    ///     acceptance_factor: Acceptance angle as a multiple of the interommatidial angle
    #[new]
    #[pyo3(signature = (rings = 14, radius = 1.0, counter_clockwise = false, acceptance_factor = 1.0))]
    fn new(rings: usize, radius: f64, counter_clockwise: bool, acceptance_factor: f64) -> PyResult<Self> {
        let config = RetinaConfig::default()
            .with_rings(rings)
            .with_radius(radius)
            .with_winding(parse_winding(counter_clockwise))
            .with_acceptance_factor(acceptance_factor);
        Retina::new(config)
            .map(|inner| PyRetina { inner })
            .map_err(to_py_err)
    }

    /// Build a retina model from a JSON configuration string
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config: RetinaConfig =
            serde_json::from_str(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Retina::new(config)
            .map(|inner| PyRetina { inner })
            .map_err(to_py_err)
    }

    fn num_ommatidia(&self) -> usize {
        self.inner.num_ommatidia()
    }

    fn num_photoreceptors(&self) -> usize {
        self.inner.num_photoreceptors()
    }

    /// Get the acceptance angle in degrees
    fn acceptance_angle(&self) -> f64 {
        self.inner.acceptance_angle()
    }

    /// Get the interommatidial angle in degrees
    fn interommatidial_angle(&self) -> f64 {
        self.inner.interommatidial_angle()
    }

    /// Get the (elevation, azimuth) of every ommatidium, in radians
    fn ommatidia_positions(&self) -> Vec<(f64, f64)> {
        self.inner
            .ommatidia_positions()
            .into_iter()
            .map(|d| (d.elevation, d.azimuth))
            .collect()
    }

    /// Get the optic axis direction of one photoreceptor
    ///
    /// Returns:
    ///     tuple | None: (elevation, azimuth) in radians
    fn photoreceptor_direction(&self, id: usize, slot: &str) -> PyResult<Option<(f64, f64)>> {
        let slot: PhotoreceptorSlot = slot.parse().map_err(to_py_err)?;
        Ok(self
            .inner
            .photoreceptor_direction(id, slot)
            .map_err(to_py_err)?
            .map(|d| (d.elevation, d.azimuth)))
    }

    /// Get the sphere position and optic axis of every photoreceptor
    ///
    /// Returns:
    ///     list: ((elevation, azimuth), (elevation, azimuth)) pairs in radians
    fn photoreceptor_directions(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.inner
            .photoreceptor_directions()
            .into_iter()
            .map(|(pos, dir)| ((pos.elevation, pos.azimuth), (dir.elevation, dir.azimuth)))
            .collect()
    }

    /// Get the conflict-resolved wiring of the whole eye
    fn wiring_map(&self) -> PyResult<PyWiringMap> {
        self.inner
            .wiring_map()
            .map(|inner| PyWiringMap { inner })
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Retina(ommatidia={}, photoreceptors={}, acceptance_angle={:.4})",
            self.inner.num_ommatidia(),
            self.inner.num_photoreceptors(),
            self.inner.acceptance_angle()
        )
    }
}
