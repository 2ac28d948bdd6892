//! Python bindings for HexLattice

use compound_eye::lattice::{HexDirection, HexLattice};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::utils::{parse_winding, to_py_err};

/// Python wrapper for HexLattice
#[pyclass(name = "HexLattice")]
#[derive(Clone)]
pub struct PyHexLattice {
    pub(crate) inner: HexLattice,
}

#[pymethods]
impl PyHexLattice {
    /// Create a hexagonal ommatidia lattice
    ///
    /// Args:
    ///     num_rings: Rings around the central element
    ///     radius: Radius of the lattice disc
    ///     counter_clockwise: Number the lattice counter-clockwise (left eye)
    ///
    /// Returns:
    ///     HexLattice: The lattice
    #[new]
    #[pyo3(signature = (num_rings, radius = 1.0, counter_clockwise = false))]
    fn new(num_rings: usize, radius: f64, counter_clockwise: bool) -> PyResult<Self> {
        HexLattice::new(num_rings, radius, None, parse_winding(counter_clockwise))
            .map(|inner| PyHexLattice { inner })
            .map_err(to_py_err)
    }

    /// Get the number of elements
    fn num_elements(&self) -> usize {
        self.inner.num_elements()
    }

    /// Get the distance between neighboring elements
    fn spacing(&self) -> f64 {
        self.inner.spacing()
    }

    /// Get the Euclidean position of an element
    ///
    /// Returns:
    ///     tuple: (x, y)
    fn position(&self, id: usize) -> PyResult<(f64, f64)> {
        let p = self.inner.position(id).map_err(to_py_err)?;
        Ok((p.x, p.y))
    }

    /// Get all element positions
    fn positions(&self) -> Vec<(f64, f64)> {
        self.inner
            .elements()
            .iter()
            .map(|el| (el.position.x, el.position.y))
            .collect()
    }

    /// Get the (ring, section, local) coordinate of an element
    fn coordinate(&self, id: usize) -> PyResult<(usize, usize, usize)> {
        let c = self.inner.coordinate(id).map_err(to_py_err)?;
        Ok((c.ring, c.section, c.local))
    }

    /// Get the element reached by walking a direction path
    ///
    /// Args:
    ///     id: Starting element
    ///     path: Direction codes (0 = self, 1-6 = neighbors, 7-18 = two-hop composites)
    ///
    /// Returns:
    ///     int | None: The element id, or None if the path leaves the lattice
    fn neighbor_id(&self, id: usize, path: Vec<u8>) -> PyResult<Option<usize>> {
        self.inner.neighbor_id(id, &path).map_err(to_py_err)
    }

    /// Check whether the neighbor in a direction (1-6) is missing
    fn is_neighbor_dummy(&self, id: usize, direction: u8) -> PyResult<bool> {
        let direction = HexDirection::from_code(direction)
            .ok_or_else(|| PyValueError::new_err(format!("Invalid direction {direction}")))?;
        self.inner
            .is_neighbor_dummy(id, direction)
            .map_err(to_py_err)
    }

    /// Get the element mirrored across the vertical axis
    fn mirror_id(&self, id: usize) -> PyResult<usize> {
        self.inner.mirror_id(id).map_err(to_py_err)
    }

    /// Get the equator band label ("6", "7", "8a" or "8b")
    fn equator_band(&self, id: usize) -> PyResult<&'static str> {
        Ok(self.inner.equator_band(id).map_err(to_py_err)?.label())
    }

    fn __repr__(&self) -> String {
        format!(
            "HexLattice(num_rings={}, elements={}, spacing={:.6})",
            self.inner.num_rings(),
            self.inner.num_elements(),
            self.inner.spacing()
        )
    }
}
