//! Python bindings for WiringMap

use compound_eye::optic_axis::{OpticAxisRule, PhotoreceptorSlot, WiringMap};
use compound_eye::retina::RuleSelection;
use pyo3::prelude::*;

use crate::lattice::PyHexLattice;
use crate::utils::to_py_err;

/// Python wrapper for WiringMap
#[pyclass(name = "WiringMap")]
#[derive(Clone)]
pub struct PyWiringMap {
    pub(crate) inner: WiringMap,
}

#[pymethods]
impl PyWiringMap {
    /// Resolve the wiring of a lattice
    ///
    /// Args:
    ///     lattice: The lattice
    ///     rule: "Plain", "SuperpositionTop", "SuperpositionBottom" or "Hemispheric"
    #[new]
    #[pyo3(signature = (lattice, rule = "Hemispheric"))]
    fn new(lattice: &PyHexLattice, rule: &str) -> PyResult<Self> {
        let inner = if rule == "Hemispheric" {
            WiringMap::resolve(&lattice.inner, |el| RuleSelection::Hemispheric.rule_at(el.position.y))
        } else {
            let rule: OpticAxisRule = rule.parse().map_err(to_py_err)?;
            WiringMap::uniform(&lattice.inner, rule)
        };
        inner.map(|inner| PyWiringMap { inner }).map_err(to_py_err)
    }

    /// Get the element receiving a photoreceptor ("R1".."R8") of an element
    fn receiver(&self, element: usize, slot: &str) -> PyResult<Option<usize>> {
        let slot: PhotoreceptorSlot = slot.parse().map_err(to_py_err)?;
        self.inner.receiver(element, slot).map_err(to_py_err)
    }

    /// Get the element providing a photoreceptor to an element
    fn provider(&self, element: usize, slot: &str) -> PyResult<Option<usize>> {
        let slot: PhotoreceptorSlot = slot.parse().map_err(to_py_err)?;
        self.inner.provider(element, slot).map_err(to_py_err)
    }

    /// Get every forward entry as (element, slot, receiver)
    fn receivers(&self) -> Vec<(usize, &'static str, Option<usize>)> {
        self.inner
            .receivers()
            .map(|(e, s, t)| (e, s.name(), t))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.num_elements()
    }
}
