use pyo3::prelude::*;

// Module declarations
mod lattice;
mod retina;
mod utils;
mod wiring;

use lattice::PyHexLattice;
use retina::PyRetina;
use utils::version;
use wiring::PyWiringMap;

/// Python module definition
#[pymodule]
fn compound_eye_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHexLattice>()?;
    m.add_class::<PyWiringMap>()?;
    m.add_class::<PyRetina>()?;

    // Utility functions
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
