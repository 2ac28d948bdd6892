/// Utility functions for the compound-eye Python module
use compound_eye::EyeError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Get the version of the compound-eye library
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub(crate) fn to_py_err(err: EyeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn parse_winding(counter_clockwise: bool) -> compound_eye::interfaces::Winding {
    if counter_clockwise {
        compound_eye::interfaces::Winding::CounterClockwise
    } else {
        compound_eye::interfaces::Winding::Clockwise
    }
}
