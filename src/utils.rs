//! utils — Python-boundary extraction helpers.
//!
//! Purpose
//! -------
//! House the small conversion helpers used by the PyO3 bridge in `lib.rs`.
//! Everything here is gated behind the `python-bindings` feature; native
//! Rust callers never need this module.

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

/// Extract a 1-D `f64` array from a numpy array or a float sequence.
///
/// Tries a zero-copy read of a contiguous 1-D `numpy.ndarray` first and
/// falls back to extracting a plain sequence of floats. The result is
/// copied into an owned `Array1<f64>` for the core routines.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(Array1::from(slice.to_vec()));
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray or sequence of float64",
        )
    })?;
    Ok(Array1::from(vec))
}
