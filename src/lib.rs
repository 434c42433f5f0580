//! motion_onset — reference reaching trajectories and onset evaluation.
//!
//! Purpose
//! -------
//! Synthesize reference 2D reaching-hand trajectories with exactly known
//! analytic properties (a static hold phase followed by a quintic
//! minimum-jerk movement phase) and use them as ground truth to evaluate
//! external motion-onset-detection algorithms. When the `python-bindings`
//! feature is enabled, this module additionally defines the PyO3 bridge that
//! exposes the synthesizer and the default differentiator to Python via the
//! `_motion_onset` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust subtrees (`trajectory`, `kinematics`,
//!   `detection`, `harness`) as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_motion_onset` Python extension.
//! - Create and register Python submodules (`trajectory`, `kinematics`)
//!   under `motion_onset` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants of their Rust counterparts (e.g. [`ReachTrajectory`]'s
//!   aligned, snapped sequences).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyValueError` at the PyO3 boundary.
//!
//! Conventions
//! -----------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - Sequence getters on Python-facing classes copy into Python-owned
//!   containers; property access is otherwise O(1).
//!
//! Downstream usage
//! ----------------
//! - Rust callers: synthesize via
//!   [`trajectory::ReachTrajectory::synthesize`], differentiate via
//!   [`kinematics::CentralDifference`], and evaluate detectors via
//!   [`harness::OnsetEvaluation::run`].
//! - Python callers import the compiled `_motion_onset` module, typically
//!   wrapped by thin pure-Python facades.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the pipeline integration tests under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed and queried from Python.
//!
//! [`ReachTrajectory`]: trajectory::ReachTrajectory

pub mod detection;
pub mod harness;
pub mod kinematics;
pub mod trajectory;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    kinematics::differentiate::{CentralDifference, Differentiator},
    trajectory::synthesis::{Point2, ReachTrajectory},
    utils::extract_f64_array,
};

/// ReferenceTrajectory — Python-facing wrapper for synthesized reaches.
///
/// Purpose
/// -------
/// Expose [`ReachTrajectory::synthesize`] to Python callers and provide
/// copy-on-access getters over the aligned sequences and the snapped timing
/// metadata.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ReferenceTrajectory(start, end, onset, end_time, step)`:
/// - `start`, `end`: `(float, float)`
///   Planar start/end positions.
/// - `onset`: `float`
///   Requested onset time; snapped down to the grid.
/// - `end_time`: `float`
///   Requested total duration; snapped to the grid.
/// - `step`: `float`
///   Sampling interval; must be positive.
///
/// Fields
/// ------
/// - `inner`: [`ReachTrajectory`]
///   Rust-side trajectory holding the sequences returned by the getters.
///
/// Notes
/// -----
/// - Native Rust code should prefer [`ReachTrajectory`] directly; this type
///   exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "motion_onset.trajectory")]
pub struct ReferenceTrajectory {
    /// The synthesized trajectory.
    inner: ReachTrajectory,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ReferenceTrajectory {
    /// Synthesize a static-phase + minimum-jerk reference trajectory.
    ///
    /// The snapped onset time is available as `onset_time` and is the
    /// ground truth for downstream onset-detection comparisons.
    #[new]
    #[pyo3(
        text_signature = "(start, end, onset, end_time, step, /)",
        signature = (start, end, onset, end_time, step)
    )]
    pub fn synthesize(
        start: (f64, f64), end: (f64, f64), onset: f64, end_time: f64, step: f64,
    ) -> PyResult<Self> {
        let inner = ReachTrajectory::synthesize(
            Point2::new(start.0, start.1),
            Point2::new(end.0, end.1),
            onset,
            end_time,
            step,
        )?;
        Ok(ReferenceTrajectory { inner })
    }

    /// X-axis position sequence.
    #[getter]
    pub fn x(&self) -> Vec<f64> {
        self.inner.x.to_vec()
    }

    /// Y-axis position sequence.
    #[getter]
    pub fn y(&self) -> Vec<f64> {
        self.inner.y.to_vec()
    }

    /// Time samples aligned with `x` and `y`.
    #[getter]
    pub fn t(&self) -> Vec<f64> {
        self.inner.t.to_vec()
    }

    /// Snapped onset time (ground truth).
    #[getter]
    pub fn onset_time(&self) -> f64 {
        self.inner.onset_time
    }

    /// Snapped end time.
    #[getter]
    pub fn end_time(&self) -> f64 {
        self.inner.end_time
    }

    /// Index of the first movement-phase sample.
    #[getter]
    pub fn onset_index(&self) -> usize {
        self.inner.onset_index
    }

    /// Sampling interval.
    #[getter]
    pub fn step(&self) -> f64 {
        self.inner.step
    }
}

/// Estimate a velocity sequence with central differences.
///
/// Accepts 1-D numpy arrays or float sequences for `position` and `time`
/// and returns the aligned velocity sequence as a list of floats.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(position, time, /)")]
pub fn velocity<'py>(
    py: Python<'py>, position: &Bound<'py, PyAny>, time: &Bound<'py, PyAny>,
) -> PyResult<Vec<f64>> {
    let position = extract_f64_array(py, position)?;
    let time = extract_f64_array(py, time)?;
    let result = CentralDifference::new().velocity(&position, &time)?;
    Ok(result.to_vec())
}

/// _motion_onset — PyO3 module initializer for the Python extension.
///
/// Defines the `_motion_onset` Python module, creates the `trajectory` and
/// `kinematics` submodules, and registers them in `sys.modules` so they are
/// importable via dotted paths from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _motion_onset<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let trajectory_mod = PyModule::new(_py, "trajectory")?;
    let kinematics_mod = PyModule::new(_py, "kinematics")?;
    trajectory_submodule(_py, m, &trajectory_mod)?;
    kinematics_submodule(_py, m, &kinematics_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("motion_onset.trajectory", trajectory_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("motion_onset.kinematics", kinematics_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn trajectory_submodule<'py>(
    _py: Python, motion_onset: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ReferenceTrajectory>()?;
    motion_onset.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn kinematics_submodule<'py>(
    _py: Python, motion_onset: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(velocity, m)?)?;
    motion_onset.add_submodule(m)?;
    Ok(())
}
