//! detection::detector — onset-detector contract and outcome types.
//!
//! Purpose
//! -------
//! Model the external motion-onset-detection algorithm as an explicit
//! interface so the evaluation harness can be driven by any implementation
//! and unit-tested against stubs. The crate deliberately ships no detector
//! algorithm; it ships the contract and the typed outcome the harness
//! compares against ground truth.
//!
//! Key behaviors
//! -------------
//! - Define the [`OnsetDetector`] trait over aligned position, time, and
//!   velocity sequences plus an integer sample-count window.
//! - Carry the detector's prediction and its diagnostic data in
//!   [`OnsetDetection`] / [`OnsetDiagnostics`], with convergence and
//!   adjustment reported as flags rather than errors.
//! - Provide [`validate_detection_inputs`] so implementations share one
//!   alignment/window guard.
//!
//! Invariants & assumptions
//! ------------------------
//! - All five input sequences are aligned with the same time grid; the
//!   window is at least one sample and smaller than the series.
//! - Diagnostics expose, at minimum: per-candidate error values, the
//!   candidate time grid, the maximum-velocity threshold, and the pair of
//!   boundary samples bracketing the detected transition.
//!
//! Conventions
//! -----------
//! - Non-convergence is data (`converged == false`), surfaced unchanged to
//!   the caller; errors are reserved for structurally malformed inputs.
//!
//! Downstream usage
//! ----------------
//! - The harness derives the window from its configuration, calls
//!   [`OnsetDetector::detect`], and compares `onset_time` against the
//!   synthesized ground truth.
//!
//! Testing notes
//! -------------
//! - The shared input guard is unit-tested here; detector behavior itself
//!   is exercised with stubs in the harness tests and with a
//!   threshold-crossing stand-in in the integration tests.

use ndarray::Array1;

use crate::detection::errors::{DetectionError, DetectionResult};

/// A single trajectory sample, used to bracket the detected transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySample {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

/// The pair of samples bracketing the detected static/movement transition:
/// the last sample the detector attributes to the static phase and the first
/// it attributes to the movement phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnsetBracket {
    pub before: BoundarySample,
    pub after: BoundarySample,
}

/// OnsetDiagnostics — per-candidate diagnostic data from a detection run.
///
/// Purpose
/// -------
/// Expose the detector's internal evidence alongside its prediction so
/// callers can plot or audit the decision: the error value assigned to each
/// candidate onset time, the candidate grid itself, the velocity threshold
/// in force, and the samples bracketing the chosen transition.
///
/// Fields
/// ------
/// - `errors`: `Array1<f64>`
///   Error value per candidate onset time, aligned with `times`.
/// - `times`: `Array1<f64>`
///   Candidate onset times over which `errors` was evaluated.
/// - `max_velocity`: `f64`
///   The maximum-velocity threshold the detector applied.
/// - `bracket`: [`OnsetBracket`]
///   Boundary samples bracketing the detected transition.
///
/// Invariants
/// ----------
/// - `errors.len() == times.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct OnsetDiagnostics {
    /// Error value per candidate onset time.
    pub errors: Array1<f64>,
    /// Candidate onset times, aligned with `errors`.
    pub times: Array1<f64>,
    /// Maximum-velocity threshold applied by the detector.
    pub max_velocity: f64,
    /// Boundary samples bracketing the detected transition.
    pub bracket: OnsetBracket,
}

/// OnsetDetection — outcome of a single onset-detection run.
///
/// Purpose
/// -------
/// Carry the predicted onset time together with the detector's diagnostic
/// data and its convergence/adjustment flags. The harness surfaces this
/// outcome unchanged; it neither retries nor reinterprets it.
///
/// Fields
/// ------
/// - `onset_time`: `f64`
///   The predicted movement onset.
/// - `diagnostics`: [`OnsetDiagnostics`]
///   Candidate-level evidence behind the prediction.
/// - `converged`: `bool`
///   Whether the detector's search converged; `false` is a reportable
///   result, not an error.
/// - `adjusted`: `bool`
///   Whether the detector adjusted its raw estimate (e.g. re-bracketed the
///   transition) before reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct OnsetDetection {
    /// Predicted movement onset time.
    pub onset_time: f64,
    /// Candidate-level diagnostic data.
    pub diagnostics: OnsetDiagnostics,
    /// Whether the detector's search converged.
    pub converged: bool,
    /// Whether the raw estimate was adjusted before reporting.
    pub adjusted: bool,
}

/// External motion-onset detection over aligned trajectory sequences.
///
/// Implementations consume the position sequences, the shared time grid,
/// and the per-axis velocity sequences, together with a sample-count
/// window, and return a completed [`OnsetDetection`]. Structural input
/// problems are errors; non-convergence is reported on the outcome.
pub trait OnsetDetector {
    /// Detect the movement onset.
    ///
    /// Parameters
    /// ----------
    /// - `window`: `usize`
    ///   Sample-count window the detector evaluates candidates over; at
    ///   least 1 and smaller than the series length.
    /// - `x`, `y`: `&Array1<f64>`
    ///   Per-axis position sequences aligned with `t`.
    /// - `t`: `&Array1<f64>`
    ///   Shared time grid.
    /// - `vx`, `vy`: `&Array1<f64>`
    ///   Per-axis velocity sequences aligned with `t`.
    ///
    /// Returns
    /// -------
    /// `DetectionResult<OnsetDetection>`
    ///   The completed outcome, or a [`DetectionError`] for structurally
    ///   malformed inputs.
    #[allow(clippy::too_many_arguments)]
    fn detect(
        &self, window: usize, x: &Array1<f64>, y: &Array1<f64>, t: &Array1<f64>,
        vx: &Array1<f64>, vy: &Array1<f64>,
    ) -> DetectionResult<OnsetDetection>;
}

/// Validate alignment and window constraints of a detection call.
///
/// Parameters
/// ----------
/// - `window`: `usize`
///   Sample-count window. Must satisfy `1 ≤ window < t.len()`.
/// - `x`, `y`, `vx`, `vy`: `&Array1<f64>`
///   Sequences that must each match the time grid's length.
/// - `t`: `&Array1<f64>`
///   The time grid defining the expected length.
///
/// Returns
/// -------
/// `DetectionResult<()>`
///   - `Ok(())` when all sequences align and the window fits.
///   - `Err(DetectionError)` naming the first misaligned sequence or the
///     ill-sized window.
///
/// Errors
/// ------
/// - `DetectionError::SequenceLengthMismatch`
///   Returned for the first sequence whose length differs from `t.len()`.
/// - `DetectionError::InvalidWindow`
///   Returned when `window == 0` or `window >= t.len()`.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_detection_inputs(
    window: usize, x: &Array1<f64>, y: &Array1<f64>, t: &Array1<f64>, vx: &Array1<f64>,
    vy: &Array1<f64>,
) -> DetectionResult<()> {
    let expected = t.len();
    let sequences = [("x", x.len()), ("y", y.len()), ("vx", vx.len()), ("vy", vy.len())];
    for (name, actual) in sequences {
        if actual != expected {
            return Err(DetectionError::SequenceLengthMismatch { name, expected, actual });
        }
    }

    if window == 0 || window >= expected {
        return Err(DetectionError::InvalidWindow { window, len: expected });
    }

    Ok(())
}
