//! harness::config — explicit configuration for an evaluation run.
//!
//! Purpose
//! -------
//! Collect the parameters of an onset-detection evaluation in one validated
//! configuration object, so the harness entry point takes no ambient state
//! and runs are explicit and reproducible: the reach geometry, the nominal
//! timing, the sampling step, and the detection window.
//!
//! Key behaviors
//! -------------
//! - Bundle scenario parameters via [`EvaluationConfig::new`], validating
//!   them with the trajectory guards plus the window constraints.
//! - Derive the integer sample-count window the detector consumes from the
//!   time-domain window via [`EvaluationConfig::window_samples`].
//! - Reproduce the canonical example scenario via `Default`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Instances built through [`EvaluationConfig::new`] satisfy every
//!   synthesis precondition and resolve to a window of at least one sample.
//!   Fields are public plain data; code constructing instances directly is
//!   responsible for the same invariants.
//!
//! Conventions
//! -----------
//! - `detection_window` is expressed in the same abstract time units as the
//!   onset/end times; the sample-count conversion subtracts one sample,
//!   matching the window the detector slides over candidate boundaries.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default scenario, the window derivation, and
//!   every configuration error branch.

use crate::harness::errors::{HarnessError, HarnessResult};
use crate::trajectory::synthesis::Point2;
use crate::trajectory::validation::validate_synthesis_inputs;

/// Relative tolerance under which the window/step quotient is considered a
/// whole number of samples; mirrors the grid-snapping convention.
const SNAP_TOL: f64 = 1e-9;

/// EvaluationConfig — parameters of one onset-detection evaluation run.
///
/// Purpose
/// -------
/// Replace script-level literals with an explicit, validated configuration
/// object passed into the harness entry point.
///
/// Fields
/// ------
/// - `start`, `end`: [`Point2`]
///   Reach geometry; the static phase holds `start`.
/// - `onset`: `f64`
///   Requested movement onset time; snapped by synthesis.
/// - `end_time`: `f64`
///   Requested total duration; snapped by synthesis.
/// - `step`: `f64`
///   Sampling interval shared by synthesis, differentiation, and the
///   window derivation.
/// - `detection_window`: `f64`
///   Detector evaluation window in time units; converted to samples via
///   [`EvaluationConfig::window_samples`].
///
/// Invariants
/// ----------
/// - As established by [`EvaluationConfig::new`]: finite coordinates,
///   valid times and step, `detection_window` finite and positive, and a
///   derived window of at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    /// Initial hand position, held over the static phase.
    pub start: Point2,
    /// Final hand position.
    pub end: Point2,
    /// Requested movement onset time.
    pub onset: f64,
    /// Requested total duration.
    pub end_time: f64,
    /// Sampling interval.
    pub step: f64,
    /// Detector evaluation window in time units.
    pub detection_window: f64,
}

impl EvaluationConfig {
    /// Construct a validated evaluation configuration.
    ///
    /// Parameters
    /// ----------
    /// - `start`, `end`: `Point2`
    ///   Reach geometry. Coordinates must be finite.
    /// - `onset`: `f64`
    ///   Requested onset time; finite and non-negative.
    /// - `end_time`: `f64`
    ///   Requested total duration; finite.
    /// - `step`: `f64`
    ///   Sampling interval; finite and strictly positive.
    /// - `detection_window`: `f64`
    ///   Detector window in time units; finite, strictly positive, and at
    ///   least two steps long so it resolves to one sample or more.
    ///
    /// Returns
    /// -------
    /// `HarnessResult<EvaluationConfig>`
    ///   - `Ok(config)` when all constraints hold.
    ///   - `Err(HarnessError)` naming the first violated constraint.
    ///
    /// Errors
    /// ------
    /// - `HarnessError::Trajectory`
    ///   Propagated from the synthesis input guards (coordinates, times,
    ///   step).
    /// - `HarnessError::InvalidDetectionWindow`
    ///   Returned when `detection_window` is NaN, ±∞, zero, or negative.
    /// - `HarnessError::WindowTooNarrow`
    ///   Returned when the window resolves to fewer than one sample at
    ///   `step`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(
        start: Point2, end: Point2, onset: f64, end_time: f64, step: f64,
        detection_window: f64,
    ) -> HarnessResult<Self> {
        validate_synthesis_inputs(&start, &end, onset, end_time, step)?;

        if !detection_window.is_finite() || detection_window <= 0.0 {
            return Err(HarnessError::InvalidDetectionWindow { window: detection_window });
        }

        let config = EvaluationConfig { start, end, onset, end_time, step, detection_window };
        if config.window_samples() < 1 {
            return Err(HarnessError::WindowTooNarrow { window: detection_window, step });
        }

        Ok(config)
    }

    /// Number of samples the detector evaluates candidates over:
    /// `⌊detection_window / step⌋ − 1`, with quotients within one ulp of a
    /// whole number treated as that number.
    pub fn window_samples(&self) -> usize {
        let ratio = self.detection_window / self.step;
        let nearest = ratio.round();
        let steps = if (ratio - nearest).abs() <= SNAP_TOL * nearest.abs().max(1.0) {
            nearest
        } else {
            ratio.floor()
        };
        (steps as usize).saturating_sub(1)
    }
}

impl Default for EvaluationConfig {
    /// The canonical example scenario: a reach from (−0.1, 0.1) to
    /// (−0.9, 1.1) with onset 0.4, duration 1.2, step 0.01, and a 0.1 time
    /// unit (nine sample) detection window.
    fn default() -> Self {
        EvaluationConfig {
            start: Point2::new(-0.1, 0.1),
            end: Point2::new(-0.9, 1.1),
            onset: 0.4,
            end_time: 1.2,
            step: 0.01,
            detection_window: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::errors::TrajectoryError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validity and window derivation of the default scenario.
    // - Window derivation on off-grid windows.
    // - Configuration error branches: invalid window, too-narrow window,
    //   and propagation of trajectory guard failures.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the default scenario validates and derives the expected
    // nine-sample detection window (⌊0.1 / 0.01⌋ − 1).
    //
    // Given
    // -----
    // - `EvaluationConfig::default()`.
    //
    // Expect
    // ------
    // - `new` accepts the same parameters and `window_samples() == 9`.
    fn default_scenario_is_valid() {
        // Arrange
        let default = EvaluationConfig::default();

        // Act
        let rebuilt = EvaluationConfig::new(
            default.start,
            default.end,
            default.onset,
            default.end_time,
            default.step,
            default.detection_window,
        )
        .unwrap();

        // Assert
        assert_eq!(rebuilt, default);
        assert_eq!(default.window_samples(), 9);
    }

    #[test]
    // Purpose
    // -------
    // Verify the truncating window derivation on an off-grid window.
    //
    // Given
    // -----
    // - A 0.055 window at step 0.01.
    //
    // Expect
    // ------
    // - `window_samples() == 4` (⌊5.5⌋ − 1).
    fn window_samples_truncates_off_grid_window() {
        let config = EvaluationConfig {
            detection_window: 0.055,
            ..EvaluationConfig::default()
        };
        assert_eq!(config.window_samples(), 4);
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-positive and non-finite windows are rejected.
    //
    // Given
    // -----
    // - detection_window ∈ {0.0, −0.1, NaN}.
    //
    // Expect
    // ------
    // - Every case returns `InvalidDetectionWindow`.
    fn new_rejects_invalid_detection_window() {
        let d = EvaluationConfig::default();
        for window in [0.0, -0.1, f64::NAN] {
            match EvaluationConfig::new(d.start, d.end, d.onset, d.end_time, d.step, window) {
                Err(HarnessError::InvalidDetectionWindow { .. }) => (),
                other => panic!("expected InvalidDetectionWindow for {window}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a window shorter than two steps is rejected: it would resolve
    // to zero samples.
    //
    // Given
    // -----
    // - detection_window = 0.015 at step 0.01 (⌊1.5⌋ − 1 = 0).
    //
    // Expect
    // ------
    // - `Err(HarnessError::WindowTooNarrow)`.
    fn new_rejects_window_narrower_than_two_steps() {
        let d = EvaluationConfig::default();
        match EvaluationConfig::new(d.start, d.end, d.onset, d.end_time, d.step, 0.015) {
            Err(HarnessError::WindowTooNarrow { .. }) => (),
            other => panic!("expected WindowTooNarrow error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that trajectory guard failures propagate wrapped in
    // `HarnessError::Trajectory`.
    //
    // Given
    // -----
    // - A zero step.
    //
    // Expect
    // ------
    // - `Err(HarnessError::Trajectory(TrajectoryError::InvalidStep))`.
    fn new_propagates_trajectory_guard_failures() {
        let d = EvaluationConfig::default();
        match EvaluationConfig::new(d.start, d.end, d.onset, d.end_time, 0.0, d.detection_window)
        {
            Err(HarnessError::Trajectory(TrajectoryError::InvalidStep { .. })) => (),
            other => panic!("expected wrapped InvalidStep error, got {other:?}"),
        }
    }
}
