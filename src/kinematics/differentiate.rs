//! kinematics::differentiate — velocity estimation over sampled sequences.
//!
//! Purpose
//! -------
//! Define the differentiation seam between the reference-trajectory side of
//! the pipeline and onset detection: a [`Differentiator`] trait mapping
//! aligned position/time sequences to an aligned velocity sequence, plus the
//! crate-supplied [`CentralDifference`] implementation. The evaluation
//! harness is agnostic to which implementation it is handed, so smoothing
//! differentiators can be swapped in behind the same contract.
//!
//! Key behaviors
//! -------------
//! - Validate alignment, finiteness, and strict time monotonicity once via
//!   [`validate_series`] before any difference quotient is formed.
//! - Estimate interior velocities with second-order central differences and
//!   endpoint velocities with one-sided differences in
//!   [`CentralDifference`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned velocity sequence has the same length as, and is aligned
//!   1:1 with, the input grid.
//! - Inputs that pass validation are finite with strictly increasing time,
//!   so every difference quotient has a nonzero denominator.
//!
//! Conventions
//! -----------
//! - Implementations are pure: no I/O, no logging, no internal state beyond
//!   configuration.
//!
//! Downstream usage
//! ----------------
//! - The harness calls `differentiator.velocity(&traj.x, &traj.t)` per axis
//!   and feeds the results to the onset detector unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exactness on constant/linear/quadratic series, the
//!   validation branches, and alignment of the output.

use ndarray::Array1;

use crate::kinematics::errors::{KinematicsError, KinematicsResult};

/// Numerical differentiation over aligned position/time sequences.
///
/// Contract: the output has the same length as the inputs and is aligned
/// with the same time grid. Implementations validate their inputs and
/// report failures via [`KinematicsResult`]; they never panic on malformed
/// series.
pub trait Differentiator {
    /// Estimate the velocity sequence for `position` sampled at `time`.
    fn velocity(
        &self, position: &Array1<f64>, time: &Array1<f64>,
    ) -> KinematicsResult<Array1<f64>>;
}

/// Validate a position/time series pair for differentiation.
///
/// Parameters
/// ----------
/// - `position`: `&Array1<f64>`
///   Sampled positions. Must be finite and aligned with `time`.
/// - `time`: `&Array1<f64>`
///   Sample times. Must be finite, strictly increasing, and at least two
///   entries long.
///
/// Returns
/// -------
/// `KinematicsResult<()>`
///   - `Ok(())` when the pair is well-formed.
///   - `Err(KinematicsError)` naming the first violated constraint.
///
/// Errors
/// ------
/// - `KinematicsError::LengthMismatch`
///   Returned when the sequences differ in length.
/// - `KinematicsError::InsufficientSamples`
///   Returned when fewer than two samples are provided.
/// - `KinematicsError::NonFiniteSample`
///   Returned for the first NaN or ±∞ entry in either sequence.
/// - `KinematicsError::NonMonotonicTime`
///   Returned at the first index where time fails to increase strictly.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_series(position: &Array1<f64>, time: &Array1<f64>) -> KinematicsResult<()> {
    if position.len() != time.len() {
        return Err(KinematicsError::LengthMismatch {
            position: position.len(),
            time: time.len(),
        });
    }

    if time.len() < 2 {
        return Err(KinematicsError::InsufficientSamples { len: time.len() });
    }

    for (index, &value) in position.iter().enumerate() {
        if !value.is_finite() {
            return Err(KinematicsError::NonFiniteSample { name: "position", index, value });
        }
    }

    for (index, &value) in time.iter().enumerate() {
        if !value.is_finite() {
            return Err(KinematicsError::NonFiniteSample { name: "time", index, value });
        }
        if index > 0 && value <= time[index - 1] {
            return Err(KinematicsError::NonMonotonicTime { index, value });
        }
    }

    Ok(())
}

/// CentralDifference — second-order finite-difference differentiator.
///
/// Purpose
/// -------
/// Provide the crate's default [`Differentiator`]: central differences on
/// interior samples, one-sided forward/backward differences at the two
/// endpoints. Exact for polynomials up to degree two on the interior and
/// degree one at the endpoints, which is sufficient to recover the zero
/// velocity of a static phase exactly.
///
/// Notes
/// -----
/// - Stateless and `Copy`; construct freely at call sites.
/// - Works on non-uniform grids: quotients use the actual time differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentralDifference;

impl CentralDifference {
    /// Create a central-difference differentiator.
    pub fn new() -> Self {
        CentralDifference
    }
}

impl Differentiator for CentralDifference {
    /// Estimate velocities with central differences.
    ///
    /// Parameters
    /// ----------
    /// - `position`: `&Array1<f64>`
    ///   Sampled positions, aligned with `time`.
    /// - `time`: `&Array1<f64>`
    ///   Strictly increasing sample times, at least two entries.
    ///
    /// Returns
    /// -------
    /// `KinematicsResult<Array1<f64>>`
    ///   - `Ok(velocity)` aligned 1:1 with the input grid:
    ///     `(p[i+1] − p[i−1]) / (t[i+1] − t[i−1])` on the interior, forward
    ///     and backward quotients at the first and last sample.
    ///   - `Err(KinematicsError)` when [`validate_series`] rejects the
    ///     inputs.
    ///
    /// Panics
    /// ------
    /// - Never panics; validation guarantees nonzero denominators.
    fn velocity(
        &self, position: &Array1<f64>, time: &Array1<f64>,
    ) -> KinematicsResult<Array1<f64>> {
        validate_series(position, time)?;

        let len = position.len();
        let mut velocity = Array1::zeros(len);

        velocity[0] = (position[1] - position[0]) / (time[1] - time[0]);
        for i in 1..len - 1 {
            velocity[i] = (position[i + 1] - position[i - 1]) / (time[i + 1] - time[i - 1]);
        }
        velocity[len - 1] =
            (position[len - 1] - position[len - 2]) / (time[len - 1] - time[len - 2]);

        Ok(velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    const TOL: f64 = 1e-9;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of zero velocity on a constant series.
    // - Exact slope recovery on a linear series (endpoints included).
    // - Interior exactness on a quadratic series.
    // - Output alignment with the input grid.
    // - Validation branches: length mismatch, short series, non-monotonic
    //   time.
    // -------------------------------------------------------------------------

    fn uniform_time(len: usize, step: f64) -> Array1<f64> {
        Array1::from_iter((0..len).map(|i| i as f64 * step))
    }

    #[test]
    // Purpose
    // -------
    // Verify that a constant position series yields identically zero
    // velocity, the property the static phase of a reference trajectory
    // relies on.
    //
    // Given
    // -----
    // - position = 0.25 repeated over a uniform grid.
    //
    // Expect
    // ------
    // - Every velocity sample equals 0.0 exactly.
    fn velocity_constant_series_is_zero() {
        // Arrange
        let time = uniform_time(50, 0.01);
        let position = Array1::from_elem(50, 0.25);

        // Act
        let velocity = CentralDifference::new().velocity(&position, &time).unwrap();

        // Assert
        assert_eq!(velocity.len(), 50);
        for (i, &v) in velocity.iter().enumerate() {
            assert_eq!(v, 0.0, "nonzero velocity at index {i}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify exact slope recovery on a linear series, including the
    // one-sided endpoint quotients.
    //
    // Given
    // -----
    // - position = 2.5·t − 1 over a uniform grid.
    //
    // Expect
    // ------
    // - Every velocity sample equals 2.5 within 1e-9.
    fn velocity_linear_series_recovers_slope() {
        // Arrange
        let time = uniform_time(40, 0.05);
        let position = time.mapv(|t| 2.5 * t - 1.0);

        // Act
        let velocity = CentralDifference::new().velocity(&position, &time).unwrap();

        // Assert
        for (i, &v) in velocity.iter().enumerate() {
            assert!((v - 2.5).abs() < TOL, "velocity {v} at index {i}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify interior exactness on a quadratic series: central differences
    // are second-order and differentiate t² exactly.
    //
    // Given
    // -----
    // - position = t² over a uniform grid.
    //
    // Expect
    // ------
    // - Interior velocity samples equal 2·t within 1e-9.
    fn velocity_quadratic_series_exact_on_interior() {
        // Arrange
        let time = uniform_time(30, 0.1);
        let position = time.mapv(|t| t * t);

        // Act
        let velocity = CentralDifference::new().velocity(&position, &time).unwrap();

        // Assert
        for i in 1..29 {
            let expected = 2.0 * time[i];
            assert!(
                (velocity[i] - expected).abs() < TOL,
                "velocity {} at index {i}, expected {expected}",
                velocity[i]
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure misaligned sequences are rejected with `LengthMismatch`.
    //
    // Given
    // -----
    // - 5 position samples against 4 time samples.
    //
    // Expect
    // ------
    // - `Err(KinematicsError::LengthMismatch)` carrying both lengths.
    fn velocity_length_mismatch_returns_error() {
        let position = Array1::zeros(5);
        let time = uniform_time(4, 0.01);
        match CentralDifference::new().velocity(&position, &time) {
            Err(KinematicsError::LengthMismatch { position: 5, time: 4 }) => (),
            other => panic!("expected LengthMismatch error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a single-sample series is rejected with
    // `InsufficientSamples`.
    //
    // Given
    // -----
    // - One position sample and one time sample.
    //
    // Expect
    // ------
    // - `Err(KinematicsError::InsufficientSamples)`.
    fn velocity_single_sample_returns_error() {
        let position = Array1::zeros(1);
        let time = Array1::zeros(1);
        match CentralDifference::new().velocity(&position, &time) {
            Err(KinematicsError::InsufficientSamples { len: 1 }) => (),
            other => panic!("expected InsufficientSamples error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a repeated time sample is rejected with `NonMonotonicTime`
    // before any quotient divides by zero.
    //
    // Given
    // -----
    // - A time sequence with a duplicated entry.
    //
    // Expect
    // ------
    // - `Err(KinematicsError::NonMonotonicTime)` at the duplicate index.
    fn velocity_repeated_time_returns_error() {
        let position = Array1::zeros(4);
        let time = Array1::from(vec![0.0, 0.1, 0.1, 0.3]);
        match CentralDifference::new().velocity(&position, &time) {
            Err(KinematicsError::NonMonotonicTime { index: 2, .. }) => (),
            other => panic!("expected NonMonotonicTime error, got {other:?}"),
        }
    }
}
