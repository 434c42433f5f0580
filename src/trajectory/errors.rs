//! trajectory::errors — error types for reference-trajectory construction.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the trajectory subtree
//! (input validation, grid snapping, and synthesis), together with a
//! conversion layer to Python exceptions for PyO3-based bindings. This keeps
//! trajectory-specific failures localized while exposing a clean error
//! surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`TrajectoryResult`] and [`TrajectoryError`] as the canonical
//!   result and error types for grid snapping and trajectory synthesis.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics and logs are meaningful without additional context.
//! - Implement `From<TrajectoryError> for PyErr` to map Rust-side validation
//!   failures into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Trajectory modules validate their inputs (finiteness, ordering, step
//!   positivity) and return [`TrajectoryResult<T>`] instead of panicking.
//! - `TrajectoryError` values are small, cheap to clone, and suitable for use
//!   in both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message verbatim
//!   inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g., "step
//!   size must be positive", "onset time must not exceed the end time")
//!   rather than low-level details.
//! - Kinematics- and detection-specific error types live in their own
//!   `errors` modules under the relevant subtrees.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (the offending value or time pair).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// TrajectoryError — error conditions for grid snapping and synthesis.
///
/// Purpose
/// -------
/// Represent all validation failures that can occur when snapping requested
/// onset/end times to the sampling grid and synthesizing a reference reaching
/// trajectory, including malformed scalars and a degenerate movement window.
///
/// Variants
/// --------
/// - `NonFiniteCoordinate { name, value }`
///   A start/end coordinate is NaN or ±∞ and cannot participate in the
///   per-axis interpolation.
/// - `InvalidStep { value }`
///   The sampling step is non-finite or not strictly positive, so the grid
///   arithmetic (`floor(t / step)`) is undefined.
/// - `InvalidOnset { value }`
///   The requested onset time is non-finite or negative; snapping a negative
///   onset would fabricate a static phase that was never requested.
/// - `InvalidEndTime { value }`
///   The requested end time is NaN or ±∞.
/// - `OnsetAfterEnd { onset, end }`
///   The requested end time lies before the snapped onset, which would make
///   the movement-phase sample count negative.
/// - `DegenerateWindow { onset, end }`
///   The movement window resolves to zero samples (onset and end snap to the
///   same grid point), so the normalized movement time is undefined (0/0).
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value or time
///   pair) to allow downstream logging and debugging without leaking large
///   data structures.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`] so
///   it can be used with idiomatic `?`-based error propagation in Rust.
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    //------ Input validation errors ------
    NonFiniteCoordinate { name: &'static str, value: f64 },
    InvalidStep { value: f64 },
    InvalidOnset { value: f64 },
    InvalidEndTime { value: f64 },
    //------ Grid construction errors ------
    OnsetAfterEnd { onset: f64, end: f64 },
    DegenerateWindow { onset: f64, end: f64 },
}

impl std::error::Error for TrajectoryError {}

impl std::fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrajectoryError::NonFiniteCoordinate { name, value } => {
                write!(f, "Coordinate '{name}' must be finite, got {value}")
            }
            TrajectoryError::InvalidStep { value } => {
                write!(f, "Sampling step must be finite and positive, got {value}")
            }
            TrajectoryError::InvalidOnset { value } => {
                write!(f, "Onset time must be finite and non-negative, got {value}")
            }
            TrajectoryError::InvalidEndTime { value } => {
                write!(f, "End time must be finite, got {value}")
            }
            TrajectoryError::OnsetAfterEnd { onset, end } => {
                write!(f, "Onset time {onset} must not exceed the end time {end}")
            }
            TrajectoryError::DegenerateWindow { onset, end } => {
                write!(
                    f,
                    "Movement window from {onset} to {end} resolves to zero samples"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TrajectoryError> for PyErr {
    fn from(err: TrajectoryError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display messages for each `TrajectoryError` variant, including payload
    //   embedding.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion path, which is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that every variant's Display message embeds the offending
    // payload values.
    //
    // Given
    // -----
    // - One instance of each `TrajectoryError` variant with distinctive
    //   payloads.
    //
    // Expect
    // ------
    // - Each rendered message contains the payload values verbatim.
    fn display_messages_embed_payloads() {
        // Arrange
        let cases = vec![
            (
                TrajectoryError::NonFiniteCoordinate { name: "start.x", value: f64::NAN },
                vec!["start.x", "NaN"],
            ),
            (TrajectoryError::InvalidStep { value: -0.5 }, vec!["-0.5"]),
            (TrajectoryError::InvalidOnset { value: -1.0 }, vec!["-1"]),
            (TrajectoryError::InvalidEndTime { value: f64::INFINITY }, vec!["inf"]),
            (TrajectoryError::OnsetAfterEnd { onset: 2.0, end: 1.0 }, vec!["2", "1"]),
            (TrajectoryError::DegenerateWindow { onset: 0.4, end: 0.4 }, vec!["0.4"]),
        ];

        // Act & Assert
        for (err, needles) in cases {
            let msg = err.to_string();
            for needle in needles {
                assert!(
                    msg.contains(needle),
                    "expected message {msg:?} to contain {needle:?}"
                );
            }
        }
    }
}
