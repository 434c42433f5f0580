//! harness::errors — error types for the end-to-end evaluation driver.
//!
//! Purpose
//! -------
//! Provide the harness-level error enum that wraps the subtree errors of
//! the pipeline stages (trajectory synthesis, differentiation, detection)
//! behind a single surface, plus the configuration failures that belong to
//! the harness itself.
//!
//! Key behaviors
//! -------------
//! - Wrap [`TrajectoryError`], [`KinematicsError`], and [`DetectionError`]
//!   via `From` impls so stage failures propagate with `?`.
//! - Represent configuration failures of the harness (the detection window
//!   in seconds) as dedicated variants.
//!
//! Conventions
//! -----------
//! - Detector non-convergence is not represented here: it is data on the
//!   detection outcome and is surfaced unchanged by the harness.
//!
//! Testing notes
//! -------------
//! - Unit tests verify Display delegation for wrapped errors and payload
//!   embedding for the configuration variants.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::detection::errors::DetectionError;
use crate::kinematics::errors::KinematicsError;
use crate::trajectory::errors::TrajectoryError;

pub type HarnessResult<T> = Result<T, HarnessError>;

/// HarnessError — failures of the evaluation pipeline or its configuration.
///
/// Variants
/// --------
/// - `Trajectory(TrajectoryError)`
///   Ground-truth synthesis rejected the configured scenario.
/// - `Kinematics(KinematicsError)`
///   Velocity estimation rejected a synthesized sequence.
/// - `Detection(DetectionError)`
///   The detector rejected its structural inputs.
/// - `InvalidDetectionWindow { window }`
///   The configured detection window (in time units) is non-finite or not
///   strictly positive.
/// - `WindowTooNarrow { window, step }`
///   The detection window resolves to fewer than one sample at the
///   configured step.
#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    //------ Wrapped stage errors ------
    Trajectory(TrajectoryError),
    Kinematics(KinematicsError),
    Detection(DetectionError),
    //------ Configuration errors ------
    InvalidDetectionWindow { window: f64 },
    WindowTooNarrow { window: f64, step: f64 },
}

impl std::error::Error for HarnessError {}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Trajectory(inner) => {
                write!(f, "Trajectory synthesis failed: {inner}")
            }
            HarnessError::Kinematics(inner) => {
                write!(f, "Velocity estimation failed: {inner}")
            }
            HarnessError::Detection(inner) => {
                write!(f, "Onset detection failed: {inner}")
            }
            HarnessError::InvalidDetectionWindow { window } => {
                write!(f, "Detection window must be finite and positive, got {window}")
            }
            HarnessError::WindowTooNarrow { window, step } => {
                write!(
                    f,
                    "Detection window {window} resolves to fewer than one sample at step {step}"
                )
            }
        }
    }
}

impl From<TrajectoryError> for HarnessError {
    fn from(err: TrajectoryError) -> Self {
        HarnessError::Trajectory(err)
    }
}

impl From<KinematicsError> for HarnessError {
    fn from(err: KinematicsError) -> Self {
        HarnessError::Kinematics(err)
    }
}

impl From<DetectionError> for HarnessError {
    fn from(err: DetectionError) -> Self {
        HarnessError::Detection(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<HarnessError> for PyErr {
    fn from(err: HarnessError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that wrapped stage errors delegate their Display message to
    // the inner error.
    //
    // Given
    // -----
    // - A `TrajectoryError::InvalidStep` wrapped via `From`.
    //
    // Expect
    // ------
    // - The harness message contains the inner message.
    fn display_delegates_to_wrapped_error() {
        let inner = TrajectoryError::InvalidStep { value: 0.0 };
        let wrapped: HarnessError = inner.clone().into();
        let msg = wrapped.to_string();
        assert!(
            msg.contains(&inner.to_string()),
            "expected {msg:?} to contain {:?}",
            inner.to_string()
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that configuration variants embed their payloads.
    //
    // Given
    // -----
    // - `InvalidDetectionWindow` and `WindowTooNarrow` instances.
    //
    // Expect
    // ------
    // - Rendered messages contain the offending values.
    fn display_configuration_variants_embed_payloads() {
        let msg = HarnessError::InvalidDetectionWindow { window: -0.1 }.to_string();
        assert!(msg.contains("-0.1"), "{msg}");

        let msg = HarnessError::WindowTooNarrow { window: 0.01, step: 0.01 }.to_string();
        assert!(msg.contains("0.01"), "{msg}");
    }
}
