//! kinematics::errors — error types for numerical differentiation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for velocity estimation over
//! sampled position/time sequences, plus the Python conversion layer used by
//! the optional bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`KinematicsResult`] and [`KinematicsError`] as the canonical
//!   result and error types for differentiator implementations.
//! - Attach human-readable `Display` messages naming the violated alignment
//!   or shape constraint.
//! - Implement `From<KinematicsError> for PyErr` mapping to `PyValueError`.
//!
//! Conventions
//! -----------
//! - Variants carry the first offending index/value only; differentiators
//!   stop at the first violation.
//!
//! Testing notes
//! -------------
//! - Unit tests verify Display payload embedding for each variant.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type KinematicsResult<T> = Result<T, KinematicsError>;

/// KinematicsError — error conditions for sampled-series differentiation.
///
/// Variants
/// --------
/// - `LengthMismatch { position, time }`
///   Position and time sequences are not aligned 1:1.
/// - `InsufficientSamples { len }`
///   Fewer than two samples; no difference quotient exists.
/// - `NonFiniteSample { name, index, value }`
///   A position or time entry is NaN or ±∞; `name` is `"position"` or
///   `"time"`.
/// - `NonMonotonicTime { index, value }`
///   The time sequence fails to increase strictly at `index`.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    LengthMismatch { position: usize, time: usize },
    InsufficientSamples { len: usize },
    NonFiniteSample { name: &'static str, index: usize, value: f64 },
    NonMonotonicTime { index: usize, value: f64 },
}

impl std::error::Error for KinematicsError {}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KinematicsError::LengthMismatch { position, time } => {
                write!(
                    f,
                    "Position sequence of length {position} is not aligned with time sequence of length {time}"
                )
            }
            KinematicsError::InsufficientSamples { len } => {
                write!(f, "At least two samples are required for differentiation, got {len}")
            }
            KinematicsError::NonFiniteSample { name, index, value } => {
                write!(f, "Sample '{name}' at index {index} is non-finite: {value}")
            }
            KinematicsError::NonMonotonicTime { index, value } => {
                write!(f, "Time sequence must be strictly increasing, violated at index {index}: {value}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<KinematicsError> for PyErr {
    fn from(err: KinematicsError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
