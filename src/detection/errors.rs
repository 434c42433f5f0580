//! detection::errors — error types for the onset-detection interface.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by onset-detector
//! implementations. Only structural input failures live here; detector
//! non-convergence is reported as data on the outcome, never as an error.
//!
//! Conventions
//! -----------
//! - Variants name the violated alignment or window constraint; algorithmic
//!   diagnostics belong on `OnsetDetection`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify Display payload embedding for each variant.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type DetectionResult<T> = Result<T, DetectionError>;

/// DetectionError — structural failures of an onset-detection call.
///
/// Variants
/// --------
/// - `SequenceLengthMismatch { name, expected, actual }`
///   One of the five input sequences is not aligned with the time grid;
///   `name` identifies which (`"x"`, `"y"`, `"vx"`, `"vy"`).
/// - `InvalidWindow { window, len }`
///   The sample-count window is zero or does not fit the series.
///
/// Notes
/// -----
/// - Non-convergence is not an error: detectors return a completed
///   `OnsetDetection` with `converged == false`.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionError {
    SequenceLengthMismatch { name: &'static str, expected: usize, actual: usize },
    InvalidWindow { window: usize, len: usize },
}

impl std::error::Error for DetectionError {}

impl std::fmt::Display for DetectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionError::SequenceLengthMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Sequence '{name}' of length {actual} is not aligned with the time grid of length {expected}"
                )
            }
            DetectionError::InvalidWindow { window, len } => {
                write!(
                    f,
                    "Detection window of {window} samples does not fit a series of length {len}"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DetectionError> for PyErr {
    fn from(err: DetectionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that both variants' Display messages embed their payloads.
    //
    // Given
    // -----
    // - One instance of each `DetectionError` variant.
    //
    // Expect
    // ------
    // - Each rendered message contains the payload values verbatim.
    fn display_messages_embed_payloads() {
        let mismatch =
            DetectionError::SequenceLengthMismatch { name: "vx", expected: 121, actual: 120 };
        let msg = mismatch.to_string();
        assert!(msg.contains("vx") && msg.contains("121") && msg.contains("120"), "{msg}");

        let window = DetectionError::InvalidWindow { window: 0, len: 121 };
        let msg = window.to_string();
        assert!(msg.contains('0') && msg.contains("121"), "{msg}");
    }
}
