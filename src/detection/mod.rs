//! detection — the onset-detector interface consumed by the harness.
//!
//! Purpose
//! -------
//! Model the external motion-onset-detection algorithm as an explicit,
//! swappable contract. The crate implements no detection algorithm; this
//! subtree defines what one looks like ([`OnsetDetector`]), what it returns
//! ([`OnsetDetection`] with typed [`OnsetDiagnostics`]), and the structural
//! guards implementations share.
//!
//! Key behaviors
//! -------------
//! - Define the detection contract over aligned position/time/velocity
//!   sequences and a sample-count window ([`detector`]).
//! - Report non-convergence and estimate adjustment as outcome flags, never
//!   as errors; structural input failures live in [`errors`].
//!
//! Downstream usage
//! ----------------
//! - The harness passes synthesized ground-truth sequences and derived
//!   velocities to any [`OnsetDetector`] and compares the predicted onset
//!   against the known one.
//! - Tests drive the seam with stub detectors; no registry or dynamic
//!   dispatch machinery is involved beyond the trait object the caller
//!   chooses to use.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`detector`] cover the shared input guard; harness and
//!   integration tests cover outcome handling.

pub mod detector;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::detector::{
    BoundarySample, OnsetBracket, OnsetDetection, OnsetDetector, OnsetDiagnostics,
    validate_detection_inputs,
};
pub use self::errors::{DetectionError, DetectionResult};
