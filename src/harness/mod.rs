//! harness — end-to-end evaluation of onset detectors against ground truth.
//!
//! Purpose
//! -------
//! Orchestrate the evaluation pipeline: a validated scenario configuration
//! ([`EvaluationConfig`]), the end-to-end driver ([`OnsetEvaluation`]) that
//! synthesizes ground truth, differentiates it, runs a detector, and
//! measures the prediction error, and the harness-level error surface
//! wrapping the stage errors.
//!
//! Key behaviors
//! -------------
//! - Replace ambient script state with an explicit configuration object
//!   ([`config`]).
//! - Wire collaborator implementations (differentiator, detector) through
//!   their trait seams without owning either ([`evaluation`]).
//! - Wrap stage failures behind one error enum ([`errors`]).
//!
//! Conventions
//! -----------
//! - This is the only subtree that logs; it uses the `log` facade at stage
//!   boundaries. The numeric subtrees surface everything via errors.
//! - Ground truth is always the *snapped* onset time returned by synthesis.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!
//!   ```rust
//!   use motion_onset::harness::{EvaluationConfig, OnsetEvaluation};
//!   use motion_onset::kinematics::CentralDifference;
//!   # use motion_onset::detection::{OnsetDetection, OnsetDetector, OnsetDiagnostics,
//!   #     OnsetBracket, BoundarySample, DetectionResult};
//!   # use ndarray::Array1;
//!   # struct Stub;
//!   # impl OnsetDetector for Stub {
//!   #     fn detect(&self, _w: usize, x: &Array1<f64>, y: &Array1<f64>, t: &Array1<f64>,
//!   #         _vx: &Array1<f64>, _vy: &Array1<f64>) -> DetectionResult<OnsetDetection> {
//!   #         Ok(OnsetDetection { onset_time: 0.4, diagnostics: OnsetDiagnostics {
//!   #             errors: Array1::zeros(t.len()), times: t.clone(), max_velocity: 0.0,
//!   #             bracket: OnsetBracket {
//!   #                 before: BoundarySample { x: x[0], y: y[0], t: t[0] },
//!   #                 after: BoundarySample { x: x[0], y: y[0], t: t[0] } } },
//!   #             converged: true, adjusted: false })
//!   #     }
//!   # }
//!
//!   let config = EvaluationConfig::default();
//!   let eval = OnsetEvaluation::run(&config, &CentralDifference::new(), &Stub)?;
//!   assert!(eval.absolute_error < config.step);
//!   # Ok::<(), motion_onset::harness::HarnessError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`config`] and [`evaluation`] cover configuration
//!   branches and stub-driven runs; `tests/integration_onset_pipeline.rs`
//!   exercises the realistic pipeline.

pub mod config;
pub mod errors;
pub mod evaluation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::config::EvaluationConfig;
pub use self::errors::{HarnessError, HarnessResult};
pub use self::evaluation::OnsetEvaluation;
