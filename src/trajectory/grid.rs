//! trajectory::grid — snapped, evenly spaced sampling grids.
//!
//! Purpose
//! -------
//! Snap requested onset/end times down to the sampling step and build the
//! evenly spaced time grid that the synthesizer fills. Centralizing the
//! snapping arithmetic here keeps the static/movement bookkeeping (N and M
//! sample counts) in one place and makes the ground-truth onset an explicit,
//! queryable value.
//!
//! Key behaviors
//! -------------
//! - Compute `N = floor(onset / step)` and `M = floor((end − onset') / step)`
//!   where `onset' = N · step`, then adjust both times onto the grid, via
//!   [`SampleGrid::snap`].
//! - Build `N + M + 1` evenly spaced time samples from 0 to the adjusted end
//!   time inclusive.
//! - Reject non-positive steps, negative onsets, end times before the
//!   snapped onset, and zero-sample movement windows.
//!
//! Invariants & assumptions
//! ------------------------
//! - `static_samples ≥ 0`, `movement_samples ≥ 1`.
//! - `onset_time = static_samples · step` and
//!   `end_time = (static_samples + movement_samples) · step`.
//! - `times` is strictly increasing with uniform spacing `step` and has
//!   length `static_samples + movement_samples + 1`.
//! - Snapping is idempotent: re-snapping already snapped times yields
//!   identical counts and samples.
//!
//! Conventions
//! -----------
//! - Quotients within a small relative tolerance of an integer are treated
//!   as that integer before flooring, so values that already sit on the grid
//!   (up to floating rounding, e.g. `(1.2 − 0.4) / 0.01`) do not lose a
//!   sample to one-ulp wobble.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference scenario counts, idempotent snapping,
//!   truncating snaps of off-grid times, and every error branch.

use ndarray::Array1;

use crate::trajectory::errors::{TrajectoryError, TrajectoryResult};
use crate::trajectory::validation::validate_grid_inputs;

/// Relative tolerance under which a time/step quotient is considered to lie
/// exactly on the grid.
const SNAP_TOL: f64 = 1e-9;

/// Floor `value / step` to a whole number of steps, absorbing one-ulp wobble.
///
/// Quotients within [`SNAP_TOL`] (relative) of an integer are rounded to it
/// before flooring; anything else truncates downward. Returns the count as
/// `f64` so the caller can detect negative results before casting.
fn floor_steps(value: f64, step: f64) -> f64 {
    let ratio = value / step;
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= SNAP_TOL * nearest.abs().max(1.0) {
        nearest
    } else {
        ratio.floor()
    }
}

/// SampleGrid — snapped static/movement sampling grid for a reach.
///
/// Purpose
/// -------
/// Carry the snapped onset/end times, the static and movement sample counts,
/// and the evenly spaced time samples shared by every per-axis position
/// sequence of a reference trajectory.
///
/// Fields
/// ------
/// - `static_samples`: `usize`
///   Number of pre-onset samples N; the first N grid entries belong to the
///   static phase.
/// - `movement_samples`: `usize`
///   Number of movement steps M; the movement phase spans `M + 1` samples
///   including its boundary with the static phase.
/// - `onset_time`: `f64`
///   Requested onset snapped down to `N · step`. This is the ground-truth
///   onset returned to downstream comparisons.
/// - `end_time`: `f64`
///   Requested end snapped to `(N + M) · step`.
/// - `step`: `f64`
///   Sampling interval; strictly positive.
/// - `times`: `Array1<f64>`
///   `N + M + 1` evenly spaced samples from 0 to `end_time` inclusive.
///
/// Invariants
/// ----------
/// - `movement_samples ≥ 1`; a zero-sample movement window is rejected at
///   construction with [`TrajectoryError::DegenerateWindow`].
/// - `times.len() == static_samples + movement_samples + 1`.
///
/// Notes
/// -----
/// - Construction is the only mutation point; afterwards this type is a
///   plain data carrier.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    /// Number of static-phase samples N.
    pub static_samples: usize,
    /// Number of movement-phase steps M.
    pub movement_samples: usize,
    /// Onset time snapped to the grid (ground truth for downstream use).
    pub onset_time: f64,
    /// End time snapped to the grid.
    pub end_time: f64,
    /// Sampling interval.
    pub step: f64,
    /// Evenly spaced time samples from 0 to `end_time` inclusive.
    pub times: Array1<f64>,
}

impl SampleGrid {
    /// Snap requested onset/end times to the step grid and build the time
    /// samples.
    ///
    /// Parameters
    /// ----------
    /// - `onset`: `f64`
    ///   Requested onset time. Must be finite and non-negative; snapped down
    ///   to the nearest multiple of `step`.
    /// - `end`: `f64`
    ///   Requested end time. Must be finite and must not precede the snapped
    ///   onset; snapped so the total duration is a whole number of steps.
    /// - `step`: `f64`
    ///   Sampling interval. Must be finite and strictly positive.
    ///
    /// Returns
    /// -------
    /// `TrajectoryResult<SampleGrid>`
    ///   - `Ok(grid)` with snapped times, sample counts, and the evenly
    ///     spaced time array.
    ///   - `Err(TrajectoryError)` when validation or snapping fails.
    ///
    /// Errors
    /// ------
    /// - `TrajectoryError::InvalidStep`, `InvalidOnset`, `InvalidEndTime`
    ///   Propagated from [`validate_grid_inputs`].
    /// - `TrajectoryError::OnsetAfterEnd`
    ///   Returned when `end` precedes the snapped onset, which would make
    ///   the movement sample count negative.
    /// - `TrajectoryError::DegenerateWindow`
    ///   Returned when the movement window resolves to zero samples, i.e.
    ///   onset and end snap to the same grid point.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `TrajectoryError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use motion_onset::trajectory::grid::SampleGrid;
    ///
    /// let grid = SampleGrid::snap(0.4, 1.2, 0.01).unwrap();
    /// assert_eq!(grid.static_samples, 40);
    /// assert_eq!(grid.movement_samples, 80);
    /// assert_eq!(grid.times.len(), 121);
    /// ```
    pub fn snap(onset: f64, end: f64, step: f64) -> TrajectoryResult<Self> {
        validate_grid_inputs(onset, end, step)?;

        let static_count = floor_steps(onset, step);
        let onset_time = static_count * step;

        let movement_count = floor_steps(end - onset_time, step);
        if movement_count < 0.0 {
            return Err(TrajectoryError::OnsetAfterEnd { onset, end });
        }
        if movement_count == 0.0 {
            return Err(TrajectoryError::DegenerateWindow { onset, end });
        }

        let static_samples = static_count as usize;
        let movement_samples = movement_count as usize;
        let end_time = (static_samples + movement_samples) as f64 * step;

        let len = static_samples + movement_samples + 1;
        let times = Array1::linspace(0.0, end_time, len);

        Ok(SampleGrid {
            static_samples,
            movement_samples,
            onset_time,
            end_time,
            step,
            times,
        })
    }

    /// Total number of samples, `N + M + 1`.
    pub fn len(&self) -> usize {
        self.static_samples + self.movement_samples + 1
    }

    /// Always false: a valid grid holds at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Duration of the movement phase, `end_time − onset_time`.
    pub fn movement_duration(&self) -> f64 {
        self.end_time - self.onset_time
    }
}
