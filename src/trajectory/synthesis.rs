//! trajectory::synthesis — reference reaching trajectories with a static phase.
//!
//! Purpose
//! -------
//! Compose the minimum-jerk profile over a snapped sampling grid to build a
//! full two-phase reference trajectory: a static hold at the start position
//! followed by a smooth quintic movement to the end position. The snapped
//! onset time is carried on the result as ground truth for downstream
//! onset-detection comparisons.
//!
//! Key behaviors
//! -------------
//! - Validate inputs, snap the requested times via [`SampleGrid::snap`], and
//!   fill pre-sized per-axis position sequences by index, via
//!   [`ReachTrajectory::synthesize`].
//! - Hold the start position exactly over the first N samples, then apply
//!   `position(τ) = start + (start − end) · f(τ)` per axis over the
//!   remaining M + 1 samples.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x`, `y`, and `t` all have length `N + M + 1` and are aligned sample
//!   by sample.
//! - The sample at `onset_index` equals the start position exactly
//!   (`f(0) = 0`), so the static/movement boundary is continuous.
//! - The final sample equals the end position up to floating rounding.
//! - All state is constructed fresh per call; nothing is shared or mutated
//!   afterwards.
//!
//! Conventions
//! -----------
//! - The grid's first `M + 1` time samples are exactly the elapsed times
//!   since onset (`t[N + j] − onset = j · step = t[j]`), so normalized
//!   movement time is computed directly from the leading grid entries.
//!
//! Testing notes
//! -------------
//! - Unit tests cover static-phase constancy, boundary continuity, terminal
//!   arrival, the flat degenerate trajectory, re-synthesis idempotence, and
//!   the reference scenario end to end.

use ndarray::Array1;

use crate::trajectory::errors::TrajectoryResult;
use crate::trajectory::grid::SampleGrid;
use crate::trajectory::profile::minimum_jerk_progress;
use crate::trajectory::validation::validate_synthesis_inputs;

/// A planar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a planar position from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// ReachTrajectory — synthesized two-phase reference trajectory.
///
/// Purpose
/// -------
/// Carry the aligned position/time sequences of a synthesized reach together
/// with the snapped timing metadata needed to use the trajectory as ground
/// truth: the adjusted onset time, the adjusted end time, and the index of
/// the static/movement boundary sample.
///
/// Fields
/// ------
/// - `x`, `y`: `Array1<f64>`
///   Per-axis position sequences, each of length `N + M + 1` and aligned
///   with `t`.
/// - `t`: `Array1<f64>`
///   Evenly spaced time samples from 0 to `end_time` inclusive.
/// - `onset_time`: `f64`
///   Requested onset snapped down to the grid; the ground-truth movement
///   onset.
/// - `end_time`: `f64`
///   Requested end time snapped to the grid.
/// - `onset_index`: `usize`
///   Index N of the first movement-phase sample; `x[onset_index]` equals
///   the start position exactly.
/// - `step`: `f64`
///   Sampling interval of the grid.
///
/// Invariants
/// ----------
/// - `x.len() == y.len() == t.len()`.
/// - `t[onset_index]` equals `onset_time` up to grid rounding.
///
/// Notes
/// -----
/// - Construction via [`ReachTrajectory::synthesize`] is the only mutation
///   point; afterwards this type is a plain data carrier.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachTrajectory {
    /// X-axis position sequence.
    pub x: Array1<f64>,
    /// Y-axis position sequence.
    pub y: Array1<f64>,
    /// Time samples aligned with `x` and `y`.
    pub t: Array1<f64>,
    /// Snapped onset time (ground truth).
    pub onset_time: f64,
    /// Snapped end time.
    pub end_time: f64,
    /// Index of the first movement-phase sample.
    pub onset_index: usize,
    /// Sampling interval.
    pub step: f64,
}

impl ReachTrajectory {
    /// Synthesize a static-phase + minimum-jerk reference trajectory.
    ///
    /// Parameters
    /// ----------
    /// - `start`: `Point2`
    ///   Initial hand position, held over the static phase. Coordinates
    ///   must be finite.
    /// - `end`: `Point2`
    ///   Final hand position. Coordinates must be finite; may equal
    ///   `start`, yielding a degenerate flat trajectory.
    /// - `onset`: `f64`
    ///   Requested movement onset time, snapped down to the grid. Must be
    ///   finite and non-negative.
    /// - `end_time`: `f64`
    ///   Requested total duration, snapped so the movement spans a whole
    ///   number of steps. Must be finite and not precede the snapped onset.
    /// - `step`: `f64`
    ///   Sampling interval. Must be finite and strictly positive.
    ///
    /// Returns
    /// -------
    /// `TrajectoryResult<ReachTrajectory>`
    ///   - `Ok(trajectory)` with aligned `x`/`y`/`t` sequences of length
    ///     `N + M + 1`, the snapped onset/end times, and the boundary index.
    ///   - `Err(TrajectoryError)` when validation or snapping fails.
    ///
    /// Errors
    /// ------
    /// - `TrajectoryError::NonFiniteCoordinate`
    ///   A start/end coordinate is NaN or ±∞.
    /// - `TrajectoryError::InvalidStep`, `InvalidOnset`, `InvalidEndTime`,
    ///   `OnsetAfterEnd`, `DegenerateWindow`
    ///   Propagated from input validation and [`SampleGrid::snap`].
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via
    ///   `TrajectoryError`.
    ///
    /// Notes
    /// -----
    /// - Deterministic: equal inputs produce bit-identical sequences.
    /// - The sequences are allocated at full length up front and filled by
    ///   index; no incremental growth.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use motion_onset::trajectory::synthesis::{Point2, ReachTrajectory};
    ///
    /// let traj = ReachTrajectory::synthesize(
    ///     Point2::new(-0.1, 0.1),
    ///     Point2::new(-0.9, 1.1),
    ///     0.4,
    ///     1.2,
    ///     0.01,
    /// )
    /// .unwrap();
    /// assert_eq!(traj.t.len(), 121);
    /// assert_eq!(traj.onset_index, 40);
    /// assert!((traj.onset_time - 0.4).abs() < 1e-9);
    /// ```
    pub fn synthesize(
        start: Point2, end: Point2, onset: f64, end_time: f64, step: f64,
    ) -> TrajectoryResult<Self> {
        validate_synthesis_inputs(&start, &end, onset, end_time, step)?;
        let grid = SampleGrid::snap(onset, end_time, step)?;

        let n = grid.static_samples;
        let m = grid.movement_samples;
        let len = grid.len();
        let duration = grid.movement_duration();

        let mut x = Array1::from_elem(len, start.x);
        let mut y = Array1::from_elem(len, start.y);

        // The first m + 1 grid entries are the elapsed-since-onset times.
        for j in 0..=m {
            let tau = grid.times[j] / duration;
            let progress = minimum_jerk_progress(tau);
            x[n + j] = start.x + (start.x - end.x) * progress;
            y[n + j] = start.y + (start.y - end.y) * progress;
        }

        Ok(ReachTrajectory {
            x,
            y,
            t: grid.times,
            onset_time: grid.onset_time,
            end_time: grid.end_time,
            onset_index: n,
            step: grid.step,
        })
    }

    /// Total number of samples, `N + M + 1`.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Always false: a synthesized trajectory holds at least two samples.
    pub fn is_empty(&self) -> bool {
        false
    }
}
