//! trajectory — reference reaching trajectories: profile, grid, synthesis.
//!
//! Purpose
//! -------
//! Provide the ground-truth side of the motion-onset evaluation pipeline: a
//! quintic minimum-jerk progress profile, a snapped sampling grid, and the
//! synthesizer that composes them into a two-phase (static hold + smooth
//! movement) reference trajectory with exactly known analytic properties.
//!
//! Key behaviors
//! -------------
//! - Evaluate the minimum-jerk progress polynomial via
//!   [`minimum_jerk_progress`](profile::minimum_jerk_progress).
//! - Snap requested onset/end times down to the sampling grid and build the
//!   shared time samples via [`SampleGrid::snap`](grid::SampleGrid::snap).
//! - Synthesize aligned per-axis position sequences via
//!   [`ReachTrajectory::synthesize`](synthesis::ReachTrajectory::synthesize),
//!   returning the snapped onset as ground truth.
//! - Centralize input guards in [`validation`] and error types in [`errors`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Sequences are `ndarray::Array1<f64>`, pre-sized and filled by index;
//!   position, time, and (downstream) velocity sequences are aligned sample
//!   by sample.
//! - The static phase holds the start position exactly; the movement phase
//!   starts at the start position exactly and ends at the end position up to
//!   floating rounding.
//! - All entities are transient values constructed fresh per call; there is
//!   no shared mutable state.
//! - This subtree performs no I/O and no logging; failures are surfaced as
//!   [`TrajectoryResult`] values and panics indicate programming errors.
//!
//! Conventions
//! -----------
//! - Time and position units are abstract; callers keep them consistent.
//! - "Snapping" always truncates toward the grid (nearest lower multiple of
//!   the step), with a one-ulp tolerance so on-grid values stay on-grid.
//!
//! Downstream usage
//! ----------------
//! - Typical flow:
//!
//!   ```rust
//!   use motion_onset::trajectory::{Point2, ReachTrajectory};
//!
//!   let traj = ReachTrajectory::synthesize(
//!       Point2::new(-0.1, 0.1),
//!       Point2::new(-0.9, 1.1),
//!       0.4,
//!       1.2,
//!       0.01,
//!   )?;
//!   assert_eq!(traj.t.len(), traj.x.len());
//!   # Ok::<(), motion_onset::trajectory::TrajectoryError>(())
//!   ```
//!
//! - The harness subtree consumes [`ReachTrajectory`] as ground truth; the
//!   kinematics subtree differentiates its sequences.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`profile`] pin polynomial boundary values and endpoint
//!   flatness; [`grid`] covers snapping arithmetic and error branches;
//!   [`synthesis`] covers phase structure, continuity, and idempotence;
//!   [`validation`] covers every guard branch.

pub mod errors;
pub mod grid;
pub mod profile;
pub mod synthesis;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{TrajectoryError, TrajectoryResult};
pub use self::grid::SampleGrid;
pub use self::synthesis::{Point2, ReachTrajectory};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{TrajectoryError, TrajectoryResult};
    pub use super::grid::SampleGrid;
    pub use super::synthesis::{Point2, ReachTrajectory};
}
