//! trajectory::validation — shared input guards for trajectory construction.
//!
//! Purpose
//! -------
//! Centralize basic input validation for grid snapping and trajectory
//! synthesis. This avoids duplicating checks on step positivity, time
//! ordering, and coordinate finiteness across the subtree.
//!
//! Key behaviors
//! -------------
//! - Enforce scalar preconditions on grid parameters before any snapping
//!   arithmetic is performed via [`validate_grid_inputs`].
//! - Enforce coordinate finiteness on top of the grid checks via
//!   [`validate_synthesis_inputs`].
//! - Map invalid inputs into structured [`TrajectoryError`] values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - The sampling step must be finite and strictly positive.
//! - The onset time must be finite and non-negative.
//! - The end time must be finite; ordering relative to the snapped onset is
//!   checked later by grid construction, where the snapped value exists.
//! - All start/end coordinates must be finite (`!NaN`, not ±∞).
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no allocation
//!   beyond what error construction requires.
//! - A successful return guarantees that downstream `floor(t / step)`
//!   arithmetic and per-axis interpolation operate on clean scalars.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch of both guards and a simple
//!   success path.

use crate::trajectory::errors::{TrajectoryError, TrajectoryResult};
use crate::trajectory::synthesis::Point2;

/// Validate the scalar parameters of a snapped sampling grid.
///
/// Parameters
/// ----------
/// - `onset`: `f64`
///   Requested onset time. Must be finite and non-negative.
/// - `end`: `f64`
///   Requested end time. Must be finite. Ordering against the snapped onset
///   is enforced during grid construction, not here.
/// - `step`: `f64`
///   Sampling interval. Must be finite and strictly positive.
///
/// Returns
/// -------
/// `TrajectoryResult<()>`
///   - `Ok(())` if all scalar constraints are satisfied.
///   - `Err(TrajectoryError)` if any constraint is violated.
///
/// Errors
/// ------
/// - `TrajectoryError::InvalidStep`
///   Returned when `step` is NaN, ±∞, zero, or negative.
/// - `TrajectoryError::InvalidOnset`
///   Returned when `onset` is NaN, ±∞, or negative.
/// - `TrajectoryError::InvalidEndTime`
///   Returned when `end` is NaN or ±∞.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `TrajectoryError`.
pub fn validate_grid_inputs(onset: f64, end: f64, step: f64) -> TrajectoryResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(TrajectoryError::InvalidStep { value: step });
    }

    if !onset.is_finite() || onset < 0.0 {
        return Err(TrajectoryError::InvalidOnset { value: onset });
    }

    if !end.is_finite() {
        return Err(TrajectoryError::InvalidEndTime { value: end });
    }

    Ok(())
}

/// Validate the full input set of a trajectory synthesis call.
///
/// Parameters
/// ----------
/// - `start`: `&Point2`
///   Initial hand position. Both coordinates must be finite.
/// - `end`: `&Point2`
///   Final hand position. Both coordinates must be finite. May equal
///   `start`, yielding a degenerate flat trajectory.
/// - `onset`: `f64`
///   Requested onset time, validated as in [`validate_grid_inputs`].
/// - `end_time`: `f64`
///   Requested end time, validated as in [`validate_grid_inputs`].
/// - `step`: `f64`
///   Sampling interval, validated as in [`validate_grid_inputs`].
///
/// Returns
/// -------
/// `TrajectoryResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(TrajectoryError)` naming the first violated constraint.
///
/// Errors
/// ------
/// - `TrajectoryError::NonFiniteCoordinate`
///   Returned for the first non-finite coordinate, with `name` set to one of
///   `"start.x"`, `"start.y"`, `"end.x"`, `"end.y"`.
/// - Any error of [`validate_grid_inputs`].
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_synthesis_inputs(
    start: &Point2, end: &Point2, onset: f64, end_time: f64, step: f64,
) -> TrajectoryResult<()> {
    let coordinates = [
        ("start.x", start.x),
        ("start.y", start.y),
        ("end.x", end.x),
        ("end.y", end.y),
    ];
    for (name, value) in coordinates {
        if !value.is_finite() {
            return Err(TrajectoryError::NonFiniteCoordinate { name, value });
        }
    }

    validate_grid_inputs(onset, end_time, step)
}
