//! trajectory::profile — quintic minimum-jerk progress polynomial.
//!
//! Purpose
//! -------
//! Evaluate the dimensionless progress of a minimum-jerk reaching movement as
//! a function of normalized movement time. The same polynomial is applied
//! identically to each spatial axis by the synthesizer, so this module stays
//! scalar and allocation-free.
//!
//! Key behaviors
//! -------------
//! - Map a normalized time τ to the quintic progress value
//!   15τ⁴ − 6τ⁵ − 10τ³ via [`minimum_jerk_progress`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The polynomial satisfies f(0) = 0 and f(1) = −1; combined with the
//!   synthesizer's `(initial − final)` factor this moves a coordinate from
//!   its initial to its final value over τ ∈ [0, 1].
//! - The first and second derivatives of the induced position profile vanish
//!   at both endpoints (Flash–Hogan minimum-jerk boundary conditions).
//! - τ is nominally in [0, 1]; values outside that range are extrapolated by
//!   the same polynomial and are the caller's responsibility.
//!
//! Conventions
//! -----------
//! - No range enforcement and no error path: this is a total, pure function
//!   over `f64`.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the boundary values, the half-way point, and the
//!   endpoint flatness of the induced profile.

/// Evaluate the minimum-jerk progress polynomial at normalized time `tau`.
///
/// Parameters
/// ----------
/// - `tau`: `f64`
///   Normalized elapsed time within the movement phase, nominally in
///   [0, 1]. Out-of-range values extrapolate along the same quintic.
///
/// Returns
/// -------
/// `f64`
///   The progress value `15·tau⁴ − 6·tau⁵ − 10·tau³`. Runs from 0 at
///   `tau = 0` to −1 at `tau = 1`; interpolating with an
///   `(initial − final)` factor therefore moves a coordinate from
///   `initial` to `final`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Pure, deterministic, O(1), no side effects.
///
/// Examples
/// --------
/// ```rust
/// use motion_onset::trajectory::profile::minimum_jerk_progress;
///
/// assert_eq!(minimum_jerk_progress(0.0), 0.0);
/// assert!((minimum_jerk_progress(1.0) + 1.0).abs() < 1e-12);
/// ```
pub fn minimum_jerk_progress(tau: f64) -> f64 {
    15.0 * tau.powi(4) - 6.0 * tau.powi(5) - 10.0 * tau.powi(3)
}
