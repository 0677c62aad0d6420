//! Planetary and thermodynamic constants shared by the test cases.
//!
//! Values follow the conventions of the published test case papers
//! (Williamson et al. 1992; Jablonowski & Williamson 2006; DCMIP 2012)
//! rather than more recent standards, so that evaluated fields match the
//! reference tables in those papers.
//!
//! Every case exposes these as overridable parameters, so a model with a
//! different planet configuration can still reproduce its own reference
//! solutions.

/// Mean Earth radius a (m).
pub const EARTH_RADIUS: f64 = 6.371229e6;

/// Earth angular velocity Ω (rad/s).
pub const EARTH_OMEGA: f64 = 7.29212e-5;

/// Gravitational acceleration g (m/s²).
pub const GRAVITY: f64 = 9.80616;

/// Gas constant for dry air R_d (J/(kg·K)).
pub const R_DRY: f64 = 287.04;

/// Reference surface pressure p₀ (Pa).
pub const P_REF: f64 = 1.0e5;
