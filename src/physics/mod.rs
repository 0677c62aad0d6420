//! Physical constants used across the test case suite.

pub mod constants;

pub use constants::{EARTH_OMEGA, EARTH_RADIUS, GRAVITY, P_REF, R_DRY};
