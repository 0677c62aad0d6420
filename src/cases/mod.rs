//! Analytic test cases and the traits that classify them.
//!
//! A test case is an immutable, fully parameterized value constructed
//! from documented defaults plus optional overrides. Evaluation is a
//! pure function of the coordinates: no hidden state, no I/O, identical
//! inputs give bit-identical outputs. Cases are therefore freely
//! shareable across threads.
//!
//! The family split follows the model class being initialized:
//!
//! - [`ShallowWaterCase`]: single-layer fluid on the sphere; `initial`
//!   returns geopotential thickness and horizontal velocity.
//! - [`HydrostaticCase`]: multi-level hydrostatic column; `initial_surface`
//!   returns surface pressure and geopotential, `initial_column` returns
//!   geopotential, velocity and composition at a pressure level.
//!
//! The split is a capability classification, not behavioral inheritance:
//! each concrete case implements [`TestCase`] plus exactly one family
//! trait.

mod dcmip;
mod error;
mod isothermal;
mod jablonowski;
mod params;
mod williamson;

pub use dcmip::Dcmip42;
pub use error::InvalidParameter;
pub use isothermal::Isothermal;
pub use jablonowski::{Jablonowski06, Moisture};
pub use params::ParamSet;
pub use williamson::{Williamson2, Williamson6};

use crate::types::{ColumnState, Scalar, ShallowWaterState, SurfaceState};

/// Behavior common to every test case, independent of family.
///
/// Kept separate from the family traits so registry code can report on
/// a case without knowing which family it evaluates in.
pub trait TestCase<F: Scalar>: Send + Sync {
    /// Registry name of the case, e.g. `"williamson6"`.
    fn name(&self) -> &'static str;

    /// Plain-text description of the case and its current parameter
    /// values, possibly multi-line.
    fn describe(&self) -> String;

    /// Ordered (name, value) view of the case parameters.
    fn params(&self) -> &[(&'static str, f64)];
}

/// Shallow-water family: initial condition for a single-layer model.
pub trait ShallowWaterCase<F: Scalar>: TestCase<F> {
    /// Evaluate the initial state at (longitude, latitude), both in
    /// radians. Total over all finite inputs.
    fn initial(&self, lon: F, lat: F) -> ShallowWaterState<F>;
}

/// Hydrostatic family: initial condition for a primitive-equation column.
pub trait HydrostaticCase<F: Scalar>: TestCase<F> {
    /// Evaluate the surface state at (longitude, latitude), both in
    /// radians.
    fn initial_surface(&self, lon: F, lat: F) -> SurfaceState<F>;

    /// Evaluate the column state at (longitude, latitude, pressure),
    /// angles in radians, pressure in Pa. Pressures outside the physical
    /// column extrapolate the analytic formulas rather than erroring.
    fn initial_column(&self, lon: F, lat: F, pressure: F) -> ColumnState<F>;
}
