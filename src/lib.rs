//! # atmos-testcases
//!
//! Analytic initial-condition test cases for benchmarking atmospheric
//! models, in two families:
//!
//! - Shallow-water cases (single-layer fluid on the sphere): Williamson
//!   et al. suite cases 2 and 6.
//! - Hydrostatic primitive-equation cases (multi-level column):
//!   Jablonowski & Williamson 2006 (dry and moist), DCMIP 2012 test 4.2,
//!   and a resting isothermal atmosphere over wiggly orography.
//!
//! Every case is an immutable value built from documented physical
//! defaults plus validated named overrides, generic over evaluation
//! precision (`f32`/`f64`). Evaluation is pure and deterministic: a case
//! maps geographic coordinates (and, for hydrostatic cases, pressure) to
//! physical initial-state fields with no hidden state.
//!
//! ```
//! use atmos_testcases::{ShallowWaterCase, TestCase, Williamson6};
//!
//! // Rossby-Haurwitz wave, defaults, double precision.
//! let case = Williamson6::<f64>::new();
//! let state = case.initial(0.0, 0.0);
//! assert!((state.thickness - 1.03395e5).abs() < 20.0);
//!
//! // Same case with a stronger wave amplitude.
//! let strong = Williamson6::<f64>::with_overrides(&[("kappa", 1.5e-5)]).unwrap();
//! assert!(strong.describe().contains("0.000015"));
//! ```

pub mod cases;
pub mod physics;
pub mod registry;
pub mod types;

pub use cases::{
    Dcmip42, HydrostaticCase, InvalidParameter, Isothermal, Jablonowski06, Moisture, ParamSet,
    ShallowWaterCase, TestCase, Williamson2, Williamson6,
};
pub use registry::{hydrostatic_case, shallow_water_case, HYDROSTATIC_NAMES, SHALLOW_WATER_NAMES};
pub use types::{ColumnState, Scalar, ShallowWaterState, SurfaceState};
