//! Core value types: the precision-selection scalar trait and the
//! field structs returned by test case evaluation.

mod scalar;
mod state;

pub use scalar::Scalar;
pub use state::{ColumnState, ShallowWaterState, SurfaceState};
