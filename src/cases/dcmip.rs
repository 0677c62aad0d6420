//! DCMIP 2012 test cases.
//!
//! Only test 4.2 (baroclinic wave with specific humidity) is provided:
//! it is the moist Jablonowski & Williamson (2006) case under its DCMIP
//! name, with identical parameters and closed forms. The wrapper exists
//! so registries and reports can refer to the case by the name models
//! publish results under.

use crate::types::{ColumnState, Scalar, SurfaceState};

use super::{HydrostaticCase, InvalidParameter, Jablonowski06, Moisture, TestCase};

/// DCMIP 2012 test 4.2: moist baroclinic wave.
///
/// # Example
///
/// ```
/// use atmos_testcases::{Dcmip42, HydrostaticCase};
///
/// let case = Dcmip42::<f64>::new();
/// let column = case.initial_column(0.0, 0.0, 1.0e5);
/// // Moist form: peak specific humidity at the equator surface.
/// assert!((column.humidity - 0.021).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Dcmip42<F: Scalar> {
    inner: Jablonowski06<F>,
}

impl<F: Scalar> Dcmip42<F> {
    /// Construct with the published default parameters.
    pub fn new() -> Self {
        Self {
            inner: Jablonowski06::moist(),
        }
    }

    /// Construct with named parameter overrides.
    ///
    /// The parameter table is that of [`Jablonowski06`].
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] under the same conditions as
    /// [`Jablonowski06::with_overrides`].
    pub fn with_overrides(overrides: &[(&str, f64)]) -> Result<Self, InvalidParameter> {
        Ok(Self {
            inner: Jablonowski06::with_overrides(Moisture::Moist, overrides)?,
        })
    }
}

impl<F: Scalar> Default for Dcmip42<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> TestCase<F> for Dcmip42<F> {
    fn name(&self) -> &'static str {
        "dcmip42"
    }

    fn describe(&self) -> String {
        format!(
            "DCMIP 2012 test 4.2: moist baroclinic wave\n(moist Jablonowski & Williamson 2006)\n{}",
            self.inner
                .describe()
                .lines()
                .skip(1)
                .collect::<Vec<_>>()
                .join("\n")
        )
    }

    fn params(&self) -> &[(&'static str, f64)] {
        self.inner.params()
    }
}

impl<F: Scalar> HydrostaticCase<F> for Dcmip42<F> {
    fn initial_surface(&self, lon: F, lat: F) -> SurfaceState<F> {
        self.inner.initial_surface(lon, lat)
    }

    fn initial_column(&self, lon: F, lat: F, pressure: F) -> ColumnState<F> {
        self.inner.initial_column(lon, lat, pressure)
    }
}
