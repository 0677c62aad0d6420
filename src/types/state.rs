//! Initial-state value structs returned by test case evaluation.
//!
//! These are plain field structs rather than tuples so downstream code
//! names the physical quantity it reads. All fields are in SI units:
//! geopotential and thickness in m²/s², pressure in Pa, velocity in m/s,
//! specific humidity in kg/kg.

use super::Scalar;

/// Shallow-water initial state at one point on the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShallowWaterState<F: Scalar> {
    /// Geopotential thickness gh (m²/s²).
    pub thickness: F,
    /// Zonal (eastward) velocity (m/s).
    pub ulon: F,
    /// Meridional (northward) velocity (m/s).
    pub ulat: F,
}

/// Hydrostatic surface state at one point on the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState<F: Scalar> {
    /// Surface pressure (Pa).
    pub surface_pressure: F,
    /// Surface geopotential (m²/s²).
    pub surface_geopotential: F,
}

/// Hydrostatic full-column state at one point and pressure level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnState<F: Scalar> {
    /// Geopotential at the requested pressure level (m²/s²).
    pub geopotential: F,
    /// Zonal (eastward) velocity (m/s).
    pub ulon: F,
    /// Meridional (northward) velocity (m/s).
    pub ulat: F,
    /// Specific humidity (kg/kg). Identically zero for dry cases.
    pub humidity: F,
}

impl<F: Scalar> ShallowWaterState<F> {
    /// All three fields finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.thickness.is_finite() && self.ulon.is_finite() && self.ulat.is_finite()
    }
}

impl<F: Scalar> ColumnState<F> {
    /// All four fields finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.geopotential.is_finite()
            && self.ulon.is_finite()
            && self.ulat.is_finite()
            && self.humidity.is_finite()
    }
}

impl<F: Scalar> SurfaceState<F> {
    /// Both fields finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.surface_pressure.is_finite() && self.surface_geopotential.is_finite()
    }
}
