//! Resting isothermal atmosphere over analytic orography.
//!
//! The atmosphere is at rest with pressure decreasing exponentially with
//! geopotential; for a perfect gas this is the classic isothermal profile
//! with p₀·(R_d T₀) the product of surface pressure and temperature scale.
//! The surface geopotential is a wiggly analytic mountain: schemes built
//! on terrain-following coordinates typically struggle here and generate
//! spurious motion, which is exactly what the case measures.
//!
//! Closed forms:
//!
//! - Φ_s(λ, φ) = g·h₀·cos²φ·cos(nλ·λ)·cos(nφ·φ)
//! - p_s(λ, φ) = p₀·exp(−Φ_s/(R_d·T₀))
//! - Φ(p) = R_d·T₀·ln(p₀/p), u = v = 0, q = 0
//!
//! The cos²φ taper removes the polar longitude singularity from the
//! orography.

use crate::physics::constants::{GRAVITY, P_REF, R_DRY};
use crate::types::{ColumnState, Scalar, SurfaceState};

use super::{HydrostaticCase, InvalidParameter, ParamSet, TestCase};

/// Isothermal state of rest over a wiggly mountain.
///
/// # Parameters
///
/// | name         | default | meaning                                  |
/// |--------------|---------|------------------------------------------|
/// | `t0`         | 300.0   | constant temperature (K)                 |
/// | `p0`         | 1.0e5   | pressure at zero geopotential (Pa)       |
/// | `mountain`   | 750.0   | orography amplitude h₀ (m)               |
/// | `n_lon`      | 8       | zonal wavenumber of the orography        |
/// | `n_lat`      | 4       | meridional wavenumber of the orography   |
/// | `gravity`    | 9.80616 | gravitational acceleration (m/s²)        |
/// | `r_dry`      | 287.04  | dry gas constant (J/(kg·K))              |
#[derive(Clone, Debug)]
pub struct Isothermal<F: Scalar> {
    params: ParamSet,
    t0: F,
    p0: F,
    mountain: F,
    n_lon: F,
    n_lat: F,
    gravity: F,
    r_dry: F,
}

const ISO_NAME: &str = "isothermal";

const ISO_DEFAULTS: &[(&str, f64)] = &[
    ("t0", 300.0),
    ("p0", P_REF),
    ("mountain", 750.0),
    ("n_lon", 8.0),
    ("n_lat", 4.0),
    ("gravity", GRAVITY),
    ("r_dry", R_DRY),
];

impl<F: Scalar> Isothermal<F> {
    /// Construct with the default parameters.
    pub fn new() -> Self {
        Self::with_overrides(&[]).expect("defaults are valid")
    }

    /// Construct with named parameter overrides.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] for unknown names, non-finite values, or
    /// non-positive `t0` / `p0` / `gravity` / `r_dry`. A negative
    /// `mountain` amplitude is allowed (valleys are as wiggly as peaks).
    pub fn with_overrides(overrides: &[(&str, f64)]) -> Result<Self, InvalidParameter> {
        let params = ParamSet::build(ISO_NAME, ISO_DEFAULTS, overrides)?;
        let t0 = params.require_positive("t0", "temperature must be positive")?;
        let p0 = params.require_positive("p0", "reference pressure must be positive")?;
        let gravity = params.require_positive("gravity", "gravity must be positive")?;
        let r_dry = params.require_positive("r_dry", "gas constant must be positive")?;
        Ok(Self {
            t0: F::from_config(t0),
            p0: F::from_config(p0),
            mountain: F::from_config(params.get("mountain")),
            n_lon: F::from_config(params.get("n_lon")),
            n_lat: F::from_config(params.get("n_lat")),
            gravity: F::from_config(gravity),
            r_dry: F::from_config(r_dry),
            params,
        })
    }

    fn surface_geopotential(&self, lon: F, lat: F) -> F {
        let coslat = lat.cos();
        self.gravity
            * self.mountain
            * coslat
            * coslat
            * (self.n_lon * lon).cos()
            * (self.n_lat * lat).cos()
    }
}

impl<F: Scalar> Default for Isothermal<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> TestCase<F> for Isothermal<F> {
    fn name(&self) -> &'static str {
        ISO_NAME
    }

    fn describe(&self) -> String {
        format!(
            "Isothermal state of rest over a wiggly mountain\n{}",
            self.params.describe_lines()
        )
    }

    fn params(&self) -> &[(&'static str, f64)] {
        self.params.entries()
    }
}

impl<F: Scalar> HydrostaticCase<F> for Isothermal<F> {
    fn initial_surface(&self, lon: F, lat: F) -> SurfaceState<F> {
        let phis = self.surface_geopotential(lon, lat);
        let ps = self.p0 * (-phis / (self.r_dry * self.t0)).exp();
        SurfaceState {
            surface_pressure: ps,
            surface_geopotential: phis,
        }
    }

    fn initial_column(&self, _lon: F, _lat: F, pressure: F) -> ColumnState<F> {
        ColumnState {
            geopotential: self.r_dry * self.t0 * (self.p0 / pressure).ln(),
            ulon: F::zero(),
            ulat: F::zero(),
            humidity: F::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest_everywhere() {
        let case = Isothermal::<f64>::new();
        for (lon, lat, p) in [(0.0, 0.0, 1.0e5), (2.0, 0.7, 5.0e4), (4.0, -1.1, 8.5e4)] {
            let column = case.initial_column(lon, lat, p);
            assert_eq!(column.ulon, 0.0);
            assert_eq!(column.ulat, 0.0);
            assert_eq!(column.humidity, 0.0);
        }
    }

    #[test]
    fn test_column_consistent_with_surface() {
        // Evaluating the column at the local surface pressure must land
        // back on the surface geopotential.
        let case = Isothermal::<f64>::new();
        for (lon, lat) in [(0.0, 0.0), (0.4, 0.9), (3.3, -0.5)] {
            let surface = case.initial_surface(lon, lat);
            let column = case.initial_column(lon, lat, surface.surface_pressure);
            assert!((column.geopotential - surface.surface_geopotential).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pressure_lower_over_peaks() {
        let case = Isothermal::<f64>::new();
        // (0, 0) is a crest of the default orography.
        let peak = case.initial_surface(0.0, 0.0);
        assert!(peak.surface_geopotential > 0.0);
        assert!(peak.surface_pressure < 1.0e5);

        // Half a zonal wavelength away the orography is a trough.
        let trough = case.initial_surface(std::f64::consts::PI / 8.0, 0.0);
        assert!(trough.surface_geopotential < 0.0);
        assert!(trough.surface_pressure > 1.0e5);
    }

    #[test]
    fn test_orography_vanishes_at_poles() {
        let case = Isothermal::<f64>::new();
        let half_pi = std::f64::consts::FRAC_PI_2;
        for lon in [0.0, 1.3, 5.9] {
            let s = case.initial_surface(lon, half_pi);
            assert!(s.surface_geopotential.abs() < 1e-3);
            assert!((s.surface_pressure - 1.0e5).abs() < 1.0);
        }
    }

    #[test]
    fn test_isothermal_scale_height() {
        // Φ(p0/e) = Rd·T0 exactly, the isothermal scale relation.
        let case = Isothermal::<f64>::new();
        let p = 1.0e5 / std::f64::consts::E;
        let column = case.initial_column(0.0, 0.0, p);
        assert!((column.geopotential - 287.04 * 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_flat_override_gives_uniform_surface() {
        let case = Isothermal::<f64>::with_overrides(&[("mountain", 0.0)]).unwrap();
        let a = case.initial_surface(0.0, 0.0);
        let b = case.initial_surface(2.0, 1.0);
        assert_eq!(a.surface_pressure, 1.0e5);
        assert_eq!(a.surface_geopotential, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            Isothermal::<f64>::with_overrides(&[("t0", 0.0)]),
            Err(InvalidParameter::OutOfRange { .. })
        ));
        assert!(matches!(
            Isothermal::<f64>::with_overrides(&[("wiggles", 3.0)]),
            Err(InvalidParameter::UnknownName { .. })
        ));
    }
}
