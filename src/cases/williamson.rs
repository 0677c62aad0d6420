//! Shallow-water test cases from the Williamson et al. suite.
//!
//! Implements the two cases of the standard suite that exercise a global
//! shallow-water solver without forcing:
//!
//! - Case 2: steady zonal geostrophic flow. The exact solution is the
//!   initial condition itself, so any drift is numerical error.
//! - Case 6: Rossby–Haurwitz wave of zonal wavenumber 4, the classic
//!   unsteady benchmark. The closed-form height field uses the A, B, C
//!   latitude polynomials of the paper.
//!
//! # References
//!
//! - Williamson, Drake, Hack, Jakob, Swarztrauber (1992): A standard test
//!   set for numerical approximations to the shallow water equations in
//!   spherical geometry. J. Comput. Phys. 102.
//!
//! # Units
//!
//! - Longitude/latitude: radians
//! - Geopotential thickness gh: m²/s²
//! - Velocity: m/s

use crate::physics::constants::{EARTH_OMEGA, EARTH_RADIUS, GRAVITY};
use crate::types::{Scalar, ShallowWaterState};

use super::{InvalidParameter, ParamSet, ShallowWaterCase, TestCase};

// =============================================================================
// Case 2: steady zonal geostrophic flow
// =============================================================================

/// Solid-body zonal flow in geostrophic balance (suite case 2).
///
/// # Parameters
///
/// | name       | default     | meaning                                |
/// |------------|-------------|----------------------------------------|
/// | `u0`       | 38.61       | peak zonal velocity (m/s), 2πa/12 days |
/// | `gh0`      | 2.94e4      | mean geopotential thickness (m²/s²)    |
/// | `radius`   | 6.371229e6  | planet radius a (m)                    |
/// | `rotation` | 7.29212e-5  | planet angular velocity Ω (rad/s)      |
///
/// # Example
///
/// ```
/// use atmos_testcases::{ShallowWaterCase, Williamson2};
///
/// let case = Williamson2::<f64>::new();
/// let state = case.initial(0.0, 0.0);
/// // At the equator the full mean thickness is present.
/// assert!((state.thickness - 2.94e4).abs() < 1e-9);
/// assert!((state.ulon - 38.61).abs() < 1e-9);
/// assert_eq!(state.ulat, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Williamson2<F: Scalar> {
    params: ParamSet,
    u0: F,
    gh0: F,
    radius: F,
    rotation: F,
}

const W2_NAME: &str = "williamson2";

const W2_DEFAULTS: &[(&str, f64)] = &[
    ("u0", 38.61),
    ("gh0", 2.94e4),
    ("radius", EARTH_RADIUS),
    ("rotation", EARTH_OMEGA),
];

impl<F: Scalar> Williamson2<F> {
    /// Construct with the published default parameters.
    pub fn new() -> Self {
        Self::with_overrides(&[]).expect("defaults are valid")
    }

    /// Construct with named parameter overrides.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] for unknown names, non-finite values, or
    /// non-positive `gh0` / `radius`.
    pub fn with_overrides(overrides: &[(&str, f64)]) -> Result<Self, InvalidParameter> {
        let params = ParamSet::build(W2_NAME, W2_DEFAULTS, overrides)?;
        let gh0 = params.require_positive("gh0", "mean thickness must be positive")?;
        let radius = params.require_positive("radius", "planet radius must be positive")?;
        Ok(Self {
            u0: F::from_config(params.get("u0")),
            gh0: F::from_config(gh0),
            radius: F::from_config(radius),
            rotation: F::from_config(params.get("rotation")),
            params,
        })
    }
}

impl<F: Scalar> Default for Williamson2<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> TestCase<F> for Williamson2<F> {
    fn name(&self) -> &'static str {
        W2_NAME
    }

    fn describe(&self) -> String {
        format!(
            "Williamson et al. (1992) test case 2: steady zonal geostrophic flow\n{}",
            self.params.describe_lines()
        )
    }

    fn params(&self) -> &[(&'static str, f64)] {
        self.params.entries()
    }
}

impl<F: Scalar> ShallowWaterCase<F> for Williamson2<F> {
    fn initial(&self, _lon: F, lat: F) -> ShallowWaterState<F> {
        let (sinlat, coslat) = lat.sin_cos();
        let half = F::from_config(0.5);

        let ulon = self.u0 * coslat;
        // gh = gh0 - (a Ω u0 + u0²/2) sin²φ, the geostrophically balanced
        // height for solid-body rotation.
        let thickness = self.gh0
            - (self.radius * self.rotation * self.u0 + half * self.u0 * self.u0)
                * sinlat
                * sinlat;

        ShallowWaterState {
            thickness,
            ulon,
            ulat: F::zero(),
        }
    }
}

// =============================================================================
// Case 6: Rossby-Haurwitz wave
// =============================================================================

/// Rossby–Haurwitz wave of zonal wavenumber R (suite case 6).
///
/// The initial vorticity pattern translates eastward without change of
/// shape in the nondivergent barotropic limit, which makes phase error
/// easy to read off.
///
/// # Parameters
///
/// | name         | default     | meaning                               |
/// |--------------|-------------|---------------------------------------|
/// | `omega`      | 7.848e-6    | background angular velocity ω (1/s)   |
/// | `kappa`      | 7.848e-6    | wave amplitude K (1/s)                |
/// | `wavenumber` | 4           | zonal wavenumber R                    |
/// | `gh0`        | g·8000      | mean geopotential thickness (m²/s²)   |
/// | `radius`     | 6.371229e6  | planet radius a (m)                   |
/// | `rotation`   | 7.29212e-5  | planet angular velocity Ω (rad/s)     |
#[derive(Clone, Debug)]
pub struct Williamson6<F: Scalar> {
    params: ParamSet,
    omega: F,
    kappa: F,
    wavenumber: F,
    gh0: F,
    radius: F,
    rotation: F,
}

const W6_NAME: &str = "williamson6";

const W6_DEFAULTS: &[(&str, f64)] = &[
    ("omega", 7.848e-6),
    ("kappa", 7.848e-6),
    ("wavenumber", 4.0),
    ("gh0", GRAVITY * 8000.0),
    ("radius", EARTH_RADIUS),
    ("rotation", EARTH_OMEGA),
];

impl<F: Scalar> Williamson6<F> {
    /// Construct with the published default parameters (wavenumber 4).
    pub fn new() -> Self {
        Self::with_overrides(&[]).expect("defaults are valid")
    }

    /// Construct with named parameter overrides.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] for unknown names, non-finite values,
    /// non-positive `gh0` / `radius`, or a wavenumber outside [1, 1000).
    pub fn with_overrides(overrides: &[(&str, f64)]) -> Result<Self, InvalidParameter> {
        let params = ParamSet::build(W6_NAME, W6_DEFAULTS, overrides)?;
        let gh0 = params.require_positive("gh0", "mean thickness must be positive")?;
        let radius = params.require_positive("radius", "planet radius must be positive")?;
        let wavenumber = params.require_in_range(
            "wavenumber",
            1.0,
            1.0e3,
            "zonal wavenumber must lie in [1, 1000)",
        )?;
        Ok(Self {
            omega: F::from_config(params.get("omega")),
            kappa: F::from_config(params.get("kappa")),
            wavenumber: F::from_config(wavenumber),
            gh0: F::from_config(gh0),
            radius: F::from_config(radius),
            rotation: F::from_config(params.get("rotation")),
            params,
        })
    }
}

impl<F: Scalar> Default for Williamson6<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> TestCase<F> for Williamson6<F> {
    fn name(&self) -> &'static str {
        W6_NAME
    }

    fn describe(&self) -> String {
        format!(
            "Williamson et al. (1992) test case 6: Rossby-Haurwitz wave\n{}",
            self.params.describe_lines()
        )
    }

    fn params(&self) -> &[(&'static str, f64)] {
        self.params.entries()
    }
}

impl<F: Scalar> ShallowWaterCase<F> for Williamson6<F> {
    fn initial(&self, lon: F, lat: F) -> ShallowWaterState<F> {
        let one = F::one();
        let two = F::from_config(2.0);
        let half = F::from_config(0.5);
        let quarter = F::from_config(0.25);

        let a = self.radius;
        let w = self.omega;
        let k = self.kappa;
        let r = self.wavenumber;
        let big_omega = self.rotation;

        let (sinlat, coslat) = lat.sin_cos();
        let cos2 = coslat * coslat;
        // cos^{R-1}, cos^{2R} and cos^{2R-2}; the last is kept separate so
        // the height polynomial stays finite at the poles (no 0·∞ from
        // the cos^{-2} factor of the paper's grouping).
        let crm1 = coslat.powf(r - one);
        let c2r = coslat.powf(two * r);
        let c2rm2 = coslat.powf(two * r - two);

        let ulon = a * w * coslat
            + a * k * crm1 * (r * sinlat * sinlat - cos2) * (r * lon).cos();
        let ulat = -(a * k * r) * crm1 * sinlat * (r * lon).sin();

        let a_phi = half * w * (two * big_omega + w) * cos2
            + quarter
                * k
                * k
                * (c2r * ((r + one) * cos2 + two * r * r - r - two) - two * r * r * c2rm2);
        let b_phi = two * (big_omega + w) * k / ((r + one) * (r + two))
            * coslat.powf(r)
            * (r * r + two * r + two - (r + one) * (r + one) * cos2);
        let c_phi = quarter * k * k * c2r * ((r + one) * cos2 - (r + two));

        let thickness = self.gh0
            + a * a * (a_phi + b_phi * (r * lon).cos() + c_phi * (two * r * lon).cos());

        ShallowWaterState {
            thickness,
            ulon,
            ulat,
        }
    }
}
