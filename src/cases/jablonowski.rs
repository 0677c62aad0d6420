//! Jablonowski & Williamson (2006) baroclinic-wave test case.
//!
//! A balanced zonal jet in thermal-wind equilibrium with a localized
//! wind perturbation that grows into a baroclinic wave over roughly nine
//! days. The dry and moist forms differ only in composition: the moist
//! form carries the DCMIP 2012 specific humidity profile, the dry form
//! carries none.
//!
//! The vertical coordinate of the closed forms is η = p/p₀; the initial
//! surface pressure is uniformly p₀, so the surface corresponds to η = 1.
//!
//! # References
//!
//! - Jablonowski & Williamson (2006): A baroclinic instability test case
//!   for atmospheric model dynamical cores. QJRMS 132.
//! - Ullrich et al. (2012): DCMIP test case document, test 4.x.
//!
//! # Units
//!
//! - Longitude/latitude: radians, pressure: Pa
//! - Geopotential: m²/s², velocity: m/s, humidity: kg/kg

use crate::physics::constants::{EARTH_OMEGA, EARTH_RADIUS, GRAVITY, P_REF, R_DRY};
use crate::types::{ColumnState, Scalar, SurfaceState};

use super::{HydrostaticCase, InvalidParameter, ParamSet, TestCase};

/// Composition switch for [`Jablonowski06`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Moisture {
    /// No humidity field; composition is identically zero.
    Dry,
    /// DCMIP 2012 analytic specific humidity profile.
    Moist,
}

/// Baroclinic-wave test case of Jablonowski & Williamson (2006).
///
/// # Parameters
///
/// | name         | default    | meaning                                      |
/// |--------------|------------|----------------------------------------------|
/// | `u0`         | 35.0       | jet amplitude (m/s)                          |
/// | `up`         | 1.0        | wind perturbation amplitude (m/s); 0 = steady|
/// | `t0`         | 288.0      | mean surface temperature (K)                 |
/// | `lapse_rate` | 0.005      | mean temperature lapse rate Γ (K/m)          |
/// | `delta_t`    | 4.8e5      | stratospheric temperature constant ΔT (K)    |
/// | `eta0`       | 0.252      | jet core level η₀                            |
/// | `eta_tropo`  | 0.2        | tropopause level η_t                         |
/// | `q0`         | 0.021      | peak specific humidity (kg/kg), moist only   |
/// | `lat_width`  | 2π/9       | humidity meridional half-width φ_w (rad)     |
/// | `p_width`    | 3.4e4      | humidity vertical half-width p_w (Pa)        |
/// | `pert_lon`   | π/9        | perturbation center longitude (rad)          |
/// | `pert_lat`   | 2π/9       | perturbation center latitude (rad)           |
/// | `p0`         | 1.0e5      | reference surface pressure (Pa)              |
/// | `radius`     | 6.371229e6 | planet radius a (m)                          |
/// | `rotation`   | 7.29212e-5 | planet angular velocity Ω (rad/s)            |
/// | `gravity`    | 9.80616    | gravitational acceleration (m/s²)            |
/// | `r_dry`      | 287.04     | dry gas constant (J/(kg·K))                  |
#[derive(Clone, Debug)]
pub struct Jablonowski06<F: Scalar> {
    params: ParamSet,
    moisture: Moisture,
    u0: F,
    up: F,
    t0: F,
    lapse_rate: F,
    delta_t: F,
    eta0: F,
    eta_tropo: F,
    q0: F,
    lat_width: F,
    p_width: F,
    pert_lon: F,
    pert_lat: F,
    p0: F,
    radius: F,
    rotation: F,
    gravity: F,
    r_dry: F,
}

const JW_DEFAULTS: &[(&str, f64)] = &[
    ("u0", 35.0),
    ("up", 1.0),
    ("t0", 288.0),
    ("lapse_rate", 0.005),
    ("delta_t", 4.8e5),
    ("eta0", 0.252),
    ("eta_tropo", 0.2),
    ("q0", 0.021),
    ("lat_width", 2.0 * std::f64::consts::PI / 9.0),
    ("p_width", 3.4e4),
    ("pert_lon", std::f64::consts::PI / 9.0),
    ("pert_lat", 2.0 * std::f64::consts::PI / 9.0),
    ("p0", P_REF),
    ("radius", EARTH_RADIUS),
    ("rotation", EARTH_OMEGA),
    ("gravity", GRAVITY),
    ("r_dry", R_DRY),
];

impl<F: Scalar> Jablonowski06<F> {
    /// Dry case with the published default parameters.
    pub fn dry() -> Self {
        Self::with_overrides(Moisture::Dry, &[]).expect("defaults are valid")
    }

    /// Moist case with the published default parameters.
    pub fn moist() -> Self {
        Self::with_overrides(Moisture::Moist, &[]).expect("defaults are valid")
    }

    /// Construct with named parameter overrides.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] for unknown names, non-finite values, or
    /// values outside the case's physical ranges (positive temperatures,
    /// pressures and planet constants, η levels in (0, 1), humidity
    /// amplitude in [0, 1)).
    pub fn with_overrides(
        moisture: Moisture,
        overrides: &[(&str, f64)],
    ) -> Result<Self, InvalidParameter> {
        let name = match moisture {
            Moisture::Dry => "jablonowski06-dry",
            Moisture::Moist => "jablonowski06-moist",
        };
        let params = ParamSet::build(name, JW_DEFAULTS, overrides)?;
        let t0 = params.require_positive("t0", "mean temperature must be positive")?;
        let lapse_rate = params.require_positive("lapse_rate", "lapse rate must be positive")?;
        let eta0 = params.require_in_range(
            "eta0",
            f64::MIN_POSITIVE,
            1.0,
            "jet core level must lie in (0, 1)",
        )?;
        let eta_tropo = params.require_in_range(
            "eta_tropo",
            f64::MIN_POSITIVE,
            1.0,
            "tropopause level must lie in (0, 1)",
        )?;
        let q0 = params.require_in_range("q0", 0.0, 1.0, "humidity amplitude must lie in [0, 1)")?;
        let lat_width =
            params.require_positive("lat_width", "humidity half-width must be positive")?;
        let p_width =
            params.require_positive("p_width", "humidity half-width must be positive")?;
        let p0 = params.require_positive("p0", "reference pressure must be positive")?;
        let radius = params.require_positive("radius", "planet radius must be positive")?;
        let gravity = params.require_positive("gravity", "gravity must be positive")?;
        let r_dry = params.require_positive("r_dry", "gas constant must be positive")?;
        Ok(Self {
            moisture,
            u0: F::from_config(params.get("u0")),
            up: F::from_config(params.get("up")),
            t0: F::from_config(t0),
            lapse_rate: F::from_config(lapse_rate),
            delta_t: F::from_config(params.get("delta_t")),
            eta0: F::from_config(eta0),
            eta_tropo: F::from_config(eta_tropo),
            q0: F::from_config(q0),
            lat_width: F::from_config(lat_width),
            p_width: F::from_config(p_width),
            pert_lon: F::from_config(params.get("pert_lon")),
            pert_lat: F::from_config(params.get("pert_lat")),
            p0: F::from_config(p0),
            radius: F::from_config(radius),
            rotation: F::from_config(params.get("rotation")),
            gravity: F::from_config(gravity),
            r_dry: F::from_config(r_dry),
            params,
        })
    }

    /// Which composition form this instance evaluates.
    pub fn moisture(&self) -> Moisture {
        self.moisture
    }

    /// η_v = (η − η₀)·π/2, the auxiliary vertical coordinate of the
    /// closed forms.
    fn eta_v(&self, eta: F) -> F {
        (eta - self.eta0) * F::half_pi()
    }

    /// Horizontally uniform part of the geopotential, Φ̄(η).
    ///
    /// Above the tropopause (η < η_t) the stratospheric polynomial
    /// correction applies; its 137/60 constant makes Φ̄ continuous at η_t.
    fn phi_mean(&self, eta: F) -> F {
        let exponent = self.r_dry * self.lapse_rate / self.gravity;
        let mut phi = self.t0 * self.gravity / self.lapse_rate * (F::one() - eta.powf(exponent));
        if eta < self.eta_tropo {
            let et = self.eta_tropo;
            let c137 = F::from_config(137.0 / 60.0);
            let five = F::from_config(5.0);
            let ten_thirds = F::from_config(10.0 / 3.0);
            let five_fourths = F::from_config(5.0 / 4.0);
            let fifth = F::from_config(0.2);
            let et2 = et * et;
            let et3 = et2 * et;
            let et4 = et2 * et2;
            let et5 = et4 * et;
            let eta2 = eta * eta;
            let correction = ((eta / et).ln() + c137) * et5 - five * et4 * eta
                + five * et3 * eta2
                - ten_thirds * et2 * eta2 * eta
                + five_fourths * et * eta2 * eta2
                - fifth * eta2 * eta2 * eta;
            phi = phi - self.r_dry * self.delta_t * correction;
        }
        phi
    }

    /// Horizontal geopotential deviation Φ'(φ, η) balancing the jet.
    fn phi_deviation(&self, lat: F, eta: F) -> F {
        let (sinlat, coslat) = lat.sin_cos();
        let sin2 = sinlat * sinlat;
        let cos2 = coslat * coslat;
        let third = F::from_config(1.0 / 3.0);
        let two_thirds = F::from_config(2.0 / 3.0);
        let ten_63 = F::from_config(10.0 / 63.0);
        let eight_fifths = F::from_config(1.6);
        let quarter_pi = F::from_config(std::f64::consts::FRAC_PI_4);
        let two = F::from_config(2.0);

        let cos_etav = self.eta_v(eta).cos();
        let wind_factor = self.u0 * cos_etav.powf(F::from_config(1.5));

        let lat_poly_a = -two * sin2 * sin2 * sin2 * (cos2 + third) + ten_63;
        let lat_poly_b = eight_fifths * cos2 * coslat * (sin2 + two_thirds) - quarter_pi;

        wind_factor
            * (lat_poly_a * wind_factor + lat_poly_b * self.radius * self.rotation)
    }

    /// Balanced zonal wind plus the localized Gaussian perturbation.
    fn zonal_wind(&self, lon: F, lat: F, eta: F) -> F {
        let two = F::from_config(2.0);
        let cos_etav = self.eta_v(eta).cos();
        let sin_2lat = (two * lat).sin();
        let jet = self.u0 * cos_etav.powf(F::from_config(1.5)) * sin_2lat * sin_2lat;

        // Great-circle distance to the perturbation center; the cosine is
        // clamped so rounding at the center itself cannot leak a NaN
        // through acos.
        let cos_r = (self.pert_lat.sin() * lat.sin()
            + self.pert_lat.cos() * lat.cos() * (lon - self.pert_lon).cos())
        .min(F::one())
        .max(-F::one());
        let dist = self.radius * cos_r.acos();
        let pert_radius = self.radius / F::from_config(10.0);
        let ratio = dist / pert_radius;
        let perturbation = self.up * (-(ratio * ratio)).exp();

        jet + perturbation
    }

    /// DCMIP 2012 specific humidity profile (moist form only).
    fn humidity(&self, lat: F, pressure: F) -> F {
        match self.moisture {
            Moisture::Dry => F::zero(),
            Moisture::Moist => {
                let lat_ratio = lat / self.lat_width;
                let lat4 = lat_ratio * lat_ratio * lat_ratio * lat_ratio;
                let p_ratio = (pressure - self.p0) / self.p_width;
                self.q0 * (-lat4).exp() * (-(p_ratio * p_ratio)).exp()
            }
        }
    }
}

impl<F: Scalar> TestCase<F> for Jablonowski06<F> {
    fn name(&self) -> &'static str {
        self.params.case()
    }

    fn describe(&self) -> String {
        let form = match self.moisture {
            Moisture::Dry => "dry",
            Moisture::Moist => "moist",
        };
        format!(
            "Jablonowski & Williamson (2006) baroclinic wave, {} form\n{}",
            form,
            self.params.describe_lines()
        )
    }

    fn params(&self) -> &[(&'static str, f64)] {
        self.params.entries()
    }
}

impl<F: Scalar> HydrostaticCase<F> for Jablonowski06<F> {
    fn initial_surface(&self, _lon: F, lat: F) -> SurfaceState<F> {
        // ps is uniform; the surface geopotential is the column form
        // evaluated at η = 1 (Φ̄(1) = 0 by construction).
        SurfaceState {
            surface_pressure: self.p0,
            surface_geopotential: self.phi_deviation(lat, F::one()),
        }
    }

    fn initial_column(&self, lon: F, lat: F, pressure: F) -> ColumnState<F> {
        let eta = pressure / self.p0;
        ColumnState {
            geopotential: self.phi_mean(eta) + self.phi_deviation(lat, eta),
            ulon: self.zonal_wind(lon, lat, eta),
            ulat: F::zero(),
            humidity: self.humidity(lat, pressure),
        }
    }
}
