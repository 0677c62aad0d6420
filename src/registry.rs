//! Name-based test case registry.
//!
//! Drivers and configuration files refer to test cases by name; the
//! registry maps those names to boxed case values, applying parameter
//! overrides at construction. The two families are looked up separately
//! because their evaluation signatures differ.

use crate::cases::{
    Dcmip42, HydrostaticCase, InvalidParameter, Isothermal, Jablonowski06, Moisture,
    ShallowWaterCase, Williamson2, Williamson6,
};
use crate::types::Scalar;

/// Names accepted by [`shallow_water_case`].
pub const SHALLOW_WATER_NAMES: &[&str] = &["williamson2", "williamson6"];

/// Names accepted by [`hydrostatic_case`].
pub const HYDROSTATIC_NAMES: &[&str] = &[
    "jablonowski06-dry",
    "jablonowski06-moist",
    "dcmip42",
    "isothermal",
];

/// Construct a shallow-water test case by name.
///
/// # Errors
///
/// [`InvalidParameter::UnknownCase`] for names not in
/// [`SHALLOW_WATER_NAMES`]; otherwise the named case's own construction
/// errors.
///
/// # Example
///
/// ```
/// use atmos_testcases::registry::shallow_water_case;
///
/// let case = shallow_water_case::<f64>("williamson6", &[]).unwrap();
/// let state = case.initial(0.0, 0.0);
/// assert!(state.thickness > 1.0e5);
/// ```
pub fn shallow_water_case<F: Scalar>(
    name: &str,
    overrides: &[(&str, f64)],
) -> Result<Box<dyn ShallowWaterCase<F>>, InvalidParameter> {
    match name {
        "williamson2" => Ok(Box::new(Williamson2::with_overrides(overrides)?)),
        "williamson6" => Ok(Box::new(Williamson6::with_overrides(overrides)?)),
        _ => Err(InvalidParameter::UnknownCase(name.to_string())),
    }
}

/// Construct a hydrostatic test case by name.
///
/// # Errors
///
/// [`InvalidParameter::UnknownCase`] for names not in
/// [`HYDROSTATIC_NAMES`]; otherwise the named case's own construction
/// errors.
pub fn hydrostatic_case<F: Scalar>(
    name: &str,
    overrides: &[(&str, f64)],
) -> Result<Box<dyn HydrostaticCase<F>>, InvalidParameter> {
    match name {
        "jablonowski06-dry" => Ok(Box::new(Jablonowski06::with_overrides(
            Moisture::Dry,
            overrides,
        )?)),
        "jablonowski06-moist" => Ok(Box::new(Jablonowski06::with_overrides(
            Moisture::Moist,
            overrides,
        )?)),
        "dcmip42" => Ok(Box::new(Dcmip42::with_overrides(overrides)?)),
        "isothermal" => Ok(Box::new(Isothermal::with_overrides(overrides)?)),
        _ => Err(InvalidParameter::UnknownCase(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_shallow_water_name_constructs() {
        for &name in SHALLOW_WATER_NAMES {
            let case = shallow_water_case::<f64>(name, &[]).unwrap();
            assert_eq!(case.name(), name);
            assert!(!case.describe().is_empty());
            assert!(case.initial(0.5, 0.5).is_finite());
        }
    }

    #[test]
    fn test_every_listed_hydrostatic_name_constructs() {
        for &name in HYDROSTATIC_NAMES {
            let case = hydrostatic_case::<f64>(name, &[]).unwrap();
            assert_eq!(case.name(), name);
            assert!(case.initial_surface(0.5, 0.5).is_finite());
            assert!(case.initial_column(0.5, 0.5, 8.0e4).is_finite());
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!(matches!(
            shallow_water_case::<f64>("galewsky", &[]),
            Err(InvalidParameter::UnknownCase(_))
        ));
        assert!(matches!(
            hydrostatic_case::<f64>("williamson6", &[]),
            Err(InvalidParameter::UnknownCase(_))
        ));
    }

    #[test]
    fn test_overrides_reach_the_case() {
        let case = shallow_water_case::<f64>("williamson2", &[("u0", 10.0)]).unwrap();
        assert!(case.describe().contains("10"));
        // The Ok side is a boxed trait object without Debug, so take the
        // error out by pattern instead of unwrap_err.
        let Err(err) = shallow_water_case::<f64>("williamson2", &[("u9", 10.0)]) else {
            panic!("override with unknown name must be rejected");
        };
        assert!(matches!(err, InvalidParameter::UnknownName { .. }));
        assert!(err.to_string().contains("u9"));
    }

    #[test]
    fn test_boxed_cases_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let sw = shallow_water_case::<f64>("williamson6", &[]).unwrap();
        let hpe = hydrostatic_case::<f64>("isothermal", &[]).unwrap();
        assert_send_sync(&sw);
        assert_send_sync(&hpe);
    }
}
