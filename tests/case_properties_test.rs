//! Integration tests for the test case suite.
//!
//! These tests verify the cross-case contract rather than individual
//! formulas:
//! - describe() always names the case and every parameter value
//! - overriding one parameter leaves the others untouched
//! - evaluation is finite over the sphere and bit-reproducible
//! - the registry exposes exactly the constructible cases

use atmos_testcases::{
    hydrostatic_case, shallow_water_case, HydrostaticCase, InvalidParameter, Jablonowski06,
    Moisture, ShallowWaterCase, TestCase, Williamson6, HYDROSTATIC_NAMES, SHALLOW_WATER_NAMES,
};

/// Latitude/longitude sample grid covering equator, midlatitudes and
/// both poles.
fn sample_points() -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for i in 0..8 {
        let lon = i as f64 * std::f64::consts::PI / 4.0;
        for j in -4..=4 {
            let lat = j as f64 * std::f64::consts::FRAC_PI_2 / 4.0;
            points.push((lon, lat));
        }
    }
    points
}

#[test]
fn describe_contains_every_parameter_value() {
    let sw: Vec<Box<dyn ShallowWaterCase<f64>>> = SHALLOW_WATER_NAMES
        .iter()
        .map(|n| shallow_water_case(n, &[]).unwrap())
        .collect();
    for case in &sw {
        let text = case.describe();
        assert!(!text.is_empty());
        for (name, value) in case.params() {
            assert!(text.contains(name), "{}: missing {name}", case.name());
            assert!(
                text.contains(&value.to_string()),
                "{}: missing value of {name}",
                case.name()
            );
        }
    }
    for name in HYDROSTATIC_NAMES {
        let case = hydrostatic_case::<f64>(name, &[]).unwrap();
        let text = case.describe();
        for (pname, value) in case.params() {
            assert!(text.contains(pname));
            assert!(text.contains(&value.to_string()));
        }
    }
}

#[test]
fn override_changes_exactly_one_parameter() {
    let default_case = Williamson6::<f64>::new();
    let tweaked = Williamson6::<f64>::with_overrides(&[("gh0", 5.0e4)]).unwrap();

    for ((name_a, a), (name_b, b)) in default_case.params().iter().zip(tweaked.params()) {
        assert_eq!(name_a, name_b);
        if *name_a == "gh0" {
            assert_eq!(*b, 5.0e4);
        } else {
            assert_eq!(a, b, "parameter {name_a} drifted");
        }
    }
}

#[test]
fn shallow_water_fields_finite_over_the_sphere() {
    for name in SHALLOW_WATER_NAMES {
        let case = shallow_water_case::<f64>(name, &[]).unwrap();
        for (lon, lat) in sample_points() {
            let state = case.initial(lon, lat);
            assert!(state.is_finite(), "{name} not finite at ({lon}, {lat})");
            assert!(state.thickness > 0.0, "{name} thickness <= 0");
        }
    }
}

#[test]
fn hydrostatic_fields_finite_over_the_column() {
    for name in HYDROSTATIC_NAMES {
        let case = hydrostatic_case::<f64>(name, &[]).unwrap();
        for (lon, lat) in sample_points() {
            let surface = case.initial_surface(lon, lat);
            assert!(surface.is_finite());
            assert!(surface.surface_pressure > 0.0);
            for p in [1.0e4, 5.0e4, 8.5e4, 1.0e5] {
                let column = case.initial_column(lon, lat, p);
                assert!(
                    column.is_finite(),
                    "{name} not finite at ({lon}, {lat}, {p})"
                );
                assert!(column.humidity >= 0.0);
            }
        }
    }
}

#[test]
fn evaluation_is_bit_reproducible() {
    let sw = shallow_water_case::<f64>("williamson6", &[]).unwrap();
    let hpe = hydrostatic_case::<f64>("jablonowski06-moist", &[]).unwrap();
    for (lon, lat) in sample_points() {
        assert_eq!(sw.initial(lon, lat), sw.initial(lon, lat));
        assert_eq!(
            hpe.initial_column(lon, lat, 7.3e4),
            hpe.initial_column(lon, lat, 7.3e4)
        );
    }
}

#[test]
fn cases_evaluate_from_multiple_threads() {
    // Cases are immutable and Sync: concurrent readers agree with a
    // serial evaluation.
    let case = Jablonowski06::<f64>::moist();
    let reference = case.initial_column(1.0, 0.5, 6.0e4);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(case.initial_column(1.0, 0.5, 6.0e4), reference);
                }
            });
        }
    });
}

#[test]
fn construction_errors_are_reported_not_panicked() {
    let unknown = Williamson6::<f64>::with_overrides(&[("hgih0", 1.0)]).unwrap_err();
    assert!(unknown.to_string().contains("hgih0"));
    assert!(unknown.to_string().contains("williamson6"));

    let negative =
        Jablonowski06::<f64>::with_overrides(Moisture::Dry, &[("p0", -2.0)]).unwrap_err();
    assert!(matches!(negative, InvalidParameter::OutOfRange { .. }));
    assert!(negative.to_string().contains("p0"));
}

#[test]
fn dry_and_moist_differ_only_in_humidity() {
    let dry = Jablonowski06::<f64>::dry();
    let moist = Jablonowski06::<f64>::moist();
    for (lon, lat) in sample_points() {
        for p in [3.0e4, 7.0e4, 1.0e5] {
            let d = dry.initial_column(lon, lat, p);
            let m = moist.initial_column(lon, lat, p);
            assert_eq!(d.geopotential, m.geopotential);
            assert_eq!(d.ulon, m.ulon);
            assert_eq!(d.ulat, m.ulat);
            assert_eq!(d.humidity, 0.0);
            assert!(m.humidity >= 0.0);
        }
    }
}

#[test]
fn single_precision_cases_work_end_to_end() {
    let sw = shallow_water_case::<f32>("williamson6", &[]).unwrap();
    let state = sw.initial(0.0_f32, 0.0_f32);
    assert!(state.is_finite());
    assert!((state.thickness - 1.03395e5).abs() < 50.0);

    let hpe = hydrostatic_case::<f32>("isothermal", &[]).unwrap();
    let surface = hpe.initial_surface(0.0_f32, 0.0_f32);
    assert!(surface.is_finite());
    assert!(surface.surface_pressure < 1.0e5);
}
