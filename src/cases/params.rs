//! Ordered parameter sets with documented defaults and validated overrides.
//!
//! Every test case owns a [`ParamSet`]: an ordered name → value mapping
//! fixed at construction. Defaults come from the published description of
//! the case; callers may override any subset by name. Unknown names and
//! non-finite values are rejected here; case-specific physical range checks
//! run in the case constructors after the set is assembled.

use std::fmt::Write;

use super::InvalidParameter;

/// Immutable ordered parameter mapping for one test case instance.
///
/// Order is the declaration order of the defaults and is preserved in
/// [`ParamSet::entries`] and in `describe()` output.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSet {
    case: &'static str,
    entries: Vec<(&'static str, f64)>,
}

impl ParamSet {
    /// Build a parameter set from defaults plus caller overrides.
    ///
    /// # Errors
    ///
    /// - [`InvalidParameter::UnknownName`] if an override name is not one
    ///   of the defaults.
    /// - [`InvalidParameter::NotFinite`] if an override value is NaN or
    ///   infinite.
    pub fn build(
        case: &'static str,
        defaults: &[(&'static str, f64)],
        overrides: &[(&str, f64)],
    ) -> Result<Self, InvalidParameter> {
        let mut entries: Vec<(&'static str, f64)> = defaults.to_vec();
        for &(name, value) in overrides {
            if !value.is_finite() {
                return Err(InvalidParameter::NotFinite {
                    case,
                    name: name.to_string(),
                    value,
                });
            }
            match entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => {
                    return Err(InvalidParameter::UnknownName {
                        case,
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(Self { case, entries })
    }

    /// Case name this set belongs to.
    pub fn case(&self) -> &'static str {
        self.case
    }

    /// Ordered (name, value) view of the parameters.
    pub fn entries(&self) -> &[(&'static str, f64)] {
        &self.entries
    }

    /// Look up a parameter by name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not in the set. Callers pass the same static
    /// names used in the defaults table, so a miss is a programmer error.
    pub fn get(&self, name: &'static str) -> f64 {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or_else(|| panic!("parameter `{}` missing from {}", name, self.case))
    }

    /// Enforce a strictly positive parameter.
    pub fn require_positive(
        &self,
        name: &'static str,
        constraint: &'static str,
    ) -> Result<f64, InvalidParameter> {
        let value = self.get(name);
        if value > 0.0 {
            Ok(value)
        } else {
            Err(InvalidParameter::OutOfRange {
                case: self.case,
                name,
                value,
                constraint,
            })
        }
    }

    /// Enforce a parameter within a half-open interval `[lo, hi)`.
    pub fn require_in_range(
        &self,
        name: &'static str,
        lo: f64,
        hi: f64,
        constraint: &'static str,
    ) -> Result<f64, InvalidParameter> {
        let value = self.get(name);
        if value >= lo && value < hi {
            Ok(value)
        } else {
            Err(InvalidParameter::OutOfRange {
                case: self.case,
                name,
                value,
                constraint,
            })
        }
    }

    /// Render `name = value` lines for `describe()` output, one per
    /// parameter, in set order.
    pub fn describe_lines(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|(n, _)| n.len())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for (name, value) in &self.entries {
            let _ = writeln!(out, "  {name:<width$} = {value}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[(&str, f64)] = &[("u0", 35.0), ("gh0", 78000.0), ("radius", 6.371229e6)];

    #[test]
    fn test_defaults_preserved_without_overrides() {
        let set = ParamSet::build("demo", DEFAULTS, &[]).unwrap();
        assert_eq!(set.entries(), DEFAULTS);
        assert_eq!(set.get("u0"), 35.0);
    }

    #[test]
    fn test_override_changes_only_named_parameter() {
        let set = ParamSet::build("demo", DEFAULTS, &[("u0", 20.0)]).unwrap();
        assert_eq!(set.get("u0"), 20.0);
        assert_eq!(set.get("gh0"), 78000.0);
        assert_eq!(set.get("radius"), 6.371229e6);
        // Order is unchanged by overriding.
        assert_eq!(set.entries()[0].0, "u0");
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = ParamSet::build("demo", DEFAULTS, &[("depth", 1.0)]).unwrap_err();
        assert!(matches!(err, InvalidParameter::UnknownName { .. }));
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ParamSet::build("demo", DEFAULTS, &[("u0", f64::NAN)]).unwrap_err();
        assert!(matches!(err, InvalidParameter::NotFinite { .. }));
    }

    #[test]
    fn test_require_positive() {
        let set = ParamSet::build("demo", DEFAULTS, &[("gh0", -1.0)]).unwrap();
        let err = set
            .require_positive("gh0", "mean thickness must be positive")
            .unwrap_err();
        assert!(matches!(err, InvalidParameter::OutOfRange { .. }));
        assert!(err.to_string().contains("mean thickness"));
    }

    #[test]
    fn test_describe_lines_contain_every_value() {
        let set = ParamSet::build("demo", DEFAULTS, &[("u0", 12.5)]).unwrap();
        let text = set.describe_lines();
        assert!(text.contains("u0"));
        assert!(text.contains("12.5"));
        assert!(text.contains("78000"));
    }
}
