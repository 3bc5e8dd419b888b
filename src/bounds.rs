//! Physical bounds for the vehicle parameters and the per-field validator.

use std::fmt;

/// One of the six user-editable vehicle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Horsepower,
    Mass,
    Length,
    Width,
    Height,
    Speed,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Horsepower,
        Field::Mass,
        Field::Length,
        Field::Width,
        Field::Height,
        Field::Speed,
    ];

    /// Stable identifier, shared by the input element id and the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Horsepower => "horsepower",
            Field::Mass => "mass",
            Field::Length => "length",
            Field::Width => "width",
            Field::Height => "height",
            Field::Speed => "speed",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Horsepower => "Horsepower",
            Field::Mass => "Mass",
            Field::Length => "Length",
            Field::Width => "Width",
            Field::Height => "Height",
            Field::Speed => "Cruise speed",
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        // BOUNDS is laid out in `Field::ALL` order.
        &BOUNDS[self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive numeric range a field must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

pub static BOUNDS: [FieldSpec; 6] = [
    FieldSpec { field: Field::Horsepower, min: 0.0, max: 1817.0, unit: "HP" },
    FieldSpec { field: Field::Mass, min: 0.0, max: 20000.0, unit: "kg" },
    FieldSpec { field: Field::Length, min: 0.0, max: 20.0, unit: "m" },
    FieldSpec { field: Field::Width, min: 0.0, max: 5.0, unit: "m" },
    FieldSpec { field: Field::Height, min: 0.0, max: 10.0, unit: "m" },
    FieldSpec { field: Field::Speed, min: 30.0, max: 200.0, unit: "km/h" },
];

/// Returns true when `value` is finite and inside `[spec.min, spec.max]`.
#[inline]
pub fn validate(value: f64, spec: &FieldSpec) -> bool {
    value.is_finite() && (spec.min..=spec.max).contains(&value)
}

/// Human-readable error text for an input, looked up by its name.
pub fn error_message(name: &str) -> &'static str {
    match name {
        "horsepower" => "Please enter valid numerical values for horsepower (0 to 1817 [HP]).",
        "mass" => "Please enter valid numerical values for mass (0 to 20000 [kg]).",
        "length" => "Please enter valid numerical values for length (0 to 20 [m]).",
        "width" => "Please enter valid numerical values for width (0 to 5 [m]).",
        "height" => "Please enter valid numerical values for height (0 to 10 [m]).",
        "speed" => "Please enter a valid numerical value for speed (30 to 200 [km/h]).",
        _ => "Invalid input.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_field_order() {
        for (idx, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(BOUNDS[idx].field, field);
            assert!(field.spec().min <= field.spec().max);
        }
    }

    #[test]
    fn boundary_values() {
        for spec in &BOUNDS {
            let eps = 1e-9 * spec.max.max(1.0);
            assert!(validate(spec.min, spec), "{} min", spec.field);
            assert!(validate(spec.max, spec), "{} max", spec.field);
            assert!(validate((spec.min + spec.max) / 2.0, spec), "{} mid", spec.field);
            assert!(!validate(spec.min - eps, spec), "{} below min", spec.field);
            assert!(!validate(spec.max + eps, spec), "{} above max", spec.field);
            assert!(!validate(f64::NAN, spec), "{} NaN", spec.field);
            assert!(!validate(f64::INFINITY, spec), "{} +inf", spec.field);
            assert!(!validate(f64::NEG_INFINITY, spec), "{} -inf", spec.field);
        }
    }

    #[test]
    fn speed_floor_is_thirty() {
        let spec = Field::Speed.spec();
        assert!(!validate(29.999, spec));
        assert!(validate(30.0, spec));
        assert!(validate(200.0, spec));
        assert!(!validate(200.001, spec));
    }

    #[test]
    fn names_round_trip_and_messages() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
            assert!(error_message(field.name()).contains(field.name()));
        }
        assert_eq!(Field::from_name("wheelbase"), None);
        assert_eq!(error_message("wheelbase"), "Invalid input.");
    }
}
