//! Parameter collection: raw input text to a numeric record, and the
//! all-fields validation pass over that record.

use crate::bounds::{validate, Field};
use crate::config::*;
use serde::Serialize;
use std::collections::BTreeSet;

/// Fields judged invalid for one record. Empty means the record may be sent.
pub type ValidationResult = BTreeSet<Field>;

/// Raw text currently held by each input, exactly as the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInputs {
    texts: [String; 6],
}

impl FieldInputs {
    pub fn get(&self, field: Field) -> &str {
        &self.texts[field as usize]
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.texts[field as usize] = text.into();
    }

    pub fn with(mut self, field: Field, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }
}

impl Default for FieldInputs {
    fn default() -> Self {
        Self {
            texts: [
                DEFAULT_HORSEPOWER.to_string(),
                DEFAULT_MASS.to_string(),
                DEFAULT_LENGTH.to_string(),
                DEFAULT_WIDTH.to_string(),
                DEFAULT_HEIGHT.to_string(),
                DEFAULT_SPEED.to_string(),
            ],
        }
    }
}

/// Numeric snapshot of the six inputs for a single submission attempt.
///
/// Serialises to the `/update_data` request body. Values that failed to
/// parse are NaN and never leave the validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRecord {
    pub horsepower: f64,
    pub mass: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
}

impl ParameterRecord {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Horsepower => self.horsepower,
            Field::Mass => self.mass,
            Field::Length => self.length,
            Field::Width => self.width,
            Field::Height => self.height,
            Field::Speed => self.speed,
        }
    }

    /// Check every field against its bounds and report all violations.
    pub fn invalid_fields(&self) -> ValidationResult {
        Field::ALL
            .into_iter()
            .filter(|&field| !validate(self.get(field), field.spec()))
            .collect()
    }
}

/// Parse one input as a `.`-separated decimal; anything else becomes NaN.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Read all six inputs into a record. Never fails as a whole.
pub fn collect(inputs: &FieldInputs) -> ParameterRecord {
    let value = |field| parse_field(inputs.get(field));
    ParameterRecord {
        horsepower: value(Field::Horsepower),
        mass: value(Field::Mass),
        length: value(Field::Length),
        width: value(Field::Width),
        height: value(Field::Height),
        speed: value(Field::Speed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> FieldInputs {
        FieldInputs::default()
            .with(Field::Horsepower, "150")
            .with(Field::Mass, "1200")
            .with(Field::Length, "4.5")
            .with(Field::Width, "1.8")
            .with(Field::Height, "1.5")
            .with(Field::Speed, "90")
    }

    fn bad_text(field: Field) -> &'static str {
        match field {
            Field::Horsepower => "-5",
            Field::Mass => "heavy",
            Field::Length => "21",
            Field::Width => "",
            Field::Height => "NaN",
            Field::Speed => "29.5",
        }
    }

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_field(" 4.5 "), 4.5);
        assert_eq!(parse_field("1200"), 1200.0);
        assert_eq!(parse_field("-5"), -5.0);
    }

    #[test]
    fn unparsable_text_becomes_nan() {
        assert!(parse_field("").is_nan());
        assert!(parse_field("4,5").is_nan());
        assert!(parse_field("12abc").is_nan());
    }

    #[test]
    fn collects_all_fields() {
        let record = collect(&valid_inputs());
        assert_eq!(
            record,
            ParameterRecord {
                horsepower: 150.0,
                mass: 1200.0,
                length: 4.5,
                width: 1.8,
                height: 1.5,
                speed: 90.0,
            }
        );
        assert!(record.invalid_fields().is_empty());
    }

    #[test]
    fn default_inputs_are_submittable() {
        assert!(collect(&FieldInputs::default()).invalid_fields().is_empty());
    }

    #[test]
    fn reports_exactly_the_invalid_subset() {
        // Every subset of the six fields, encoded as a bitmask.
        for mask in 0u32..64 {
            let mut inputs = valid_inputs();
            let mut expected = ValidationResult::new();
            // Apply corruptions back to front so field order cannot matter.
            for field in Field::ALL.into_iter().rev() {
                if mask & (1 << field as u32) != 0 {
                    inputs.set(field, bad_text(field));
                    expected.insert(field);
                }
            }
            let invalid = collect(&inputs).invalid_fields();
            assert_eq!(invalid.len(), mask.count_ones() as usize, "mask {mask:#08b}");
            assert_eq!(invalid, expected, "mask {mask:#08b}");
        }
    }

    #[test]
    fn serialises_request_body() {
        let body = serde_json::to_value(collect(&valid_inputs())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "horsepower": 150.0,
                "mass": 1200.0,
                "length": 4.5,
                "width": 1.8,
                "height": 1.5,
                "speed": 90.0
            })
        );
    }
}
