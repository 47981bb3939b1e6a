use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::PredictorError;
use crate::form::FieldId;

/// Option lists keyed by field, as served by the options endpoint
pub type OptionsMap = BTreeMap<FieldId, Vec<String>>;

/// Body of a prediction request: one selected value per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredictionRequest(BTreeMap<FieldId, String>);

impl PredictionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: FieldId, value: String) {
        self.0.insert(id, value);
    }
}

/// Opaque prediction returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult(Value);

impl PredictionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Model accuracy as a fraction, displayed as a percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy(f64);

impl Accuracy {
    pub fn new(value: f64) -> Result<Self, PredictorError> {
        if !value.is_finite() {
            return Err(PredictorError::Parse(format!(
                "accuracy is not a finite number: {}",
                value
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            log::warn!("Accuracy {} is outside [0, 1]", value);
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", fixed_two_half_up(self.0 * 100.0))
    }
}

/// Format with two decimals, rounding an exact midpoint away from zero
///
/// `{:.2}` already rounds to the nearest value of the exact binary number but
/// sends an exact midpoint to even. Midpoints are detected on the bits: the
/// value is `(2n + 1) / 200` exactly when `value * 200` is an odd integer.
fn fixed_two_half_up(value: f64) -> String {
    let magnitude = value.abs();
    let Some(hundredths) = midpoint_hundredths(magnitude) else {
        return format!("{:.2}", value);
    };
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// Rounded-up hundredths when `magnitude` sits exactly between two of them
fn midpoint_hundredths(magnitude: f64) -> Option<u128> {
    let bits = magnitude.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = (bits & ((1u64 << 52) - 1)) as u128;
    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u128 << 52), exponent_bits - 1075)
    };

    // A non-negative exponent makes value * 200 even
    if mantissa == 0 || exponent >= 0 {
        return None;
    }
    let shift = exponent.unsigned_abs();
    if shift >= 64 {
        return None;
    }
    let scaled = mantissa * 200;
    if scaled % (1u128 << shift) != 0 {
        return None;
    }
    let doubled = scaled >> shift;
    (doubled % 2 == 1).then_some(doubled / 2 + 1)
}

/// Decode the options payload
///
/// The service JSON-encodes the mapping and then sends that text as a JSON
/// string, so the body has to be parsed twice. Unknown field names are
/// skipped.
pub fn decode_options(body: &str) -> Result<OptionsMap, PredictorError> {
    let outer: Value = serde_json::from_str(body)?;
    let Value::String(inner) = outer else {
        return Err(PredictorError::Parse(
            "options payload must be a JSON-encoded string".to_string(),
        ));
    };

    let raw: serde_json::Map<String, Value> = serde_json::from_str(&inner)?;

    let mut options = OptionsMap::new();
    for (name, values) in raw {
        let Some(id) = FieldId::from_name(&name) else {
            log::warn!("Ignoring options for unknown field '{}'", name);
            continue;
        };
        options.insert(id, serde_json::from_value(values)?);
    }
    Ok(options)
}

/// Decode the accuracy payload: a JSON number or a string holding one
pub fn decode_accuracy(body: &str) -> Result<Accuracy, PredictorError> {
    let value: Value = serde_json::from_str(body)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let number = number.ok_or_else(|| {
        PredictorError::Parse(format!("accuracy is not a number: {}", value))
    })?;
    Accuracy::new(number)
}

/// Decode the prediction payload and keep its first element
pub fn decode_prediction(body: &str) -> Result<PredictionResult, PredictorError> {
    let values: Vec<Value> = serde_json::from_str(body)?;
    values
        .into_iter()
        .next()
        .map(PredictionResult::new)
        .ok_or_else(|| PredictorError::Parse("prediction array is empty".to_string()))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
