use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{Normalizer, Parsed};
use crate::domain::{FieldKind, InputEvent};
use crate::form::FieldCoercionError;

/// Grammar of a "valid floating-point number" as accepted by numeric inputs.
/// Rust's own `f64` parser is more lenient (`"1."`, `"+1"`, `"inf"`).
static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+|[0-9]*\.[0-9]+)(?:[eE][-+]?[0-9]+)?$")
        .expect("float literal pattern compiles")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Normalizer for Number {
    type Value = f64;
    type Constraints = ();

    const KIND: FieldKind = FieldKind::Number;

    fn is_empty(value: Option<&f64>) -> bool {
        value.is_none_or(|number| number.is_nan())
    }

    fn parse(event: &InputEvent, _constraints: &()) -> Parsed<f64> {
        let raw = event.value.as_str();
        if raw.is_empty() {
            return Parsed::Empty;
        }
        if !FLOAT_LITERAL.is_match(raw) {
            return Parsed::Rejected;
        }
        match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Parsed::Value(number),
            _ => Parsed::Rejected,
        }
    }

    fn display(value: &f64) -> String {
        value.to_string()
    }

    fn from_json(pointer: &str, value: &Value) -> Result<Option<f64>, FieldCoercionError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => number.as_f64().map(Some).ok_or_else(|| {
                FieldCoercionError::new(pointer, format!("{number} does not fit in f64"))
            }),
            other => Err(FieldCoercionError::new(
                pointer,
                format!("expected number, found {other}"),
            )),
        }
    }

    fn to_json(value: &f64) -> Value {
        serde_json::Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}
