use serde_json::Value;

use super::{Normalizer, Parsed};
use crate::domain::{FieldKind, InputEvent};
use crate::form::FieldCoercionError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl Normalizer for Text {
    type Value = String;
    type Constraints = ();

    const KIND: FieldKind = FieldKind::Text;

    fn is_empty(value: Option<&String>) -> bool {
        value.is_none_or(|text| text.is_empty())
    }

    fn parse(event: &InputEvent, _constraints: &()) -> Parsed<String> {
        if event.value.is_empty() {
            Parsed::Empty
        } else {
            Parsed::Value(event.value.clone())
        }
    }

    fn display(value: &String) -> String {
        value.clone()
    }

    fn from_json(pointer: &str, value: &Value) -> Result<Option<String>, FieldCoercionError> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Self::normalize(Some(text.clone()))),
            other => Err(FieldCoercionError::new(
                pointer,
                format!("expected string, found {other}"),
            )),
        }
    }

    fn to_json(value: &String) -> Value {
        Value::String(value.clone())
    }
}
