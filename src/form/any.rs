use serde_json::Value;

use crate::domain::{DateBounds, FieldKind, InputEvent};

use super::binding::LabelProps;
use super::error::FieldCoercionError;
use super::field::{DateField, FieldState, NumberField, TextField};
use super::fields::FieldFlags;

/// A field of any kind, picked at construction time.
#[derive(Debug, Clone)]
pub enum AnyField {
    Text(TextField),
    Number(NumberField),
    Date(DateField),
}

impl AnyField {
    /// Builds an empty-defaulted field of `kind`.
    pub fn empty(kind: FieldKind, name: impl Into<String>) -> Self {
        match kind {
            FieldKind::Text => AnyField::Text(FieldState::new(name, None)),
            FieldKind::Number => AnyField::Number(FieldState::new(name, None)),
            FieldKind::Date => AnyField::Date(FieldState::new(name, None)),
        }
    }

    /// Builds a field of `kind` whose default comes from JSON. Bounds only
    /// apply to date fields.
    pub fn from_json_default(
        kind: FieldKind,
        name: impl Into<String>,
        default: &Value,
        bounds: DateBounds,
    ) -> Result<Self, FieldCoercionError> {
        Ok(match kind {
            FieldKind::Text => AnyField::Text(FieldState::from_json_default(name, default, ())?),
            FieldKind::Number => {
                AnyField::Number(FieldState::from_json_default(name, default, ())?)
            }
            FieldKind::Date => AnyField::Date(FieldState::from_json_default(name, default, bounds)?),
        })
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            AnyField::Text(_) => FieldKind::Text,
            AnyField::Number(_) => FieldKind::Number,
            AnyField::Date(_) => FieldKind::Date,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyField::Text(field) => field.name(),
            AnyField::Number(field) => field.name(),
            AnyField::Date(field) => field.name(),
        }
    }

    pub fn display_value(&self) -> &str {
        match self {
            AnyField::Text(field) => field.display_value(),
            AnyField::Number(field) => field.display_value(),
            AnyField::Date(field) => field.display_value(),
        }
    }

    pub fn handle_change(&mut self, event: &InputEvent) -> bool {
        match self {
            AnyField::Text(field) => field.handle_change(event),
            AnyField::Number(field) => field.handle_change(event),
            AnyField::Date(field) => field.handle_change(event),
        }
    }

    pub fn clear(&mut self) -> bool {
        match self {
            AnyField::Text(field) => field.clear(),
            AnyField::Number(field) => field.clear(),
            AnyField::Date(field) => field.clear(),
        }
    }

    pub fn set_json(&mut self, value: &Value) -> Result<bool, FieldCoercionError> {
        match self {
            AnyField::Text(field) => field.set_json(value),
            AnyField::Number(field) => field.set_json(value),
            AnyField::Date(field) => field.set_json(value),
        }
    }

    pub fn value_json(&self) -> Value {
        match self {
            AnyField::Text(field) => field.value_json(),
            AnyField::Number(field) => field.value_json(),
            AnyField::Date(field) => field.value_json(),
        }
    }

    pub fn label_props(&self) -> LabelProps {
        match self {
            AnyField::Text(field) => field.label_props(),
            AnyField::Number(field) => field.label_props(),
            AnyField::Date(field) => field.label_props(),
        }
    }

    /// Input attributes as `(attribute, value)` pairs.
    pub fn input_attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            AnyField::Text(field) => field.input_props().attributes(),
            AnyField::Number(field) => field.input_props().attributes(),
            AnyField::Date(field) => field.input_props().attributes(),
        }
    }

    /// The field's snapshot as JSON.
    pub fn snapshot_json(&self) -> Value {
        let snapshot = match self {
            AnyField::Text(field) => serde_json::to_value(field.snapshot()),
            AnyField::Number(field) => serde_json::to_value(field.snapshot()),
            AnyField::Date(field) => serde_json::to_value(field.snapshot()),
        };
        // Snapshots hold only strings, finite-or-null numbers and booleans.
        snapshot.unwrap_or(Value::Null)
    }

    pub fn as_text(&self) -> Option<&TextField> {
        match self {
            AnyField::Text(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&NumberField> {
        match self {
            AnyField::Number(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateField> {
        match self {
            AnyField::Date(field) => Some(field),
            _ => None,
        }
    }
}

impl FieldFlags for AnyField {
    fn changed(&self) -> bool {
        !self.unchanged()
    }

    fn unchanged(&self) -> bool {
        match self {
            AnyField::Text(field) => field.unchanged(),
            AnyField::Number(field) => field.unchanged(),
            AnyField::Date(field) => field.unchanged(),
        }
    }

    fn empty(&self) -> bool {
        match self {
            AnyField::Text(field) => field.empty(),
            AnyField::Number(field) => field.empty(),
            AnyField::Date(field) => field.empty(),
        }
    }
}

impl From<TextField> for AnyField {
    fn from(field: TextField) -> Self {
        AnyField::Text(field)
    }
}

impl From<NumberField> for AnyField {
    fn from(field: NumberField) -> Self {
        AnyField::Number(field)
    }
}

impl From<DateField> for AnyField {
    fn from(field: DateField) -> Self {
        AnyField::Date(field)
    }
}
