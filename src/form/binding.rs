use serde::Serialize;

use crate::domain::{InputEvent, Normalizer};

use super::field::FieldState;

/// Change handler carried by [`InputProps`].
pub type ChangeHandler<N> = fn(&mut FieldState<N>, &InputEvent) -> bool;

/// Attributes associating a label with its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelProps {
    pub html_for: String,
}

/// Attributes a rendering layer puts on the input element bound to a field.
#[derive(Debug, Clone)]
pub struct InputProps<N: Normalizer> {
    pub id: String,
    pub name: String,
    pub input_type: &'static str,
    pub value: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub on_change: ChangeHandler<N>,
}

impl<N: Normalizer> InputProps<N> {
    /// Flattens the props into `(attribute, value)` pairs, skipping unset ones.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("type", self.input_type.to_string()),
            ("value", self.value.clone()),
        ];
        if let Some(min) = &self.min {
            attrs.push(("min", min.clone()));
        }
        if let Some(max) = &self.max {
            attrs.push(("max", max.clone()));
        }
        attrs
    }

    /// Forwards a change event to `field`.
    pub fn dispatch(&self, field: &mut FieldState<N>, event: &InputEvent) -> bool {
        (self.on_change)(field, event)
    }
}

impl<N: Normalizer> FieldState<N> {
    pub fn label_props(&self) -> LabelProps {
        LabelProps {
            html_for: self.name().to_string(),
        }
    }

    pub fn input_props(&self) -> InputProps<N> {
        let (min, max) = N::bounds(self.constraints());
        InputProps {
            id: self.name().to_string(),
            name: self.name().to_string(),
            input_type: N::KIND.input_type(),
            value: self.display_value().to_string(),
            min,
            max,
            on_change: Self::handle_change,
        }
    }
}
