mod date;
mod number;
mod text;

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use super::{FieldKind, InputEvent};
use crate::form::FieldCoercionError;

pub use date::{Date, DateBounds};
pub(crate) use date::is_calendar_date;
pub use number::Number;
pub use text::Text;

/// Outcome of turning a raw display string into a typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<V> {
    /// The raw string denotes "no value".
    Empty,
    Value(V),
    /// Not a complete value of the kind yet; the typed value must stay as it was.
    Rejected,
}

impl<V> Parsed<V> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Parsed::Rejected)
    }
}

/// Stateless rules for one scalar kind.
///
/// "No value" is always `None`. Kinds may accept further representations of
/// emptiness on input (an empty string, NaN), which [`Normalizer::normalize`]
/// folds into `None`.
pub trait Normalizer: Debug + Clone + Copy + Default + 'static {
    type Value: Clone + Debug + PartialEq + Serialize;
    /// Extra per-field rules consulted by [`Normalizer::parse`].
    type Constraints: Clone + Debug + Default;

    const KIND: FieldKind;

    fn is_empty(value: Option<&Self::Value>) -> bool;

    fn normalize(value: Option<Self::Value>) -> Option<Self::Value> {
        value.filter(|inner| !Self::is_empty(Some(inner)))
    }

    fn parse(event: &InputEvent, constraints: &Self::Constraints) -> Parsed<Self::Value>;

    fn compare(one: Option<&Self::Value>, another: Option<&Self::Value>) -> bool {
        if Self::is_empty(one) && Self::is_empty(another) {
            return true;
        }
        match (one, another) {
            (Some(one), Some(another)) => one == another,
            _ => false,
        }
    }

    fn display(value: &Self::Value) -> String;

    /// Display string for a possibly empty value.
    fn display_opt(value: Option<&Self::Value>) -> String {
        match value {
            Some(inner) if !Self::is_empty(Some(inner)) => Self::display(inner),
            _ => String::new(),
        }
    }

    fn from_json(pointer: &str, value: &Value) -> Result<Option<Self::Value>, FieldCoercionError>;

    fn to_json(value: &Self::Value) -> Value;

    /// Inclusive `(min, max)` attributes for the host input, if any.
    fn bounds(constraints: &Self::Constraints) -> (Option<String>, Option<String>) {
        let _ = constraints;
        (None, None)
    }
}
