use serde::Serialize;

use crate::domain::FieldKind;

/// Immutable view of a field at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot<V> {
    pub name: String,
    pub kind: FieldKind,
    pub default_value: Option<V>,
    pub value: Option<V>,
    pub display_value: String,
    pub changed: bool,
    pub unchanged: bool,
    pub empty: bool,
}
