use serde::Deserialize;
use serde_json::Value;

use super::{DateBounds, FieldKind};
use crate::form::PatternConfig;

/// Declarative description of a form, as loaded from a config document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDeclaration {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDeclaration {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: Option<String>,
    /// Missing and `null` both mean "no default".
    #[serde(default)]
    pub default: Value,
    /// Earliest accepted date, date fields only.
    #[serde(default)]
    pub min: Option<String>,
    /// Latest accepted date, date fields only.
    #[serde(default)]
    pub max: Option<String>,
    /// Length limits, text fields only.
    #[serde(default)]
    pub pattern: Option<PatternConfig>,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            default: Value::Null,
            min: None,
            max: None,
            pattern: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.min = bounds.min;
        self.max = bounds.max;
        self
    }

    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min.clone(), self.max.clone())
    }

    /// Label text, falling back to the field name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

fn default_kind() -> FieldKind {
    FieldKind::Text
}
