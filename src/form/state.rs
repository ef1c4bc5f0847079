use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::{FieldDeclaration, FieldKind, FormDeclaration, InputEvent, is_calendar_date};

use super::{
    any::AnyField,
    error::{FieldCoercionError, pointer_for},
    fields,
    length::{PatternAttrs, PatternConfig, pattern},
};

/// A field plus the presentation details declared with it.
#[derive(Debug, Clone)]
pub struct FormEntry {
    pub field: AnyField,
    pub label: String,
    pub pattern: Option<PatternConfig>,
}

/// Named fields in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub title: Option<String>,
    entries: IndexMap<String, FormEntry>,
}

impl FormState {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            entries: IndexMap::new(),
        }
    }

    pub fn from_declaration(declaration: &FormDeclaration) -> Result<Self, FieldCoercionError> {
        let mut state = Self::new(declaration.title.clone());
        for field in &declaration.fields {
            state.declare(field)?;
        }
        Ok(state)
    }

    /// Adds a declared field at the end of the form.
    pub fn declare(&mut self, declaration: &FieldDeclaration) -> Result<(), FieldCoercionError> {
        let pointer = pointer_for(&declaration.name);
        let bounds = declaration.bounds();
        if declaration.kind != FieldKind::Date && (bounds.min.is_some() || bounds.max.is_some()) {
            return Err(FieldCoercionError::new(
                pointer,
                "min/max only apply to date fields",
            ));
        }
        for bound in [&bounds.min, &bounds.max].into_iter().flatten() {
            if !is_calendar_date(bound) {
                return Err(FieldCoercionError::new(
                    pointer,
                    format!("bound '{bound}' is not a YYYY-MM-DD date"),
                ));
            }
        }
        if declaration.kind != FieldKind::Text && declaration.pattern.is_some() {
            return Err(FieldCoercionError::new(
                pointer,
                "pattern only applies to text fields",
            ));
        }

        let field = AnyField::from_json_default(
            declaration.kind,
            declaration.name.clone(),
            &declaration.default,
            bounds,
        )?;
        self.insert_entry(FormEntry {
            field,
            label: declaration.display_label().to_string(),
            pattern: declaration.pattern.clone(),
        })
    }

    /// Adds an already built field, labelled with its name.
    pub fn insert(&mut self, field: impl Into<AnyField>) -> Result<(), FieldCoercionError> {
        let field = field.into();
        let label = field.name().to_string();
        self.insert_entry(FormEntry {
            field,
            label,
            pattern: None,
        })
    }

    fn insert_entry(&mut self, entry: FormEntry) -> Result<(), FieldCoercionError> {
        let name = entry.field.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(FieldCoercionError::duplicate_field(&name));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &AnyField> {
        self.entries.values().map(|entry| &entry.field)
    }

    pub fn entry(&self, name: &str) -> Option<&FormEntry> {
        self.entries.get(name)
    }

    pub fn field(&self, name: &str) -> Option<&AnyField> {
        self.entry(name).map(|entry| &entry.field)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut AnyField> {
        self.entries.get_mut(name).map(|entry| &mut entry.field)
    }

    /// `pattern`/`required` attributes for a text field declared with limits.
    pub fn pattern_attrs(&self, name: &str) -> Option<PatternAttrs> {
        self.entry(name)?.pattern.as_ref().map(pattern)
    }

    pub fn handle_change(
        &mut self,
        name: &str,
        event: &InputEvent,
    ) -> Result<bool, FieldCoercionError> {
        Ok(self.require_mut(name)?.handle_change(event))
    }

    pub fn set(&mut self, name: &str, value: &Value) -> Result<bool, FieldCoercionError> {
        self.require_mut(name)?.set_json(value)
    }

    pub fn clear(&mut self, name: &str) -> Result<bool, FieldCoercionError> {
        Ok(self.require_mut(name)?.clear())
    }

    /// Restores every field's default.
    pub fn clear_all(&mut self) -> bool {
        self.entries
            .values_mut()
            .fold(false, |dirty, entry| entry.field.clear() || dirty)
    }

    /// Applies a JSON object of values. Either every value is taken or, on the
    /// first error, none is.
    pub fn seed(&mut self, values: &Value) -> Result<bool, FieldCoercionError> {
        let Some(values) = values.as_object() else {
            return Err(FieldCoercionError::new("", "seed values must be an object"));
        };
        let mut next = self.entries.clone();
        let mut dirty = false;
        for (name, value) in values {
            let entry = next
                .get_mut(name)
                .ok_or_else(|| FieldCoercionError::unknown_field(name))?;
            dirty |= entry.field.set_json(value)?;
        }
        self.entries = next;
        Ok(dirty)
    }

    /// Typed values keyed by field name, `null` for empty fields.
    pub fn values(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.field.value_json()))
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    /// Snapshots of every field keyed by field name.
    pub fn snapshot(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.field.snapshot_json()))
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    pub fn any_changed(&self) -> bool {
        fields::any_changed(self.fields())
    }

    pub fn any_unchanged(&self) -> bool {
        fields::any_unchanged(self.fields())
    }

    pub fn all_unchanged(&self) -> bool {
        fields::all_unchanged(self.fields())
    }

    pub fn any_empty(&self) -> bool {
        fields::any_empty(self.fields())
    }

    pub fn all_empty(&self) -> bool {
        fields::all_empty(self.fields())
    }

    fn require_mut(&mut self, name: &str) -> Result<&mut AnyField, FieldCoercionError> {
        match self.field_mut(name) {
            Some(field) => Ok(field),
            None => {
                tracing::debug!(field = name, "operation on undeclared field");
                Err(FieldCoercionError::unknown_field(name))
            }
        }
    }
}
