mod snapshot;

use serde_json::Value;

use crate::domain::{Date, InputEvent, Normalizer, Number, Parsed, Text};

use super::error::{FieldCoercionError, pointer_for};

pub use snapshot::FieldSnapshot;

pub type TextField = FieldState<Text>;
pub type NumberField = FieldState<Number>;
pub type DateField = FieldState<Date>;

/// State behind one bound input: a typed value, the default it is measured
/// against, and the raw text the input shows.
///
/// The display text is tracked apart from the typed value so that partial
/// input (`"-"`, `"1."`, `"2025-0"`) stays visible while the typed value keeps
/// its last accepted state. Mutations return whether anything observable
/// changed; callers re-read (or [`snapshot`](Self::snapshot)) when it did.
#[derive(Debug, Clone)]
pub struct FieldState<N: Normalizer> {
    name: String,
    default: Option<N::Value>,
    value: Option<N::Value>,
    display: String,
    constraints: N::Constraints,
}

impl<N: Normalizer> FieldState<N> {
    pub fn new(name: impl Into<String>, default: Option<N::Value>) -> Self {
        Self::with_constraints(name, default, N::Constraints::default())
    }

    pub fn with_constraints(
        name: impl Into<String>,
        default: Option<N::Value>,
        constraints: N::Constraints,
    ) -> Self {
        let default = N::normalize(default);
        let display = N::display_opt(default.as_ref());
        Self {
            name: name.into(),
            value: default.clone(),
            default,
            display,
            constraints,
        }
    }

    /// Builds a field whose default comes from a JSON document.
    pub fn from_json_default(
        name: impl Into<String>,
        default: &Value,
        constraints: N::Constraints,
    ) -> Result<Self, FieldCoercionError> {
        let name = name.into();
        let default = N::from_json(&pointer_for(&name), default)?;
        Ok(Self::with_constraints(name, default, constraints))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&N::Value> {
        self.default.as_ref()
    }

    pub fn value(&self) -> Option<&N::Value> {
        self.value.as_ref()
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn constraints(&self) -> &N::Constraints {
        &self.constraints
    }

    pub fn changed(&self) -> bool {
        !self.unchanged()
    }

    pub fn unchanged(&self) -> bool {
        N::compare(self.value.as_ref(), self.default.as_ref())
    }

    pub fn empty(&self) -> bool {
        N::is_empty(self.value.as_ref())
    }

    /// Replaces the typed value; the display text follows it.
    pub fn set(&mut self, value: Option<N::Value>) -> bool {
        let value = N::normalize(value);
        let shown = N::display_opt(value.as_ref());
        tracing::trace!(field = %self.name, kind = %N::KIND, display = %shown, "set");
        self.replace(value, shown)
    }

    /// Applies a change event from the host input.
    ///
    /// The display text always takes the raw value. The typed value only moves
    /// when the raw value parses; an empty raw value empties it.
    pub fn handle_change(&mut self, event: &InputEvent) -> bool {
        let value = match N::parse(event, &self.constraints) {
            Parsed::Empty => None,
            Parsed::Value(value) => Some(value),
            Parsed::Rejected => {
                tracing::debug!(
                    field = %self.name,
                    kind = %N::KIND,
                    raw = %event.value,
                    "input not accepted, keeping previous value"
                );
                self.value.clone()
            }
        };
        self.replace(value, event.value.clone())
    }

    /// Shorthand for [`handle_change`](Self::handle_change) with a valid event.
    pub fn handle_input(&mut self, raw: &str) -> bool {
        self.handle_change(&InputEvent::new(raw))
    }

    /// Restores the default value.
    pub fn clear(&mut self) -> bool {
        self.set(self.default.clone())
    }

    pub fn value_json(&self) -> Value {
        self.value.as_ref().map_or(Value::Null, N::to_json)
    }

    /// Sets the typed value from a JSON document.
    pub fn set_json(&mut self, value: &Value) -> Result<bool, FieldCoercionError> {
        let value = N::from_json(&pointer_for(&self.name), value)?;
        Ok(self.set(value))
    }

    pub fn snapshot(&self) -> FieldSnapshot<N::Value> {
        FieldSnapshot {
            name: self.name.clone(),
            kind: N::KIND,
            default_value: self.default.clone(),
            value: self.value.clone(),
            display_value: self.display.clone(),
            changed: self.changed(),
            unchanged: self.unchanged(),
            empty: self.empty(),
        }
    }

    fn replace(&mut self, value: Option<N::Value>, display: String) -> bool {
        let dirty = self.value != value || self.display != display;
        self.value = value;
        self.display = display;
        dirty
    }
}

impl FieldState<Text> {
    /// Adopts a new default handed down by the owner and resets the value to it.
    ///
    /// A default equal to the current one is ignored, so in-progress edits
    /// survive re-renders that pass the same default again.
    pub fn sync_default(&mut self, default: Option<String>) -> bool {
        let default = Text::normalize(default);
        if self.default == default {
            return false;
        }
        self.default = default;
        self.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::DateBounds;

    #[test]
    fn construct_normalizes_default() {
        let field = TextField::new("name", Some(String::new()));
        assert_eq!(field.default_value(), None);
        assert_eq!(field.value(), None);
        assert_eq!(field.display_value(), "");
        assert!(field.empty());
        assert!(field.unchanged());

        let field = NumberField::new("age", Some(f64::NAN));
        assert_eq!(field.default_value(), None);

        let field = NumberField::new("age", Some(3.0));
        assert_eq!(field.value(), Some(&3.0));
        assert_eq!(field.display_value(), "3");
    }

    #[test]
    fn text_change_tracks_value_and_display() {
        let mut field = TextField::new("name", None);
        assert!(field.handle_input("abc"));
        assert_eq!(field.value().map(String::as_str), Some("abc"));
        assert_eq!(field.display_value(), "abc");
        assert!(field.changed());

        assert!(field.handle_input(""));
        assert_eq!(field.value(), None);
        assert!(field.unchanged());
    }

    #[test]
    fn number_partial_entry_keeps_last_value() {
        let mut field = NumberField::new("amount", None);

        field.handle_input("1");
        assert_eq!(field.value(), Some(&1.0));
        assert_eq!(field.display_value(), "1");

        field.handle_input("1.");
        assert_eq!(field.value(), Some(&1.0));
        assert_eq!(field.display_value(), "1.");

        field.handle_input("1.5");
        assert_eq!(field.value(), Some(&1.5));
        assert_eq!(field.display_value(), "1.5");
    }

    #[test]
    fn number_negative_entry() {
        let mut field = NumberField::new("delta", None);

        assert!(field.handle_input("-"));
        assert_eq!(field.value(), None);
        assert_eq!(field.display_value(), "-");
        assert!(field.empty());

        field.handle_input("-1");
        assert_eq!(field.value(), Some(&-1.0));
        assert_eq!(field.display_value(), "-1");
    }

    #[test]
    fn number_empty_input_empties_immediately() {
        let mut field = NumberField::new("amount", Some(5.0));
        field.handle_input("");
        assert_eq!(field.value(), None);
        assert_eq!(field.display_value(), "");
        assert!(field.changed());
    }

    #[test]
    fn number_set_rewrites_display() {
        let mut field = NumberField::new("amount", None);
        field.handle_input("1.");
        field.set(Some(2.0));
        assert_eq!(field.display_value(), "2");
        field.set(Some(f64::NAN));
        assert_eq!(field.value(), None);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn date_rejected_input_only_moves_display() {
        let mut field = DateField::new("due", Some("2025-01-01".to_string()));
        field.handle_input("2025/01/02");
        assert_eq!(field.value().map(String::as_str), Some("2025-01-01"));
        assert_eq!(field.display_value(), "2025/01/02");
        assert!(field.unchanged());

        field.handle_change(&InputEvent::new("2025-01-02").invalid());
        assert_eq!(field.value().map(String::as_str), Some("2025-01-01"));

        field.handle_input("2025-01-02");
        assert_eq!(field.value().map(String::as_str), Some("2025-01-02"));
        assert!(field.changed());
    }

    #[test]
    fn date_bounds_gate_input() {
        let bounds = DateBounds::new(Some("2025-01-01".into()), None);
        let mut field = DateField::with_constraints("start", None, bounds);
        field.handle_input("2024-06-01");
        assert_eq!(field.value(), None);
        assert_eq!(field.display_value(), "2024-06-01");
        field.handle_input("2025-06-01");
        assert_eq!(field.value().map(String::as_str), Some("2025-06-01"));
    }

    #[test]
    fn clear_restores_default_and_is_idempotent() {
        let mut field = TextField::new("title", Some("orig".to_string()));
        field.set(Some("new".to_string()));
        assert!(field.changed());

        assert!(field.clear());
        let once = field.snapshot();
        assert_eq!(field.value().map(String::as_str), Some("orig"));
        assert!(!field.changed());
        assert!(field.unchanged());

        assert!(!field.clear());
        assert_eq!(field.snapshot(), once);
    }

    #[test]
    fn clear_resets_partial_display() {
        let mut field = NumberField::new("n", Some(4.0));
        field.handle_input("4.");
        assert!(field.clear());
        assert_eq!(field.display_value(), "4");
    }

    #[test]
    fn unchanged_mutations_report_false() {
        let mut field = TextField::new("name", None);
        assert!(!field.set(None));
        assert!(!field.handle_input(""));
        field.handle_input("a");
        assert!(!field.handle_input("a"));
    }

    #[test]
    fn sync_default_resets_only_on_new_default() {
        let mut field = TextField::new("name", Some("a".to_string()));
        field.handle_input("typed");

        assert!(!field.sync_default(Some("a".to_string())));
        assert_eq!(field.display_value(), "typed");

        assert!(field.sync_default(Some("b".to_string())));
        assert_eq!(field.default_value().map(String::as_str), Some("b"));
        assert_eq!(field.value().map(String::as_str), Some("b"));
        assert!(field.unchanged());
    }

    #[test]
    fn json_bridge() {
        let mut field = NumberField::from_json_default("n", &json!(2), ()).unwrap();
        assert_eq!(field.value_json(), json!(2.0));
        assert!(field.set_json(&json!(null)).unwrap());
        assert_eq!(field.value_json(), Value::Null);

        let err = field.set_json(&json!("x")).unwrap_err();
        assert_eq!(err.pointer, "/n");
        assert!(TextField::from_json_default("t", &json!([1]), ()).is_err());
    }
}
