/// Raw payload of a host input element's change event.
///
/// `valid` carries the element's own constraint-validation verdict. Only date
/// fields consult it; hosts without platform validation use [`InputEvent::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub value: String,
    pub valid: bool,
}

impl InputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            valid: true,
        }
    }

    /// Same event, flagged as failing the element's validation.
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }
}
