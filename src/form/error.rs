/// A value that cannot be put into a field, or a field that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCoercionError {
    pub pointer: String,
    pub message: String,
}

impl FieldCoercionError {
    pub fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }

    pub fn unknown_field(name: &str) -> Self {
        Self::new(pointer_for(name), "no such field")
    }

    pub fn duplicate_field(name: &str) -> Self {
        Self::new(pointer_for(name), "field declared more than once")
    }
}

impl std::fmt::Display for FieldCoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.pointer, self.message)
    }
}

impl std::error::Error for FieldCoercionError {}

/// JSON pointer of a top-level field.
pub(crate) fn pointer_for(name: &str) -> String {
    format!("/{}", name.replace('~', "~0").replace('/', "~1"))
}
