#![deny(rust_2018_idioms)]
//! Form field state that keeps "empty" apart from a kind's zero value,
//! tolerates partial keystrokes, and tracks changes against a default.

mod domain;
mod form;
mod io;

pub use domain::{
    Date, DateBounds, FieldDeclaration, FieldKind, FormDeclaration, InputEvent, Normalizer,
    Number, Parsed, Text,
};
pub use form::{
    AnyField, ChangeHandler, DateField, FieldCoercionError, FieldFlags, FieldSnapshot,
    FieldState, FormEntry, FormState, InputProps, LabelProps, NumberField, PatternAttrs,
    PatternConfig, TextField, fields, pattern,
};
pub use io::{
    DocumentFormat, declaration_from_value, form_from_str, load_declaration,
    parse_declaration_str, parse_document_str,
};

pub mod prelude {
    pub use super::{
        AnyField, DateField, FieldFlags, FieldState, FormState, InputEvent, Normalizer,
        NumberField, TextField,
    };
}
