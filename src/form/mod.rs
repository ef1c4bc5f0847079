mod any;
mod binding;
mod error;
mod field;
pub mod fields;
mod length;
mod state;

pub use any::AnyField;
pub use binding::{ChangeHandler, InputProps, LabelProps};
pub use error::FieldCoercionError;
pub use field::{DateField, FieldSnapshot, FieldState, NumberField, TextField};
pub use fields::FieldFlags;
pub use length::{PatternAttrs, PatternConfig, pattern};
pub use state::{FormEntry, FormState};
