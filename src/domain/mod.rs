mod declaration;
mod event;
mod kind;
mod normalizer;

pub use declaration::{FieldDeclaration, FormDeclaration};
pub use event::InputEvent;
pub use kind::FieldKind;
pub use normalizer::{Date, DateBounds, Normalizer, Number, Parsed, Text};

pub(crate) use normalizer::is_calendar_date;
