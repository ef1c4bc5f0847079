mod format;
mod input;

pub use format::DocumentFormat;
pub use input::{
    declaration_from_value, form_from_str, load_declaration, parse_declaration_str,
    parse_document_str,
};
