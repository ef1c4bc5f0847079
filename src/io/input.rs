use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;
use crate::domain::FormDeclaration;
use crate::form::FormState;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|table| {
                let value = datetimes_as_strings(toml::Value::Table(table));
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// TOML date literals serialize as a private wrapper object; dates here are
/// plain `YYYY-MM-DD` strings.
#[cfg(feature = "toml")]
fn datetimes_as_strings(value: toml::Value) -> toml::Value {
    match value {
        toml::Value::Datetime(datetime) => toml::Value::String(datetime.to_string()),
        toml::Value::Array(items) => {
            toml::Value::Array(items.into_iter().map(datetimes_as_strings).collect())
        }
        toml::Value::Table(table) => toml::Value::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, datetimes_as_strings(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Parse a form declaration document.
pub fn parse_declaration_str(contents: &str, format: DocumentFormat) -> Result<FormDeclaration> {
    let value = parse_document_str(contents, format)?;
    declaration_from_value(value)
}

pub fn declaration_from_value(value: Value) -> Result<FormDeclaration> {
    serde_json::from_value(value).context("document is not a valid form declaration")
}

/// Read a form declaration from disk, picking the format from the extension.
pub fn load_declaration(path: impl AsRef<Path>) -> Result<FormDeclaration> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).unwrap_or_default();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read form declaration {}", path.display()))?;
    parse_declaration_str(&contents, format)
        .with_context(|| format!("failed to load form declaration {}", path.display()))
}

/// Parse a declaration and build the form it describes.
pub fn form_from_str(contents: &str, format: DocumentFormat) -> Result<FormState> {
    let declaration = parse_declaration_str(contents, format)?;
    let form = FormState::from_declaration(&declaration)?;
    tracing::debug!(fields = form.len(), %format, "form built from declaration");
    Ok(form)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::FieldKind;

    const PROFILE_JSON: &str = r#"{
        "title": "Profile",
        "fields": [
            {"name": "name", "label": "Full name", "default": "Ann"},
            {"name": "age", "kind": "number"},
            {"name": "born", "kind": "date", "min": "1900-01-01"}
        ]
    }"#;

    #[test]
    fn parse_json_declaration() {
        let declaration = parse_declaration_str(PROFILE_JSON, DocumentFormat::Json).unwrap();
        assert_eq!(declaration.title.as_deref(), Some("Profile"));
        assert_eq!(declaration.fields.len(), 3);
        assert_eq!(declaration.fields[0].kind, FieldKind::Text);
        assert_eq!(declaration.fields[0].display_label(), "Full name");
        assert_eq!(declaration.fields[0].default, json!("Ann"));
        assert_eq!(declaration.fields[1].default, Value::Null);
        assert_eq!(declaration.fields[2].min.as_deref(), Some("1900-01-01"));
    }

    #[test]
    fn form_from_declaration_text() {
        let form = form_from_str(PROFILE_JSON, DocumentFormat::Json).unwrap();
        assert_eq!(form.values(), json!({"name": "Ann", "age": null, "born": null}));
        assert_eq!(form.entry("name").unwrap().label, "Full name");
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = parse_declaration_str(
            r#"{"fields": [{"name": "x", "kind": "color"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("form declaration"));
    }

    #[test]
    fn rejects_misspelled_keys() {
        let err = parse_declaration_str(
            r#"{"fields": [{"name": "x", "defualt": "y"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("defualt"));

        assert!(parse_declaration_str(r#"{"feilds": []}"#, DocumentFormat::Json).is_err());
    }

    #[test]
    fn reports_invalid_defaults() {
        let err = form_from_str(
            r#"{"fields": [{"name": "age", "kind": "number", "default": "ten"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("/age"));
    }

    #[test]
    fn load_declaration_from_file() {
        let path = std::env::temp_dir().join(format!("fieldkit-decl-{}.json", std::process::id()));
        fs::write(&path, PROFILE_JSON).unwrap();
        let loaded = load_declaration(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().fields.len(), 3);

        let err = load_declaration(std::env::temp_dir().join("fieldkit-missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read form declaration"));
    }

    #[test]
    fn extension_picks_format() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("form.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("form")), None);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_declaration() {
        let contents = "fields:\n  - name: due\n    kind: date\n    max: 2030-12-31\n";
        let declaration = parse_declaration_str(contents, DocumentFormat::Yaml).unwrap();
        assert_eq!(declaration.fields[0].max.as_deref(), Some("2030-12-31"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_declaration() {
        let contents = "[[fields]]\nname = \"qty\"\nkind = \"number\"\ndefault = 2\n";
        let form = form_from_str(contents, DocumentFormat::Toml).unwrap();
        assert_eq!(form.values(), json!({"qty": 2.0}));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_date_literals_read_as_dates() {
        let contents = "[[fields]]\nname = \"due\"\nkind = \"date\"\nmin = 2025-01-01\nmax = 2025-12-31\ndefault = 2025-06-30\n";
        let form = form_from_str(contents, DocumentFormat::Toml).unwrap();
        assert_eq!(form.values(), json!({"due": "2025-06-30"}));
        let attrs = form.field("due").unwrap().input_attributes();
        assert!(attrs.contains(&("min", "2025-01-01".to_string())));
        assert!(attrs.contains(&("max", "2025-12-31".to_string())));
    }
}
