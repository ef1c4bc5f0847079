//! Replays scripted input events against a declared form and prints the
//! resulting field state as JSON.

use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::level_filters::LevelFilter;

use fieldkit::{DocumentFormat, FormState, InputEvent, declaration_from_value, parse_document_str};

#[derive(Debug, Parser)]
#[command(
    name = "fieldkit",
    version,
    about = "Replay input events against a declared form"
)]
struct Cli {
    /// Form declaration: file path, inline payload, or "-" for stdin
    #[arg(short = 'f', long = "form", value_name = "SPEC")]
    form: String,

    /// Event script: file path, inline payload, or "-" for stdin
    #[arg(short = 'e', long = "events", value_name = "SPEC")]
    events: Option<String>,

    /// Values applied before the events run: file path, inline payload, or "-"
    #[arg(long = "seed", value_name = "SPEC")]
    seed: Option<String>,

    /// Print only the typed values rather than full field snapshots
    #[arg(long = "values-only")]
    values_only: bool,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

/// One scripted step.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
enum Step {
    Input {
        field: String,
        value: String,
        #[serde(default = "default_valid")]
        valid: bool,
    },
    Set {
        field: String,
        value: Value,
    },
    /// Restores one field, or every field when `field` is absent.
    Clear {
        #[serde(default)]
        field: Option<String>,
    },
}

fn default_valid() -> bool {
    true
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut diagnostics = DiagnosticCollector::default();
    let stdin_users = [Some(cli.form.as_str()), cli.events.as_deref(), cli.seed.as_deref()]
        .into_iter()
        .filter(|spec| *spec == Some("-"))
        .count();
    if stdin_users > 1 {
        diagnostics.push_input(
            "form/events/seed",
            "only one of --form, --events and --seed may read from stdin",
        );
    }
    diagnostics.into_result()?;

    let declaration = load_value(&cli.form, "form")?;
    let declaration = declaration_from_value(declaration).map_err(anyhow_report)?;
    let mut form = FormState::from_declaration(&declaration)?;

    if let Some(spec) = cli.seed.as_deref() {
        let values = load_value(spec, "seed")?;
        form.seed(&values)?;
    }

    if let Some(spec) = cli.events.as_deref() {
        let steps: Vec<Step> = serde_json::from_value(load_value(spec, "events")?)
            .wrap_err("events must be a list of {action, field, value} records")?;
        replay(&mut form, &steps)?;
    }

    let output = if cli.values_only {
        form.values()
    } else {
        json!({
            "title": form.title,
            "changed": form.any_changed(),
            "empty": form.all_empty(),
            "fields": form.snapshot(),
        })
    };
    let rendered = if cli.no_pretty {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn replay(form: &mut FormState, steps: &[Step]) -> Result<()> {
    for (idx, step) in steps.iter().enumerate() {
        let outcome = match step {
            Step::Input {
                field,
                value,
                valid,
            } => {
                let event = InputEvent::new(value.as_str());
                let event = if *valid { event } else { event.invalid() };
                form.handle_change(field, &event)
            }
            Step::Set { field, value } => form.set(field, value),
            Step::Clear { field: Some(field) } => form.clear(field),
            Step::Clear { field: None } => Ok(form.clear_all()),
        };
        let dirty = outcome.wrap_err_with(|| format!("event #{} failed", idx + 1))?;
        tracing::debug!(step = idx + 1, dirty, "replayed");
    }
    Ok(())
}

fn load_value(spec: &str, label: &str) -> Result<Value> {
    let format = format_hint(spec);
    if spec == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return parse_contents(&contents, format, label);
    }

    if looks_inline(spec) {
        return parse_contents(spec, format, &format!("inline {label}"));
    }

    let path = PathBuf::from(spec);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) => {
            if is_not_found(&err) {
                let inline_label = format!("inline {label}");
                return parse_contents(spec, format, &inline_label);
            }
            Err(err.wrap_err(format!("failed to load {label} from {}", path.display())))
        }
    }
}

fn looks_inline(spec: &str) -> bool {
    spec.trim_start().starts_with(['{', '['])
}

fn format_hint(spec: &str) -> DocumentFormat {
    if spec == "-" {
        return DocumentFormat::default();
    }
    DocumentFormat::from_path(Path::new(spec)).unwrap_or_default()
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    match parse_document_str(contents, format) {
        Ok(value) => Ok(value),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(value) = parse_document_str(contents, candidate) {
                    tracing::debug!(%candidate, label, "parsed with fallback format");
                    return Ok(value);
                }
            }
            Err(eyre!(
                "failed to parse {label}: tried {} (first error: {primary:#})",
                format_list()
            ))
        }
    }
}

fn format_list() -> String {
    let items: Vec<String> = DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect();
    items.join(", ")
}

fn anyhow_report(err: impl fmt::Display) -> Report {
    eyre!("{err:#}")
}

#[derive(Debug, Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}
