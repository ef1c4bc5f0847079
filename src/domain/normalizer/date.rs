use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{Normalizer, Parsed};
use crate::domain::{FieldKind, InputEvent};
use crate::form::FieldCoercionError;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern compiles")
});

/// Dates are kept as their `YYYY-MM-DD` text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date;

/// Inclusive range an accepted date must fall into.
///
/// Both ends are `YYYY-MM-DD` strings; the fixed width makes lexical order
/// chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl DateBounds {
    pub fn new(min: Option<String>, max: Option<String>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, date: &str) -> bool {
        let above_min = self.min.as_deref().is_none_or(|min| date >= min);
        let below_max = self.max.as_deref().is_none_or(|max| date <= max);
        above_min && below_max
    }
}

impl Normalizer for Date {
    type Value = String;
    type Constraints = DateBounds;

    const KIND: FieldKind = FieldKind::Date;

    fn is_empty(value: Option<&String>) -> bool {
        value.is_none_or(|date| date.is_empty())
    }

    fn parse(event: &InputEvent, bounds: &DateBounds) -> Parsed<String> {
        let raw = event.value.as_str();
        if raw.is_empty() {
            return Parsed::Empty;
        }
        if !event.valid || !is_calendar_date(raw) || !bounds.contains(raw) {
            return Parsed::Rejected;
        }
        Parsed::Value(raw.to_string())
    }

    fn display(value: &String) -> String {
        value.clone()
    }

    fn from_json(pointer: &str, value: &Value) -> Result<Option<String>, FieldCoercionError> {
        match value {
            Value::Null => Ok(None),
            Value::String(text) if text.is_empty() => Ok(None),
            Value::String(text) if is_calendar_date(text) => Ok(Some(text.clone())),
            Value::String(text) => Err(FieldCoercionError::new(
                pointer,
                format!("'{text}' is not a YYYY-MM-DD date"),
            )),
            other => Err(FieldCoercionError::new(
                pointer,
                format!("expected date string, found {other}"),
            )),
        }
    }

    fn to_json(value: &String) -> Value {
        Value::String(value.clone())
    }

    fn bounds(bounds: &DateBounds) -> (Option<String>, Option<String>) {
        (bounds.min.clone(), bounds.max.clone())
    }
}

/// `YYYY-MM-DD` naming a day that exists in the proleptic Gregorian calendar.
pub(crate) fn is_calendar_date(raw: &str) -> bool {
    let Some(captures) = ISO_DATE.captures(raw) else {
        return false;
    };
    let field = |idx: usize| captures[idx].parse::<u32>().unwrap_or(0);
    let (year, month, day) = (field(1), field(2), field(3));
    year >= 1 && (1..=12).contains(&month) && (1..=days_in_month(year, month)).contains(&day)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
