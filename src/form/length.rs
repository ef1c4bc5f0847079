use serde::{Deserialize, Serialize};

/// Length limits for a free-text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    #[serde(default)]
    pub min: Option<usize>,
    #[serde(default)]
    pub max: Option<usize>,
    /// Defaults to `true` when unset.
    #[serde(default)]
    pub required: Option<bool>,
}

/// `pattern`/`required` attributes enforcing a [`PatternConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub required: bool,
}

/// Builds a length pattern. A limit of zero counts as no limit.
pub fn pattern(config: &PatternConfig) -> PatternAttrs {
    let required = config.required.unwrap_or(true);
    let min = config.min.filter(|min| *min > 0);
    let max = config.max.filter(|max| *max > 0);

    let pattern = match (min, max) {
        (Some(min), None) => Some(format!(".{{{min}}}")),
        (Some(min), Some(max)) => Some(format!(".{{{min},{max}}}")),
        (None, Some(max)) => Some(format!(".{{,{max}}}")),
        (None, None) => None,
    };

    PatternAttrs { pattern, required }
}
