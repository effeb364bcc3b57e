//! Serializer configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that turns on pretty-printed JSON.
pub const PRETTY_ENV: &str = "CPCDP_JSON_PRETTY";

/// Wire date-time pattern of the platform (`yyyy-MM-dd HH:mm:ss`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How record field names become JSON keys when no explicit key is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNaming {
    /// Keep the field name as declared.
    Identity,
    /// `cw120HelpTime` -> `CW120_HELP_TIME`.
    #[default]
    UpperSnake,
    /// `cw120HelpTime` -> `cw120_help_time`.
    LowerSnake,
}

impl FieldNaming {
    pub fn apply(self, name: &str) -> String {
        match self {
            FieldNaming::Identity => name.to_string(),
            FieldNaming::UpperSnake => separate_camel_case(name).to_uppercase(),
            FieldNaming::LowerSnake => separate_camel_case(name).to_lowercase(),
        }
    }
}

/// Insert `_` before every uppercase letter except a leading one.
/// Digits never start a new word.
fn separate_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.push(ch);
    }
    out
}

/// Options for encoding validated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    pub naming: FieldNaming,

    /// `chrono` strftime pattern for date-time fields.
    pub date_format: String,

    /// Render indented JSON.
    pub pretty: bool,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            naming: FieldNaming::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            pretty: false,
        }
    }
}

impl SerializerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with pretty printing taken from [`PRETTY_ENV`].
    pub fn from_env() -> Self {
        let pretty = std::env::var(PRETTY_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self::default().with_pretty(pretty)
    }

    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
