//! Borrowed views of record field values.

use std::fmt;

use chrono::NaiveDateTime;

use crate::coded::CodedEnum;
use crate::record::Record;

/// Pattern used for a date-time's plain string form.
pub const DATE_TIME_STRING_FORM: &str = "%Y-%m-%d %H:%M:%S";

/// The current value of one record field, as seen by the engine.
///
/// Values borrow from the record; nothing here outlives a single
/// validation or encoding call.
#[derive(Clone)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Enum(&'a dyn CodedEnum),
    /// Multi-select code list field.
    EnumList(Vec<&'a dyn CodedEnum>),
    /// Nested records, e.g. the ECG entries of a treatment record.
    Records(Vec<&'a dyn Record>),
}

impl<'a> FieldValue<'a> {
    /// Wrap an optional coded enum.
    pub fn coded<E: CodedEnum>(value: Option<&'a E>) -> Self {
        match value {
            Some(value) => FieldValue::Enum(value),
            None => FieldValue::Null,
        }
    }

    /// Wrap an optional multi-select field. `None` is null; an empty slice is not.
    pub fn coded_list<E: CodedEnum>(values: Option<&'a [E]>) -> Self {
        match values {
            Some(values) => FieldValue::EnumList(
                values
                    .iter()
                    .map(|value| value as &dyn CodedEnum)
                    .collect(),
            ),
            None => FieldValue::Null,
        }
    }

    /// Wrap an optional list of nested records.
    pub fn records<R: Record>(values: Option<&'a [R]>) -> Self {
        match values {
            Some(values) => FieldValue::Records(
                values.iter().map(|value| value as &dyn Record).collect(),
            ),
            None => FieldValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short description of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Bool(_) => "boolean",
            FieldValue::DateTime(_) => "date-time",
            FieldValue::Enum(_) => "coded enum",
            FieldValue::EnumList(_) => "coded enum list",
            FieldValue::Records(_) => "record list",
        }
    }

    /// The enum key(s) carried by this value.
    ///
    /// A single enum yields one key; non-enum values yield `None`.
    pub fn enum_keys(&self) -> Option<Vec<&'static str>> {
        match self {
            FieldValue::Enum(value) => Some(vec![value.key()]),
            FieldValue::EnumList(values) => Some(values.iter().map(|value| value.key()).collect()),
            _ => None,
        }
    }

    /// Plain string form used by allowed-value checks and unkeyed conditions.
    pub fn string_form(&self) -> String {
        self.to_string()
    }
}

/// Plain string form: text as-is, numbers in decimal, enums by variant name.
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value:?}"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::DateTime(value) => write!(f, "{}", value.format(DATE_TIME_STRING_FORM)),
            FieldValue::Enum(value) => f.write_str(value.name()),
            FieldValue::EnumList(values) => {
                let names: Vec<&str> = values.iter().map(|value| value.name()).collect();
                write!(f, "[{}]", names.join(", "))
            }
            FieldValue::Records(values) => write!(f, "[{} record(s)]", values.len()),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
            FieldValue::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            FieldValue::Float(value) => f.debug_tuple("Float").field(value).finish(),
            FieldValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            FieldValue::DateTime(value) => f.debug_tuple("DateTime").field(value).finish(),
            FieldValue::Enum(value) => f
                .debug_tuple("Enum")
                .field(&format_args!("{}({})", value.name(), value.key()))
                .finish(),
            FieldValue::EnumList(values) => f
                .debug_tuple("EnumList")
                .field(&values.iter().map(|value| value.key()).collect::<Vec<_>>())
                .finish(),
            FieldValue::Records(values) => f
                .debug_tuple("Records")
                .field(&values.iter().map(|value| value.record_type()).collect::<Vec<_>>())
                .finish(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<NaiveDateTime> for FieldValue<'_> {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
