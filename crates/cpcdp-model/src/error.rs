use thiserror::Error;

/// A single, field-identified validation failure.
///
/// Validation is fail-fast: a validate call produces at most one of these.
/// The first five variants are data errors; the rest are configuration
/// defects in a record type's rule table or accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field <{field}> must not be null")]
    MissingRequiredField { field: String },

    #[error("field <{field}> must not be null when its condition is met")]
    ConditionallyRequiredFieldMissing { field: String },

    #[error("field <{field}> allowed values: {allowed}")]
    DisallowedValue { field: String, allowed: String },

    #[error("condition on field <{field}> references unknown field <{referenced}>")]
    BrokenConditionReference { field: String, referenced: String },

    #[error("condition field <{field}> value must not be null")]
    NullConditionSource { field: String },

    #[error("condition field <{field}> holds a {found} value, expected a coded enum")]
    NotCodedEnum { field: String, found: &'static str },

    #[error("field <{field}> is declared by {record} but not exposed by the record accessor")]
    UndeclaredField { record: String, field: String },

    #[error("conditional rules of field <{field}> form a cycle: {}", path.join(" -> "))]
    ConditionCycle { field: String, path: Vec<String> },
}

impl ValidationError {
    /// Name of the field the failure is reported against.
    pub fn field_name(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::ConditionallyRequiredFieldMissing { field }
            | ValidationError::DisallowedValue { field, .. }
            | ValidationError::BrokenConditionReference { field, .. }
            | ValidationError::NullConditionSource { field }
            | ValidationError::NotCodedEnum { field, .. }
            | ValidationError::UndeclaredField { field, .. }
            | ValidationError::ConditionCycle { field, .. } => field,
        }
    }

    /// True for defects in rule metadata or record accessors rather than in record data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ValidationError::BrokenConditionReference { .. }
                | ValidationError::NotCodedEnum { .. }
                | ValidationError::UndeclaredField { .. }
                | ValidationError::ConditionCycle { .. }
        )
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Defects detected while building a [`RuleTable`](crate::RuleTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("{record}: field <{field}> is declared more than once")]
    DuplicateField { record: String, field: String },

    #[error("{record}: condition on <{field}> references unknown field <{referenced}>")]
    UnknownReference {
        record: String,
        field: String,
        referenced: String,
    },

    #[error("{record}: condition on <{field}> over <{referenced}> has no expected values")]
    EmptyExpectedValues {
        record: String,
        field: String,
        referenced: String,
    },

    #[error("{record}: condition on <{field}> references the field itself")]
    SelfReference { record: String, field: String },
}
