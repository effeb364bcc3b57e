//! Record validation.
//!
//! ## Field rules
//!
//! Fields are checked in declaration order and validation stops at the first
//! failure:
//!
//! - **Not required**: skipped. Allowed values and conditions are dormant
//!   unless the field is also required.
//! - **Required, null, unconditional**: `MissingRequiredField`.
//! - **Required, present, allowed values**: the plain string form must be in
//!   the set, else `DisallowedValue`.
//! - **Required with a condition**: the condition is resolved whether or not
//!   the value is present; when it is active and the value is null the field
//!   fails with `ConditionallyRequiredFieldMissing`.

use cpcdp_common::redact_value;
use cpcdp_model::{FieldDef, Record, ValidationError, ValidationResult};
use tracing::debug;

use crate::engine::Evaluator;

/// Validate every field of `record` against its type's rule table.
pub fn validate<R: Record + ?Sized>(record: &R) -> ValidationResult<()> {
    for def in record.rules().fields() {
        validate_field(record, def)?;
    }
    Ok(())
}

/// Validate a single declared field.
pub fn validate_field<R: Record + ?Sized>(record: &R, def: &FieldDef) -> ValidationResult<()> {
    let rule = &def.rule;
    if !rule.required {
        return Ok(());
    }

    let field = def.name.as_str();
    let value = record
        .field(field)
        .ok_or_else(|| ValidationError::UndeclaredField {
            record: record.record_type().to_string(),
            field: field.to_string(),
        })?;

    debug!(
        record = record.record_type(),
        field,
        value = redact_value(&value.string_form()),
        conditional = rule.activation.is_some(),
        "validating field"
    );

    if value.is_null() {
        if rule.activation.is_none() {
            return Err(ValidationError::MissingRequiredField {
                field: field.to_string(),
            });
        }
    } else if let Some(allowed) = &rule.allowed
        && !allowed.contains(&value.string_form())
    {
        return Err(ValidationError::DisallowedValue {
            field: field.to_string(),
            allowed: allowed.describe(),
        });
    }

    if let Some(activation) = &rule.activation {
        let active = Evaluator::for_field(record, field).resolve(activation)?;
        if active && value.is_null() {
            return Err(ValidationError::ConditionallyRequiredFieldMissing {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}
