//! Validate-then-encode serialization.

use cpcdp_model::Record;
use cpcdp_validate::validate;
use serde_json::Value;
use tracing::{debug, warn};

use crate::encoder::{Encoder, check_date_format};
use crate::error::SerializeResult;
use crate::options::SerializerOptions;

/// Serializes records that pass validation.
///
/// A record that fails validation produces its [`ValidationError`] and no
/// output at all.
///
/// [`ValidationError`]: cpcdp_model::ValidationError
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializerOptions,
}

impl Serializer {
    pub fn new(options: SerializerOptions) -> SerializeResult<Self> {
        check_date_format(&options.date_format)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Validate `record` and render it as JSON text.
    pub fn serialize<R: Record + ?Sized>(&self, record: &R) -> SerializeResult<String> {
        let document = self.to_document(record)?;
        let text = if self.options.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(text)
    }

    /// Validate `record` and build its JSON document.
    pub fn to_document<R: Record + ?Sized>(&self, record: &R) -> SerializeResult<Value> {
        if let Err(error) = validate(record) {
            warn!(
                record = record.record_type(),
                field = error.field_name(),
                configuration = error.is_configuration_error(),
                %error,
                "record rejected"
            );
            return Err(error.into());
        }

        let object = Encoder::new(&self.options)?.encode(record)?;
        debug!(
            record = record.record_type(),
            fields = object.len(),
            "record encoded"
        );
        Ok(Value::Object(object))
    }
}

/// Serialize with options from the environment.
pub fn serialize<R: Record + ?Sized>(record: &R) -> SerializeResult<String> {
    Serializer::new(SerializerOptions::from_env())?.serialize(record)
}

/// Build the JSON document with default options.
pub fn to_document<R: Record + ?Sized>(record: &R) -> SerializeResult<Value> {
    Serializer::default().to_document(record)
}
