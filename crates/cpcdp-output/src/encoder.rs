//! Record to JSON encoding.
//!
//! Fields are written in rule-table order. Null fields and empty code lists
//! are omitted; enums are written as their keys; nested records use their
//! own rule tables. The encoder does not validate.

use chrono::format::{Item, StrftimeItems};
use cpcdp_model::{FieldDef, FieldValue, Record};
use serde_json::{Map, Number, Value};

use crate::adapters::join_keys;
use crate::error::{SerializeError, SerializeResult};
use crate::options::SerializerOptions;

/// Reject strftime patterns chrono cannot render.
pub fn check_date_format(pattern: &str) -> SerializeResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(SerializeError::InvalidDateFormat {
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}

/// Encodes records with one set of options.
pub struct Encoder<'o> {
    options: &'o SerializerOptions,
}

impl<'o> Encoder<'o> {
    pub fn new(options: &'o SerializerOptions) -> SerializeResult<Self> {
        check_date_format(&options.date_format)?;
        Ok(Self { options })
    }

    pub fn encode<R: Record + ?Sized>(&self, record: &R) -> SerializeResult<Map<String, Value>> {
        let mut object = Map::new();
        for def in record.rules().fields() {
            let value = record
                .field(&def.name)
                .ok_or_else(|| SerializeError::UndeclaredField {
                    record: record.record_type().to_string(),
                    field: def.name.clone(),
                })?;
            if let Some(encoded) = self.value(def, &value)? {
                object.insert(self.key(def), encoded);
            }
        }
        Ok(object)
    }

    fn key(&self, def: &FieldDef) -> String {
        match &def.json_key {
            Some(key) => key.clone(),
            None => self.options.naming.apply(&def.name),
        }
    }

    fn value(&self, def: &FieldDef, value: &FieldValue<'_>) -> SerializeResult<Option<Value>> {
        let encoded = match value {
            FieldValue::Null => return Ok(None),
            FieldValue::Text(text) => Value::String((*text).to_string()),
            FieldValue::Integer(number) => Value::from(*number),
            FieldValue::Float(number) => Number::from_f64(*number)
                .map(Value::Number)
                .ok_or_else(|| SerializeError::NonFiniteNumber {
                    field: def.name.clone(),
                })?,
            FieldValue::Bool(flag) => Value::Bool(*flag),
            FieldValue::DateTime(at) => {
                Value::String(at.format(&self.options.date_format).to_string())
            }
            FieldValue::Enum(coded) => Value::String(coded.key().to_string()),
            FieldValue::EnumList(values) => match join_keys(values) {
                Some(joined) => Value::String(joined),
                None => return Ok(None),
            },
            FieldValue::Records(records) => {
                let mut items = Vec::with_capacity(records.len());
                for nested in records {
                    items.push(Value::Object(self.encode(*nested)?));
                }
                Value::Array(items)
            }
        };
        Ok(Some(encoded))
    }
}
