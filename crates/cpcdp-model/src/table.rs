//! Per-type rule tables.

use std::collections::HashMap;

use crate::error::RuleTableError;
use crate::rule::{Activation, FieldDef, FieldRule};

/// Ordered field declarations of one record type.
///
/// Built once per type and then only read; lookups by name go through an
/// index built at construction. Construction rejects tables whose
/// conditions reference fields the type does not declare.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    fields: Vec<FieldDef>,
    index: HashMap<String, usize>,
}

impl RuleTable {
    /// Build a table from field declarations in declaration order.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Result<Self, RuleTableError> {
        let name = name.into();
        let mut index = HashMap::with_capacity(fields.len());
        for (position, def) in fields.iter().enumerate() {
            if index.insert(def.name.clone(), position).is_some() {
                return Err(RuleTableError::DuplicateField {
                    record: name,
                    field: def.name.clone(),
                });
            }
        }

        for def in &fields {
            let Some(activation) = &def.rule.activation else {
                continue;
            };
            for condition in activation.conditions() {
                if condition.field == def.name {
                    return Err(RuleTableError::SelfReference {
                        record: name,
                        field: def.name.clone(),
                    });
                }
                if !index.contains_key(&condition.field) {
                    return Err(RuleTableError::UnknownReference {
                        record: name,
                        field: def.name.clone(),
                        referenced: condition.field.clone(),
                    });
                }
                if condition.expected.is_empty() {
                    return Err(RuleTableError::EmptyExpectedValues {
                        record: name,
                        field: def.name.clone(),
                        referenced: condition.field.clone(),
                    });
                }
            }
        }

        Ok(Self {
            name,
            fields,
            index,
        })
    }

    pub fn builder(name: impl Into<String>) -> RuleTableBuilder {
        RuleTableBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Record type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field declarations in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&FieldDef> {
        self.index.get(field).map(|&position| &self.fields[position])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.get(field).map(|def| &def.rule)
    }

    /// The conditional shape of `field`, if it declares one.
    pub fn activation(&self, field: &str) -> Option<&Activation> {
        self.rule(field).and_then(|rule| rule.activation.as_ref())
    }
}

/// Incremental construction of a [`RuleTable`].
#[derive(Debug, Clone)]
pub struct RuleTableBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl RuleTableBuilder {
    #[must_use]
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Declare a field without rules.
    #[must_use]
    pub fn plain(self, name: &str) -> Self {
        self.field(FieldDef::new(name))
    }

    pub fn build(self) -> Result<RuleTable, RuleTableError> {
        RuleTable::new(self.name, self.fields)
    }
}
