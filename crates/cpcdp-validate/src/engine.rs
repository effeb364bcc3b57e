//! Condition evaluation.
//!
//! Evaluating a condition is not side-effect free: when the referenced field
//! carries its own conditional rule, that rule is resolved first, and if it
//! is active while the referenced field is empty the evaluation fails with
//! an error naming the *referenced* field. Dependency chains are therefore
//! validated transitively, whichever field triggered the evaluation.
//!
//! The evaluator tracks the chain of fields whose rules are being resolved
//! and reports [`ValidationError::ConditionCycle`] instead of recursing
//! forever on mutually dependent rules.

use cpcdp_common::redact_value;
use cpcdp_model::{
    Activation, ComplexCondition, Condition, ConditionGroup, FieldValue, MatchStrategy, Record,
    Symbol, ValidationError, ValidationResult,
};
use tracing::{debug, trace};

/// Evaluate a single condition against `record`.
pub fn evaluate_condition<R: Record + ?Sized>(
    condition: &Condition,
    record: &R,
) -> ValidationResult<bool> {
    Evaluator::new(record).condition(condition)
}

/// Evaluate an AND group against `record`.
pub fn evaluate_all<R: Record + ?Sized>(
    group: &ConditionGroup,
    record: &R,
) -> ValidationResult<bool> {
    Evaluator::new(record).all(group)
}

/// Evaluate a complex condition against `record`.
pub fn evaluate_complex<R: Record + ?Sized>(
    complex: &ComplexCondition,
    record: &R,
) -> ValidationResult<bool> {
    Evaluator::new(record).complex(complex)
}

/// Resolves conditional rules against one record.
pub struct Evaluator<'r, R: Record + ?Sized> {
    record: &'r R,
    /// Fields whose activation is currently being resolved, outermost first.
    chain: Vec<String>,
}

impl<'r, R: Record + ?Sized> Evaluator<'r, R> {
    pub fn new(record: &'r R) -> Self {
        Self {
            record,
            chain: Vec::new(),
        }
    }

    /// Evaluator resolving the activation of `field`.
    pub fn for_field(record: &'r R, field: &str) -> Self {
        Self {
            record,
            chain: vec![field.to_string()],
        }
    }

    /// True when `activation` is active, i.e. its governed field is required.
    pub fn resolve(&mut self, activation: &Activation) -> ValidationResult<bool> {
        match activation {
            Activation::Condition(condition) => self.condition(condition),
            Activation::AllOf(group) => self.all(group),
            Activation::Complex(complex) => self.complex(complex),
        }
    }

    /// AND over a group. Every condition is evaluated, so recursive checks
    /// run even after a condition has already failed.
    pub fn all(&mut self, group: &ConditionGroup) -> ValidationResult<bool> {
        let mut results = Vec::with_capacity(group.conditions().len());
        for condition in group.conditions() {
            results.push(self.condition(condition)?);
        }
        let matched = !results.contains(&false);
        trace!(
            record = self.record.record_type(),
            conditions = results.len(),
            matched,
            "condition group evaluated"
        );
        Ok(matched)
    }

    pub fn complex(&mut self, complex: &ComplexCondition) -> ValidationResult<bool> {
        let mut results = Vec::with_capacity(complex.groups.len());
        for group in &complex.groups {
            results.push(self.all(group)?);
        }
        let matched = match complex.symbol {
            Symbol::Or => results.contains(&true),
            Symbol::And => !results.contains(&false),
        };
        trace!(
            record = self.record.record_type(),
            groups = results.len(),
            symbol = ?complex.symbol,
            matched,
            "complex condition evaluated"
        );
        Ok(matched)
    }

    pub fn condition(&mut self, condition: &Condition) -> ValidationResult<bool> {
        let record = self.record;
        let referenced = condition.field.as_str();
        let raw = record.field(referenced).ok_or_else(|| {
            ValidationError::BrokenConditionReference {
                field: self.owner().unwrap_or(referenced).to_string(),
                referenced: referenced.to_string(),
            }
        })?;

        if let Some(nested) = record.rules().activation(referenced) {
            // A present value that fails this condition settles it; the
            // referenced field's own rule is not consulted.
            if !raw.is_null() && !matches(condition, &raw)? {
                return Ok(false);
            }
            self.check_referenced(referenced, nested, &raw)?;
        }

        if raw.is_null() {
            return Err(ValidationError::NullConditionSource {
                field: referenced.to_string(),
            });
        }

        let matched = matches(condition, &raw)?;
        debug!(
            record = record.record_type(),
            owner = self.owner().unwrap_or_default(),
            field = referenced,
            value = redact_value(&raw.string_form()),
            keyed = condition.keyed,
            matched,
            "condition evaluated"
        );
        Ok(matched)
    }

    /// Resolve the rule of a referenced field and enforce it.
    fn check_referenced(
        &mut self,
        referenced: &str,
        activation: &Activation,
        raw: &FieldValue<'_>,
    ) -> ValidationResult<()> {
        if self.chain.iter().any(|field| field == referenced) {
            let mut path = self.chain.clone();
            path.push(referenced.to_string());
            return Err(ValidationError::ConditionCycle {
                field: referenced.to_string(),
                path,
            });
        }

        self.chain.push(referenced.to_string());
        let active = self.resolve(activation);
        self.chain.pop();

        if active? && raw.is_null() {
            return Err(ValidationError::ConditionallyRequiredFieldMissing {
                field: referenced.to_string(),
            });
        }
        Ok(())
    }

    fn owner(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }
}

/// Membership test of a non-null value.
fn matches(condition: &Condition, raw: &FieldValue<'_>) -> ValidationResult<bool> {
    let not_coded = || ValidationError::NotCodedEnum {
        field: condition.field.clone(),
        found: raw.kind(),
    };

    match condition.strategy {
        MatchStrategy::Exact if condition.keyed => match raw {
            FieldValue::Enum(value) => Ok(condition.accepts(value.key())),
            _ => Err(not_coded()),
        },
        MatchStrategy::Exact => Ok(condition.accepts(&raw.string_form())),
        MatchStrategy::AnyWithinArray => {
            let keys = raw.enum_keys().ok_or_else(not_coded)?;
            Ok(keys.iter().any(|key| condition.accepts(key)))
        }
    }
}
