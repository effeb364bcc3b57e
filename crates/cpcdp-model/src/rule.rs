//! Field rule metadata.
//!
//! A field's rule says whether it is required, which plain values it may
//! take, and under which condition on *other* fields of the same record a
//! `required` field actually has to be filled in. Conditions come in three
//! fixed shapes:
//!
//! - a single [`Condition`];
//! - a [`ConditionGroup`]: conditions joined with AND;
//! - a [`ComplexCondition`]: groups joined with AND or OR.
//!
//! Nothing nests deeper than that.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How a condition compares the referenced value against its expected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// The operand must be one of the expected values.
    #[default]
    Exact,
    /// The referenced field is a multi-select code list; any of its keys may match.
    AnyWithinArray,
}

/// A membership test on one field of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Referenced field name.
    pub field: String,
    /// Canonical string forms (or enum keys) that satisfy the condition.
    pub expected: BTreeSet<String>,
    #[serde(default)]
    pub strategy: MatchStrategy,
    /// Compare the referenced enum's key instead of its plain string form.
    #[serde(default)]
    pub keyed: bool,
}

impl Condition {
    /// Start a condition on `field`; add expected values with [`Condition::equals`].
    pub fn on(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: BTreeSet::new(),
            strategy: MatchStrategy::Exact,
            keyed: false,
        }
    }

    #[must_use]
    pub fn equals<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected.extend(values.into_iter().map(Into::into));
        self
    }

    /// Compare by enum key.
    #[must_use]
    pub fn keyed(mut self) -> Self {
        self.keyed = true;
        self
    }

    /// Match when any entry of a multi-select field carries an expected key.
    #[must_use]
    pub fn any_within_array(mut self) -> Self {
        self.strategy = MatchStrategy::AnyWithinArray;
        self.keyed = true;
        self
    }

    pub fn accepts(&self, operand: &str) -> bool {
        self.expected.contains(operand)
    }
}

/// Conditions combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionGroup(pub Vec<Condition>);

impl ConditionGroup {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self(conditions)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.0
    }
}

impl From<Vec<Condition>> for ConditionGroup {
    fn from(conditions: Vec<Condition>) -> Self {
        Self(conditions)
    }
}

/// Outer operator of a [`ComplexCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    And,
    Or,
}

/// AND groups combined with an outer AND or OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexCondition {
    pub groups: Vec<ConditionGroup>,
    pub symbol: Symbol,
}

impl ComplexCondition {
    pub fn any(groups: Vec<ConditionGroup>) -> Self {
        Self {
            groups,
            symbol: Symbol::Or,
        }
    }

    pub fn all(groups: Vec<ConditionGroup>) -> Self {
        Self {
            groups,
            symbol: Symbol::And,
        }
    }
}

/// The conditional shape attached to a field, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Condition(Condition),
    AllOf(ConditionGroup),
    Complex(ComplexCondition),
}

impl Activation {
    /// Every condition of the shape, in declaration order.
    pub fn conditions(&self) -> Box<dyn Iterator<Item = &Condition> + '_> {
        match self {
            Activation::Condition(condition) => Box::new(std::iter::once(condition)),
            Activation::AllOf(group) => Box::new(group.conditions().iter()),
            Activation::Complex(complex) => Box::new(
                complex
                    .groups
                    .iter()
                    .flat_map(|group| group.conditions().iter()),
            ),
        }
    }
}

/// Values a present field may take, compared against its plain string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedValues {
    pub values: BTreeSet<String>,
    /// Replaces the value list in the violation message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AllowedValues {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Text shown to the user when a value falls outside the set.
    pub fn describe(&self) -> String {
        match &self.message {
            Some(message) if !message.is_empty() => message.clone(),
            _ => {
                let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
                format!("[{}]", values.join(", "))
            }
        }
    }
}

/// Validation rule of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldRule {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<AllowedValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<Activation>,
}

/// Declaration of one field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Explicit JSON key; otherwise the encoder's naming transform applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_key: Option<String>,
    #[serde(flatten)]
    pub rule: FieldRule,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            json_key: None,
            rule: FieldRule::default(),
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.rule.required = true;
        self
    }

    #[must_use]
    pub fn json_key(mut self, key: impl Into<String>) -> Self {
        self.json_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn allow_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = self.rule.allowed.get_or_insert_with(|| AllowedValues {
            values: BTreeSet::new(),
            message: None,
        });
        allowed.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Custom violation message for the allowed-value check.
    #[must_use]
    pub fn allowed_message(mut self, message: impl Into<String>) -> Self {
        if let Some(allowed) = self.rule.allowed.as_mut() {
            allowed.message = Some(message.into());
        }
        self
    }

    /// Required only when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.rule.activation = Some(Activation::Condition(condition));
        self
    }

    /// Required only when every condition holds.
    #[must_use]
    pub fn when_all(mut self, conditions: Vec<Condition>) -> Self {
        self.rule.activation = Some(Activation::AllOf(ConditionGroup(conditions)));
        self
    }

    /// Required only when the complex condition holds.
    #[must_use]
    pub fn when_complex(mut self, complex: ComplexCondition) -> Self {
        self.rule.activation = Some(Activation::Complex(complex));
        self
    }

    /// Required when at least one of the AND groups holds.
    #[must_use]
    pub fn when_any(self, groups: Vec<ConditionGroup>) -> Self {
        self.when_complex(ComplexCondition::any(groups))
    }
}
