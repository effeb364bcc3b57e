//! Record model for the chest-pain-center data platform (CPCDP).
//!
//! Record types describe themselves to the validation engine through two
//! pieces:
//!
//! - a [`RuleTable`]: the ordered field declarations of the type, each with
//!   its [`FieldRule`] (required flag, allowed values, conditional activation);
//! - the [`Record`] trait: a by-name accessor returning borrowed
//!   [`FieldValue`]s.
//!
//! Enumerated fields implement [`CodedEnum`], which exposes the canonical
//! short code (`key`) that conditions and the JSON wire format use.

pub mod coded;
pub mod error;
pub mod record;
pub mod rule;
pub mod table;
pub mod value;

pub use coded::{CodedEnum, CodedEnumSet};
pub use error::{RuleTableError, ValidationError, ValidationResult};
pub use record::Record;
pub use rule::{
    Activation, AllowedValues, ComplexCondition, Condition, ConditionGroup, FieldDef, FieldRule,
    MatchStrategy, Symbol,
};
pub use table::{RuleTable, RuleTableBuilder};
pub use value::FieldValue;
