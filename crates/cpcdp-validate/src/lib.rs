//! Conditional-requiredness validation for CPCDP records.
//!
//! A record passes when every required field is filled in, every present
//! required field with an allowed-value set holds one of its values, and
//! every conditionally required field is filled in whenever its condition
//! holds. The first violation is returned as a [`ValidationError`].
//!
//! ```ignore
//! use cpcdp_validate::validate;
//!
//! validate(&treatment)?;
//! ```

pub mod engine;
pub mod validator;

pub use cpcdp_model::{ValidationError, ValidationResult};
pub use engine::{Evaluator, evaluate_all, evaluate_complex, evaluate_condition};
pub use validator::{validate, validate_field};
