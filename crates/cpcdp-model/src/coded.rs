//! Coded enumerations.
//!
//! Every enumerated field in a CPCDP record is a code list: each variant has
//! a short wire key (`"1"`, `"01"`, ...) and a human-readable label. Conditions
//! marked `keyed` compare against [`CodedEnum::key`], and the JSON encoder
//! writes the key, never the variant name.

/// Capability exposed by every enumerant used in a record.
pub trait CodedEnum: Send + Sync {
    /// Canonical short code used on the wire and in keyed conditions.
    fn key(&self) -> &'static str;

    /// Display label.
    fn label(&self) -> &'static str;

    /// Variant identifier; this is the value's plain string form.
    fn name(&self) -> &'static str;
}

/// A coded enum whose full variant list is known, enabling key lookups.
pub trait CodedEnumSet: CodedEnum + Copy + 'static {
    fn variants() -> &'static [Self];

    /// Resolve a wire key to its variant. The first variant wins when keys repeat.
    fn from_key(key: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .find(|variant| variant.key() == key)
            .copied()
    }
}

/// Declare a coded enum with its keys and labels.
///
/// ```
/// cpcdp_model::coded_enum! {
///     /// Gender.
///     pub enum Gender {
///         Male => ("1", "male"),
///         Female => ("2", "female"),
///     }
/// }
///
/// use cpcdp_model::{CodedEnum, CodedEnumSet};
/// assert_eq!(Gender::Female.key(), "2");
/// assert_eq!(Gender::from_key("1"), Some(Gender::Male));
/// ```
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::CodedEnum for $name {
            fn key(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key ),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }
        }

        impl $crate::CodedEnumSet for $name {
            fn variants() -> &'static [Self] {
                &[ $( Self::$variant ),+ ]
            }
        }
    };
}
