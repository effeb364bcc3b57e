//! Wire adapters for coded enums.
//!
//! A single enum travels as its key. A multi-select list travels as its keys
//! joined with `|`, e.g. `"1|3"`.

use cpcdp_model::{CodedEnum, CodedEnumSet};

pub const LIST_DELIMITER: &str = "|";

/// Join the non-blank keys of `values`. `None` when nothing is left to write.
pub fn join_keys(values: &[&dyn CodedEnum]) -> Option<String> {
    let keys: Vec<&str> = values
        .iter()
        .map(|value| value.key())
        .filter(|key| !key.trim().is_empty())
        .collect();
    if keys.is_empty() {
        return None;
    }
    Some(keys.join(LIST_DELIMITER))
}

/// Resolve a wire key. Unknown keys decode to `None`.
pub fn decode_key<E: CodedEnumSet>(key: &str) -> Option<E> {
    E::from_key(key.trim())
}

/// Resolve a `|`-joined key list, dropping blank and unknown keys.
pub fn decode_key_list<E: CodedEnumSet>(joined: &str) -> Vec<E> {
    joined
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .filter_map(E::from_key)
        .collect()
}
