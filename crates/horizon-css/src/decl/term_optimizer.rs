//! Shortening of simple expression terms for optimized output.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::unit::Unit;

/// `0px`, `0em`, ... for every unit.
static ZERO_WITH_UNIT: LazyLock<HashSet<String>> =
    LazyLock::new(|| Unit::ALL.iter().map(|u| u.format_int(0)).collect());

/// The shortest equivalent of a simple term.
///
/// A zero with a unit becomes `0`, and `#aabbcc` becomes `#abc`. Anything
/// else is returned unchanged.
pub fn optimized_value(value: &str) -> String {
    if ZERO_WITH_UNIT.contains(value) {
        return "0".to_string();
    }

    let b = value.as_bytes();
    let long_hex = value.is_ascii() && b.len() == 7 && b[0] == b'#';
    if long_hex && b[1] == b[2] && b[3] == b[4] && b[5] == b[6] {
        return format!("#{}{}{}", b[1] as char, b[3] as char, b[5] as char);
    }
    value.to_string()
}
