//! Numbers and numbers with units.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::parser::split_number;
use crate::unit::{Unit, ValueWithUnit};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]*\.[0-9]+|[0-9]+)([eE][+-]?[0-9]+)?$")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

/// Returns true for plain numbers such as `12`, `-0.5` or `1e3`.
pub fn is_number_value(value: &str) -> bool {
    NUMBER.is_match(value.trim())
}

/// The unit `value` ends with, compared case-insensitively.
pub fn matching_unit(value: &str) -> Option<Unit> {
    Unit::find_suffix(&value.trim().to_ascii_lowercase())
}

/// Split a value such as `-12.5px` into its sign-adjusted number and unit.
///
/// A bare `0` is read as `0px`. Any other number without unit, or a value
/// with an unknown unit, yields `None`.
pub fn value_with_unit(value: &str) -> Option<ValueWithUnit> {
    let value = value.trim();
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let number = split_number(unsigned);
    if number.is_empty() {
        return None;
    }
    let suffix = unsigned[number.len()..].to_ascii_lowercase();
    let mut magnitude = Decimal::from_str(number)
        .or_else(|_| Decimal::from_scientific(number))
        .ok()?;
    if negative {
        magnitude = -magnitude;
    }

    if suffix.is_empty() {
        return magnitude.is_zero().then(|| ValueWithUnit::new(magnitude, Unit::Px));
    }
    Unit::from_name(&suffix).map(|unit| ValueWithUnit::new(magnitude, unit))
}

/// Returns true if [`value_with_unit`] can read `value`.
pub fn is_value_with_unit(value: &str) -> bool {
    value_with_unit(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_is_number_value() {
        assert!(is_number_value("12"));
        assert!(is_number_value(" -0.5 "));
        assert!(is_number_value(".5"));
        assert!(is_number_value("1e3"));
        assert!(!is_number_value("12px"));
        assert!(!is_number_value("1."));
        assert!(!is_number_value(""));
    }

    #[test]
    fn test_matching_unit() {
        assert_eq!(matching_unit("12vmin"), Some(Unit::Vmin));
        assert_eq!(matching_unit("3PX"), Some(Unit::Px));
        assert_eq!(matching_unit("50%"), Some(Unit::Percentage));
        assert_eq!(matching_unit("12"), None);
    }

    #[test]
    fn test_value_with_unit() {
        let v = value_with_unit("12.5px").unwrap();
        assert_eq!(v.value(), dec("12.5"));
        assert_eq!(v.unit(), Unit::Px);

        let v = value_with_unit("-3EM").unwrap();
        assert_eq!(v.value(), dec("-3"));
        assert_eq!(v.unit(), Unit::Em);

        assert_eq!(value_with_unit("0").unwrap().unit(), Unit::Px);
        assert!(value_with_unit("5").is_none());
        assert!(value_with_unit("5abc").is_none());
        assert!(value_with_unit("px").is_none());
        assert!(is_value_with_unit("100%"));
    }
}
