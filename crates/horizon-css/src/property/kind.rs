//! Value grammars used to validate property values.

use crate::{Error, Result};
use crate::unit::Unit;
use crate::utils::{color_helper, number_helper, rect_helper, url_helper};

/// `inherit` and `initial` are accepted by every property.
pub const GLOBAL_VALUES: [&str; 2] = ["inherit", "initial"];

/// The shape of the values a property accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Anything goes.
    Free,
    /// One of a fixed set of keywords.
    Enum(Vec<String>),
    /// A color value.
    Color,
    /// A keyword or a color value.
    EnumOrColor(Vec<String>),
    /// A single number with unit, such as `12px`.
    Number { with_percentage: bool },
    /// A whitespace separated list of numbers with unit.
    Numbers {
        with_percentage: bool,
        min: usize,
        max: usize,
    },
    /// A keyword or a single number with unit.
    EnumOrNumber {
        values: Vec<String>,
        with_percentage: bool,
    },
    /// A whitespace separated list where each part is a keyword or number.
    EnumOrNumbers {
        values: Vec<String>,
        with_percentage: bool,
        min: usize,
        max: usize,
    },
    /// A keyword or a `rect(...)` value.
    EnumOrRect(Vec<String>),
    /// A plain number without unit, such as `0.5`.
    Decimal,
    /// A plain integer without unit, such as `-3`.
    Integer,
    /// A keyword or a plain integer.
    EnumOrInteger(Vec<String>),
    /// A `url(...)` value.
    Url,
}

fn check_enum_values(values: &[&str]) -> Result<Vec<String>> {
    if values.is_empty() {
        return Err(Error::invalid_argument("At least one enumeration value is required"));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(Error::invalid_argument("At least one enumeration value is empty"));
    }
    Ok(values.iter().map(|v| v.to_string()).collect())
}

fn check_counts(min: usize, max: usize) -> Result<()> {
    if min == 0 || max == 0 {
        return Err(Error::invalid_argument("Argument counts must be greater than zero"));
    }
    if max < min {
        return Err(Error::invalid_argument(format!(
            "Maximum argument count ({max}) must be >= minimum argument count ({min})"
        )));
    }
    Ok(())
}

fn is_number_with_unit(value: &str, with_percentage: bool) -> bool {
    number_helper::value_with_unit(value)
        .is_some_and(|v| with_percentage || v.unit() != Unit::Percentage)
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parts_within(value: &str, min: usize, max: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    (min..=max).contains(&parts.len()).then_some(parts)
}

impl PropertyKind {
    pub fn enumeration(values: &[&str]) -> Result<Self> {
        check_enum_values(values).map(PropertyKind::Enum)
    }

    pub fn enum_or_color(values: &[&str]) -> Result<Self> {
        check_enum_values(values).map(PropertyKind::EnumOrColor)
    }

    pub fn enum_or_rect(values: &[&str]) -> Result<Self> {
        check_enum_values(values).map(PropertyKind::EnumOrRect)
    }

    pub fn enum_or_integer(values: &[&str]) -> Result<Self> {
        check_enum_values(values).map(PropertyKind::EnumOrInteger)
    }

    pub fn enum_or_number(values: &[&str], with_percentage: bool) -> Result<Self> {
        Ok(PropertyKind::EnumOrNumber {
            values: check_enum_values(values)?,
            with_percentage,
        })
    }

    pub fn numbers(with_percentage: bool, min: usize, max: usize) -> Result<Self> {
        check_counts(min, max)?;
        Ok(PropertyKind::Numbers {
            with_percentage,
            min,
            max,
        })
    }

    pub fn enum_or_numbers(
        values: &[&str],
        with_percentage: bool,
        min: usize,
        max: usize,
    ) -> Result<Self> {
        check_counts(min, max)?;
        Ok(PropertyKind::EnumOrNumbers {
            values: check_enum_values(values)?,
            with_percentage,
            min,
            max,
        })
    }

    /// The minimum number of whitespace separated arguments.
    pub fn min_argument_count(&self) -> usize {
        match self {
            PropertyKind::Numbers { min, .. } | PropertyKind::EnumOrNumbers { min, .. } => *min,
            _ => 1,
        }
    }

    /// The maximum number of whitespace separated arguments.
    pub fn max_argument_count(&self) -> usize {
        match self {
            PropertyKind::Numbers { max, .. } | PropertyKind::EnumOrNumbers { max, .. } => *max,
            _ => 1,
        }
    }

    /// Check a value against this grammar.
    pub fn is_valid_value(&self, value: &str) -> bool {
        if GLOBAL_VALUES.contains(&value) {
            return true;
        }
        let in_enum = |values: &[String], v: &str| values.iter().any(|e| e == v);
        match self {
            PropertyKind::Free => true,
            PropertyKind::Enum(values) => in_enum(values, value),
            PropertyKind::Color => color_helper::is_color_value(value),
            PropertyKind::EnumOrColor(values) => {
                in_enum(values, value) || color_helper::is_color_value(value)
            }
            PropertyKind::Number { with_percentage } => {
                is_number_with_unit(value.trim(), *with_percentage)
            }
            PropertyKind::Numbers {
                with_percentage,
                min,
                max,
            } => parts_within(value, *min, *max).is_some_and(|parts| {
                parts.iter().all(|p| is_number_with_unit(p, *with_percentage))
            }),
            PropertyKind::EnumOrNumber {
                values,
                with_percentage,
            } => in_enum(values, value) || is_number_with_unit(value.trim(), *with_percentage),
            PropertyKind::EnumOrNumbers {
                values,
                with_percentage,
                min,
                max,
            } => parts_within(value, *min, *max).is_some_and(|parts| {
                parts
                    .iter()
                    .all(|p| in_enum(values, p) || is_number_with_unit(p, *with_percentage))
            }),
            PropertyKind::EnumOrRect(values) => {
                in_enum(values, value) || rect_helper::is_rect_value(value)
            }
            PropertyKind::Decimal => number_helper::is_number_value(value),
            PropertyKind::Integer => is_integer(value.trim()),
            PropertyKind::EnumOrInteger(values) => in_enum(values, value) || is_integer(value.trim()),
            PropertyKind::Url => url_helper::is_url_value(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_values() {
        let kind = PropertyKind::Color;
        assert!(kind.is_valid_value("inherit"));
        assert!(kind.is_valid_value("initial"));
        assert!(!kind.is_valid_value("unset-ish"));
    }

    #[test]
    fn test_enum() {
        let kind = PropertyKind::enumeration(&["block", "none"]).unwrap();
        assert!(kind.is_valid_value("block"));
        assert!(!kind.is_valid_value("flex"));
        assert!(PropertyKind::enumeration(&[]).is_err());
        assert!(PropertyKind::enumeration(&["a", " "]).is_err());
    }

    #[test]
    fn test_color() {
        let kind = PropertyKind::Color;
        assert!(kind.is_valid_value("red"));
        assert!(kind.is_valid_value("#fff"));
        assert!(kind.is_valid_value("rgb(1,2,3)"));
        assert!(!kind.is_valid_value("12px"));
        assert!(PropertyKind::enum_or_color(&["auto"]).unwrap().is_valid_value("auto"));
    }

    #[test]
    fn test_numbers() {
        let kind = PropertyKind::Number {
            with_percentage: false,
        };
        assert!(kind.is_valid_value("12px"));
        assert!(kind.is_valid_value("0"));
        assert!(!kind.is_valid_value("50%"));
        assert!(!kind.is_valid_value("12"));

        let kind = PropertyKind::numbers(true, 1, 4).unwrap();
        assert!(kind.is_valid_value("1px 2px 3% 4em"));
        assert!(!kind.is_valid_value("1px 2px 3px 4px 5px"));
        assert!(!kind.is_valid_value("1px auto"));
        assert_eq!(kind.min_argument_count(), 1);
        assert_eq!(kind.max_argument_count(), 4);

        assert!(PropertyKind::numbers(true, 0, 1).is_err());
        assert!(PropertyKind::numbers(true, 3, 2).is_err());
    }

    #[test]
    fn test_enum_or_numbers() {
        let kind = PropertyKind::enum_or_numbers(&["auto"], true, 1, 4).unwrap();
        assert!(kind.is_valid_value("1px auto"));
        assert!(!kind.is_valid_value("1px none"));

        let kind = PropertyKind::enum_or_number(&["normal"], false).unwrap();
        assert!(kind.is_valid_value("normal"));
        assert!(kind.is_valid_value("2em"));
        assert!(!kind.is_valid_value("2em 3em"));
    }

    #[test]
    fn test_plain_numbers() {
        assert!(PropertyKind::Decimal.is_valid_value("0.5"));
        assert!(!PropertyKind::Decimal.is_valid_value("0.5px"));
        assert!(PropertyKind::Integer.is_valid_value("-3"));
        assert!(!PropertyKind::Integer.is_valid_value("3.5"));
        let kind = PropertyKind::enum_or_integer(&["auto"]).unwrap();
        assert!(kind.is_valid_value("auto"));
        assert!(kind.is_valid_value("10"));
    }

    #[test]
    fn test_rect_and_url() {
        let kind = PropertyKind::enum_or_rect(&["auto"]).unwrap();
        assert!(kind.is_valid_value("rect(0,0,100,50)"));
        assert!(kind.is_valid_value("auto"));
        assert!(!kind.is_valid_value("rect(0,0,100)"));
        assert!(PropertyKind::Url.is_valid_value("url(a.gif)"));
        assert!(!PropertyKind::Url.is_valid_value("a.gif"));
    }
}
