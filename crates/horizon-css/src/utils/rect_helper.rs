//! `rect(top, right, bottom, left)` values.

use std::sync::LazyLock;

use regex::Regex;

use crate::unit::Unit;
use crate::{Error, Result};

fn component_pattern() -> String {
    let mut units: Vec<String> = Unit::ALL.iter().map(|u| regex::escape(u.name())).collect();
    units.sort_by_key(|u| std::cmp::Reverse(u.len()));
    format!(r"(auto|[+-]?(?:[0-9]*\.[0-9]+|[0-9]+)(?:{})?)", units.join("|"))
}

static RECT_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    let c = component_pattern();
    Regex::new(&format!(
        r"(?i)^rect\(\s*{c}\s*,\s*{c}\s*,\s*{c}\s*,\s*{c}\s*\)$"
    ))
    .unwrap_or_else(|e| panic!("invalid rect pattern: {e}"))
});

static RECT_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    let c = component_pattern();
    Regex::new(&format!(r"(?i)^rect\(\s*{c}\s+{c}\s+{c}\s+{c}\s*\)$"))
        .unwrap_or_else(|e| panic!("invalid rect pattern: {e}"))
});

/// Returns true for `rect(...)` with four comma- or space-separated values.
///
/// The two separators may not be mixed.
pub fn is_rect_value(value: &str) -> bool {
    rect_values(value).is_some()
}

/// The four components of a rect value, in order top, right, bottom, left.
pub fn rect_values(value: &str) -> Option<[String; 4]> {
    let value = value.trim();
    let captures = RECT_COMMA
        .captures(value)
        .or_else(|| RECT_SPACE.captures(value))?;
    Some([1, 2, 3, 4].map(|i| {
        captures
            .get(i)
            .map_or_else(String::new, |m| m.as_str().to_string())
    }))
}

/// Like [`rect_values`], but fails with [`Error::InvalidValue`].
pub fn parse_rect(value: &str) -> Result<[String; 4]> {
    rect_values(value)
        .ok_or_else(|| Error::invalid_value("rect", format!("'{value}' is not a rect value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_values() {
        let expected = ["0", "0", "100", "50"].map(String::from);
        assert_eq!(rect_values("rect(0,0,100,50)"), Some(expected.clone()));
        assert_eq!(rect_values("rect( 0 , 0 , 100 , 50 )"), Some(expected.clone()));
        assert_eq!(rect_values("rect(0 0 100 50)"), Some(expected));
        assert_eq!(
            rect_values("rect(5px, auto, 1.5em, -2px)"),
            Some(["5px", "auto", "1.5em", "-2px"].map(String::from))
        );
    }

    #[test]
    fn test_malformed_rect() {
        for value in [
            "rect(0,0,100)",
            "rect(0,0,100,50,1)",
            "rect(0,0 100,50)",
            "rect(a,b,c,d)",
            "rect(0,0,100,50",
            "rec(0,0,100,50)",
            "",
        ] {
            assert!(!is_rect_value(value), "{value}");
            assert!(parse_rect(value).is_err(), "{value}");
        }
    }
}
