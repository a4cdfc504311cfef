//! Token text helpers shared by the grammar and the object model.

use std::sync::LazyLock;

use regex::Regex;

static SPLIT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+([eE][+-]?[0-9]+)?).*$")
        .unwrap_or_else(|e| panic!("invalid number pattern: {e}"))
});

/// Characters that stand for themselves after a backslash in a URL.
const URL_LITERAL_ESCAPES: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Strip surrounding quotes if the first and last character are the same quote.
///
/// ```
/// use horizon_css::parser::extract_string_value;
///
/// assert_eq!(extract_string_value("'abc'"), "abc");
/// assert_eq!(extract_string_value("\"abc'"), "\"abc'");
/// ```
pub fn extract_string_value(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) if first == last && s.len() >= 2 => {
            &s[1..s.len() - 1]
        }
        _ => s,
    }
}

/// Resolve backslash escapes in the content of a `url(...)` token.
pub fn unescape_url(escaped: &str) -> String {
    if !escaped.contains('\\') {
        return escaped.to_string();
    }

    let chars: Vec<char> = escaped.chars().collect();
    let mut out = String::with_capacity(escaped.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(c);
            i += 1;
            continue;
        }

        let Some(&next) = chars.get(i + 1) else {
            // A trailing backslash stays as it is.
            out.push(c);
            break;
        };

        match next {
            '\n' => i += 2,
            '\r' | '\u{c}' => {
                // Not an escape, kept as written.
                out.push(c);
                i += 1;
            }
            _ if URL_LITERAL_ESCAPES.contains(next) => {
                out.push(next);
                i += 2;
            }
            _ if next.is_ascii_hexdigit() => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && end < start + 6 && chars[end].is_ascii_hexdigit() {
                    end += 1;
                }
                let hex: String = chars[start..end].iter().collect();
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0xFFFD);
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                i = end;
                if chars.get(i).is_some_and(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}')) {
                    i += 1;
                }
            }
            other => {
                out.push(other);
                i += 2;
            }
        }
    }
    out
}

/// Extract the URL from `url(...)`, stripping quotes and resolving escapes.
pub fn trim_url(s: &str) -> String {
    let s = s.trim();
    let inner = if s.len() >= 5
        && s.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("url("))
        && s.ends_with(')')
    {
        &s[4..s.len() - 1]
    } else {
        s
    };
    unescape_url(extract_string_value(inner.trim()))
}

/// Split the longest numeric prefix off a value such as `10px` or `2.5e3%`.
///
/// Returns an empty string if the value does not start with a number.
pub fn split_number(value: &str) -> &str {
    SPLIT_NUMBER
        .captures(value)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Check an identifier used as an element name, class or property.
///
/// Identifiers may not start with a digit, and a leading `-`, `$` or `*`
/// may not be followed by a digit. A leading `--` is fine.
pub fn validate_identifier(ident: &str) -> std::result::Result<(), String> {
    let mut chars = ident.chars();
    let c1 = chars.next();
    let c2 = chars.next();
    match c1 {
        Some('-' | '$' | '*') if c2.is_some_and(|c| c.is_ascii_digit()) => Err(format!(
            "Identifier may not start with a hyphen/dollar/star and a digit: {ident}"
        )),
        Some(c) if c.is_ascii_digit() => {
            Err(format!("Identifier may not start with a digit: {ident}"))
        }
        _ => Ok(()),
    }
}

/// Unicode escapes in identifiers are kept as written.
pub fn unescape_identifier(ident: &str) -> &str {
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_value() {
        assert_eq!(extract_string_value("\"x\""), "x");
        assert_eq!(extract_string_value("''"), "");
        assert_eq!(extract_string_value("'"), "'");
        assert_eq!(extract_string_value("abc"), "abc");
    }

    #[test]
    fn test_unescape_url() {
        assert_eq!(unescape_url("a.gif"), "a.gif");
        assert_eq!(unescape_url("a\\(b\\).gif"), "a(b).gif");
        assert_eq!(unescape_url("\\26 B"), "&B");
        assert_eq!(unescape_url("\\26B"), "\u{26B}");
        assert_eq!(unescape_url("a\\\nb"), "ab");
        assert_eq!(unescape_url("a\\zb"), "azb");
        assert_eq!(unescape_url("a\\\rb"), "a\\\rb");
        assert_eq!(unescape_url("a\\"), "a\\");
    }

    #[test]
    fn test_trim_url() {
        assert_eq!(trim_url("url(a.gif)"), "a.gif");
        assert_eq!(trim_url("url( 'a b.gif' )"), "a b.gif");
        assert_eq!(trim_url("URL(\"x\")"), "x");
        assert_eq!(trim_url("url('x\")"), "'x\"");
    }

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("10px"), "10");
        assert_eq!(split_number("2.5e3%"), "2.5e3");
        assert_eq!(split_number(".5em"), ".5");
        assert_eq!(split_number("1em"), "1");
        assert_eq!(split_number("px"), "");
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("div").is_ok());
        assert!(validate_identifier("--main").is_ok());
        assert!(validate_identifier("-moz-x").is_ok());
        assert!(validate_identifier("-0").is_err());
        assert!(validate_identifier("$0").is_err());
        assert!(validate_identifier("*1").is_err());
        assert!(validate_identifier("0").is_err());
    }
}
