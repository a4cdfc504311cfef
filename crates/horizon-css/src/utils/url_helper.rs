//! Reading and writing `url(...)` values.

use crate::parser::{trim_url, unescape_url};

/// Returns true for `none` and for values of the form `url(...)`.
pub fn is_url_value(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if value == "none" {
        return true;
    }
    value.len() > 5 && value.starts_with("url(") && value.ends_with(')')
}

/// The URL contained in a `url(...)` value, quotes and escapes resolved.
pub fn url_value(value: &str) -> Option<String> {
    is_url_value(value).then(|| trim_url(value))
}

/// Resolve backslash escapes in an unquoted URL.
pub fn unescape_css_url(url: &str) -> String {
    unescape_url(url)
}

/// Characters that may appear in an unquoted URL.
pub fn is_valid_css_url_char(c: char) -> bool {
    matches!(c, '!' | '#' | '$' | '%' | '&' | '*'..='[' | ']'..='~' | '\u{80}'..)
}

/// Returns true if `url` cannot be written without quotes.
pub fn is_css_url_requiring_quotes(url: &str) -> bool {
    url.chars().any(|c| !is_valid_css_url_char(c))
}

/// Escape `quote` and backslashes for use inside a quoted URL.
pub fn escaped_css_url(url: &str, quote: char) -> String {
    if !url.contains(quote) && !url.contains('\\') {
        return url.to_string();
    }
    let mut out = String::with_capacity(url.len() * 2);
    for c in url.chars() {
        if c == quote || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render `url` as `url(...)`, quoting it when required or when `force_quote` is set.
///
/// Single quotes are preferred unless the URL contains a single quote and
/// no double quote.
pub fn as_css_url(url: &str, force_quote: bool) -> String {
    let mut out = String::from("url(");
    if force_quote || is_css_url_requiring_quotes(url) {
        let quote = if url.contains('\'') && !url.contains('"') {
            '"'
        } else {
            '\''
        };
        out.push(quote);
        out.push_str(&escaped_css_url(url, quote));
        out.push(quote);
    } else {
        out.push_str(url);
    }
    out.push(')');
    out
}
