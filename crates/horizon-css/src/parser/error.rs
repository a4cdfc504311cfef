//! Recoverable CSS parse errors.

use crate::source_location::SourceArea;

/// The category of a recoverable parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A grammar violation inside a rule or declaration.
    Syntax,
    /// An at-rule appeared where it is not allowed (e.g. `@import` after a style rule).
    UnexpectedRule,
    /// A property uses a deprecated browser hack prefix (`*` or `$`).
    DeprecatedProperty,
    /// Browser-compliant mode skipped a malformed construct.
    BrowserCompliantSkip,
    /// A control character that is not allowed in CSS.
    IllegalCharacter,
}

/// CSS parse error with location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The error message describing what went wrong.
    pub message: String,
    /// Line number where the error occurred (1-indexed).
    pub line: u32,
    /// Column number where the error occurred (1-indexed).
    pub column: u32,
    /// For skip events: the first and last skipped token.
    pub skipped: Option<(SourceArea, SourceArea)>,
}

impl ParseError {
    /// Create a new parse error with the given message and location.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
            skipped: None,
        }
    }

    /// Create a syntax error located at the start of a token.
    pub fn syntax(message: impl Into<String>, area: SourceArea) -> Self {
        Self::new(ParseErrorKind::Syntax, message, area.begin_line, area.begin_column)
    }

    /// Create a skip event covering `from` up to and including `to`.
    pub fn skipped(message: impl Into<String>, from: SourceArea, to: SourceArea) -> Self {
        Self {
            kind: ParseErrorKind::BrowserCompliantSkip,
            message: message.into(),
            line: from.begin_line,
            column: from.begin_column,
            skipped: Some((from, to)),
        }
    }

    /// Convert into a fatal error for propagation.
    pub fn into_error(self) -> crate::Error {
        crate::Error::parse(self.message, self.line, self.column)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CSS parse error at {}:{}: {}", self.line, self.column, self.message)?;
        if let Some((from, to)) = &self.skipped {
            write!(f, " (skipped {} to {})", from.begin_location(), to.end_location())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::syntax("Unexpected '}'", SourceArea::new(2, 4, 2, 4));
        assert_eq!(err.to_string(), "CSS parse error at 2:4: Unexpected '}'");

        let skip = ParseError::skipped(
            "Skipped malformed rule",
            SourceArea::new(1, 1, 1, 3),
            SourceArea::new(1, 10, 1, 10),
        );
        assert_eq!(skip.kind, ParseErrorKind::BrowserCompliantSkip);
        assert_eq!(
            skip.to_string(),
            "CSS parse error at 1:1: Skipped malformed rule (skipped 1:1 to 1:10)"
        );
    }
}
