//! Pluggable handlers for parse errors, parse exceptions and interpretation problems.
//!
//! Three independent hooks exist at the read boundary:
//!
//! - [`ParseErrorHandler`] receives every *recoverable* error. Returning `Err`
//!   escalates the error and aborts the parse.
//! - [`ParseExceptionHandler`] is told about the *unrecoverable* error that
//!   ended a parse. It only decides how to report it.
//! - [`InterpretErrorHandler`] receives advisory messages while the syntax
//!   tree is converted into the object model.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::parser::{ParseError, ParseErrorKind};
use crate::{Error, Result};

/// Receives recoverable parse errors.
///
/// Each callback may return `Err` to turn the error into a fatal one.
pub trait ParseErrorHandler: Send + Sync {
    /// A grammar violation that the parser can recover from.
    fn on_parse_error(&self, error: &ParseError) -> Result<()>;

    /// A rule appeared in a position where it is not allowed.
    fn on_unexpected_rule(&self, error: &ParseError) -> Result<()>;

    /// A property name used a deprecated hack prefix such as `*color`.
    fn on_deprecated_property(&self, error: &ParseError) -> Result<()>;

    /// Browser-compliant mode skipped a malformed construct.
    fn on_browser_compliant_skip(&self, error: &ParseError) -> Result<()>;

    /// An illegal character was found in the input and ignored.
    fn on_illegal_character(&self, error: &ParseError) -> Result<()>;

    /// Dispatch an error to the callback matching its kind.
    fn report(&self, error: &ParseError) -> Result<()> {
        match error.kind {
            ParseErrorKind::Syntax => self.on_parse_error(error),
            ParseErrorKind::UnexpectedRule => self.on_unexpected_rule(error),
            ParseErrorKind::DeprecatedProperty => self.on_deprecated_property(error),
            ParseErrorKind::BrowserCompliantSkip => self.on_browser_compliant_skip(error),
            ParseErrorKind::IllegalCharacter => self.on_illegal_character(error),
        }
    }

    /// Chain this handler with another one. Both are invoked in order; an
    /// error from the first one stops the chain.
    fn and_then<H>(self, next: H) -> ChainedParseErrorHandler
    where
        Self: Sized + 'static,
        H: ParseErrorHandler + 'static,
    {
        ChainedParseErrorHandler::new(Arc::new(self), Arc::new(next))
    }
}

/// Escalates every recoverable error. This is the default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowingParseErrorHandler;

impl ThrowingParseErrorHandler {
    fn fail(error: &ParseError) -> Result<()> {
        Err(error.clone().into_error())
    }
}

impl ParseErrorHandler for ThrowingParseErrorHandler {
    fn on_parse_error(&self, error: &ParseError) -> Result<()> {
        Self::fail(error)
    }

    fn on_unexpected_rule(&self, error: &ParseError) -> Result<()> {
        Self::fail(error)
    }

    fn on_deprecated_property(&self, error: &ParseError) -> Result<()> {
        Self::fail(error)
    }

    fn on_browser_compliant_skip(&self, error: &ParseError) -> Result<()> {
        Self::fail(error)
    }

    fn on_illegal_character(&self, error: &ParseError) -> Result<()> {
        Self::fail(error)
    }
}

/// Logs every recoverable error as a warning and continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingParseErrorHandler;

impl ParseErrorHandler for LoggingParseErrorHandler {
    fn on_parse_error(&self, error: &ParseError) -> Result<()> {
        tracing::warn!("{}", error);
        Ok(())
    }

    fn on_unexpected_rule(&self, error: &ParseError) -> Result<()> {
        tracing::warn!("Unexpected rule: {}", error);
        Ok(())
    }

    fn on_deprecated_property(&self, error: &ParseError) -> Result<()> {
        tracing::warn!("Deprecated property: {}", error);
        Ok(())
    }

    fn on_browser_compliant_skip(&self, error: &ParseError) -> Result<()> {
        tracing::warn!("Browser compliant skip: {}", error);
        Ok(())
    }

    fn on_illegal_character(&self, error: &ParseError) -> Result<()> {
        tracing::warn!("Illegal character: {}", error);
        Ok(())
    }
}

/// Ignores every recoverable error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoNothingParseErrorHandler;

impl ParseErrorHandler for DoNothingParseErrorHandler {
    fn on_parse_error(&self, _error: &ParseError) -> Result<()> {
        Ok(())
    }

    fn on_unexpected_rule(&self, _error: &ParseError) -> Result<()> {
        Ok(())
    }

    fn on_deprecated_property(&self, _error: &ParseError) -> Result<()> {
        Ok(())
    }

    fn on_browser_compliant_skip(&self, _error: &ParseError) -> Result<()> {
        Ok(())
    }

    fn on_illegal_character(&self, _error: &ParseError) -> Result<()> {
        Ok(())
    }
}

/// Collects every recoverable error for later inspection.
///
/// Share it between the reader and the caller through an `Arc`.
#[derive(Debug, Default)]
pub struct CollectingParseErrorHandler {
    errors: RwLock<Vec<ParseError>>,
}

impl CollectingParseErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect(&self, error: &ParseError) -> Result<()> {
        self.errors.write().push(error.clone());
        Ok(())
    }

    /// A copy of all errors collected so far.
    pub fn errors(&self) -> Vec<ParseError> {
        self.errors.read().clone()
    }

    pub fn error_count(&self) -> usize {
        self.errors.read().len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.read().is_empty()
    }

    /// Count the collected errors of one kind.
    pub fn count_of(&self, kind: ParseErrorKind) -> usize {
        self.errors.read().iter().filter(|e| e.kind == kind).count()
    }

    /// Remove all collected errors.
    pub fn clear(&self) {
        self.errors.write().clear();
    }
}

impl ParseErrorHandler for CollectingParseErrorHandler {
    fn on_parse_error(&self, error: &ParseError) -> Result<()> {
        self.collect(error)
    }

    fn on_unexpected_rule(&self, error: &ParseError) -> Result<()> {
        self.collect(error)
    }

    fn on_deprecated_property(&self, error: &ParseError) -> Result<()> {
        self.collect(error)
    }

    fn on_browser_compliant_skip(&self, error: &ParseError) -> Result<()> {
        self.collect(error)
    }

    fn on_illegal_character(&self, error: &ParseError) -> Result<()> {
        self.collect(error)
    }
}

/// Two handlers invoked one after the other.
#[derive(Clone)]
pub struct ChainedParseErrorHandler {
    first: Arc<dyn ParseErrorHandler>,
    second: Arc<dyn ParseErrorHandler>,
}

impl ChainedParseErrorHandler {
    pub fn new(first: Arc<dyn ParseErrorHandler>, second: Arc<dyn ParseErrorHandler>) -> Self {
        Self { first, second }
    }
}

impl ParseErrorHandler for ChainedParseErrorHandler {
    fn on_parse_error(&self, error: &ParseError) -> Result<()> {
        self.first.on_parse_error(error)?;
        self.second.on_parse_error(error)
    }

    fn on_unexpected_rule(&self, error: &ParseError) -> Result<()> {
        self.first.on_unexpected_rule(error)?;
        self.second.on_unexpected_rule(error)
    }

    fn on_deprecated_property(&self, error: &ParseError) -> Result<()> {
        self.first.on_deprecated_property(error)?;
        self.second.on_deprecated_property(error)
    }

    fn on_browser_compliant_skip(&self, error: &ParseError) -> Result<()> {
        self.first.on_browser_compliant_skip(error)?;
        self.second.on_browser_compliant_skip(error)
    }

    fn on_illegal_character(&self, error: &ParseError) -> Result<()> {
        self.first.on_illegal_character(error)?;
        self.second.on_illegal_character(error)
    }
}

/// Told about the unrecoverable error that ended a parse.
pub trait ParseExceptionHandler: Send + Sync {
    fn on_exception(&self, error: &Error);
}

/// Logs unrecoverable errors. This is the default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingParseExceptionHandler;

impl ParseExceptionHandler for LoggingParseExceptionHandler {
    fn on_exception(&self, error: &Error) {
        tracing::error!("Failed to parse CSS: {}", error);
    }
}

/// Silently drops unrecoverable errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoNothingParseExceptionHandler;

impl ParseExceptionHandler for DoNothingParseExceptionHandler {
    fn on_exception(&self, _error: &Error) {}
}

/// Receives advisory messages while the object model is built.
pub trait InterpretErrorHandler: Send + Sync {
    /// Something looks suspicious but is kept.
    fn on_warning(&self, message: &str);

    /// Something could not be interpreted and is left out of the tree.
    fn on_error(&self, message: &str);
}

/// Logs interpretation problems. This is the default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterpretErrorHandler;

impl InterpretErrorHandler for LoggingInterpretErrorHandler {
    fn on_warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn on_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DoNothingInterpretErrorHandler;

impl InterpretErrorHandler for DoNothingInterpretErrorHandler {
    fn on_warning(&self, _message: &str) {}

    fn on_error(&self, _message: &str) {}
}

/// Severity of a collected interpretation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpretLevel {
    Warning,
    Error,
}

/// Collects interpretation messages for later inspection.
#[derive(Debug, Default)]
pub struct CollectingInterpretErrorHandler {
    messages: RwLock<Vec<(InterpretLevel, String)>>,
}

impl CollectingInterpretErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all messages collected so far.
    pub fn messages(&self) -> Vec<(InterpretLevel, String)> {
        self.messages.read().clone()
    }

    pub fn warning_count(&self) -> usize {
        self.count(InterpretLevel::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(InterpretLevel::Error)
    }

    fn count(&self, level: InterpretLevel) -> usize {
        self.messages.read().iter().filter(|(l, _)| *l == level).count()
    }
}

impl InterpretErrorHandler for CollectingInterpretErrorHandler {
    fn on_warning(&self, message: &str) {
        self.messages
            .write()
            .push((InterpretLevel::Warning, message.to_string()));
    }

    fn on_error(&self, message: &str) {
        self.messages
            .write()
            .push((InterpretLevel::Error, message.to_string()));
    }
}

static_assertions::assert_impl_all!(CollectingParseErrorHandler: Send, Sync);
static_assertions::assert_impl_all!(ChainedParseErrorHandler: Send, Sync);
static_assertions::assert_impl_all!(CollectingInterpretErrorHandler: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_location::SourceArea;

    fn syntax_error() -> ParseError {
        ParseError::syntax("Unexpected ']'", SourceArea::new(1, 5, 1, 5))
    }

    #[test]
    fn test_throwing_escalates() {
        let err = ThrowingParseErrorHandler
            .on_parse_error(&syntax_error())
            .unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(err.to_string(), "CSS parse error at line 1, column 5: Unexpected ']'");
    }

    #[test]
    fn test_collecting() {
        let handler = CollectingParseErrorHandler::new();
        handler.report(&syntax_error()).unwrap();
        handler
            .report(&ParseError::skipped(
                "skip",
                SourceArea::new(1, 1, 1, 1),
                SourceArea::new(1, 2, 1, 2),
            ))
            .unwrap();
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.count_of(ParseErrorKind::BrowserCompliantSkip), 1);
        handler.clear();
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_chain_stops_on_error() {
        let collecting = Arc::new(CollectingParseErrorHandler::new());
        let chain = ChainedParseErrorHandler::new(
            Arc::new(ThrowingParseErrorHandler),
            collecting.clone(),
        );
        assert!(chain.on_parse_error(&syntax_error()).is_err());
        assert_eq!(collecting.error_count(), 0);

        let chain = DoNothingParseErrorHandler.and_then(LoggingParseErrorHandler);
        assert!(chain.on_parse_error(&syntax_error()).is_ok());
    }

    #[test]
    fn test_collecting_interpret_handler() {
        let handler = CollectingInterpretErrorHandler::new();
        handler.on_warning("Unknown medium 'paper'");
        handler.on_error("Declaration without expression");
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.messages()[0].1, "Unknown medium 'paper'");
    }
}
