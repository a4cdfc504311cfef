//! Default handlers shared by all readers.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::error_handler::{
    InterpretErrorHandler, LoggingInterpretErrorHandler, LoggingParseExceptionHandler,
    ParseErrorHandler, ParseExceptionHandler, ThrowingParseErrorHandler,
};

static GLOBAL_CONTEXT: OnceLock<LibraryContext> = OnceLock::new();

#[derive(Clone)]
struct Handlers {
    parse_error: Arc<dyn ParseErrorHandler>,
    exception: Arc<dyn ParseExceptionHandler>,
    interpret: Arc<dyn InterpretErrorHandler>,
}

/// The default handlers used when [`ReaderSettings`](super::ReaderSettings)
/// does not name its own.
///
/// A fresh context throws on recoverable parse errors and logs exceptions
/// and interpretation messages. Replacing a handler affects all reads that
/// start afterwards.
pub struct LibraryContext {
    handlers: RwLock<Handlers>,
}

impl Default for LibraryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LibraryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryContext").finish_non_exhaustive()
    }
}

impl LibraryContext {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Handlers {
                parse_error: Arc::new(ThrowingParseErrorHandler),
                exception: Arc::new(LoggingParseExceptionHandler),
                interpret: Arc::new(LoggingInterpretErrorHandler),
            }),
        }
    }

    /// The process-wide context.
    pub fn global() -> &'static LibraryContext {
        GLOBAL_CONTEXT.get_or_init(LibraryContext::new)
    }

    pub fn parse_error_handler(&self) -> Arc<dyn ParseErrorHandler> {
        Arc::clone(&self.handlers.read().parse_error)
    }

    pub fn set_parse_error_handler(&self, handler: Arc<dyn ParseErrorHandler>) {
        self.handlers.write().parse_error = handler;
    }

    pub fn exception_handler(&self) -> Arc<dyn ParseExceptionHandler> {
        Arc::clone(&self.handlers.read().exception)
    }

    pub fn set_exception_handler(&self, handler: Arc<dyn ParseExceptionHandler>) {
        self.handlers.write().exception = handler;
    }

    pub fn interpret_error_handler(&self) -> Arc<dyn InterpretErrorHandler> {
        Arc::clone(&self.handlers.read().interpret)
    }

    pub fn set_interpret_error_handler(&self, handler: Arc<dyn InterpretErrorHandler>) {
        self.handlers.write().interpret = handler;
    }

    /// Restore the initial handlers.
    pub fn reset(&self) {
        let initial = LibraryContext::new().handlers.into_inner();
        *self.handlers.write() = initial;
    }
}

static_assertions::assert_impl_all!(LibraryContext: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use crate::reader::CollectingParseErrorHandler;
    use crate::source_location::SourceArea;

    fn error() -> ParseError {
        ParseError::syntax("x", SourceArea::new(1, 1, 1, 1))
    }

    #[test]
    fn test_default_handler_throws() {
        let context = LibraryContext::new();
        assert!(context.parse_error_handler().on_parse_error(&error()).is_err());
    }

    #[test]
    fn test_replace_and_reset() {
        let context = LibraryContext::new();
        let collecting = Arc::new(CollectingParseErrorHandler::new());
        context.set_parse_error_handler(collecting.clone());
        context.parse_error_handler().on_parse_error(&error()).unwrap();
        assert_eq!(collecting.error_count(), 1);

        context.reset();
        assert!(context.parse_error_handler().on_parse_error(&error()).is_err());
        assert_eq!(collecting.error_count(), 1);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(LibraryContext::global(), LibraryContext::global()));
    }
}
