//! Options for reading CSS.

use std::fmt;
use std::sync::Arc;

use encoding_rs::{Encoding, UTF_8};

use super::context::LibraryContext;
use super::error_handler::{InterpretErrorHandler, ParseErrorHandler, ParseExceptionHandler};
use crate::version::CssVersion;
use crate::{Error, Result};

/// The tab width used for column numbers unless configured otherwise.
pub const DEFAULT_TAB_SIZE: u32 = 8;

/// Settings for [`CssReader`](super::CssReader) and
/// [`CssDeclarationListReader`](super::CssDeclarationListReader).
///
/// Handlers that are not set explicitly are taken from the configured
/// [`LibraryContext`], or from [`LibraryContext::global`] if there is none.
#[derive(Clone)]
pub struct ReaderSettings {
    version: CssVersion,
    fallback_encoding: &'static Encoding,
    browser_compliant: bool,
    tab_size: u32,
    use_source_location: bool,
    parse_error_handler: Option<Arc<dyn ParseErrorHandler>>,
    exception_handler: Option<Arc<dyn ParseExceptionHandler>>,
    interpret_error_handler: Option<Arc<dyn InterpretErrorHandler>>,
    context: Option<Arc<LibraryContext>>,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            version: CssVersion::LATEST,
            fallback_encoding: UTF_8,
            browser_compliant: false,
            tab_size: DEFAULT_TAB_SIZE,
            use_source_location: true,
            parse_error_handler: None,
            exception_handler: None,
            interpret_error_handler: None,
            context: None,
        }
    }
}

impl fmt::Debug for ReaderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderSettings")
            .field("version", &self.version)
            .field("fallback_encoding", &self.fallback_encoding.name())
            .field("browser_compliant", &self.browser_compliant)
            .field("tab_size", &self.tab_size)
            .field("use_source_location", &self.use_source_location)
            .field("custom_parse_error_handler", &self.parse_error_handler.is_some())
            .field("custom_exception_handler", &self.exception_handler.is_some())
            .field(
                "custom_interpret_error_handler",
                &self.interpret_error_handler.is_some(),
            )
            .field("custom_context", &self.context.is_some())
            .finish()
    }
}

impl ReaderSettings {
    /// Default settings reading the given version.
    pub fn new(version: CssVersion) -> Result<Self> {
        Self::default().with_version(version)
    }

    /// Only CSS 2.1 and CSS 3.0 can be read.
    pub fn with_version(mut self, version: CssVersion) -> Result<Self> {
        if version == CssVersion::Css10 {
            return Err(Error::UnsupportedVersion(version));
        }
        self.version = version;
        Ok(self)
    }

    /// The encoding used for byte input without BOM and `@charset`.
    pub fn with_fallback_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.fallback_encoding = encoding;
        self
    }

    /// Skip malformed constructs instead of failing, like a browser does.
    pub fn with_browser_compliant(mut self, browser_compliant: bool) -> Self {
        self.browser_compliant = browser_compliant;
        self
    }

    pub fn with_tab_size(mut self, tab_size: u32) -> Result<Self> {
        if tab_size == 0 {
            return Err(Error::invalid_argument("The tab size must be positive"));
        }
        self.tab_size = tab_size;
        Ok(self)
    }

    pub fn with_use_source_location(mut self, use_source_location: bool) -> Self {
        self.use_source_location = use_source_location;
        self
    }

    pub fn with_parse_error_handler(mut self, handler: Arc<dyn ParseErrorHandler>) -> Self {
        self.parse_error_handler = Some(handler);
        self
    }

    pub fn with_exception_handler(mut self, handler: Arc<dyn ParseExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    pub fn with_interpret_error_handler(mut self, handler: Arc<dyn InterpretErrorHandler>) -> Self {
        self.interpret_error_handler = Some(handler);
        self
    }

    /// Take default handlers from `context` instead of the global one.
    pub fn with_context(mut self, context: Arc<LibraryContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn version(&self) -> CssVersion {
        self.version
    }

    pub fn fallback_encoding(&self) -> &'static Encoding {
        self.fallback_encoding
    }

    pub fn is_browser_compliant(&self) -> bool {
        self.browser_compliant
    }

    pub fn tab_size(&self) -> u32 {
        self.tab_size
    }

    pub fn is_use_source_location(&self) -> bool {
        self.use_source_location
    }

    fn context(&self) -> &LibraryContext {
        self.context.as_deref().unwrap_or_else(|| LibraryContext::global())
    }

    /// The custom parse error handler, or the context default.
    pub fn parse_error_handler(&self) -> Arc<dyn ParseErrorHandler> {
        match &self.parse_error_handler {
            Some(handler) => Arc::clone(handler),
            None => self.context().parse_error_handler(),
        }
    }

    /// The custom exception handler, or the context default.
    pub fn exception_handler(&self) -> Arc<dyn ParseExceptionHandler> {
        match &self.exception_handler {
            Some(handler) => Arc::clone(handler),
            None => self.context().exception_handler(),
        }
    }

    /// The custom interpretation handler, or the context default.
    pub fn interpret_error_handler(&self) -> Arc<dyn InterpretErrorHandler> {
        match &self.interpret_error_handler {
            Some(handler) => Arc::clone(handler),
            None => self.context().interpret_error_handler(),
        }
    }
}

static_assertions::assert_impl_all!(ReaderSettings: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{CollectingInterpretErrorHandler, DoNothingParseErrorHandler};

    #[test]
    fn test_defaults() {
        let settings = ReaderSettings::default();
        assert_eq!(settings.version(), CssVersion::Css30);
        assert_eq!(settings.fallback_encoding(), UTF_8);
        assert_eq!(settings.tab_size(), 8);
        assert!(settings.is_use_source_location());
        assert!(!settings.is_browser_compliant());
    }

    #[test]
    fn test_version_validation() {
        assert!(matches!(
            ReaderSettings::new(CssVersion::Css10),
            Err(Error::UnsupportedVersion(CssVersion::Css10))
        ));
        let settings = ReaderSettings::new(CssVersion::Css21).unwrap();
        assert_eq!(settings.version(), CssVersion::Css21);
    }

    #[test]
    fn test_tab_size_validation() {
        assert!(ReaderSettings::default().with_tab_size(0).is_err());
        assert_eq!(ReaderSettings::default().with_tab_size(4).unwrap().tab_size(), 4);
    }

    #[test]
    fn test_handler_resolution() {
        let context = Arc::new(LibraryContext::new());
        let collecting = Arc::new(CollectingInterpretErrorHandler::new());
        context.set_interpret_error_handler(collecting.clone());

        let settings = ReaderSettings::default().with_context(context);
        settings.interpret_error_handler().on_warning("from context");
        assert_eq!(collecting.warning_count(), 1);

        let custom = Arc::new(CollectingInterpretErrorHandler::new());
        let settings = settings.with_interpret_error_handler(custom.clone());
        settings.interpret_error_handler().on_warning("custom");
        assert_eq!(custom.warning_count(), 1);
        assert_eq!(collecting.warning_count(), 1);

        let settings = settings.with_parse_error_handler(Arc::new(DoNothingParseErrorHandler));
        assert!(format!("{settings:?}").contains("custom_parse_error_handler: true"));
    }
}
