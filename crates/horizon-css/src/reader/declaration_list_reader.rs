//! Reading bare declaration lists, such as the content of a `style` attribute.

use std::sync::Arc;

use encoding_rs::Encoding;

use super::css_reader::{decode_fragment, report, strip_bom};
use super::error_handler::{
    DoNothingInterpretErrorHandler, DoNothingParseExceptionHandler, ThrowingParseErrorHandler,
};
use super::settings::ReaderSettings;
use crate::decl::DeclarationList;
use crate::handler;
use crate::parser::{CharStream, parse_declaration_list};
use crate::version::CssVersion;
use crate::Result;

/// Reads declaration lists like `color: red; margin: 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssDeclarationListReader;

impl CssDeclarationListReader {
    pub fn read_from_string(css: &str, settings: &ReaderSettings) -> Option<DeclarationList> {
        report(Self::try_read_from_string(css, settings), settings)
    }

    pub fn try_read_from_string(css: &str, settings: &ReaderSettings) -> Result<DeclarationList> {
        let errors = settings.parse_error_handler();
        let stream = CharStream::new(strip_bom(css), settings.tab_size());
        let node = parse_declaration_list(&stream, errors.as_ref(), settings.is_browser_compliant())?;

        let interpret = settings.interpret_error_handler();
        handler::create_declaration_list(&node, interpret.as_ref(), settings.is_use_source_location())
    }

    /// Read raw bytes using a byte order mark or the fallback encoding.
    pub fn read_from_bytes(bytes: &[u8], settings: &ReaderSettings) -> Option<DeclarationList> {
        report(Self::try_read_from_bytes(bytes, settings), settings)
    }

    pub fn try_read_from_bytes(bytes: &[u8], settings: &ReaderSettings) -> Result<DeclarationList> {
        let css = decode_fragment(bytes, settings.fallback_encoding())?;
        Self::try_read_from_string(&css, settings)
    }

    pub fn is_valid_css(css: &str, version: CssVersion) -> bool {
        let Ok(settings) = ReaderSettings::new(version) else {
            return false;
        };
        let settings = settings
            .with_parse_error_handler(Arc::new(ThrowingParseErrorHandler))
            .with_exception_handler(Arc::new(DoNothingParseExceptionHandler))
            .with_interpret_error_handler(Arc::new(DoNothingInterpretErrorHandler));
        Self::try_read_from_string(css, &settings).is_ok()
    }

    pub fn is_valid_css_bytes(bytes: &[u8], fallback: &'static Encoding, version: CssVersion) -> bool {
        match decode_fragment(bytes, fallback) {
            Ok(css) => Self::is_valid_css(&css, version),
            Err(_) => false,
        }
    }
}
