//! Reading complete stylesheets from text, bytes and files.
//!
//! Reading runs in three steps: the input is decoded, tokenized and parsed
//! into a syntax tree, and the tree is converted into a
//! [`CascadingStyleSheet`]. Recoverable problems go to the parse error
//! handler of the [`ReaderSettings`]; an unrecoverable error ends the read
//! and is passed to the exception handler, after which the read yields
//! `None`. The `try_*` variants return that error instead.

use std::path::Path;
use std::sync::Arc;

use encoding_rs::{Encoding, WINDOWS_1252};

use super::error_handler::{
    DoNothingInterpretErrorHandler, DoNothingParseExceptionHandler, ThrowingParseErrorHandler,
};
use super::settings::ReaderSettings;
use crate::decl::CascadingStyleSheet;
use crate::handler;
use crate::parser::{CharStream, declared_charset, parse_stylesheet};
use crate::version::CssVersion;
use crate::{Error, Result};

/// Reads CSS stylesheets.
///
/// ```
/// use horizon_css::prelude::*;
///
/// let settings = ReaderSettings::default();
/// let sheet = CssReader::read_from_string("@import 'a.css'; p { margin: 0 }", &settings)
///     .unwrap();
/// assert_eq!(sheet.import_rules().len(), 1);
/// assert_eq!(sheet.rule_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssReader;

impl CssReader {
    /// Read a stylesheet from already decoded text.
    ///
    /// A `@charset` rule in the text is ignored.
    pub fn read_from_string(css: &str, settings: &ReaderSettings) -> Option<CascadingStyleSheet> {
        report(Self::try_read_from_string(css, settings), settings)
    }

    pub fn try_read_from_string(css: &str, settings: &ReaderSettings) -> Result<CascadingStyleSheet> {
        let css = strip_bom(css);
        let errors = settings.parse_error_handler();
        let stream = CharStream::new(css, settings.tab_size());
        let root = parse_stylesheet(&stream, errors.as_ref(), settings.is_browser_compliant())?;

        let interpret = settings.interpret_error_handler();
        handler::create_stylesheet(&root, interpret.as_ref(), settings.is_use_source_location())
    }

    /// Read a stylesheet from raw bytes.
    ///
    /// The encoding is taken from a byte order mark, then from a leading
    /// `@charset` rule, and finally from the fallback encoding of the
    /// settings.
    pub fn read_from_bytes(bytes: &[u8], settings: &ReaderSettings) -> Option<CascadingStyleSheet> {
        report(Self::try_read_from_bytes(bytes, settings), settings)
    }

    pub fn try_read_from_bytes(
        bytes: &[u8],
        settings: &ReaderSettings,
    ) -> Result<CascadingStyleSheet> {
        let css = decode_stylesheet(bytes, settings.fallback_encoding())?;
        Self::try_read_from_string(&css, settings)
    }

    /// Read a stylesheet file, detecting its encoding like
    /// [`read_from_bytes`](Self::read_from_bytes).
    pub fn read_from_file(
        path: impl AsRef<Path>,
        settings: &ReaderSettings,
    ) -> Option<CascadingStyleSheet> {
        report(Self::try_read_from_file(path, settings), settings)
    }

    pub fn try_read_from_file(
        path: impl AsRef<Path>,
        settings: &ReaderSettings,
    ) -> Result<CascadingStyleSheet> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Reading stylesheet");
        Self::try_read_from_bytes(&bytes, settings)
    }

    /// Whether `css` is a stylesheet that parses without any error.
    pub fn is_valid_css(css: &str, version: CssVersion) -> bool {
        match strict_settings(version) {
            Some(settings) => Self::try_read_from_string(css, &settings).is_ok(),
            None => false,
        }
    }

    /// Whether `bytes` decode with `fallback` and parse without any error.
    pub fn is_valid_css_bytes(
        bytes: &[u8],
        fallback: &'static Encoding,
        version: CssVersion,
    ) -> bool {
        match strict_settings(version) {
            Some(settings) => {
                let settings = settings.with_fallback_encoding(fallback);
                Self::try_read_from_bytes(bytes, &settings).is_ok()
            }
            None => false,
        }
    }

    /// The encoding named by a leading `@charset` rule of `bytes`.
    ///
    /// Returns `Ok(None)` if there is no such rule and an error if the
    /// named charset is unknown. A declared UTF-16 without byte order mark
    /// is reported as UTF-8, since the rule itself was readable as ASCII.
    pub fn charset_declared_in_css(bytes: &[u8]) -> Result<Option<&'static Encoding>> {
        let (provisional, bom) = match Encoding::for_bom(bytes) {
            Some((encoding, length)) => {
                (encoding.decode_without_bom_handling(&bytes[length..]).0, true)
            }
            None => (WINDOWS_1252.decode_without_bom_handling(bytes).0, false),
        };
        let Some(label) = declared_charset(&provisional) else {
            return Ok(None);
        };
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| Error::charset(format!("Unsupported charset '{label}'")))?;
        Ok(Some(if bom { encoding } else { encoding.output_encoding() }))
    }
}

/// Strict settings that stay silent about failures.
fn strict_settings(version: CssVersion) -> Option<ReaderSettings> {
    let settings = ReaderSettings::new(version).ok()?;
    Some(
        settings
            .with_parse_error_handler(Arc::new(ThrowingParseErrorHandler))
            .with_exception_handler(Arc::new(DoNothingParseExceptionHandler))
            .with_interpret_error_handler(Arc::new(DoNothingInterpretErrorHandler)),
    )
}

/// Pass a failed read to the exception handler.
pub(super) fn report<T>(result: Result<T>, settings: &ReaderSettings) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            settings.exception_handler().on_exception(&error);
            None
        }
    }
}

pub(super) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Decode a complete stylesheet, honouring BOM and `@charset`.
fn decode_stylesheet(bytes: &[u8], fallback: &'static Encoding) -> Result<String> {
    let bom = Encoding::for_bom(bytes);
    let declared = CssReader::charset_declared_in_css(bytes)?;

    let (encoding, body) = match (bom, declared) {
        (Some((from_bom, length)), Some(from_rule)) => {
            if from_bom != from_rule {
                tracing::warn!(
                    bom = from_bom.name(),
                    charset = from_rule.name(),
                    "Byte order mark and @charset disagree, using the @charset"
                );
            }
            (from_rule, &bytes[length..])
        }
        (Some((from_bom, length)), None) => (from_bom, &bytes[length..]),
        (None, Some(from_rule)) => (from_rule, bytes),
        (None, None) => (fallback, bytes),
    };
    tracing::debug!(encoding = encoding.name(), "Decoding stylesheet");
    decode(body, encoding)
}

/// Decode without any detection. Malformed input is an error.
pub(super) fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, malformed) = encoding.decode_without_bom_handling(bytes);
    if malformed {
        return Err(Error::charset(format!(
            "The input is not valid {}",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Decode a fragment that cannot carry a `@charset` rule.
pub(super) fn decode_fragment(bytes: &[u8], fallback: &'static Encoding) -> Result<String> {
    match Encoding::for_bom(bytes) {
        Some((encoding, length)) => decode(&bytes[length..], encoding),
        None => decode(bytes, fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{HasDeclarations, RuleContainer};
    use crate::reader::CollectingParseErrorHandler;
    use encoding_rs::{ISO_8859_15, UTF_8, UTF_16LE};

    fn quiet() -> ReaderSettings {
        ReaderSettings::default().with_exception_handler(Arc::new(DoNothingParseExceptionHandler))
    }

    #[test]
    fn test_read_from_string() {
        let sheet = CssReader::read_from_string("div { color:red; width: 100%; }", &quiet()).unwrap();
        assert_eq!(sheet.rule_count(), 1);
        assert_eq!(sheet.rules()[0].as_style().unwrap().declaration_count(), 2);
    }

    #[test]
    fn test_read_failure_yields_none() {
        assert!(CssReader::read_from_string("div { color: red", &quiet()).is_none());
        let err = CssReader::try_read_from_string("div { color: red", &quiet()).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_browser_compliant_recovery() {
        let collecting = Arc::new(CollectingParseErrorHandler::new());
        let settings = quiet()
            .with_browser_compliant(true)
            .with_parse_error_handler(collecting.clone());
        let sheet = CssReader::read_from_string("a{color:red} b$c{x:y} c{color:blue}", &settings)
            .unwrap();
        assert_eq!(sheet.rule_count(), 2);
        assert_eq!(collecting.error_count(), 1);
    }

    #[test]
    fn test_is_valid_css() {
        assert!(CssReader::is_valid_css("a{b:c}", CssVersion::Css30));
        assert!(CssReader::is_valid_css("a{b:c}", CssVersion::Css21));
        assert!(!CssReader::is_valid_css("a{b:c}", CssVersion::Css10));
        assert!(!CssReader::is_valid_css("a{b:c", CssVersion::Css30));
        assert!(CssReader::is_valid_css_bytes(b"a{b:c}", UTF_8, CssVersion::Css30));
    }

    #[test]
    fn test_charset_declared_in_css() {
        assert_eq!(
            CssReader::charset_declared_in_css(b"@charset \"iso-8859-15\"; a{}").unwrap(),
            Some(ISO_8859_15)
        );
        assert_eq!(CssReader::charset_declared_in_css(b"a{}").unwrap(), None);
        assert!(matches!(
            CssReader::charset_declared_in_css(b"@charset \"no-such-charset\";"),
            Err(Error::Charset(_))
        ));
    }

    #[test]
    fn test_declared_charset_is_used() {
        // 0xA4 is the euro sign in ISO-8859-15.
        let mut bytes = b"@charset \"iso-8859-15\"; a { content: \"".to_vec();
        bytes.push(0xA4);
        bytes.extend_from_slice(b"\" }");
        let sheet = CssReader::read_from_bytes(&bytes, &quiet()).unwrap();
        let declaration = &sheet.rules()[0].as_style().unwrap().declarations()[0];
        assert!(declaration.expression().to_string().contains('\u{20ac}'));
    }

    #[test]
    fn test_bom_is_used() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "a{b:c}".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(Encoding::for_bom(&bytes).map(|(e, _)| e), Some(UTF_16LE));
        let sheet = CssReader::read_from_bytes(&bytes, &quiet()).unwrap();
        assert_eq!(sheet.rule_count(), 1);
    }

    #[test]
    fn test_invalid_bytes_for_fallback() {
        let err = CssReader::try_read_from_bytes(&[b'a', b'{', 0xFF, b'}'], &quiet()).unwrap_err();
        assert!(matches!(err, Error::Charset(_)));
        let settings = quiet().with_fallback_encoding(WINDOWS_1252);
        assert!(CssReader::read_from_bytes(&[b'a', 0xE4, b'{', b'}'], &settings).is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = CssReader::try_read_from_file("/definitely/not/here.css", &quiet()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_leading_bom_character_is_ignored() {
        assert!(CssReader::read_from_string("\u{feff}a{b:c}", &quiet()).is_some());
    }
}
