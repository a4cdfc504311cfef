//! Tests for reading stylesheets and declaration lists.

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use encoding_rs::{ISO_8859_15, WINDOWS_1252};
use horizon_css::prelude::*;
use horizon_css::reader::{
    CollectingInterpretErrorHandler, CollectingParseErrorHandler, LibraryContext,
    LoggingParseErrorHandler, ParseErrorHandler, ParseExceptionHandler,
};
use horizon_css::source_location::SourceLocationAware;

#[derive(Default)]
struct CountingExceptionHandler {
    count: AtomicUsize,
}

impl ParseExceptionHandler for CountingExceptionHandler {
    fn on_exception(&self, error: &Error) {
        assert!(matches!(error, Error::Parse { .. } | Error::Charset(_) | Error::Io { .. }));
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting() -> (Arc<CountingExceptionHandler>, ReaderSettings) {
    let handler = Arc::new(CountingExceptionHandler::default());
    let settings = ReaderSettings::default().with_exception_handler(handler.clone());
    (handler, settings)
}

#[test]
fn test_source_locations_of_declarations() {
    let sheet = CssReader::read_from_string("div { color:red; width: 100%; }", &ReaderSettings::default())
        .expect("Failed to read stylesheet");

    let rule = sheet.rules()[0].as_style().expect("Expected a style rule");
    assert_eq!(rule.declaration_count(), 2);

    let location = rule.declarations()[0]
        .source_location()
        .expect("Expected a source location");
    assert_eq!(location.first_token_begin_line(), Some(1));
    assert_eq!(location.first_token_begin_column(), Some(7));
    assert_eq!(location.first_token_end_column(), Some(11));
}

#[test]
fn test_source_locations_disabled() {
    let settings = ReaderSettings::default().with_use_source_location(false);
    let sheet = CssReader::read_from_string("div { color:red }", &settings).unwrap();
    let rule = sheet.rules()[0].as_style().unwrap();
    assert!(rule.source_location().is_none());
    assert!(rule.declarations()[0].source_location().is_none());
}

#[test]
fn test_tab_size_affects_columns() {
    let settings = ReaderSettings::default().with_tab_size(4).unwrap();
    let sheet = CssReader::read_from_string("\ta { b: c }", &settings).unwrap();
    let location = sheet.rules()[0].source_location().unwrap();
    assert_eq!(location.first_token_begin_column(), Some(5));
}

#[test]
fn test_exception_handler_called_once() {
    let (handler, settings) = counting();
    assert!(CssReader::read_from_string("a { color: red", &settings).is_none());
    assert_eq!(handler.count.load(Ordering::SeqCst), 1);

    assert!(CssReader::read_from_string("a { color: red }", &settings).is_some());
    assert_eq!(handler.count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_try_read_bypasses_exception_handler() {
    let (handler, settings) = counting();
    let error = CssReader::try_read_from_string("a { color: red", &settings).unwrap_err();
    assert!(error.is_parse_error());
    assert_eq!(handler.count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_css10_cannot_be_read() {
    assert!(matches!(
        ReaderSettings::new(CssVersion::Css10),
        Err(Error::UnsupportedVersion(CssVersion::Css10))
    ));
    assert!(!CssReader::is_valid_css("a{}", CssVersion::Css10));
}

#[test]
fn test_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"@charset \"iso-8859-15\";\np:before { content: \"\xA4\" }")
        .expect("Failed to write temp file");

    let sheet = CssReader::read_from_file(file.path(), &ReaderSettings::default())
        .expect("Failed to read stylesheet file");
    let declaration = &sheet.rules()[0].as_style().unwrap().declarations()[0];
    assert_eq!(declaration.expression().to_string(), "\"\u{20ac}\"");

    let bytes = std::fs::read(file.path()).unwrap();
    assert_eq!(CssReader::charset_declared_in_css(&bytes).unwrap(), Some(ISO_8859_15));
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (handler, settings) = counting();
    assert!(CssReader::read_from_file(dir.path().join("missing.css"), &settings).is_none());
    assert_eq!(handler.count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fallback_encoding() {
    let bytes = b"p:before { content: \"\xE4\" }";
    let (handler, settings) = counting();
    assert!(CssReader::read_from_bytes(bytes, &settings).is_none());
    assert_eq!(handler.count.load(Ordering::SeqCst), 1);

    let settings = settings.with_fallback_encoding(WINDOWS_1252);
    let sheet = CssReader::read_from_bytes(bytes, &settings).unwrap();
    let declaration = &sheet.rules()[0].as_style().unwrap().declarations()[0];
    assert_eq!(declaration.expression().to_string(), "\"\u{e4}\"");
}

#[test]
fn test_utf8_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"a { b: c }");
    assert!(CssReader::read_from_bytes(&bytes, &ReaderSettings::default()).is_some());
}

#[test]
fn test_unknown_charset() {
    let (handler, settings) = counting();
    assert!(CssReader::read_from_bytes(b"@charset \"klingon\"; a{}", &settings).is_none());
    assert_eq!(handler.count.load(Ordering::SeqCst), 1);
    assert!(matches!(
        CssReader::charset_declared_in_css(b"@charset \"klingon\";"),
        Err(Error::Charset(_))
    ));
}

#[test]
fn test_context_handlers() {
    let context = Arc::new(LibraryContext::new());
    let errors = Arc::new(CollectingParseErrorHandler::new());
    let warnings = Arc::new(CollectingInterpretErrorHandler::new());
    context.set_parse_error_handler(errors.clone());
    context.set_interpret_error_handler(warnings.clone());

    let settings = ReaderSettings::default().with_context(context);
    let sheet = CssReader::read_from_string(
        "a { color: red; ] } @media paper { b { c: d } }",
        &settings,
    )
    .expect("Recoverable errors should not fail the read");

    assert_eq!(sheet.rule_count(), 2);
    assert!(errors.has_errors());
    assert_eq!(warnings.warning_count(), 1);
}

#[test]
fn test_context_swaps_handlers_while_reading() {
    let context = LibraryContext::new();
    let first: Arc<dyn ParseErrorHandler> = Arc::new(CollectingParseErrorHandler::new());
    let second: Arc<dyn ParseErrorHandler> = Arc::new(LoggingParseErrorHandler);
    let address =
        |handler: &Arc<dyn ParseErrorHandler>| Arc::as_ptr(handler) as *const () as usize;
    let installed = [address(&first), address(&second)];
    context.set_parse_error_handler(first.clone());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    let handler = context.parse_error_handler();
                    assert!(installed.contains(&address(&handler)));
                }
            });
        }
        scope.spawn(|| {
            for i in 0..1_000 {
                let next = if i % 2 == 0 { &second } else { &first };
                context.set_parse_error_handler(next.clone());
            }
        });
    });

    context.set_parse_error_handler(second.clone());
    assert_eq!(address(&context.parse_error_handler()), address(&second));
}

#[test]
fn test_declaration_list_reader() {
    let list = CssDeclarationListReader::read_from_string(
        "color: red; --accent: #abc; margin: 0 auto !important",
        &ReaderSettings::default(),
    )
    .expect("Failed to read declaration list");

    assert_eq!(list.declaration_count(), 3);
    assert!(list.declarations()[1].is_custom_property());
    assert!(list.declarations()[2].is_important());
    assert!(CssDeclarationListReader::is_valid_css("a: b", CssVersion::Css21));
    assert!(!CssDeclarationListReader::is_valid_css("a: b; {", CssVersion::Css30));
}

#[test]
fn test_is_valid_css() {
    assert!(CssReader::is_valid_css(
        "@import url(a.css); @namespace svg url(x); a:hover > b::after { c: d }",
        CssVersion::Css30
    ));
    assert!(!CssReader::is_valid_css("a { b: c; } }", CssVersion::Css30));
}
