//! Tests for browser-compliant error recovery.

use std::sync::Arc;

use horizon_css::parser::ParseErrorKind;
use horizon_css::prelude::*;
use horizon_css::reader::CollectingParseErrorHandler;

fn read(css: &str) -> (Option<CascadingStyleSheet>, Arc<CollectingParseErrorHandler>) {
    let errors = Arc::new(CollectingParseErrorHandler::new());
    let settings = ReaderSettings::default()
        .with_browser_compliant(true)
        .with_parse_error_handler(errors.clone());
    (CssReader::read_from_string(css, &settings), errors)
}

#[test]
fn test_malformed_rule_between_valid_rules() {
    let (sheet, errors) = read("a{color:red} b$c{x:y} c{color:blue}");
    let sheet = sheet.expect("Browser-compliant read should succeed");
    assert_eq!(sheet.rule_count(), 2);
    assert_eq!(errors.count_of(ParseErrorKind::BrowserCompliantSkip), 1);

    let css = CssWriter::new(WriterSettings::optimized(CssVersion::Css30))
        .css_as_string(&sheet)
        .unwrap();
    assert_eq!(css, "a{color:red}c{color:blue}");
}

#[test]
fn test_skipped_span_is_reported() {
    let (_, errors) = read("a{color:red} b$c{x:y} c{color:blue}");
    let error = &errors.errors()[0];
    let (from, to) = error.skipped.expect("Expected a skipped span");
    assert_eq!(from.begin_column, 14);
    assert_eq!(to.end_column, 21);
}

#[test]
fn test_malformed_declaration_is_skipped() {
    let (sheet, errors) = read("a { color: red; width: (1; 2); height: 1px }");
    let sheet = sheet.unwrap();
    let rule = sheet.rules()[0].as_style().unwrap();
    let properties: Vec<&str> = rule.declarations().iter().map(|d| d.property()).collect();
    assert_eq!(properties, ["color", "height"]);
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn test_unterminated_rule_is_dropped() {
    let (sheet, errors) = read(".class{color:red;.class{color:green}.class{color:blue}");
    assert_eq!(sheet.unwrap().rule_count(), 0);
    assert_eq!(errors.count_of(ParseErrorKind::BrowserCompliantSkip), 1);
}

#[test]
fn test_each_malformed_rule_is_reported_once() {
    let valid = ["a{b:c}", "d{e:f}", "g{h:i}"];
    let css = valid.join(" x$y{} ");
    let (sheet, errors) = read(&css);
    assert_eq!(sheet.unwrap().rule_count(), valid.len());
    assert_eq!(errors.count_of(ParseErrorKind::BrowserCompliantSkip), valid.len() - 1);
}

#[test]
fn test_strict_mode_fails_on_same_input() {
    let settings = ReaderSettings::default();
    assert!(CssReader::try_read_from_string("a{color:red} b$c{x:y} c{color:blue}", &settings).is_err());
}

#[test]
fn test_logging_handler_recovers() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let settings = ReaderSettings::default()
        .with_browser_compliant(true)
        .with_parse_error_handler(Arc::new(horizon_css::reader::LoggingParseErrorHandler));
    let sheet = CssReader::read_from_string("a{color:red} b$c{x:y} c{color:blue}", &settings)
        .expect("Logging handler should not abort the read");
    assert_eq!(sheet.rule_count(), 2);
}
