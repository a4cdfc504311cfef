//! Tests for writing stylesheets and property values.

use horizon_css::decl::{Declaration, Expression, Selector, SelectorMember, StyleRule};
use horizon_css::prelude::*;
use horizon_css::property::{Property, known_property};
use horizon_css::propertyvalue::PropertyValue;
use horizon_css::utils::rect_helper;

fn read(css: &str) -> CascadingStyleSheet {
    CssReader::read_from_string(css, &ReaderSettings::default()).expect("Failed to read stylesheet")
}

fn optimized(version: CssVersion) -> CssWriter {
    CssWriter::new(WriterSettings::optimized(version))
}

#[test]
fn test_optimized_output_of_two_rules() {
    let sheet = read(".pen {background-color:red} .pen {background-color: blue}");
    assert_eq!(
        optimized(CssVersion::Css30).css_as_string(&sheet).unwrap(),
        ".pen{background-color:red}.pen{background-color:blue}"
    );
}

#[test]
fn test_optimized_terms() {
    let sheet = read("p { margin: 0px 0em 1px; color: #AABBCC; border-color: #aabbcd }");
    assert_eq!(
        optimized(CssVersion::Css30).css_as_string(&sheet).unwrap(),
        "p{margin:0 0 1px;color:#ABC;border-color:#aabbcd}"
    );
}

#[test]
fn test_formatted_output() {
    let sheet = read("@import url(a.css); a{color:red} b{color:blue;width:1px}");
    let writer = CssWriter::default().with_write_header_text(false);
    assert_eq!(
        writer.css_as_string(&sheet).unwrap(),
        "@import url(a.css);\n\
         a { color:red; }\n\
         \n\
         b {\n  color:blue;\n  width:1px;\n}\n"
    );
}

#[test]
fn test_header_and_footer() {
    let sheet = read("a{color:red}");
    let css = CssWriter::default()
        .with_header_text(Some("generated\nby hand"))
        .with_footer_text(Some("the end"))
        .css_as_string(&sheet)
        .unwrap();
    assert!(css.starts_with("/*\n * generated\n * by hand\n */\n"));
    assert!(css.ends_with("/*\n * the end\n */\n"));
}

#[test]
fn test_version_gating() {
    let sheet = read("@supports (display: flex) { a { display: flex } }");
    let error = optimized(CssVersion::Css21).css_as_string(&sheet).unwrap_err();
    assert!(matches!(
        error,
        Error::VersionRequirement { required: CssVersion::Css30, target: CssVersion::Css21, .. }
    ));
    assert!(optimized(CssVersion::Css30).css_as_string(&sheet).is_ok());

    let sheet = read("@media print { a { color: red } }");
    assert!(optimized(CssVersion::Css10).css_as_string(&sheet).is_err());
    assert!(optimized(CssVersion::Css21).css_as_string(&sheet).is_ok());
}

#[test]
fn test_write_css_to_sink() {
    let sheet = read("a{color:red}");
    let mut buffer = Vec::new();
    optimized(CssVersion::Css30)
        .write_css(&sheet, &mut buffer)
        .expect("Failed to write CSS");
    assert_eq!(buffer, b"a{color:red}");
}

#[test]
fn test_node_as_string() {
    let rule = StyleRule::new()
        .with_selector(Selector::from(SelectorMember::simple("p")))
        .with_declaration(Declaration::new("color", Expression::simple("red"), false).unwrap());
    assert_eq!(optimized(CssVersion::Css30).node_as_string(&rule).unwrap(), "p{color:red}");
}

#[test]
fn test_border_radius_writes_vendor_variants() {
    let value = known_property(Property::BorderRadius)
        .new_value("5px", true)
        .expect("Failed to create value");
    assert!(matches!(value, PropertyValue::MultiProperty(_)));

    let names: Vec<String> = value.values().iter().map(|v| v.property().property_name()).collect();
    assert_eq!(
        names,
        ["border-radius", "-moz-border-radius", "-webkit-border-radius", "-khtml-border-radius"]
    );
    assert!(value.values().iter().all(|v| v.value() == "5px" && v.is_important()));

    let css = optimized(CssVersion::Css30).node_as_string(&value).unwrap();
    assert_eq!(css.matches("5px !important;").count(), 4);
    assert!(optimized(CssVersion::Css21).node_as_string(&value).is_err());
}

#[test]
fn test_rect_values() {
    let expected = ["0", "0", "100", "50"].map(String::from);
    for css in ["rect(0,0,100,50)", "rect( 0 , 0 , 100 , 50 )", "rect(0 0 100 50)"] {
        assert_eq!(rect_helper::rect_values(css), Some(expected.clone()), "{css}");
    }
    for css in ["rect(0,0,100)", "rect(0 0, 100 50)", "rect(0,0,100,50", "rec(0,0,100,50)"] {
        assert!(rect_helper::parse_rect(css).is_err(), "{css}");
    }
}

#[test]
fn test_rule_category_switches() {
    let sheet = read(
        "a{color:red}\
         @supports (display:grid){b{c:d}}\
         @viewport{width:device-width}\
         @keyframes spin{from{opacity:0}to{opacity:1}}",
    );
    let write = |settings: WriterSettings| {
        CssWriter::new(settings).css_as_string(&sheet).expect("Failed to write stylesheet")
    };

    let all = write(WriterSettings::optimized(CssVersion::Css30));
    for rule in ["a{color:red}", "@supports", "@viewport", "@keyframes"] {
        assert!(all.contains(rule), "{rule} missing from {all}");
    }

    let css = write(WriterSettings::optimized(CssVersion::Css30).with_write_supports_rules(false));
    assert!(!css.contains("@supports"));
    assert!(!css.contains("b{c:d}"));
    assert!(css.contains("@viewport") && css.contains("@keyframes"));

    let css = write(WriterSettings::optimized(CssVersion::Css30).with_write_viewport_rules(false));
    assert!(!css.contains("@viewport"));
    assert!(!css.contains("device-width"));
    assert!(css.contains("@supports") && css.contains("@keyframes"));

    let css = write(WriterSettings::optimized(CssVersion::Css30).with_write_keyframes_rules(false));
    assert!(!css.contains("@keyframes"));
    assert!(!css.contains("spin"));
    assert!(css.contains("@supports") && css.contains("@viewport"));
    assert!(css.starts_with("a{color:red}"));
}
