//! Reading what was written gives the same object model.

use horizon_css::prelude::*;

const STYLESHEETS: &[&str] = &[
    "div { color:red; width: 100%; }",
    "@import url(print.css) print; @namespace svg url(http://www.w3.org/2000/svg); svg|a { fill: #fff }",
    "h1, h2 > .title + p ~ span, #id:hover::before { margin: 0 auto !important; font: 12px/1.5 Arial, sans-serif }",
    "input[type='text'], a[href^=http], a:not(.x, #y), li:nth-child(2n+1) { color: rgb(1, 2, 3) }",
    "@media screen and (max-width: 600px), print { a { color: blue } @media (color) { b { c: d } } }",
    "@font-face { font-family: 'Mine'; src: url(a.woff) format('woff') }",
    "@keyframes spin { from { transform: rotate(0deg) } 50%, to { transform: rotate(360deg) } }",
    "@supports (display: grid) and (not (display: inline-grid)) { a { display: grid } }",
    "@page :first { margin: 1in; @top-left { content: 'x' } }",
    "a { width: calc(100% - (2 * 10px)); grid-template-columns: [first] 1fr [second] 2fr }",
    "@layer base, theme; @layer base { a { color: red } }",
    ":root { --main-color: #06c; } a { color: var(--main-color) }",
];

fn read(css: &str) -> CascadingStyleSheet {
    CssReader::read_from_string(css, &ReaderSettings::default())
        .unwrap_or_else(|| panic!("Failed to read: {css}"))
}

#[test]
fn test_round_trip() {
    let writer = CssWriter::default();
    for css in STYLESHEETS {
        let first = read(css);
        let written = writer.css_as_string(&first).unwrap();
        let second = read(&written);
        assert_eq!(first, second, "{css}\n---\n{written}");
    }
}

#[test]
fn test_round_trip_optimized() {
    let writer = CssWriter::new(WriterSettings::optimized(CssVersion::Css30));
    for css in STYLESHEETS {
        let written = writer.css_as_string(&read(css)).unwrap();
        let rewritten = writer.css_as_string(&read(&written)).unwrap();
        assert_eq!(written, rewritten, "{css}");
    }
}

#[test]
fn test_serialization_is_idempotent() {
    let writer = CssWriter::default();
    for css in STYLESHEETS {
        let written = writer.css_as_string(&read(css)).unwrap();
        let rewritten = writer.css_as_string(&read(&written)).unwrap();
        assert_eq!(written, rewritten, "{css}");
    }
}
