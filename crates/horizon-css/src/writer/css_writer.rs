//! Writing whole stylesheets, with optional header, footer and charset.

use std::io;

use encoding_rs::Encoding;

use super::settings::WriterSettings;
use super::writeable::CssWriteable;
use crate::decl::{CascadingStyleSheet, RuleContainer};
use crate::{Error, Result};

/// The header comment written in front of every non-optimized stylesheet.
pub const DEFAULT_HEADER_TEXT: &str = "THIS FILE IS GENERATED - DO NOT EDIT";

/// Writes stylesheets and single nodes using one set of [`WriterSettings`].
///
/// # Example
///
/// ```
/// use horizon_css::prelude::*;
///
/// let sheet = CssReader::read_from_string("a { color: red }", &ReaderSettings::default())
///     .unwrap();
/// let writer = CssWriter::new(WriterSettings::optimized(CssVersion::Css30));
/// assert_eq!(writer.css_as_string(&sheet).unwrap(), "a{color:red}");
/// ```
#[derive(Debug, Clone)]
pub struct CssWriter {
    settings: WriterSettings,
    header_text: Option<String>,
    footer_text: Option<String>,
    content_charset: Option<String>,
    write_header_text: bool,
    write_footer_text: bool,
}

impl Default for CssWriter {
    fn default() -> Self {
        Self::new(WriterSettings::default())
    }
}

impl CssWriter {
    /// A writer with the default header. Header and footer are only written
    /// in non-optimized mode.
    pub fn new(settings: WriterSettings) -> Self {
        let verbose = !settings.is_optimized_output();
        Self {
            settings,
            header_text: Some(DEFAULT_HEADER_TEXT.to_string()),
            footer_text: None,
            content_charset: None,
            write_header_text: verbose,
            write_footer_text: verbose,
        }
    }

    /// Replace the header text. `None` removes the header.
    pub fn with_header_text(mut self, text: Option<&str>) -> Self {
        self.header_text = text.map(str::to_string);
        self
    }

    pub fn with_footer_text(mut self, text: Option<&str>) -> Self {
        self.footer_text = text.map(str::to_string);
        self
    }

    pub fn with_write_header_text(mut self, write: bool) -> Self {
        self.write_header_text = write;
        self
    }

    pub fn with_write_footer_text(mut self, write: bool) -> Self {
        self.write_footer_text = write;
        self
    }

    /// Emit `@charset "<label>";` at the start of the output.
    ///
    /// Fails if `label` is not a known encoding label.
    pub fn with_content_charset(mut self, label: Option<&str>) -> Result<Self> {
        if let Some(label) = label {
            if Encoding::for_label(label.trim().as_bytes()).is_none() {
                return Err(Error::charset(format!("Unknown charset '{label}'")));
            }
        }
        self.content_charset = label.map(|l| l.trim().to_string());
        Ok(self)
    }

    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header_text.as_deref()
    }

    pub fn footer_text(&self) -> Option<&str> {
        self.footer_text.as_deref()
    }

    pub fn content_charset(&self) -> Option<&str> {
        self.content_charset.as_deref()
    }

    fn comment(&self, text: &str, out: &mut String) {
        let nl = self.settings.new_line();
        out.push_str("/*");
        out.push_str(nl);
        for line in text.lines() {
            out.push_str(" * ");
            out.push_str(line);
            out.push_str(nl);
        }
        out.push_str(" */");
        out.push_str(nl);
    }

    /// Render a complete stylesheet.
    pub fn css_as_string(&self, sheet: &CascadingStyleSheet) -> Result<String> {
        let optimized = self.settings.is_optimized_output();
        let mut out = String::new();

        if self.write_header_text {
            if let Some(header) = &self.header_text {
                self.comment(header, &mut out);
            }
        }

        if let Some(charset) = &self.content_charset {
            out.push_str("@charset \"");
            out.push_str(charset);
            out.push_str("\";");
            if !optimized {
                out.push_str(self.settings.new_line());
            }
        }

        for rule in sheet.import_rules() {
            out.push_str(&rule.as_css_string(&self.settings, 0)?);
        }
        for rule in sheet.namespace_rules() {
            out.push_str(&rule.as_css_string(&self.settings, 0)?);
        }

        let mut written = 0;
        for rule in sheet.rules() {
            let css = rule.as_css_string(&self.settings, 0)?;
            if css.is_empty() {
                continue;
            }
            if !optimized && written > 0 {
                out.push_str(self.settings.new_line());
            }
            out.push_str(&css);
            written += 1;
        }

        if self.write_footer_text {
            if let Some(footer) = &self.footer_text {
                self.comment(footer, &mut out);
            }
        }

        tracing::trace!(bytes = out.len(), rules = written, "Wrote stylesheet");
        Ok(out)
    }

    /// Render a stylesheet into `sink`.
    pub fn write_css<W: io::Write>(&self, sheet: &CascadingStyleSheet, sink: &mut W) -> Result<()> {
        let css = self.css_as_string(sheet)?;
        sink.write_all(css.as_bytes()).map_err(Error::Write)?;
        sink.flush().map_err(Error::Write)
    }

    /// Render any single node at indentation level 0.
    pub fn node_as_string<T: CssWriteable + ?Sized>(&self, node: &T) -> Result<String> {
        node.as_css_string(&self.settings, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{
        CssUri, Declaration, Expression, ImportRule, Selector, SelectorMember, StyleRule,
    };
    use crate::version::CssVersion;

    fn sheet() -> CascadingStyleSheet {
        let mut sheet = CascadingStyleSheet::new();
        sheet.add_import_rule(ImportRule::new(CssUri::new("a.css")));
        for name in ["a", "b"] {
            sheet.add_rule(
                StyleRule::new()
                    .with_selector(Selector::from(SelectorMember::simple(name)))
                    .with_declaration(
                        Declaration::new("color", Expression::simple("red"), false).unwrap(),
                    ),
            );
        }
        sheet
    }

    #[test]
    fn test_non_optimized_output() {
        let writer = CssWriter::default()
            .with_footer_text(Some("end"))
            .with_content_charset(Some("utf-8"))
            .unwrap();
        assert_eq!(
            writer.css_as_string(&sheet()).unwrap(),
            "/*\n * THIS FILE IS GENERATED - DO NOT EDIT\n */\n\
             @charset \"utf-8\";\n\
             @import url(a.css);\n\
             a { color:red; }\n\
             \n\
             b { color:red; }\n\
             /*\n * end\n */\n"
        );
    }

    #[test]
    fn test_optimized_output() {
        let writer = CssWriter::new(WriterSettings::optimized(CssVersion::Css30))
            .with_footer_text(Some("ignored"));
        assert_eq!(
            writer.css_as_string(&sheet()).unwrap(),
            "@import url(a.css);\na{color:red}b{color:red}"
        );
    }

    #[test]
    fn test_write_css() {
        let writer = CssWriter::default().with_write_header_text(false);
        let mut buffer = Vec::new();
        writer.write_css(&sheet(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("@import"));
    }

    #[test]
    fn test_unknown_charset() {
        assert!(matches!(
            CssWriter::default().with_content_charset(Some("no-such-charset")),
            Err(Error::Charset(_))
        ));
    }

    #[test]
    fn test_node_as_string() {
        let writer = CssWriter::default();
        let declaration = Declaration::new("Color", Expression::simple("blue"), true).unwrap();
        assert_eq!(
            writer.node_as_string(&declaration).unwrap(),
            "color:blue !important"
        );
    }
}
