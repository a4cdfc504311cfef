//! At-rules the grammar does not know, kept as raw text.

use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::writer::{CssWriteable, WriterSettings};

/// An unknown at-rule such as `@-moz-document url-prefix() { ... }`.
///
/// The parameters and the body are stored verbatim. A rule without body
/// was terminated by `;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownRule {
    declaration: String,
    parameters: String,
    body: Option<String>,
    source: SourceMeta,
}

impl UnknownRule {
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            parameters: String::new(),
            body: None,
            source: SourceMeta::default(),
        }
    }

    /// The at-keyword including the `@`.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    pub fn set_parameters(&mut self, parameters: impl Into<String>) {
        self.parameters = parameters.into().trim().to_string();
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_body(&mut self, body: Option<String>) {
        self.body = body.map(|b| b.trim().to_string());
    }
}

impl CssWriteable for UnknownRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        if !settings.is_write_unknown_rules() {
            return Ok(String::new());
        }
        let optimized = settings.is_optimized_output();
        let mut out = self.declaration.clone();
        if !self.parameters.is_empty() {
            out.push(' ');
            out.push_str(&self.parameters);
        }
        match self.body.as_deref() {
            None => out.push(';'),
            Some("") => out.push_str(if optimized { "{}" } else { " {}" }),
            Some(body) if optimized => {
                out.push('{');
                out.push_str(body);
                out.push('}');
            }
            Some(body) => {
                out.push_str(" {");
                out.push_str(settings.new_line());
                out.push_str(&settings.indent(indent_level + 1));
                out.push_str(body);
                out.push_str(settings.new_line());
                out.push_str(&settings.indent(indent_level));
                out.push('}');
            }
        }
        if !optimized {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(UnknownRule);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_unknown_rule() {
        let mut rule = UnknownRule::new("@-moz-document");
        rule.set_parameters(" url-prefix() ");
        rule.set_body(Some("div{color:red}".into()));
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@-moz-document url-prefix() {\n  div{color:red}\n}\n"
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_optimized_output(true), 0)
                .unwrap(),
            "@-moz-document url-prefix(){div{color:red}}"
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_write_unknown_rules(false), 0)
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_statement_form() {
        let mut rule = UnknownRule::new("@custom-selector");
        rule.set_parameters(":--heading h1, h2");
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@custom-selector :--heading h1, h2;\n"
        );
    }
}
