//! Style rules: a selector list and a declaration block.

use super::declaration::{Declaration, HasDeclarations, write_definition_block};
use super::selector::Selector;
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::writer::{CssWriteable, WriterSettings};

/// `selector, selector { declarations }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleRule {
    selectors: Vec<Selector>,
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn add_selector(&mut self, selector: Selector) -> &mut Self {
        self.selectors.push(selector);
        self
    }

    pub fn remove_selector(&mut self, index: usize) -> Option<Selector> {
        (index < self.selectors.len()).then(|| self.selectors.remove(index))
    }

    pub fn remove_all_selectors(&mut self) {
        self.selectors.clear();
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn selectors_mut(&mut self) -> &mut Vec<Selector> {
        &mut self.selectors
    }

    pub fn selector_count(&self) -> usize {
        self.selectors.len()
    }

    pub fn has_selectors(&self) -> bool {
        !self.selectors.is_empty()
    }

    /// The selectors as text, the way the writer renders them.
    pub fn selectors_as_css_string(
        &self,
        settings: &WriterSettings,
        indent_level: usize,
    ) -> Result<String> {
        let separator = if settings.is_optimized_output() {
            ",".to_string()
        } else {
            format!(",{}{}", settings.new_line(), settings.indent(indent_level))
        };
        let mut out = String::new();
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                out.push_str(&separator);
            }
            out.push_str(&selector.as_css_string(settings, indent_level)?);
        }
        Ok(out)
    }
}

impl HasDeclarations for StyleRule {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssWriteable for StyleRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        if settings.is_remove_unnecessary_code() && self.declarations.is_empty() {
            return Ok(String::new());
        }
        let mut out = self.selectors_as_css_string(settings, indent_level)?;
        out.push_str(&write_definition_block(
            &self.declarations,
            settings,
            indent_level,
        )?);
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(StyleRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Expression, SelectorMember};

    fn rule() -> StyleRule {
        StyleRule::new()
            .with_selector(Selector::from(SelectorMember::simple("h1")))
            .with_selector(Selector::from(SelectorMember::simple(".title")))
            .with_declaration(Declaration::new("color", Expression::simple("red"), false).unwrap())
            .with_declaration(
                Declaration::new("MARGIN", Expression::simple("0px"), true).unwrap(),
            )
    }

    #[test]
    fn test_write_style_rule() {
        let settings = WriterSettings::default();
        assert_eq!(
            rule().as_css_string(&settings, 0).unwrap(),
            "h1,\n.title {\n  color:red;\n  margin:0px !important;\n}\n"
        );

        let optimized = WriterSettings::default().with_optimized_output(true);
        assert_eq!(
            rule().as_css_string(&optimized, 0).unwrap(),
            "h1,.title{color:red;margin:0 !important}"
        );
    }

    #[test]
    fn test_empty_rule() {
        let mut rule = rule();
        rule.remove_all_declarations();
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "h1,\n.title {}\n"
        );
        let settings = WriterSettings::default().with_remove_unnecessary_code(true);
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "");
    }

    #[test]
    fn test_declaration_lookup() {
        let rule = rule();
        assert_eq!(rule.declaration_count(), 2);
        assert!(rule.declaration_of_property("Margin").unwrap().is_important());
        assert!(rule.declaration_of_property("padding").is_none());
    }
}
