//! `@layer` statements and blocks.

use super::stylesheet::{RuleContainer, TopLevelRule, write_rule_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// `@layer a, b;` or `@layer name { rules }`.
///
/// A rule without nested rules is written as a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LayerRule {
    names: Vec<String>,
    rules: Vec<TopLevelRule>,
    source: SourceMeta,
}

impl LayerRule {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            rules: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    /// The layer names. Dotted names such as `base.reset` are kept as one name.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut Vec<String> {
        &mut self.names
    }

    pub fn is_anonymous(&self) -> bool {
        self.names.is_empty()
    }
}

impl RuleContainer for LayerRule {
    fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut Vec<TopLevelRule> {
        &mut self.rules
    }
}

impl CssVersionAware for LayerRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for LayerRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@layer", self.min_version())?;
        let separator = if settings.is_optimized_output() { "," } else { ", " };
        let mut out = String::from("@layer");
        if !self.names.is_empty() {
            out.push(' ');
            out.push_str(&self.names.join(separator));
        }
        if self.rules.is_empty() {
            out.push(';');
        } else {
            out.push_str(&write_rule_block(&self.rules, settings, indent_level)?);
        }
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(LayerRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Declaration, Expression, Selector, SelectorMember, StyleRule};

    #[test]
    fn test_layer_statement() {
        let rule = LayerRule::new(["base", "theme.dark"]);
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@layer base, theme.dark;\n"
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_optimized_output(true), 0)
                .unwrap(),
            "@layer base,theme.dark;"
        );
    }

    #[test]
    fn test_layer_block() {
        let mut rule = LayerRule::new(["base"]);
        rule.add_rule(
            StyleRule::new()
                .with_selector(Selector::from(SelectorMember::simple("a")))
                .with_declaration(
                    Declaration::new("color", Expression::simple("blue"), false).unwrap(),
                ),
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@layer base {\n  a { color:blue; }\n}\n"
        );
        assert!(
            rule.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
    }
}
