//! Media queries and `@media` rules.

use super::expression::Expression;
use super::stylesheet::{RuleContainer, TopLevelRule, write_rule_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings, join_css};

/// The optional modifier in front of a media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaModifier {
    #[default]
    None,
    Not,
    Only,
}

impl MediaModifier {
    /// The text written in front of the medium, including the trailing space.
    pub const fn css_text(&self) -> &'static str {
        match self {
            MediaModifier::None => "",
            MediaModifier::Not => "not ",
            MediaModifier::Only => "only ",
        }
    }

    pub fn from_name(name: &str) -> Option<MediaModifier> {
        if name.eq_ignore_ascii_case("not") {
            Some(MediaModifier::Not)
        } else if name.eq_ignore_ascii_case("only") {
            Some(MediaModifier::Only)
        } else {
            None
        }
    }
}

/// `(feature)` or `(feature: value)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaExpression {
    feature: String,
    value: Option<Expression>,
    source: SourceMeta,
}

impl MediaExpression {
    pub fn new(feature: impl Into<String>, value: Option<Expression>) -> Self {
        Self {
            feature: feature.into(),
            value,
            source: SourceMeta::default(),
        }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut Expression> {
        self.value.as_mut()
    }
}

impl CssWriteable for MediaExpression {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = String::from("(");
        out.push_str(&self.feature);
        if let Some(value) = &self.value {
            out.push(':');
            out.push_str(&value.as_css_string(settings, indent_level)?);
        }
        out.push(')');
        Ok(out)
    }
}

/// A single media query such as `only screen and (max-width: 600px)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MediaQuery {
    modifier: MediaModifier,
    medium: Option<String>,
    expressions: Vec<MediaExpression>,
    source: SourceMeta,
}

impl MediaQuery {
    pub fn new(modifier: MediaModifier, medium: Option<&str>) -> Self {
        Self {
            modifier,
            medium: medium.map(str::to_string),
            expressions: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    /// A query consisting of just a medium.
    pub fn with_medium(medium: &str) -> Self {
        Self::new(MediaModifier::None, Some(medium))
    }

    pub fn with_expression(mut self, expression: MediaExpression) -> Self {
        self.expressions.push(expression);
        self
    }

    pub fn modifier(&self) -> MediaModifier {
        self.modifier
    }

    pub fn set_modifier(&mut self, modifier: MediaModifier) {
        self.modifier = modifier;
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    pub fn expressions(&self) -> &[MediaExpression] {
        &self.expressions
    }

    pub fn expressions_mut(&mut self) -> &mut Vec<MediaExpression> {
        &mut self.expressions
    }

    pub fn add_expression(&mut self, expression: MediaExpression) -> &mut Self {
        self.expressions.push(expression);
        self
    }
}

impl CssWriteable for MediaQuery {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        let mut out = String::from(self.modifier.css_text());
        if let Some(medium) = &self.medium {
            out.push_str(medium);
        }
        for (i, expression) in self.expressions.iter().enumerate() {
            if i > 0 || self.medium.is_some() {
                out.push_str(" and ");
            }
            out.push_str(&expression.as_css_string(settings, indent_level)?);
        }
        Ok(out)
    }
}

/// `@media queries { rules }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MediaRule {
    media_queries: Vec<MediaQuery>,
    rules: Vec<TopLevelRule>,
    source: SourceMeta,
}

impl MediaRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_media_query(mut self, query: MediaQuery) -> Self {
        self.media_queries.push(query);
        self
    }

    pub fn media_queries(&self) -> &[MediaQuery] {
        &self.media_queries
    }

    pub fn media_queries_mut(&mut self) -> &mut Vec<MediaQuery> {
        &mut self.media_queries
    }

    pub fn add_media_query(&mut self, query: MediaQuery) -> &mut Self {
        self.media_queries.push(query);
        self
    }

    pub fn has_media_queries(&self) -> bool {
        !self.media_queries.is_empty()
    }
}

impl RuleContainer for MediaRule {
    fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut Vec<TopLevelRule> {
        &mut self.rules
    }
}

impl CssVersionAware for MediaRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css21
    }
}

impl CssWriteable for MediaRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@media", self.min_version())?;
        if !settings.is_write_media_rules()
            || (settings.is_remove_unnecessary_code() && self.rules.is_empty())
        {
            return Ok(String::new());
        }
        let separator = if settings.is_optimized_output() { "," } else { ", " };
        let mut out = String::from("@media");
        if !self.media_queries.is_empty() {
            out.push(' ');
            out.push_str(&join_css(
                &self.media_queries,
                separator,
                settings,
                indent_level,
            )?);
        }
        out.push_str(&write_rule_block(&self.rules, settings, indent_level)?);
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(MediaExpression, MediaQuery, MediaRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Declaration, Selector, SelectorMember, StyleRule};

    fn query() -> MediaQuery {
        MediaQuery::new(MediaModifier::Only, Some("screen"))
            .with_expression(MediaExpression::new(
                "max-width",
                Some(Expression::simple("600px")),
            ))
            .with_expression(MediaExpression::new("color", None))
    }

    #[test]
    fn test_write_media_query() {
        let settings = WriterSettings::default();
        assert_eq!(
            query().as_css_string(&settings, 0).unwrap(),
            "only screen and (max-width:600px) and (color)"
        );
        let no_medium = MediaQuery::default()
            .with_expression(MediaExpression::new("orientation", Some(Expression::simple("portrait"))));
        assert_eq!(
            no_medium.as_css_string(&settings, 0).unwrap(),
            "(orientation:portrait)"
        );
    }

    #[test]
    fn test_write_media_rule() {
        let mut rule = MediaRule::new().with_media_query(MediaQuery::with_medium("print"));
        let settings = WriterSettings::default();
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "@media print {}\n");
        assert_eq!(
            rule.as_css_string(&settings.clone().with_remove_unnecessary_code(true), 0)
                .unwrap(),
            ""
        );

        rule.add_rule(
            StyleRule::new()
                .with_selector(Selector::from(SelectorMember::simple("p")))
                .with_declaration(
                    Declaration::new("color", Expression::simple("black"), false).unwrap(),
                ),
        );
        assert_eq!(
            rule.as_css_string(&settings, 0).unwrap(),
            "@media print {\n  p { color:black; }\n}\n"
        );
        assert_eq!(
            rule.as_css_string(&settings.clone().with_optimized_output(true), 0)
                .unwrap(),
            "@media print{p{color:black}}"
        );
        assert_eq!(
            rule.as_css_string(&settings.clone().with_write_media_rules(false), 0)
                .unwrap(),
            ""
        );
        assert!(
            rule.as_css_string(&WriterSettings::new(CssVersion::Css10), 0)
                .is_err()
        );
    }
}
