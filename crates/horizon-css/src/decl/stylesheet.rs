//! The root of the object model.

use super::font_face::FontFaceRule;
use super::import::ImportRule;
use super::keyframes::KeyframesRule;
use super::layer::LayerRule;
use super::media::MediaRule;
use super::namespace::NamespaceRule;
use super::page::PageRule;
use super::style_rule::StyleRule;
use super::supports::SupportsRule;
use super::unknown::UnknownRule;
use super::viewport::ViewportRule;
use crate::source_location::{SourceLocation, SourceLocationAware, SourceMeta, impl_source_location_aware};
use crate::writer::{CssWriteable, WriterSettings};
use crate::{Error, Result};

/// A rule that may appear at the top level of a stylesheet or inside a
/// grouping rule such as `@media`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopLevelRule {
    Style(StyleRule),
    Media(MediaRule),
    Page(PageRule),
    FontFace(FontFaceRule),
    Keyframes(KeyframesRule),
    Supports(SupportsRule),
    Viewport(ViewportRule),
    Layer(LayerRule),
    Unknown(UnknownRule),
}

impl TopLevelRule {
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            TopLevelRule::Style(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaRule> {
        match self {
            TopLevelRule::Media(rule) => Some(rule),
            _ => None,
        }
    }

    /// The nested rules of a grouping rule (`@media`, `@supports`, `@layer`).
    pub fn nested_rules(&self) -> Option<&[TopLevelRule]> {
        match self {
            TopLevelRule::Media(rule) => Some(rule.rules()),
            TopLevelRule::Supports(rule) => Some(rule.rules()),
            TopLevelRule::Layer(rule) => Some(rule.rules()),
            _ => None,
        }
    }

    pub fn nested_rules_mut(&mut self) -> Option<&mut Vec<TopLevelRule>> {
        match self {
            TopLevelRule::Media(rule) => Some(rule.rules_mut()),
            TopLevelRule::Supports(rule) => Some(rule.rules_mut()),
            TopLevelRule::Layer(rule) => Some(rule.rules_mut()),
            _ => None,
        }
    }
}

macro_rules! top_level_rule_dispatch {
    ($self:ident, $rule:ident => $body:expr) => {
        match $self {
            TopLevelRule::Style($rule) => $body,
            TopLevelRule::Media($rule) => $body,
            TopLevelRule::Page($rule) => $body,
            TopLevelRule::FontFace($rule) => $body,
            TopLevelRule::Keyframes($rule) => $body,
            TopLevelRule::Supports($rule) => $body,
            TopLevelRule::Viewport($rule) => $body,
            TopLevelRule::Layer($rule) => $body,
            TopLevelRule::Unknown($rule) => $body,
        }
    };
}

impl CssWriteable for TopLevelRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        top_level_rule_dispatch!(self, rule => rule.as_css_string(settings, indent_level))
    }
}

impl SourceLocationAware for TopLevelRule {
    fn source_location(&self) -> Option<SourceLocation> {
        top_level_rule_dispatch!(self, rule => rule.source_location())
    }

    fn set_source_location(&mut self, location: Option<SourceLocation>) {
        top_level_rule_dispatch!(self, rule => rule.set_source_location(location))
    }
}

macro_rules! impl_from_rule {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TopLevelRule {
                fn from(rule: $ty) -> Self {
                    TopLevelRule::$variant(rule)
                }
            }
        )*
    };
}

impl_from_rule!(
    Style(StyleRule),
    Media(MediaRule),
    Page(PageRule),
    FontFace(FontFaceRule),
    Keyframes(KeyframesRule),
    Supports(SupportsRule),
    Viewport(ViewportRule),
    Layer(LayerRule),
    Unknown(UnknownRule),
);

/// Shared access to an ordered list of rules.
pub trait RuleContainer {
    fn rules(&self) -> &[TopLevelRule];

    fn rules_mut(&mut self) -> &mut Vec<TopLevelRule>;

    fn add_rule(&mut self, rule: impl Into<TopLevelRule>)
    where
        Self: Sized,
    {
        self.rules_mut().push(rule.into());
    }

    /// Insert a rule before `index`.
    fn insert_rule(&mut self, index: usize, rule: impl Into<TopLevelRule>) -> Result<()>
    where
        Self: Sized,
    {
        let rules = self.rules_mut();
        if index > rules.len() {
            return Err(Error::invalid_argument(format!(
                "Index {index} is out of bounds for {} rules",
                rules.len()
            )));
        }
        rules.insert(index, rule.into());
        Ok(())
    }

    fn remove_rule(&mut self, index: usize) -> Option<TopLevelRule> {
        let rules = self.rules_mut();
        (index < rules.len()).then(|| rules.remove(index))
    }

    fn remove_all_rules(&mut self) {
        self.rules_mut().clear();
    }

    fn rule_count(&self) -> usize {
        self.rules().len()
    }

    fn has_rules(&self) -> bool {
        !self.rules().is_empty()
    }

    fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules().iter().filter_map(TopLevelRule::as_style)
    }

    fn media_rules(&self) -> impl Iterator<Item = &MediaRule> {
        self.rules().iter().filter_map(TopLevelRule::as_media)
    }
}

/// Render nested rules as a `{ ... }` block, as used by `@media`,
/// `@supports` and `@layer`.
///
/// Rules that render empty are skipped. The result has no trailing newline.
pub(crate) fn write_rule_block(
    rules: &[TopLevelRule],
    settings: &WriterSettings,
    indent_level: usize,
) -> Result<String> {
    let optimized = settings.is_optimized_output();
    if rules.is_empty() {
        return Ok(if optimized { "{}" } else { " {}" }.to_string());
    }

    let mut out = String::new();
    if optimized {
        out.push('{');
    } else {
        out.push_str(" {");
        out.push_str(settings.new_line());
    }
    let mut written = 0;
    for rule in rules {
        let css = rule.as_css_string(settings, indent_level + 1)?;
        if css.is_empty() {
            continue;
        }
        if !optimized {
            if written > 0 {
                out.push_str(settings.new_line());
            }
            out.push_str(&settings.indent(indent_level + 1));
        }
        out.push_str(&css);
        written += 1;
    }
    if !optimized {
        out.push_str(&settings.indent(indent_level));
    }
    out.push('}');
    Ok(out)
}

/// A parsed or constructed stylesheet.
///
/// Import and namespace rules are kept apart from the other rules since
/// they may only appear at the start of a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CascadingStyleSheet {
    import_rules: Vec<ImportRule>,
    namespace_rules: Vec<NamespaceRule>,
    rules: Vec<TopLevelRule>,
    source: SourceMeta,
}

impl CascadingStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import_rules(&self) -> &[ImportRule] {
        &self.import_rules
    }

    pub fn import_rules_mut(&mut self) -> &mut Vec<ImportRule> {
        &mut self.import_rules
    }

    pub fn add_import_rule(&mut self, rule: ImportRule) -> &mut Self {
        self.import_rules.push(rule);
        self
    }

    pub fn remove_import_rule(&mut self, index: usize) -> Option<ImportRule> {
        (index < self.import_rules.len()).then(|| self.import_rules.remove(index))
    }

    pub fn has_import_rules(&self) -> bool {
        !self.import_rules.is_empty()
    }

    pub fn namespace_rules(&self) -> &[NamespaceRule] {
        &self.namespace_rules
    }

    pub fn namespace_rules_mut(&mut self) -> &mut Vec<NamespaceRule> {
        &mut self.namespace_rules
    }

    pub fn add_namespace_rule(&mut self, rule: NamespaceRule) -> &mut Self {
        self.namespace_rules.push(rule);
        self
    }

    pub fn remove_namespace_rule(&mut self, index: usize) -> Option<NamespaceRule> {
        (index < self.namespace_rules.len()).then(|| self.namespace_rules.remove(index))
    }

    pub fn has_namespace_rules(&self) -> bool {
        !self.namespace_rules.is_empty()
    }

    pub fn font_face_rules(&self) -> impl Iterator<Item = &FontFaceRule> {
        self.rules.iter().filter_map(|r| match r {
            TopLevelRule::FontFace(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn keyframes_rules(&self) -> impl Iterator<Item = &KeyframesRule> {
        self.rules.iter().filter_map(|r| match r {
            TopLevelRule::Keyframes(rule) => Some(rule),
            _ => None,
        })
    }

    /// Returns true if the stylesheet has no rules of any kind.
    pub fn is_empty(&self) -> bool {
        self.import_rules.is_empty() && self.namespace_rules.is_empty() && self.rules.is_empty()
    }
}

impl RuleContainer for CascadingStyleSheet {
    fn rules(&self) -> &[TopLevelRule] {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut Vec<TopLevelRule> {
        &mut self.rules
    }
}

impl_source_location_aware!(CascadingStyleSheet);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Declaration, Expression, MediaQuery, Selector, SelectorMember};

    fn style(selector: &str) -> StyleRule {
        StyleRule::new()
            .with_selector(Selector::from(SelectorMember::simple(selector)))
            .with_declaration(Declaration::new("color", Expression::simple("red"), false).unwrap())
    }

    #[test]
    fn test_rule_container() {
        let mut sheet = CascadingStyleSheet::new();
        assert!(sheet.is_empty());
        sheet.add_rule(style("a"));
        sheet.add_rule(MediaRule::new().with_media_query(MediaQuery::with_medium("print")));
        sheet.insert_rule(0, style("b")).unwrap();
        assert!(sheet.insert_rule(10, style("c")).is_err());

        assert_eq!(sheet.rule_count(), 3);
        assert_eq!(sheet.style_rules().count(), 2);
        assert_eq!(sheet.media_rules().count(), 1);
        assert!(sheet.remove_rule(5).is_none());
        assert!(matches!(sheet.remove_rule(0), Some(TopLevelRule::Style(_))));
        assert_eq!(sheet.rule_count(), 2);
    }

    #[test]
    fn test_rule_block_skips_empty_rules() {
        let rules: Vec<TopLevelRule> = vec![style("a").into(), StyleRule::new().into(), style("b").into()];
        let settings = WriterSettings::default().with_remove_unnecessary_code(true);
        assert_eq!(
            write_rule_block(&rules, &settings, 0).unwrap(),
            " {\n  a { color:red; }\n\n  b { color:red; }\n}"
        );
        let settings = settings.with_optimized_output(true);
        assert_eq!(
            write_rule_block(&rules, &settings, 0).unwrap(),
            "{a{color:red}b{color:red}}"
        );
    }

    #[test]
    fn test_nested_rules() {
        let mut media = MediaRule::new();
        media.add_rule(style("a"));
        let rule = TopLevelRule::from(media);
        assert_eq!(rule.nested_rules().map(<[_]>::len), Some(1));
        assert!(TopLevelRule::from(style("a")).nested_rules().is_none());
    }
}
