//! `@page` rules and their margin boxes.

use super::declaration::{Declaration, HasDeclarations, write_definition_block};
use crate::Result;
use crate::source_location::{SourceLocation, SourceLocationAware, SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// A margin box inside a page rule, such as `@top-left { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageMarginBlock {
    symbol: String,
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl PageMarginBlock {
    /// `symbol` is the at-keyword including the `@`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            declarations: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl HasDeclarations for PageMarginBlock {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssWriteable for PageMarginBlock {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        if settings.is_remove_unnecessary_code() && self.declarations.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(
            "{}{}",
            self.symbol,
            write_definition_block(&self.declarations, settings, indent_level)?
        ))
    }
}

/// A member of a page rule body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageMember {
    Declaration(Declaration),
    MarginBlock(PageMarginBlock),
}

impl CssWriteable for PageMember {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        match self {
            PageMember::Declaration(declaration) => declaration.as_css_string(settings, indent_level),
            PageMember::MarginBlock(block) => block.as_css_string(settings, indent_level),
        }
    }
}

impl SourceLocationAware for PageMember {
    fn source_location(&self) -> Option<SourceLocation> {
        match self {
            PageMember::Declaration(declaration) => declaration.source_location(),
            PageMember::MarginBlock(block) => block.source_location(),
        }
    }

    fn set_source_location(&mut self, location: Option<SourceLocation>) {
        match self {
            PageMember::Declaration(declaration) => declaration.set_source_location(location),
            PageMember::MarginBlock(block) => block.set_source_location(location),
        }
    }
}

impl From<Declaration> for PageMember {
    fn from(declaration: Declaration) -> Self {
        PageMember::Declaration(declaration)
    }
}

impl From<PageMarginBlock> for PageMember {
    fn from(block: PageMarginBlock) -> Self {
        PageMember::MarginBlock(block)
    }
}

/// `@page :first, named:left { members }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PageRule {
    selectors: Vec<String>,
    members: Vec<PageMember>,
    source: SourceMeta,
}

impl PageRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<PageMember>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn selectors_mut(&mut self) -> &mut Vec<String> {
        &mut self.selectors
    }

    pub fn members(&self) -> &[PageMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<PageMember> {
        &mut self.members
    }

    pub fn add_member(&mut self, member: impl Into<PageMember>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// The plain declarations of the page, skipping margin blocks.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.members.iter().filter_map(|m| match m {
            PageMember::Declaration(declaration) => Some(declaration),
            PageMember::MarginBlock(_) => None,
        })
    }

    pub fn margin_blocks(&self) -> impl Iterator<Item = &PageMarginBlock> {
        self.members.iter().filter_map(|m| match m {
            PageMember::MarginBlock(block) => Some(block),
            PageMember::Declaration(_) => None,
        })
    }
}

impl CssVersionAware for PageRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css21
    }
}

impl CssWriteable for PageRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@page", self.min_version())?;
        if !settings.is_write_page_rules()
            || (settings.is_remove_unnecessary_code() && self.members.is_empty())
        {
            return Ok(String::new());
        }
        let mut out = String::from("@page");
        if !self.selectors.is_empty() {
            let separator = if settings.is_optimized_output() { "," } else { ", " };
            out.push(' ');
            out.push_str(&self.selectors.join(separator));
        }
        out.push_str(&write_definition_block(&self.members, settings, indent_level)?);
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(PageMarginBlock, PageRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Expression;

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration::new(property, Expression::simple(value), false).unwrap()
    }

    #[test]
    fn test_write_page_rule() {
        let mut block = PageMarginBlock::new("@top-left");
        block.add_declaration(decl("content", "'x'"));
        let rule = PageRule::new()
            .with_selector(":first")
            .with_member(decl("margin", "1in"))
            .with_member(block);

        assert_eq!(rule.declarations().count(), 1);
        assert_eq!(rule.margin_blocks().count(), 1);
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@page :first {\n  margin:1in;\n  @top-left { content:'x'; };\n}\n"
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_optimized_output(true), 0)
                .unwrap(),
            "@page :first{margin:1in;@top-left{content:'x'}}"
        );
    }

    #[test]
    fn test_page_gates() {
        let rule = PageRule::new();
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@page {}\n"
        );
        let settings = WriterSettings::default().with_remove_unnecessary_code(true);
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "");
        let settings = WriterSettings::default().with_write_page_rules(false);
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "");
    }
}
