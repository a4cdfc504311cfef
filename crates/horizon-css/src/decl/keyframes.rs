//! `@keyframes` rules, including vendor-prefixed forms.

use super::declaration::{Declaration, HasDeclarations, write_definition_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// One block of a keyframes rule, such as `from, 50% { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyframesBlock {
    selectors: Vec<String>,
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl KeyframesBlock {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn selectors_mut(&mut self) -> &mut Vec<String> {
        &mut self.selectors
    }
}

impl HasDeclarations for KeyframesBlock {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssWriteable for KeyframesBlock {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        if settings.is_remove_unnecessary_code() && self.declarations.is_empty() {
            return Ok(String::new());
        }
        let separator = if settings.is_optimized_output() { "," } else { ", " };
        let mut out = self.selectors.join(separator);
        out.push_str(&write_definition_block(&self.declarations, settings, indent_level)?);
        Ok(out)
    }
}

/// `@keyframes name { blocks }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyframesRule {
    declaration: String,
    animation_name: String,
    blocks: Vec<KeyframesBlock>,
    source: SourceMeta,
}

impl KeyframesRule {
    /// `declaration` is the keyword including the `@`, for example
    /// `@keyframes` or `@-webkit-keyframes`.
    pub fn new(declaration: impl Into<String>, animation_name: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            animation_name: animation_name.into(),
            blocks: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn animation_name(&self) -> &str {
        &self.animation_name
    }

    pub fn set_animation_name(&mut self, name: impl Into<String>) {
        self.animation_name = name.into();
    }

    pub fn blocks(&self) -> &[KeyframesBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut Vec<KeyframesBlock> {
        &mut self.blocks
    }

    pub fn add_block(&mut self, block: KeyframesBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl CssVersionAware for KeyframesRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for KeyframesRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@keyframes", self.min_version())?;
        if !settings.is_write_keyframes_rules()
            || (settings.is_remove_unnecessary_code() && self.blocks.is_empty())
        {
            return Ok(String::new());
        }
        let optimized = settings.is_optimized_output();
        let mut out = format!("{} {}", self.declaration, self.animation_name);
        if optimized {
            out.push('{');
        } else {
            out.push_str(" {");
            out.push_str(settings.new_line());
        }
        for block in &self.blocks {
            let css = block.as_css_string(settings, indent_level + 1)?;
            if css.is_empty() {
                continue;
            }
            if !optimized {
                out.push_str(&settings.indent(indent_level + 1));
            }
            out.push_str(&css);
            if !optimized {
                out.push_str(settings.new_line());
            }
        }
        if !optimized {
            out.push_str(&settings.indent(indent_level));
        }
        out.push('}');
        if !optimized {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(KeyframesBlock, KeyframesRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Expression;

    fn rule() -> KeyframesRule {
        let mut from = KeyframesBlock::new(["from"]);
        from.add_declaration(Declaration::new("top", Expression::simple("0px"), false).unwrap());
        let mut to = KeyframesBlock::new(["50%", "to"]);
        to.add_declaration(Declaration::new("top", Expression::simple("10px"), false).unwrap());
        let mut rule = KeyframesRule::new("@-webkit-keyframes", "slide");
        rule.add_block(from).add_block(to);
        rule
    }

    #[test]
    fn test_write_keyframes() {
        assert_eq!(
            rule().as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@-webkit-keyframes slide {\n  from { top:0px; }\n  50%, to { top:10px; }\n}\n"
        );
        assert_eq!(
            rule()
                .as_css_string(&WriterSettings::default().with_optimized_output(true), 0)
                .unwrap(),
            "@-webkit-keyframes slide{from{top:0}50%,to{top:10px}}"
        );
    }

    #[test]
    fn test_empty_blocks_are_removed() {
        let mut rule = rule();
        rule.add_block(KeyframesBlock::new(["75%"]));
        let settings = WriterSettings::default()
            .with_optimized_output(true)
            .with_remove_unnecessary_code(true);
        assert_eq!(
            rule.as_css_string(&settings, 0).unwrap(),
            "@-webkit-keyframes slide{from{top:0}50%,to{top:10px}}"
        );
    }
}
