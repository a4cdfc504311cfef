//! `@font-face` rules.

use super::declaration::{Declaration, HasDeclarations, write_definition_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFaceRule {
    declaration: String,
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl FontFaceRule {
    pub const DEFAULT_DECLARATION: &'static str = "@font-face";

    /// A rule introduced by `declaration`, usually `@font-face`.
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            declarations: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

impl Default for FontFaceRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECLARATION)
    }
}

impl HasDeclarations for FontFaceRule {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssVersionAware for FontFaceRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for FontFaceRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@font-face", self.min_version())?;
        if !settings.is_write_font_face_rules()
            || (settings.is_remove_unnecessary_code() && self.declarations.is_empty())
        {
            return Ok(String::new());
        }
        let mut out = self.declaration.clone();
        out.push_str(&write_definition_block(&self.declarations, settings, indent_level)?);
        if !settings.is_optimized_output() {
            out.push_str(settings.new_line());
        }
        Ok(out)
    }
}

impl_source_location_aware!(FontFaceRule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Expression;

    #[test]
    fn test_write_font_face() {
        let mut rule = FontFaceRule::default();
        rule.add_declaration(
            Declaration::new("font-family", Expression::simple("'Foo'"), false).unwrap(),
        );
        rule.add_declaration(
            Declaration::new("src", Expression::uri("foo.woff"), false).unwrap(),
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "@font-face {\n  font-family:'Foo';\n  src:url(foo.woff);\n}\n"
        );
        assert!(
            rule.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
        assert_eq!(
            rule.as_css_string(&WriterSettings::default().with_write_font_face_rules(false), 0)
                .unwrap(),
            ""
        );
    }
}
