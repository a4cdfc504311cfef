//! `@viewport` and `@-ms-viewport` rules.

use super::declaration::{Declaration, HasDeclarations, write_definition_block};
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewportRule {
    declaration: String,
    declarations: Vec<Declaration>,
    source: SourceMeta,
}

impl ViewportRule {
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            declarations: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    /// The keyword, such as `@viewport` or `@-ms-viewport`.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

impl Default for ViewportRule {
    fn default() -> Self {
        Self::new("@viewport")
    }
}

impl HasDeclarations for ViewportRule {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn declarations_mut(&mut self) -> &mut Vec<Declaration> {
        &mut self.declarations
    }
}

impl CssVersionAware for ViewportRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for ViewportRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@viewport", self.min_version())?;
        if !settings.is_write_viewport_rules()
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

impl_source_location_aware!(ViewportRule);
