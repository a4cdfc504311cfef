//! Formatting options for the CSS writer.

use crate::version::CssVersion;
use crate::{Error, Result};

/// The line terminator emitted by the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NewLineMode {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Windows,
    /// `\r`
    Mac,
}

impl NewLineMode {
    pub const fn text(&self) -> &'static str {
        match self {
            NewLineMode::Unix => "\n",
            NewLineMode::Windows => "\r\n",
            NewLineMode::Mac => "\r",
        }
    }
}

/// Settings controlling how the object model is rendered back to CSS.
///
/// Every rule category can be suppressed individually, in which case the
/// rule renders as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterSettings {
    version: CssVersion,
    optimized_output: bool,
    remove_unnecessary_code: bool,
    new_line_mode: NewLineMode,
    indent: String,
    quote_urls: bool,
    write_namespace_rules: bool,
    write_font_face_rules: bool,
    write_keyframes_rules: bool,
    write_media_rules: bool,
    write_page_rules: bool,
    write_viewport_rules: bool,
    write_supports_rules: bool,
    write_unknown_rules: bool,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            version: CssVersion::LATEST,
            optimized_output: false,
            remove_unnecessary_code: false,
            new_line_mode: NewLineMode::default(),
            indent: "  ".to_string(),
            quote_urls: false,
            write_namespace_rules: true,
            write_font_face_rules: true,
            write_keyframes_rules: true,
            write_media_rules: true,
            write_page_rules: true,
            write_viewport_rules: true,
            write_supports_rules: true,
            write_unknown_rules: true,
        }
    }
}

impl WriterSettings {
    /// Settings targeting the given version, with default formatting.
    pub fn new(version: CssVersion) -> Self {
        Self {
            version,
            ..Default::default()
        }
    }

    /// Compact output targeting the given version.
    pub fn optimized(version: CssVersion) -> Self {
        Self::new(version).with_optimized_output(true)
    }

    pub fn with_version(mut self, version: CssVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_optimized_output(mut self, optimized: bool) -> Self {
        self.optimized_output = optimized;
        self
    }

    /// Skip empty rules when writing.
    pub fn with_remove_unnecessary_code(mut self, remove: bool) -> Self {
        self.remove_unnecessary_code = remove;
        self
    }

    pub fn with_new_line_mode(mut self, mode: NewLineMode) -> Self {
        self.new_line_mode = mode;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Always quote URLs, not only when they contain special characters.
    pub fn with_quote_urls(mut self, quote: bool) -> Self {
        self.quote_urls = quote;
        self
    }

    pub fn with_write_namespace_rules(mut self, write: bool) -> Self {
        self.write_namespace_rules = write;
        self
    }

    pub fn with_write_font_face_rules(mut self, write: bool) -> Self {
        self.write_font_face_rules = write;
        self
    }

    pub fn with_write_keyframes_rules(mut self, write: bool) -> Self {
        self.write_keyframes_rules = write;
        self
    }

    pub fn with_write_media_rules(mut self, write: bool) -> Self {
        self.write_media_rules = write;
        self
    }

    pub fn with_write_page_rules(mut self, write: bool) -> Self {
        self.write_page_rules = write;
        self
    }

    pub fn with_write_viewport_rules(mut self, write: bool) -> Self {
        self.write_viewport_rules = write;
        self
    }

    pub fn with_write_supports_rules(mut self, write: bool) -> Self {
        self.write_supports_rules = write;
        self
    }

    pub fn with_write_unknown_rules(mut self, write: bool) -> Self {
        self.write_unknown_rules = write;
        self
    }

    pub fn version(&self) -> CssVersion {
        self.version
    }

    pub fn is_optimized_output(&self) -> bool {
        self.optimized_output
    }

    pub fn is_remove_unnecessary_code(&self) -> bool {
        self.remove_unnecessary_code
    }

    pub fn new_line_mode(&self) -> NewLineMode {
        self.new_line_mode
    }

    /// The line terminator for the configured mode.
    pub fn new_line(&self) -> &'static str {
        self.new_line_mode.text()
    }

    /// The indent string repeated `level` times.
    pub fn indent(&self, level: usize) -> String {
        self.indent.repeat(level)
    }

    pub fn is_quote_urls(&self) -> bool {
        self.quote_urls
    }

    pub fn is_write_namespace_rules(&self) -> bool {
        self.write_namespace_rules
    }

    pub fn is_write_font_face_rules(&self) -> bool {
        self.write_font_face_rules
    }

    pub fn is_write_keyframes_rules(&self) -> bool {
        self.write_keyframes_rules
    }

    pub fn is_write_media_rules(&self) -> bool {
        self.write_media_rules
    }

    pub fn is_write_page_rules(&self) -> bool {
        self.write_page_rules
    }

    pub fn is_write_viewport_rules(&self) -> bool {
        self.write_viewport_rules
    }

    pub fn is_write_supports_rules(&self) -> bool {
        self.write_supports_rules
    }

    pub fn is_write_unknown_rules(&self) -> bool {
        self.write_unknown_rules
    }

    /// Fail if `construct` needs a newer version than the target.
    pub fn check_version_requirements(&self, construct: &str, required: CssVersion) -> Result<()> {
        if self.version.supports(required) {
            Ok(())
        } else {
            Err(Error::version_requirement(construct, required, self.version))
        }
    }
}
