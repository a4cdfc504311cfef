//! One-call minification of CSS text.

use crate::reader::{CssReader, ReaderSettings};
use crate::version::CssVersion;
use crate::writer::{CssWriter, WriterSettings};

/// Minify `css`. Input that cannot be read is returned unchanged.
pub fn compressed_css(css: &str, version: CssVersion) -> String {
    compressed_css_with(css, version, false)
}

/// Minify `css`, optionally dropping empty rules as well.
pub fn compressed_css_with(css: &str, version: CssVersion, remove_unnecessary_code: bool) -> String {
    let settings =
        WriterSettings::optimized(version).with_remove_unnecessary_code(remove_unnecessary_code);
    rewritten_css(css, &settings)
}

/// Read `css` and write it again with `settings`.
///
/// The original text is returned if it cannot be read or written.
pub fn rewritten_css(css: &str, settings: &WriterSettings) -> String {
    // CSS 1.0 output is read as CSS 2.1.
    let reader_settings = match ReaderSettings::new(settings.version().max(CssVersion::Css21)) {
        Ok(reader_settings) => reader_settings,
        Err(error) => {
            tracing::warn!(%error, "Cannot read CSS for rewriting");
            return css.to_string();
        }
    };
    let Some(sheet) = CssReader::read_from_string(css, &reader_settings) else {
        return css.to_string();
    };
    match CssWriter::new(settings.clone()).css_as_string(&sheet) {
        Ok(rewritten) => rewritten,
        Err(error) => {
            tracing::warn!(%error, "Failed to write optimized CSS");
            css.to_string()
        }
    }
}
