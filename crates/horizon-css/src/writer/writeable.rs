//! The trait every object model node implements to render itself.

use super::settings::WriterSettings;
use crate::Result;
use crate::version::CssVersion;

/// A node that can be written as CSS text.
pub trait CssWriteable {
    /// Render this node. `indent_level` is the nesting depth of the node.
    ///
    /// Fails with [`crate::Error::VersionRequirement`] if the node, or one
    /// of its children, needs a newer CSS version than the settings target.
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String>;
}

/// A node that requires a minimum CSS version.
pub trait CssVersionAware {
    fn min_version(&self) -> CssVersion;
}

/// Render each item and join the results with `separator`.
pub(crate) fn join_css<'a, T, I>(
    items: I,
    separator: &str,
    settings: &WriterSettings,
    indent_level: usize,
) -> Result<String>
where
    T: CssWriteable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.as_css_string(settings, indent_level)?);
    }
    Ok(out)
}
