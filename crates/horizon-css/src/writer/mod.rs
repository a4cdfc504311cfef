//! Rendering the object model back to CSS text.

mod css_writer;
mod settings;
mod writeable;

pub use css_writer::{CssWriter, DEFAULT_HEADER_TEXT};
pub use settings::{NewLineMode, WriterSettings};
pub use writeable::{CssVersionAware, CssWriteable};
pub(crate) use writeable::join_css;
