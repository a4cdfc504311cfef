//! A URI inside `url(...)`.

use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::utils::data_url::{self, DataUrl};
use crate::utils::url_helper;
use crate::writer::{CssWriteable, WriterSettings};

/// A URI as used by `@import`, `@namespace` and `url()` terms.
///
/// The stored text is unquoted and unescaped. Quoting is decided at write time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssUri {
    uri: String,
    source: SourceMeta,
}

impl CssUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            source: SourceMeta::default(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
    }

    /// Returns true for `data:` URLs.
    pub fn is_data_url(&self) -> bool {
        data_url::is_data_url(&self.uri)
    }

    /// The decoded `data:` URL, if this is a well-formed one.
    pub fn data_url(&self) -> Option<DataUrl> {
        data_url::parse_data_url(&self.uri)
    }
}

impl CssWriteable for CssUri {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        Ok(url_helper::as_css_url(&self.uri, settings.is_quote_urls()))
    }
}

impl_source_location_aware!(CssUri);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write() {
        let uri = CssUri::new("images/a b.png");
        assert_eq!(
            uri.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "url('images/a b.png')"
        );
        let uri = CssUri::new("a.png");
        assert_eq!(
            uri.as_css_string(&WriterSettings::default().with_quote_urls(true), 0).unwrap(),
            "url('a.png')"
        );
        assert!(CssUri::new("DATA:image/png;base64,xyz").is_data_url());
    }

    #[test]
    fn test_data_url() {
        let uri = CssUri::new("data:image/gif;base64,R0lGODlhAQABAAAAACw=");
        let data = uri.data_url().unwrap();
        assert_eq!(data.mime_type().essence(), "image/gif");
        assert_eq!(&data.content_bytes()[..6], b"GIF89a");
        assert!(CssUri::new("a.png").data_url().is_none());
    }
}
