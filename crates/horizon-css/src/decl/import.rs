//! `@import` rules.

use super::media::MediaQuery;
use super::uri::CssUri;
use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings, join_css};

/// `@import url(...) media-queries;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportRule {
    location: CssUri,
    media_queries: Vec<MediaQuery>,
    source: SourceMeta,
}

impl ImportRule {
    pub fn new(location: CssUri) -> Self {
        Self {
            location,
            media_queries: Vec::new(),
            source: SourceMeta::default(),
        }
    }

    pub fn with_media_query(mut self, query: MediaQuery) -> Self {
        self.media_queries.push(query);
        self
    }

    pub fn location(&self) -> &CssUri {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut CssUri {
        &mut self.location
    }

    pub fn set_location(&mut self, location: CssUri) {
        self.location = location;
    }

    pub fn media_queries(&self) -> &[MediaQuery] {
        &self.media_queries
    }

    pub fn media_queries_mut(&mut self) -> &mut Vec<MediaQuery> {
        &mut self.media_queries
    }

    pub fn add_media_query(&mut self, query: MediaQuery) -> &mut Self {
        self.media_queries.push(query);
        self
    }

    pub fn has_media_queries(&self) -> bool {
        !self.media_queries.is_empty()
    }
}

impl CssVersionAware for ImportRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css10
    }
}

impl CssWriteable for ImportRule {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@import", self.min_version())?;
        let mut out = String::from("@import ");
        out.push_str(&self.location.as_css_string(settings, indent_level)?);
        if !self.media_queries.is_empty() {
            let separator = if settings.is_optimized_output() { "," } else { ", " };
            out.push(' ');
            out.push_str(&join_css(
                &self.media_queries,
                separator,
                settings,
                indent_level,
            )?);
        }
        out.push(';');
        out.push_str(settings.new_line());
        Ok(out)
    }
}

impl_source_location_aware!(ImportRule);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_import() {
        let rule = ImportRule::new(CssUri::new("a.css"));
        let settings = WriterSettings::default();
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "@import url(a.css);\n");

        let rule = rule
            .with_media_query(MediaQuery::with_medium("screen"))
            .with_media_query(MediaQuery::with_medium("print"));
        assert_eq!(
            rule.as_css_string(&settings, 0).unwrap(),
            "@import url(a.css) screen, print;\n"
        );
        assert_eq!(
            rule.as_css_string(&settings.clone().with_optimized_output(true), 0)
                .unwrap(),
            "@import url(a.css) screen,print;\n"
        );
    }
}
