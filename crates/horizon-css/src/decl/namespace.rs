//! `@namespace` rules.

use crate::Result;
use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::utils::url_helper::as_css_url;
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// `@namespace prefix url(...);`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceRule {
    prefix: Option<String>,
    url: String,
    source: SourceMeta,
}

impl NamespaceRule {
    /// A namespace rule. An empty prefix is the default namespace.
    pub fn new(prefix: Option<&str>, url: impl Into<String>) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()).map(str::to_string),
            url: url.into(),
            source: SourceMeta::default(),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }
}

impl CssVersionAware for NamespaceRule {
    fn min_version(&self) -> CssVersion {
        CssVersion::Css30
    }
}

impl CssWriteable for NamespaceRule {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        settings.check_version_requirements("@namespace", self.min_version())?;
        if !settings.is_write_namespace_rules() {
            return Ok(String::new());
        }
        let mut out = String::from("@namespace ");
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
            out.push(' ');
        }
        if self.url.is_empty() {
            out.push_str("\"\"");
        } else {
            out.push_str(&as_css_url(&self.url, false));
        }
        out.push(';');
        out.push_str(settings.new_line());
        Ok(out)
    }
}

impl_source_location_aware!(NamespaceRule);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_namespace() {
        let settings = WriterSettings::default();
        let rule = NamespaceRule::new(Some("svg"), "http://www.w3.org/2000/svg");
        assert_eq!(
            rule.as_css_string(&settings, 0).unwrap(),
            "@namespace svg url(http://www.w3.org/2000/svg);\n"
        );
        let rule = NamespaceRule::new(None, "");
        assert_eq!(rule.as_css_string(&settings, 0).unwrap(), "@namespace \"\";\n");
        assert_eq!(
            rule.as_css_string(&settings.clone().with_write_namespace_rules(false), 0)
                .unwrap(),
            ""
        );
        assert!(
            rule.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
    }
}
