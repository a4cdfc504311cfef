//! CSS language levels.

use std::fmt;

/// A CSS language level.
///
/// Versions are ordered, so `CssVersion::Css21 < CssVersion::Css30`. Every
/// object model node knows the minimum version it needs, and the writer
/// refuses to emit a node whose minimum exceeds its target version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CssVersion {
    /// CSS level 1.
    Css10,
    /// CSS level 2.1.
    Css21,
    /// CSS level 3 and the modules built on it.
    #[default]
    Css30,
}

impl CssVersion {
    /// The most recent supported version.
    pub const LATEST: CssVersion = CssVersion::Css30;

    /// All versions in ascending order.
    pub const ALL: [CssVersion; 3] = [CssVersion::Css10, CssVersion::Css21, CssVersion::Css30];

    /// The version number as text (e.g., "2.1").
    pub const fn version_string(&self) -> &'static str {
        match self {
            CssVersion::Css10 => "1.0",
            CssVersion::Css21 => "2.1",
            CssVersion::Css30 => "3.0",
        }
    }

    /// Returns true if a construct requiring `min` may be used at this level.
    pub fn supports(&self, min: CssVersion) -> bool {
        *self >= min
    }
}

impl fmt::Display for CssVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CSS {}", self.version_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(CssVersion::Css10 < CssVersion::Css21);
        assert!(CssVersion::Css21 < CssVersion::Css30);
        assert_eq!(CssVersion::LATEST, CssVersion::Css30);
        assert_eq!(CssVersion::default(), CssVersion::Css30);
    }

    #[test]
    fn test_supports() {
        assert!(CssVersion::Css30.supports(CssVersion::Css21));
        assert!(CssVersion::Css21.supports(CssVersion::Css21));
        assert!(!CssVersion::Css21.supports(CssVersion::Css30));
    }
}
