//! Source positions of parsed nodes.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The area covered by a single token.
///
/// Lines and columns are 1-based. The end position is inclusive, i.e. it is
/// the position of the last character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceArea {
    pub begin_line: u32,
    pub begin_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceArea {
    /// Create a new source area.
    pub fn new(begin_line: u32, begin_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            begin_line,
            begin_column,
            end_line,
            end_column,
        }
    }

    /// The begin position formatted as `line:column`.
    pub fn begin_location(&self) -> String {
        format!("{}:{}", self.begin_line, self.begin_column)
    }

    /// The end position formatted as `line:column`.
    pub fn end_location(&self) -> String {
        format!("{}:{}", self.end_line, self.end_column)
    }
}

impl fmt::Display for SourceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.begin_line, self.begin_column, self.end_line, self.end_column
        )
    }
}

/// The location of a node: the areas of its first and last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    first_token: Option<SourceArea>,
    last_token: Option<SourceArea>,
}

impl SourceLocation {
    /// Create a location from the first and last token areas.
    ///
    /// Returns `None` if both areas are missing.
    pub fn new(first_token: Option<SourceArea>, last_token: Option<SourceArea>) -> Option<Self> {
        if first_token.is_none() && last_token.is_none() {
            return None;
        }
        Some(Self {
            first_token,
            last_token,
        })
    }

    pub fn first_token_area(&self) -> Option<SourceArea> {
        self.first_token
    }

    pub fn last_token_area(&self) -> Option<SourceArea> {
        self.last_token
    }

    pub fn first_token_begin_line(&self) -> Option<u32> {
        self.first_token.map(|a| a.begin_line)
    }

    pub fn first_token_begin_column(&self) -> Option<u32> {
        self.first_token.map(|a| a.begin_column)
    }

    pub fn first_token_end_line(&self) -> Option<u32> {
        self.first_token.map(|a| a.end_line)
    }

    pub fn first_token_end_column(&self) -> Option<u32> {
        self.first_token.map(|a| a.end_column)
    }

    pub fn last_token_begin_line(&self) -> Option<u32> {
        self.last_token.map(|a| a.begin_line)
    }

    pub fn last_token_begin_column(&self) -> Option<u32> {
        self.last_token.map(|a| a.begin_column)
    }

    pub fn last_token_end_line(&self) -> Option<u32> {
        self.last_token.map(|a| a.end_line)
    }

    pub fn last_token_end_column(&self) -> Option<u32> {
        self.last_token.map(|a| a.end_column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_token, self.last_token) {
            (Some(first), Some(last)) => write!(f, "{} to {}", first, last),
            (Some(area), None) | (None, Some(area)) => write!(f, "{}", area),
            (None, None) => Ok(()),
        }
    }
}

/// An optional source location stored on an object model node.
///
/// Two nodes read from different places are still equal when their content
/// is equal, so this slot compares equal to every other slot and does not
/// contribute to hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceMeta(Option<SourceLocation>);

impl SourceMeta {
    pub fn new(location: Option<SourceLocation>) -> Self {
        Self(location)
    }

    pub fn get(&self) -> Option<SourceLocation> {
        self.0
    }

    pub fn set(&mut self, location: Option<SourceLocation>) {
        self.0 = location;
    }
}

impl PartialEq for SourceMeta {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for SourceMeta {}

impl Hash for SourceMeta {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

/// Implemented by every node that can carry a source location.
pub trait SourceLocationAware {
    /// The location this node was read from, if it was recorded.
    fn source_location(&self) -> Option<SourceLocation>;

    /// Set or clear the source location.
    fn set_source_location(&mut self, location: Option<SourceLocation>);
}

/// Implements [`SourceLocationAware`] for a struct with a `source: SourceMeta` field.
macro_rules! impl_source_location_aware {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::source_location::SourceLocationAware for $ty {
                fn source_location(&self) -> Option<$crate::source_location::SourceLocation> {
                    self.source.get()
                }

                fn set_source_location(
                    &mut self,
                    location: Option<$crate::source_location::SourceLocation>,
                ) {
                    self.source.set(location);
                }
            }
        )*
    };
}

pub(crate) use impl_source_location_aware;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_requires_an_area() {
        assert!(SourceLocation::new(None, None).is_none());
        let loc = SourceLocation::new(Some(SourceArea::new(1, 7, 1, 11)), None).unwrap();
        assert_eq!(loc.first_token_begin_column(), Some(7));
        assert_eq!(loc.last_token_begin_column(), None);
    }

    #[test]
    fn test_meta_is_ignored_by_equality() {
        let a = SourceMeta::new(SourceLocation::new(Some(SourceArea::new(1, 1, 1, 3)), None));
        let b = SourceMeta::default();
        assert_eq!(a, b);
        assert!(a.get().is_some());
        assert!(b.get().is_none());
    }

    #[test]
    fn test_display() {
        let first = SourceArea::new(1, 1, 1, 3);
        let last = SourceArea::new(2, 5, 2, 5);
        assert_eq!(first.to_string(), "1:1-1:3");
        let loc = SourceLocation::new(Some(first), Some(last)).unwrap();
        assert_eq!(loc.to_string(), "1:1-1:3 to 2:5-2:5");
    }
}
