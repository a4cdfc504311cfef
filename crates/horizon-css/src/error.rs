//! Error types for reading and writing CSS.

use std::path::PathBuf;

use crate::version::CssVersion;

/// Result type alias for CSS operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, building or writing CSS.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unrecoverable CSS parse error.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// The input could not be decoded, or declares an unknown charset.
    #[error("Charset error: {0}")]
    Charset(String),

    /// The reader does not support the requested CSS version.
    #[error("Unsupported CSS version for reading: {0}")]
    UnsupportedVersion(CssVersion),

    /// A construct requires a newer CSS version than the writer targets.
    #[error("{construct} requires {required} but the writer targets {target}")]
    VersionRequirement {
        construct: String,
        required: CssVersion,
        target: CssVersion,
    },

    /// A structural invariant of the object model was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid property value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// Writing the rendered CSS to its destination failed.
    #[error("Failed to write CSS: {0}")]
    Write(#[source] std::io::Error),

    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a charset error.
    pub fn charset(message: impl Into<String>) -> Self {
        Self::Charset(message.into())
    }

    /// Create a version requirement error.
    pub fn version_requirement(
        construct: impl Into<String>,
        required: CssVersion,
        target: CssVersion,
    ) -> Self {
        Self::VersionRequirement {
            construct: construct.into(),
            required,
            target,
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error was produced by the parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("Unexpected '}'", 3, 14);
        assert_eq!(
            err.to_string(),
            "CSS parse error at line 3, column 14: Unexpected '}'"
        );
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_version_requirement_display() {
        let err = Error::version_requirement("@supports", CssVersion::Css30, CssVersion::Css21);
        assert_eq!(err.to_string(), "@supports requires CSS 3.0 but the writer targets CSS 2.1");
        assert!(!err.is_parse_error());
    }
}
