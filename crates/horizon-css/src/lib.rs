//! CSS parsing, object model and writing for Horizon Lattice.
//!
//! This crate reads CSS 2.1 and CSS 3 stylesheets into a mutable object
//! model and writes them back, either formatted or minified:
//!
//! - **Reader**: decoding with BOM and `@charset` detection, strict or
//!   browser-compliant parsing, and pluggable error handlers
//! - **Object Model**: rules, selectors, declarations and expressions with
//!   optional source locations, plus visitors over rules and URLs
//! - **Writer**: formatted or optimized output with CSS version checks
//! - **Properties**: validating property definitions and values that
//!   expand into vendor-prefixed variants
//! - **Tools**: compression and media query wrapping
//!
//! # Example
//!
//! ```
//! use horizon_css::prelude::*;
//!
//! let settings = ReaderSettings::default().with_browser_compliant(true);
//! let sheet = CssReader::read_from_string(
//!     ".pen {background-color:red} .pen {background-color: blue}",
//!     &settings,
//! )
//! .unwrap();
//! assert_eq!(sheet.rule_count(), 2);
//!
//! let writer = CssWriter::new(WriterSettings::optimized(CssVersion::Css30));
//! assert_eq!(
//!     writer.css_as_string(&sheet).unwrap(),
//!     ".pen{background-color:red}.pen{background-color:blue}"
//! );
//! ```

pub mod decl;
pub mod handler;
pub mod media;
pub mod parser;
pub mod property;
pub mod propertyvalue;
pub mod reader;
pub mod source_location;
pub mod tools;
pub mod unit;
pub mod utils;
pub mod vendor;
pub mod version;
pub mod writer;

mod error;
mod names;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::decl::{CascadingStyleSheet, HasDeclarations, RuleContainer, TopLevelRule};
    pub use crate::reader::{CssDeclarationListReader, CssReader, ReaderSettings};
    pub use crate::version::CssVersion;
    pub use crate::writer::{CssWriteable, CssWriter, WriterSettings};
    pub use crate::{Error, Result};
}
