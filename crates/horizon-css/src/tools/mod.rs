//! Convenience operations built on the reader and writer.

mod compressor;
mod media_query_tools;

pub use compressor::{compressed_css, compressed_css_with, rewritten_css};
pub use media_query_tools::{can_wrap_in_media_query, parse_media_queries, wrap_in_media_query};
