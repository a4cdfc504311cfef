//! CSS tokenizing and parsing into a concrete syntax tree.

mod char_stream;
mod charset;
mod error;
mod grammar;
mod helper;
mod lexer;
mod node;
mod token;

pub use char_stream::CharStream;
pub use charset::declared_charset;
pub use error::{ParseError, ParseErrorKind};
pub use grammar::{MAX_NESTING_DEPTH, parse_declaration_list, parse_stylesheet};
pub use helper::{
    extract_string_value, split_number, trim_url, unescape_identifier, unescape_url,
    validate_identifier,
};
pub use lexer::tokenize;
pub use node::{CssNode, NodeType};
pub use token::{Token, TokenKind};
