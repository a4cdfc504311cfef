//! Lexical tokens.

use crate::source_location::SourceArea;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    /// `@name`
    AtKeyword,
    /// `#name`
    Hash,
    String,
    /// A string interrupted by a newline or the end of input.
    BadString,
    Number,
    Percentage,
    Dimension,
    /// `url(...)`, including the parentheses.
    Url,
    BadUrl,
    /// An identifier followed directly by `(`; the text includes the parenthesis.
    Function,
    UnicodeRange,
    Whitespace,
    Colon,
    Semicolon,
    Comma,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
    /// `~=`
    IncludeMatch,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    /// `!important`, possibly with whitespace or comments after the `!`.
    Important,
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,
    Delim(char),
    Eof,
}

/// A token with its raw source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub area: SourceArea,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, area: SourceArea) -> Self {
        Self {
            kind,
            text: text.into(),
            area,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_delim(&self, c: char) -> bool {
        self.kind == TokenKind::Delim(c)
    }

    /// True for an identifier equal to `name`, ignoring ASCII case.
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case(name)
    }

    /// True for a function token whose name equals `name`, ignoring ASCII case.
    pub fn is_function(&self, name: &str) -> bool {
        self.kind == TokenKind::Function
            && self
                .text
                .strip_suffix('(')
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
    }

    /// A short human readable description for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Whitespace => "whitespace".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}
