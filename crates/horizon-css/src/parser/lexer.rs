//! CSS tokenizer.
//!
//! The lexer turns the whole input into a token vector up front so the
//! grammar can look ahead arbitrarily. Comments are dropped, whitespace is
//! kept as tokens because it is significant in selectors. Escapes stay raw
//! in the token text.

use super::char_stream::CharStream;
use super::error::{ParseError, ParseErrorKind};
use super::token::{Token, TokenKind};
use crate::Result;
use crate::reader::ParseErrorHandler;

/// Tokenize the whole stream. The last token is always [`TokenKind::Eof`].
///
/// Illegal control characters are reported to `handler` and skipped.
pub fn tokenize(stream: &CharStream, handler: &dyn ParseErrorHandler) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        stream,
        pos: 0,
        handler,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    let end = stream.area(stream.len(), stream.len());
    tokens.push(Token::new(TokenKind::Eof, "", end));
    Ok(tokens)
}

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}')
}

#[inline]
fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{c}')
}

#[inline]
fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c as u32 >= 0x80
}

#[inline]
fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

#[inline]
fn is_illegal(c: char) -> bool {
    (c < ' ' && !is_whitespace(c)) || c == '\u{7f}'
}

struct Lexer<'a> {
    stream: &'a CharStream,
    pos: usize,
    handler: &'a dyn ParseErrorHandler,
}

impl Lexer<'_> {
    #[inline]
    fn at(&self, offset: usize) -> Option<char> {
        self.stream.at(self.pos + offset)
    }

    #[inline]
    fn at_is(&self, offset: usize, pred: impl Fn(char) -> bool) -> bool {
        self.at(offset).is_some_and(pred)
    }

    fn is_valid_escape(&self, offset: usize) -> bool {
        self.at(offset) == Some('\\') && self.at(offset + 1).is_some_and(|c| !is_newline(c))
    }

    fn starts_ident(&self, offset: usize) -> bool {
        match self.at(offset) {
            Some('-') => {
                self.at_is(offset + 1, |c| is_name_start(c) || c == '-')
                    || self.is_valid_escape(offset + 1)
            }
            Some('\\') => self.is_valid_escape(offset),
            Some(c) => is_name_start(c),
            None => false,
        }
    }

    fn starts_number(&self, offset: usize) -> bool {
        match self.at(offset) {
            Some('+' | '-') => {
                self.at_is(offset + 1, |c| c.is_ascii_digit())
                    || (self.at(offset + 1) == Some('.')
                        && self.at_is(offset + 2, |c| c.is_ascii_digit()))
            }
            Some('.') => self.at_is(offset + 1, |c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(
            kind,
            self.stream.slice(start, self.pos),
            self.stream.area(start, self.pos),
        )
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let Some(c) = self.at(0) else {
                return Ok(None);
            };
            let start = self.pos;

            if c == '/' && self.at(1) == Some('*') {
                self.skip_comment();
                continue;
            }
            if is_illegal(c) {
                let (line, column) = self.stream.position(start);
                let error = ParseError::new(
                    ParseErrorKind::IllegalCharacter,
                    format!("Illegal character U+{:04X}", c as u32),
                    line,
                    column,
                );
                self.handler.on_illegal_character(&error)?;
                self.pos += 1;
                continue;
            }

            let kind = self.consume_token(c);
            return Ok(Some(self.token(kind, start)));
        }
    }

    fn consume_token(&mut self, c: char) -> TokenKind {
        if is_whitespace(c) {
            while self.at_is(0, is_whitespace) {
                self.pos += 1;
            }
            return TokenKind::Whitespace;
        }

        if c == '<' && self.at(1) == Some('!') && self.at(2) == Some('-') && self.at(3) == Some('-')
        {
            self.pos += 4;
            return TokenKind::Cdo;
        }
        if c == '-' && self.at(1) == Some('-') && self.at(2) == Some('>') {
            self.pos += 3;
            return TokenKind::Cdc;
        }

        if c == '"' || c == '\'' {
            return self.consume_string(c);
        }

        if self.starts_number(0) {
            return self.consume_numeric();
        }

        if (c == 'u' || c == 'U')
            && self.at(1) == Some('+')
            && self.at_is(2, |n| n.is_ascii_hexdigit() || n == '?')
        {
            return self.consume_unicode_range();
        }

        if self.starts_ident(0) {
            return self.consume_ident_like();
        }

        match c {
            '#' if self.at_is(1, is_name_char) || self.is_valid_escape(1) => {
                self.pos += 1;
                self.consume_name();
                TokenKind::Hash
            }
            '@' if self.starts_ident(1) => {
                self.pos += 1;
                self.consume_name();
                TokenKind::AtKeyword
            }
            '!' => self.consume_bang(),
            '~' | '|' | '^' | '$' | '*' if self.at(1) == Some('=') => {
                self.pos += 2;
                match c {
                    '~' => TokenKind::IncludeMatch,
                    '|' => TokenKind::DashMatch,
                    '^' => TokenKind::PrefixMatch,
                    '$' => TokenKind::SuffixMatch,
                    _ => TokenKind::SubstringMatch,
                }
            }
            _ => {
                self.pos += 1;
                match c {
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    '{' => TokenKind::LeftBrace,
                    '}' => TokenKind::RightBrace,
                    '[' => TokenKind::LeftBracket,
                    ']' => TokenKind::RightBracket,
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    other => TokenKind::Delim(other),
                }
            }
        }
    }

    fn skip_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.at(0) {
            if c == '*' && self.at(1) == Some('/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    /// Consume an escape starting at the backslash.
    fn consume_escape(&mut self) {
        self.pos += 1;
        let Some(c) = self.at(0) else {
            return;
        };
        if c.is_ascii_hexdigit() {
            let mut count = 0;
            while count < 6 && self.at_is(0, |h| h.is_ascii_hexdigit()) {
                self.pos += 1;
                count += 1;
            }
            if self.at(0) == Some('\r') && self.at(1) == Some('\n') {
                self.pos += 2;
            } else if self.at_is(0, is_whitespace) {
                self.pos += 1;
            }
        } else {
            self.pos += 1;
        }
    }

    fn consume_name(&mut self) {
        loop {
            if self.at_is(0, is_name_char) {
                self.pos += 1;
            } else if self.is_valid_escape(0) {
                self.consume_escape();
            } else {
                return;
            }
        }
    }

    fn consume_string(&mut self, quote: char) -> TokenKind {
        self.pos += 1;
        loop {
            match self.at(0) {
                None => return TokenKind::BadString,
                Some(c) if c == quote => {
                    self.pos += 1;
                    return TokenKind::String;
                }
                Some(c) if is_newline(c) => return TokenKind::BadString,
                Some('\\') => {
                    self.pos += 1;
                    match self.at(0) {
                        None => {}
                        Some('\r') if self.at(1) == Some('\n') => self.pos += 2,
                        Some(_) => self.pos += 1,
                    }
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn consume_numeric(&mut self) -> TokenKind {
        if self.at_is(0, |c| c == '+' || c == '-') {
            self.pos += 1;
        }
        while self.at_is(0, |c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.at(0) == Some('.') && self.at_is(1, |c| c.is_ascii_digit()) {
            self.pos += 1;
            while self.at_is(0, |c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if self.at_is(0, |c| c == 'e' || c == 'E') {
            let digit_at = if self.at_is(1, |c| c == '+' || c == '-') { 2 } else { 1 };
            if self.at_is(digit_at, |c| c.is_ascii_digit()) {
                self.pos += digit_at;
                while self.at_is(0, |c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        if self.at(0) == Some('%') {
            self.pos += 1;
            TokenKind::Percentage
        } else if self.starts_ident(0) {
            self.consume_name();
            TokenKind::Dimension
        } else {
            TokenKind::Number
        }
    }

    fn consume_unicode_range(&mut self) -> TokenKind {
        self.pos += 2;
        let mut count = 0;
        while count < 6 && self.at_is(0, |c| c.is_ascii_hexdigit() || c == '?') {
            self.pos += 1;
            count += 1;
        }
        if self.at(0) == Some('-') && self.at_is(1, |c| c.is_ascii_hexdigit()) {
            self.pos += 1;
            let mut count = 0;
            while count < 6 && self.at_is(0, |c| c.is_ascii_hexdigit()) {
                self.pos += 1;
                count += 1;
            }
        }
        TokenKind::UnicodeRange
    }

    fn consume_ident_like(&mut self) -> TokenKind {
        let start = self.pos;
        self.consume_name();
        if self.at(0) != Some('(') {
            return TokenKind::Ident;
        }
        let is_url = self.stream.slice(start, self.pos).eq_ignore_ascii_case("url");
        self.pos += 1;
        if is_url {
            self.consume_url()
        } else {
            TokenKind::Function
        }
    }

    /// Consume the remainder of `url(` up to and including the closing parenthesis.
    fn consume_url(&mut self) -> TokenKind {
        while self.at_is(0, is_whitespace) {
            self.pos += 1;
        }
        match self.at(0) {
            Some(q @ ('"' | '\'')) => {
                if self.consume_string(q) != TokenKind::String {
                    return self.consume_bad_url();
                }
                while self.at_is(0, is_whitespace) {
                    self.pos += 1;
                }
                if self.at(0) == Some(')') {
                    self.pos += 1;
                    TokenKind::Url
                } else {
                    self.consume_bad_url()
                }
            }
            _ => loop {
                match self.at(0) {
                    None => return TokenKind::BadUrl,
                    Some(')') => {
                        self.pos += 1;
                        return TokenKind::Url;
                    }
                    Some(c) if is_whitespace(c) => {
                        while self.at_is(0, is_whitespace) {
                            self.pos += 1;
                        }
                        if self.at(0) == Some(')') {
                            self.pos += 1;
                            return TokenKind::Url;
                        }
                        return self.consume_bad_url();
                    }
                    Some('"' | '\'' | '(') => return self.consume_bad_url(),
                    Some('\\') => {
                        if self.is_valid_escape(0) {
                            self.consume_escape();
                        } else {
                            return self.consume_bad_url();
                        }
                    }
                    Some(c) if is_illegal(c) => return self.consume_bad_url(),
                    Some(_) => self.pos += 1,
                }
            },
        }
    }

    fn consume_bad_url(&mut self) -> TokenKind {
        while let Some(c) = self.at(0) {
            self.pos += 1;
            if c == ')' {
                break;
            }
        }
        TokenKind::BadUrl
    }

    /// `!important` with optional whitespace or comments after the bang.
    fn consume_bang(&mut self) -> TokenKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.at_is(0, is_whitespace) {
                self.pos += 1;
            } else if self.at(0) == Some('/') && self.at(1) == Some('*') {
                self.skip_comment();
            } else {
                break;
            }
        }
        let word_start = self.pos;
        while self.at_is(0, |c| c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let word = self.stream.slice(word_start, self.pos);
        if word.eq_ignore_ascii_case("important") && !self.at_is(0, is_name_char) {
            TokenKind::Important
        } else {
            self.pos = start + 1;
            TokenKind::Delim('!')
        }
    }
}
