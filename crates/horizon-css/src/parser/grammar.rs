//! Recursive descent CSS grammar.
//!
//! The grammar works on the complete token vector and produces a
//! [`CssNode`] tree. Recoverable errors go to the [`ParseErrorHandler`];
//! how the parser resumes depends on the mode:
//!
//! - strict: a bad declaration skips to the next `;` (consumed) or `}` (not
//!   consumed) without looking at nesting, a bad rule skips its statement.
//!   End of input inside a block is fatal.
//! - browser compliant: malformed constructs are skipped with balanced
//!   brackets up to the next `;` or the matching `}`, and the skipped span
//!   is reported once. A top-level rule left open at end of input is dropped.

use super::char_stream::CharStream;
use super::error::{ParseError, ParseErrorKind};
use super::helper::{extract_string_value, trim_url, unescape_url, validate_identifier};
use super::lexer::tokenize;
use super::node::{CssNode, NodeType};
use super::token::{Token, TokenKind};
use crate::reader::ParseErrorHandler;
use crate::source_location::SourceArea;
use crate::{Error, Result};

/// Parse a complete stylesheet into a [`NodeType::Root`] node.
pub fn parse_stylesheet(
    stream: &CharStream,
    handler: &dyn ParseErrorHandler,
    browser_compliant: bool,
) -> Result<CssNode> {
    let tokens = tokenize(stream, handler)?;
    Grammar::new(tokens, handler, browser_compliant).stylesheet()
}

/// Parse the content of a `style` attribute into a
/// [`NodeType::StyleDeclarationList`] node.
pub fn parse_declaration_list(
    stream: &CharStream,
    handler: &dyn ParseErrorHandler,
    browser_compliant: bool,
) -> Result<CssNode> {
    let tokens = tokenize(stream, handler)?;
    Grammar::new(tokens, handler, browser_compliant).declaration_list()
}

/// Why a production failed.
enum Failure {
    /// A grammar violation; the caller decides where to resume.
    Syntax(ParseError),
    /// The input ended inside a construct.
    Eof(ParseError),
    /// Nothing can be recovered.
    Fatal(Error),
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Failure::Fatal(error)
    }
}

type PResult<T> = std::result::Result<T, Failure>;

/// Deepest nesting of blocks, functions, selector arguments and
/// parenthesised conditions the grammar accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Charset,
    Imports,
    Namespaces,
    Rules,
}

fn closer_for(kind: TokenKind) -> Option<TokenKind> {
    match kind {
        TokenKind::LeftBrace => Some(TokenKind::RightBrace),
        TokenKind::LeftParen | TokenKind::Function => Some(TokenKind::RightParen),
        TokenKind::LeftBracket => Some(TokenKind::RightBracket),
        _ => None,
    }
}

fn is_calc_function(token: &Token) -> bool {
    token.is_function("calc") || token.is_function("-moz-calc") || token.is_function("-webkit-calc")
}

fn is_nth_function(name: &str) -> bool {
    matches!(
        name,
        "nth-child(" | "nth-last-child(" | "nth-of-type(" | "nth-last-of-type(" | "nth-col("
            | "nth-last-col("
    )
}

/// The lowercase name of an at-keyword token, without the `@`.
fn at_rule_name(token: &Token) -> Option<String> {
    (token.kind == TokenKind::AtKeyword).then(|| token.text[1..].to_ascii_lowercase())
}

struct Grammar<'h> {
    tokens: Vec<Token>,
    pos: usize,
    last_area: Option<SourceArea>,
    handler: &'h dyn ParseErrorHandler,
    browser_compliant: bool,
    depth: usize,
}

impl<'h> Grammar<'h> {
    fn new(tokens: Vec<Token>, handler: &'h dyn ParseErrorHandler, browser_compliant: bool) -> Self {
        Self {
            tokens,
            pos: 0,
            last_area: None,
            handler,
            browser_compliant,
            depth: 0,
        }
    }

    // Token access

    fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &Token {
        let index = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// The first non-whitespace token at or after `pos + n`.
    fn peek_after_ws(&self, mut n: usize) -> &Token {
        while self.peek_nth(n).kind == TokenKind::Whitespace {
            n += 1;
        }
        self.peek_nth(n)
    }

    fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            if token.kind != TokenKind::Whitespace {
                self.last_area = Some(token.area);
            }
        }
        token
    }

    fn skip_ws(&mut self) -> bool {
        let mut skipped = false;
        while self.kind() == TokenKind::Whitespace {
            self.pos += 1;
            skipped = true;
        }
        skipped
    }

    fn skip_ws_and_cdo(&mut self) {
        while matches!(
            self.kind(),
            TokenKind::Whitespace | TokenKind::Cdo | TokenKind::Cdc
        ) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.kind() == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> PResult<Token> {
        if self.kind() == kind {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &str) -> Failure {
        let token = self.peek();
        let error = ParseError::syntax(
            format!("Unexpected {}, expected {}", token.describe(), expected),
            token.area,
        );
        if token.kind == TokenKind::Eof {
            Failure::Eof(error)
        } else {
            Failure::Syntax(error)
        }
    }

    fn invalid_identifier(token: &Token, message: String) -> Failure {
        Failure::Fatal(Error::parse(
            message,
            token.area.begin_line,
            token.area.begin_column,
        ))
    }

    /// Run a recursive production one nesting level deeper.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            let area = self.peek().area;
            return Err(Failure::Fatal(Error::parse(
                format!("Nesting exceeds {MAX_NESTING_DEPTH} levels"),
                area.begin_line,
                area.begin_column,
            )));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn start(&self) -> Option<SourceArea> {
        Some(self.peek().area)
    }

    fn finish(&self, mut node: CssNode, start: Option<SourceArea>) -> CssNode {
        node.set_span(start, self.last_area);
        node
    }

    fn leaf(&mut self, node_type: NodeType) -> CssNode {
        let token = self.bump();
        CssNode::leaf(node_type, token.text, token.area)
    }

    // Recovery

    /// Skip one statement starting at the current token.
    ///
    /// Returns the area of the last skipped token and whether the input ended
    /// inside an open block.
    fn skip_statement(&mut self, in_block: bool) -> (Option<SourceArea>, bool) {
        let mut closers: Vec<TokenKind> = Vec::new();
        let mut last = None;
        loop {
            match self.kind() {
                TokenKind::Eof => return (last, !closers.is_empty()),
                TokenKind::Semicolon if closers.is_empty() => {
                    last = Some(self.bump().area);
                    return (last, false);
                }
                TokenKind::RightBrace if closers.is_empty() && in_block => return (last, false),
                _ => {}
            }

            let token = self.bump();
            if token.kind != TokenKind::Whitespace {
                last = Some(token.area);
            }
            if let Some(closer) = closer_for(token.kind) {
                closers.push(closer);
            } else if closers.last() == Some(&token.kind) {
                closers.pop();
                if token.kind == TokenKind::RightBrace && closers.is_empty() {
                    return (last, false);
                }
            } else if closers.is_empty() && token.kind == TokenKind::RightBrace {
                // A stray closing brace on the top level ends the statement.
                return (last, false);
            }
        }
    }

    /// Resume after a malformed rule that started at token index `start`.
    fn recover_rule(&mut self, start: usize, error: ParseError, in_block: bool) -> PResult<()> {
        if !self.browser_compliant {
            self.handler.on_parse_error(&error)?;
        }
        self.pos = start;
        let from = self.peek().area;
        let (to, unterminated) = self.skip_statement(in_block);
        if unterminated {
            return Err(Failure::Eof(error));
        }
        if self.browser_compliant {
            tracing::debug!("Skipping malformed rule at {}", from.begin_location());
            self.handler.on_browser_compliant_skip(&ParseError::skipped(
                error.message,
                from,
                to.unwrap_or(from),
            ))?;
        }
        Ok(())
    }

    /// Resume after a malformed declaration that started at token index `start`.
    fn recover_declaration(
        &mut self,
        start: usize,
        error: ParseError,
        in_block: bool,
    ) -> PResult<()> {
        self.pos = start;

        if !self.browser_compliant {
            self.handler.on_parse_error(&error)?;
            loop {
                match self.kind() {
                    TokenKind::Semicolon => {
                        self.bump();
                        break;
                    }
                    TokenKind::RightBrace if in_block => break,
                    TokenKind::RightBrace => {
                        self.bump();
                        break;
                    }
                    TokenKind::Eof => break,
                    _ => {
                        self.bump();
                    }
                }
            }
            return Ok(());
        }

        let from = self.peek().area;
        let mut last = None;
        let mut closers: Vec<TokenKind> = Vec::new();
        loop {
            match self.kind() {
                TokenKind::Eof if in_block => return Err(Failure::Eof(error)),
                TokenKind::Eof => break,
                TokenKind::Semicolon if closers.is_empty() => {
                    last = Some(self.bump().area);
                    break;
                }
                TokenKind::RightBrace if closers.is_empty() => {
                    if !in_block {
                        last = Some(self.bump().area);
                    }
                    break;
                }
                _ => {}
            }
            let token = self.bump();
            if token.kind != TokenKind::Whitespace {
                last = Some(token.area);
            }
            if let Some(closer) = closer_for(token.kind) {
                closers.push(closer);
            } else if closers.last() == Some(&token.kind) {
                closers.pop();
            }
        }

        tracing::debug!("Skipping malformed declaration at {}", from.begin_location());
        self.handler.on_browser_compliant_skip(&ParseError::skipped(
            error.message,
            from,
            last.unwrap_or(from),
        ))?;
        Ok(())
    }

    /// Drop a top-level rule that is still open at the end of the input.
    fn drop_unterminated(&mut self, start: usize, error: ParseError) -> Result<()> {
        if !self.browser_compliant {
            return Err(error.into_error());
        }
        let from = self.tokens[start].area;
        let to = self.tokens[start..]
            .iter()
            .rev()
            .find(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Eof))
            .map_or(from, |t| t.area);
        self.pos = self.tokens.len() - 1;
        tracing::debug!("Dropping unterminated rule at {}", from.begin_location());
        self.handler
            .on_browser_compliant_skip(&ParseError::skipped(error.message, from, to))
    }

    /// Report a rule in a position where it is not allowed and skip it.
    fn unexpected_rule(&mut self, in_block: bool) -> Result<()> {
        let token = self.peek().clone();
        let error = ParseError::new(
            ParseErrorKind::UnexpectedRule,
            format!("Unexpected rule '{}' in this position", token.text),
            token.area.begin_line,
            token.area.begin_column,
        );
        self.handler.on_unexpected_rule(&error)?;
        self.skip_statement(in_block);
        Ok(())
    }

    // Stylesheet level

    fn stylesheet(&mut self) -> Result<CssNode> {
        let mut root = CssNode::new(NodeType::Root);
        let mut stage = Stage::Charset;

        self.skip_ws_and_cdo();
        while self.kind() != TokenKind::Eof {
            let name = at_rule_name(self.peek());
            let allowed = match name.as_deref() {
                Some("charset") => stage == Stage::Charset,
                Some("import") => stage <= Stage::Imports,
                Some("namespace") => stage <= Stage::Namespaces,
                _ => true,
            };

            if allowed {
                stage = match name.as_deref() {
                    Some("charset" | "import") => Stage::Imports,
                    Some("namespace") => Stage::Namespaces,
                    _ => Stage::Rules,
                };
                if let Some(node) = self.top_level_statement()? {
                    root.push(node);
                }
            } else {
                self.unexpected_rule(false)?;
            }
            self.skip_ws_and_cdo();
        }
        Ok(root)
    }

    fn top_level_statement(&mut self) -> Result<Option<CssNode>> {
        let start = self.pos;
        let failure = match self.statement() {
            Ok(node) => return Ok(node),
            Err(Failure::Syntax(error)) => match self.recover_rule(start, error, false) {
                Ok(()) => return Ok(None),
                Err(failure) => failure,
            },
            Err(failure) => failure,
        };
        match failure {
            Failure::Fatal(error) => Err(error),
            Failure::Syntax(error) | Failure::Eof(error) => {
                self.drop_unterminated(start, error)?;
                Ok(None)
            }
        }
    }

    fn statement(&mut self) -> PResult<Option<CssNode>> {
        let Some(name) = at_rule_name(self.peek()) else {
            return self.style_rule().map(Some);
        };
        let node = match name.as_str() {
            "charset" => self.charset_rule()?,
            "import" => self.import_rule()?,
            "namespace" => self.namespace_rule()?,
            "media" => self.media_rule()?,
            "page" => self.page_rule()?,
            "font-face" => self.declaration_rule(NodeType::FontFaceRule)?,
            "viewport" | "-ms-viewport" => self.declaration_rule(NodeType::ViewportRule)?,
            "supports" => self.supports_rule()?,
            "layer" => self.layer_rule()?,
            n if n == "keyframes" || (n.starts_with('-') && n.ends_with("-keyframes")) => {
                self.keyframes_rule()?
            }
            _ => self.unknown_rule()?,
        };
        Ok(Some(node))
    }

    /// Parse the rules of a block up to and including the closing brace.
    fn nested_rules(&mut self, parent: &mut CssNode) -> PResult<()> {
        self.nested(|grammar| grammar.block_rules(parent))
    }

    fn block_rules(&mut self, parent: &mut CssNode) -> PResult<()> {
        loop {
            self.skip_ws_and_cdo();
            match self.kind() {
                TokenKind::RightBrace => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Eof => return Err(self.unexpected("'}'")),
                TokenKind::Semicolon => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            if matches!(
                at_rule_name(self.peek()).as_deref(),
                Some("charset" | "import" | "namespace")
            ) {
                self.unexpected_rule(true)?;
                continue;
            }

            let start = self.pos;
            match self.statement() {
                Ok(Some(node)) => parent.push(node),
                Ok(None) => {}
                Err(Failure::Syntax(error)) => self.recover_rule(start, error, true)?,
                Err(failure) => return Err(failure),
            }
        }
    }

    fn charset_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let name = self.expect(TokenKind::String, "charset name")?;
        self.skip_ws();
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(self.finish(CssNode::with_text(NodeType::Charset, name.text), start))
    }

    /// A `url(...)` or string token holding a URL.
    fn url_or_string(&mut self, node_type: NodeType) -> PResult<CssNode> {
        let token = self.peek().clone();
        let url = match token.kind {
            TokenKind::Url => trim_url(&token.text),
            TokenKind::String => unescape_url(extract_string_value(&token.text)),
            _ => return Err(self.unexpected("URL")),
        };
        self.bump();
        Ok(CssNode::leaf(node_type, url, token.area))
    }

    fn import_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::ImportRule);
        node.push(self.url_or_string(NodeType::Url)?);
        self.skip_ws();
        if self.kind() != TokenKind::Semicolon {
            node.push(self.media_query_list()?);
            self.skip_ws();
        }
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(self.finish(node, start))
    }

    fn namespace_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::NamespaceRule);
        if self.kind() == TokenKind::Ident {
            node.push(self.leaf(NodeType::NamespaceRulePrefix));
            self.skip_ws();
        }
        node.push(self.url_or_string(NodeType::NamespaceRuleUrl)?);
        self.skip_ws();
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(self.finish(node, start))
    }

    // Media queries

    fn media_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::MediaRule);
        node.push(self.media_query_list()?);
        self.skip_ws();
        self.expect(TokenKind::LeftBrace, "'{'")?;
        self.nested_rules(&mut node)?;
        Ok(self.finish(node, start))
    }

    fn media_query_list(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut list = CssNode::new(NodeType::MediaList);
        self.skip_ws();
        if matches!(self.kind(), TokenKind::LeftBrace | TokenKind::Semicolon) {
            return Ok(list);
        }
        loop {
            list.push(self.media_query()?);
            self.skip_ws();
            if !self.eat(TokenKind::Comma) {
                break;
            }
            self.skip_ws();
        }
        Ok(self.finish(list, start))
    }

    fn media_query(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut query = CssNode::new(NodeType::MediaQuery);
        let mut open = false;

        if self.kind() == TokenKind::Ident {
            let first = self.peek().clone();
            let lower = first.text.to_ascii_lowercase();
            if (lower == "not" || lower == "only")
                && matches!(
                    self.peek_after_ws(1).kind,
                    TokenKind::Ident | TokenKind::LeftParen
                )
            {
                self.bump();
                query.push(CssNode::leaf(NodeType::MediaModifier, lower, first.area));
                self.skip_ws();
            }
            if self.kind() == TokenKind::Ident {
                query.push(self.leaf(NodeType::Medium));
                match self.media_and() {
                    Some(consumed_paren) => open = consumed_paren,
                    None => return Ok(self.finish(query, start)),
                }
            }
        }

        loop {
            query.push(self.media_expr(open)?);
            match self.media_and() {
                Some(consumed_paren) => open = consumed_paren,
                None => break,
            }
        }
        Ok(self.finish(query, start))
    }

    /// Consume an `and` keyword. Returns `Some(true)` if it was glued to the
    /// opening parenthesis (`and(`), `None` if there is no `and`.
    fn media_and(&mut self) -> Option<bool> {
        let save = self.pos;
        self.skip_ws();
        if self.peek().is_ident("and") {
            self.bump();
            self.skip_ws();
            Some(false)
        } else if self.peek().is_function("and") {
            self.bump();
            Some(true)
        } else {
            self.pos = save;
            None
        }
    }

    fn media_expr(&mut self, open: bool) -> PResult<CssNode> {
        let start = self.start();
        if !open {
            self.expect(TokenKind::LeftParen, "'('")?;
        }
        self.skip_ws();
        let mut node = CssNode::new(NodeType::MediaExpr);
        let feature = self.expect(TokenKind::Ident, "media feature")?;
        node.push(CssNode::leaf(NodeType::MediaFeature, feature.text, feature.area));
        self.skip_ws();
        if self.eat(TokenKind::Colon) {
            self.skip_ws();
            node.push(self.expr()?);
            self.skip_ws();
        }
        self.expect(TokenKind::RightParen, "')'")?;
        Ok(self.finish(node, start))
    }

    // Other at-rules

    fn page_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::PageRule);
        if self.kind() != TokenKind::LeftBrace {
            loop {
                node.push(self.page_selector()?);
                self.skip_ws();
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                self.skip_ws();
            }
        }
        self.expect(TokenKind::LeftBrace, "'{'")?;
        let body_start = self.start();
        let mut body = CssNode::new(NodeType::StyleDeclarationList);
        self.declarations(&mut body, true, true)?;
        node.push(self.finish(body, body_start));
        Ok(self.finish(node, start))
    }

    fn page_selector(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut text = String::new();
        if self.kind() == TokenKind::Ident {
            text.push_str(&self.bump().text);
        }
        while self.kind() == TokenKind::Colon && self.peek_nth(1).kind == TokenKind::Ident {
            self.bump();
            text.push(':');
            text.push_str(&self.bump().text);
        }
        if text.is_empty() {
            return Err(self.unexpected("page selector"));
        }
        Ok(self.finish(CssNode::with_text(NodeType::PageSelector, text), start))
    }

    fn page_margin_block(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let symbol = self.bump();
        self.skip_ws();
        self.expect(TokenKind::LeftBrace, "'{'")?;
        let mut node = CssNode::with_text(NodeType::PageMarginBlock, symbol.text);
        node.push(self.declaration_block()?);
        Ok(self.finish(node, start))
    }

    /// `@font-face` and `@viewport`: a keyword and a declaration block.
    fn declaration_rule(&mut self, node_type: NodeType) -> PResult<CssNode> {
        let start = self.start();
        let keyword = self.bump();
        self.skip_ws();
        self.expect(TokenKind::LeftBrace, "'{'")?;
        let mut node = CssNode::with_text(node_type, keyword.text);
        node.push(self.declaration_block()?);
        Ok(self.finish(node, start))
    }

    fn keyframes_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let keyword = self.bump();
        self.skip_ws();
        let mut node = CssNode::with_text(NodeType::KeyframesRule, keyword.text);
        match self.kind() {
            TokenKind::Ident | TokenKind::String => {
                node.push(self.leaf(NodeType::KeyframesIdentifier));
            }
            _ => return Err(self.unexpected("animation name")),
        }
        self.skip_ws();
        self.expect(TokenKind::LeftBrace, "'{'")?;
        loop {
            self.skip_ws();
            match self.kind() {
                TokenKind::RightBrace => {
                    self.bump();
                    break;
                }
                TokenKind::Eof => return Err(self.unexpected("'}'")),
                _ => node.push(self.keyframes_block()?),
            }
        }
        Ok(self.finish(node, start))
    }

    fn keyframes_block(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::KeyframesBlock);
        loop {
            match self.kind() {
                TokenKind::Ident | TokenKind::Percentage | TokenKind::Number => {
                    node.push(self.leaf(NodeType::KeyframesSelector));
                }
                _ => return Err(self.unexpected("keyframe selector")),
            }
            self.skip_ws();
            if !self.eat(TokenKind::Comma) {
                break;
            }
            self.skip_ws();
        }
        self.expect(TokenKind::LeftBrace, "'{'")?;
        node.push(self.declaration_block()?);
        Ok(self.finish(node, start))
    }

    fn supports_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::SupportsRule);
        node.push(self.supports_condition()?);
        self.skip_ws();
        self.expect(TokenKind::LeftBrace, "'{'")?;
        self.nested_rules(&mut node)?;
        Ok(self.finish(node, start))
    }

    fn supports_condition(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::SupportsCondition);
        loop {
            self.skip_ws();
            let token = self.peek().clone();
            match token.kind {
                TokenKind::Ident if token.is_ident("not") => {
                    self.bump();
                    self.skip_ws();
                    let inner = self.supports_in_parens(false)?;
                    let mut negation = CssNode::new(NodeType::SupportsNegation);
                    negation.push(inner);
                    node.push(self.finish(negation, Some(token.area)));
                }
                TokenKind::Function if token.is_function("not") => {
                    self.bump();
                    let inner = self.supports_in_parens(true)?;
                    let mut negation = CssNode::new(NodeType::SupportsNegation);
                    negation.push(inner);
                    node.push(self.finish(negation, Some(token.area)));
                }
                TokenKind::Ident if token.is_ident("and") || token.is_ident("or") => {
                    self.bump();
                    node.push(CssNode::leaf(
                        NodeType::SupportsConditionOperator,
                        token.text.to_ascii_lowercase(),
                        token.area,
                    ));
                }
                TokenKind::Function if token.is_function("and") || token.is_function("or") => {
                    self.bump();
                    let operator = token.text.trim_end_matches('(').to_ascii_lowercase();
                    node.push(CssNode::leaf(
                        NodeType::SupportsConditionOperator,
                        operator,
                        token.area,
                    ));
                    node.push(self.supports_in_parens(true)?);
                }
                TokenKind::LeftParen => node.push(self.supports_in_parens(false)?),
                _ => break,
            }
        }
        if node.child_count() == 0 {
            return Err(self.unexpected("supports condition"));
        }
        Ok(self.finish(node, start))
    }

    /// `( declaration )` or `( condition )`.
    fn supports_in_parens(&mut self, open: bool) -> PResult<CssNode> {
        self.nested(|grammar| grammar.supports_parens_content(open))
    }

    fn supports_parens_content(&mut self, open: bool) -> PResult<CssNode> {
        if !open {
            self.expect(TokenKind::LeftParen, "'('")?;
        }
        self.skip_ws();
        let inner = if self.kind() == TokenKind::Ident
            && self.peek_after_ws(1).kind == TokenKind::Colon
        {
            self.declaration()?
        } else {
            self.supports_condition()?
        };
        self.skip_ws();
        self.expect(TokenKind::RightParen, "')'")?;
        Ok(inner)
    }

    fn layer_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::LayerRule);
        if self.kind() == TokenKind::Ident {
            loop {
                node.push(self.layer_name()?);
                self.skip_ws();
                if !self.eat(TokenKind::Comma) {
                    break;
                }
                self.skip_ws();
            }
        }
        match self.kind() {
            TokenKind::Semicolon => {
                self.bump();
            }
            TokenKind::LeftBrace => {
                let block_start = self.start();
                self.bump();
                let mut block = CssNode::new(NodeType::LayerBlock);
                self.nested_rules(&mut block)?;
                node.push(self.finish(block, block_start));
            }
            _ => return Err(self.unexpected("';' or '{'")),
        }
        Ok(self.finish(node, start))
    }

    fn layer_name(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut name = self.expect(TokenKind::Ident, "layer name")?.text;
        while self.peek().is_delim('.') && self.peek_nth(1).kind == TokenKind::Ident {
            self.bump();
            name.push('.');
            name.push_str(&self.bump().text);
        }
        Ok(self.finish(CssNode::with_text(NodeType::LayerName, name), start))
    }

    /// Any other at-rule, kept as raw text.
    fn unknown_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let keyword = self.bump();
        let mut node = CssNode::with_text(NodeType::UnknownRule, keyword.text);

        let mut parameters = String::new();
        let mut closers: Vec<TokenKind> = Vec::new();
        loop {
            match self.kind() {
                TokenKind::Eof => break,
                TokenKind::LeftBrace | TokenKind::Semicolon if closers.is_empty() => break,
                _ => {}
            }
            let token = self.bump();
            parameters.push_str(&token.text);
            if let Some(closer) = closer_for(token.kind) {
                closers.push(closer);
            } else if closers.last() == Some(&token.kind) {
                closers.pop();
            }
        }
        node.push(CssNode::with_text(
            NodeType::UnknownRuleParameterList,
            parameters.trim(),
        ));

        if self.eat(TokenKind::LeftBrace) {
            let mut body = String::new();
            let mut depth = 1usize;
            loop {
                match self.kind() {
                    TokenKind::Eof => return Err(self.unexpected("'}'")),
                    TokenKind::LeftBrace => depth += 1,
                    TokenKind::RightBrace => {
                        depth -= 1;
                        if depth == 0 {
                            self.bump();
                            break;
                        }
                    }
                    _ => {}
                }
                body.push_str(&self.bump().text);
            }
            node.push(CssNode::with_text(NodeType::UnknownRuleBody, body.trim()));
        } else {
            self.eat(TokenKind::Semicolon);
        }
        Ok(self.finish(node, start))
    }

    // Style rules and selectors

    fn style_rule(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::StyleRule);
        loop {
            self.skip_ws();
            node.push(self.selector()?);
            self.skip_ws();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::LeftBrace, "'{'")?;
        node.push(self.declaration_block()?);
        Ok(self.finish(node, start))
    }

    fn selector_list_into(&mut self, parent: &mut CssNode) -> PResult<()> {
        loop {
            self.skip_ws();
            parent.push(self.selector()?);
            self.skip_ws();
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    fn starts_compound(&self) -> bool {
        let token = self.peek();
        matches!(
            token.kind,
            TokenKind::Ident
                | TokenKind::Hash
                | TokenKind::LeftBracket
                | TokenKind::Colon
                | TokenKind::Number
                | TokenKind::Dimension
                | TokenKind::Percentage
                | TokenKind::Delim('*' | '.' | '|' | '$')
        )
    }

    fn combinator(&mut self) -> Option<CssNode> {
        let token = self.peek();
        if matches!(token.kind, TokenKind::Delim('+' | '>' | '~')) {
            Some(self.leaf(NodeType::SelectorCombinator))
        } else {
            None
        }
    }

    fn selector(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::Selector);
        self.compound(&mut node)?;
        loop {
            let had_ws = self.skip_ws();
            if let Some(combinator) = self.combinator() {
                node.push(combinator);
                self.skip_ws();
                self.compound(&mut node)?;
            } else if had_ws && self.starts_compound() {
                let area = self.peek().area;
                node.push(CssNode::leaf(NodeType::SelectorCombinator, " ", area));
                self.compound(&mut node)?;
            } else {
                break;
            }
        }
        Ok(self.finish(node, start))
    }

    /// One compound selector: optional type selector and any number of
    /// id, class, attribute and pseudo members.
    fn compound(&mut self, selector: &mut CssNode) -> PResult<()> {
        let mut any = self.type_selector(selector)?;
        loop {
            let token = self.peek().clone();
            match token.kind {
                TokenKind::Hash => selector.push(self.leaf(NodeType::Hash)),
                TokenKind::Delim('.') => {
                    let name = self.peek_nth(1).clone();
                    if name.kind != TokenKind::Ident {
                        self.bump();
                        return Err(self.unexpected("class name"));
                    }
                    self.bump();
                    self.bump();
                    let mut class = CssNode::with_text(NodeType::Class, format!(".{}", name.text));
                    class.set_span(Some(token.area), Some(name.area));
                    selector.push(class);
                }
                TokenKind::LeftBracket => selector.push(self.attribute()?),
                TokenKind::Colon => selector.push(self.pseudo()?),
                _ => break,
            }
            any = true;
        }
        if any {
            Ok(())
        } else {
            Err(self.unexpected("selector"))
        }
    }

    fn namespace_prefix(&mut self) -> Option<CssNode> {
        let token = self.peek().clone();
        let is_name = token.kind == TokenKind::Ident || token.is_delim('*');
        if is_name && self.peek_nth(1).is_delim('|') {
            self.bump();
            let bar = self.bump();
            let mut node = CssNode::with_text(NodeType::NamespacePrefix, format!("{}|", token.text));
            node.set_span(Some(token.area), Some(bar.area));
            Some(node)
        } else if token.is_delim('|') {
            Some(self.leaf(NodeType::NamespacePrefix))
        } else {
            None
        }
    }

    fn type_selector(&mut self, selector: &mut CssNode) -> PResult<bool> {
        let prefix = self.namespace_prefix();
        let has_prefix = prefix.is_some();
        if let Some(prefix) = prefix {
            selector.push(prefix);
        }

        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident => {
                if token.text.starts_with("--") {
                    return Err(Self::invalid_identifier(
                        &token,
                        format!("Element name may not start with two hyphens: {}", token.text),
                    ));
                }
                validate_identifier(&token.text)
                    .map_err(|message| Self::invalid_identifier(&token, message))?;
                selector.push(self.leaf(NodeType::ElementName));
                Ok(true)
            }
            TokenKind::Delim('*') => {
                self.bump();
                let next = self.peek().clone();
                if next.kind == TokenKind::Ident {
                    // IE hack: `*html` is kept as one element name.
                    self.bump();
                    let mut node =
                        CssNode::with_text(NodeType::ElementName, format!("*{}", next.text));
                    node.set_span(Some(token.area), Some(next.area));
                    selector.push(node);
                } else if matches!(next.kind, TokenKind::Number | TokenKind::Dimension) {
                    return Err(Self::invalid_identifier(
                        &token,
                        format!("Identifier may not start with a hyphen/dollar/star and a digit: *{}", next.text),
                    ));
                } else {
                    selector.push(CssNode::leaf(NodeType::ElementName, "*", token.area));
                }
                Ok(true)
            }
            TokenKind::Number | TokenKind::Dimension | TokenKind::Percentage => {
                let message = validate_identifier(&token.text)
                    .err()
                    .unwrap_or_else(|| format!("Invalid identifier: {}", token.text));
                Err(Self::invalid_identifier(&token, message))
            }
            TokenKind::Delim('$') => {
                let next = self.peek_nth(1).clone();
                let text = format!("${}", next.text);
                let message = validate_identifier(&text)
                    .err()
                    .unwrap_or_else(|| format!("Invalid identifier: {text}"));
                Err(Self::invalid_identifier(&token, message))
            }
            _ if has_prefix => Err(self.unexpected("element name")),
            _ => Ok(false),
        }
    }

    fn attribute(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        self.skip_ws();
        let mut node = CssNode::new(NodeType::Attrib);
        if let Some(prefix) = self.namespace_prefix() {
            node.push(prefix);
        }
        let name = self.expect(TokenKind::Ident, "attribute name")?;
        node.set_text(name.text);
        self.skip_ws();

        let operator = matches!(
            self.kind(),
            TokenKind::Delim('=')
                | TokenKind::IncludeMatch
                | TokenKind::DashMatch
                | TokenKind::PrefixMatch
                | TokenKind::SuffixMatch
                | TokenKind::SubstringMatch
        );
        if operator {
            node.push(self.leaf(NodeType::AttribOperator));
            self.skip_ws();
            match self.kind() {
                TokenKind::Ident | TokenKind::String | TokenKind::Number => {
                    node.push(self.leaf(NodeType::AttribValue));
                }
                _ => return Err(self.unexpected("attribute value")),
            }
            self.skip_ws();
            if self.kind() == TokenKind::Ident {
                node.push(self.leaf(NodeType::AttribCaseFlag));
                self.skip_ws();
            }
        }
        self.expect(TokenKind::RightBracket, "']'")?;
        Ok(self.finish(node, start))
    }

    fn pseudo(&mut self) -> PResult<CssNode> {
        self.nested(Self::pseudo_content)
    }

    fn pseudo_content(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        let prefix = if self.eat(TokenKind::Colon) { "::" } else { ":" };

        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident => {
                self.bump();
                Ok(self.finish(
                    CssNode::with_text(NodeType::Pseudo, format!("{prefix}{}", token.text)),
                    start,
                ))
            }
            TokenKind::Function => {
                self.bump();
                let lower = token.text.to_ascii_lowercase();
                let node = match (prefix, lower.as_str()) {
                    (":", "not(") => {
                        let mut node = CssNode::new(NodeType::Negation);
                        self.selector_list_into(&mut node)?;
                        node
                    }
                    (":", "is(") => {
                        let mut node = CssNode::new(NodeType::PseudoIs);
                        self.selector_list_into(&mut node)?;
                        node
                    }
                    (":", "where(") => {
                        let mut node = CssNode::new(NodeType::PseudoWhere);
                        self.selector_list_into(&mut node)?;
                        node
                    }
                    (":", "has(") => {
                        let mut node = CssNode::new(NodeType::PseudoHas);
                        self.skip_ws();
                        if let Some(combinator) = self.combinator() {
                            node.push(combinator);
                        }
                        self.selector_list_into(&mut node)?;
                        node
                    }
                    (":", "host(") => {
                        let mut node = CssNode::new(NodeType::Host);
                        self.skip_ws();
                        node.push(self.selector()?);
                        node
                    }
                    (":", "host-context(") => {
                        let mut node = CssNode::new(NodeType::HostContext);
                        self.skip_ws();
                        node.push(self.selector()?);
                        node
                    }
                    ("::", "slotted(") => {
                        let mut node = CssNode::new(NodeType::Slotted);
                        self.skip_ws();
                        node.push(self.selector()?);
                        node
                    }
                    (_, name) if is_nth_function(name) => {
                        let mut node =
                            CssNode::with_text(NodeType::Pseudo, format!("{prefix}{}", token.text));
                        let nth_start = self.start();
                        let nth = self.nth_argument();
                        if !nth.is_empty() {
                            node.push(self.finish(CssNode::with_text(NodeType::Nth, nth), nth_start));
                        }
                        node
                    }
                    _ => {
                        let mut node =
                            CssNode::with_text(NodeType::Pseudo, format!("{prefix}{}", token.text));
                        self.skip_ws();
                        if self.kind() != TokenKind::RightParen {
                            node.push(self.expr()?);
                        }
                        node
                    }
                };
                self.skip_ws();
                self.expect(TokenKind::RightParen, "')'")?;
                Ok(self.finish(node, start))
            }
            _ => Err(self.unexpected("pseudo class name")),
        }
    }

    /// The raw argument of `:nth-child(...)` and friends, whitespace collapsed.
    fn nth_argument(&mut self) -> String {
        let mut text = String::new();
        loop {
            match self.kind() {
                TokenKind::RightParen | TokenKind::Eof | TokenKind::LeftBrace => break,
                TokenKind::Whitespace => {
                    self.bump();
                    if !text.is_empty() {
                        text.push(' ');
                    }
                }
                _ => text.push_str(&self.bump().text),
            }
        }
        text.trim_end().to_string()
    }

    // Declarations

    fn declaration_list(&mut self) -> Result<CssNode> {
        self.skip_ws();
        let start = self.start();
        let mut list = CssNode::new(NodeType::StyleDeclarationList);
        match self.declarations(&mut list, false, false) {
            Ok(()) => Ok(self.finish(list, start)),
            Err(Failure::Fatal(error)) => Err(error),
            Err(Failure::Syntax(error) | Failure::Eof(error)) => Err(error.into_error()),
        }
    }

    /// `{ declarations }`, with the opening brace already consumed.
    fn declaration_block(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut list = CssNode::new(NodeType::StyleDeclarationList);
        self.declarations(&mut list, true, false)?;
        Ok(self.finish(list, start))
    }

    /// Parse declarations separated by `;`. Inside a block the closing brace
    /// is consumed; page rules may also contain margin blocks.
    fn declarations(
        &mut self,
        list: &mut CssNode,
        in_block: bool,
        margin_blocks: bool,
    ) -> PResult<()> {
        loop {
            while matches!(self.kind(), TokenKind::Whitespace | TokenKind::Semicolon) {
                self.bump();
            }
            match self.kind() {
                TokenKind::RightBrace if in_block => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Eof if in_block => return Err(self.unexpected("'}'")),
                TokenKind::Eof => return Ok(()),
                _ => {}
            }

            let start = self.pos;
            let result = if margin_blocks && self.kind() == TokenKind::AtKeyword {
                self.page_margin_block()
            } else {
                self.terminated_declaration(in_block)
            };
            match result {
                Ok(node) => list.push(node),
                Err(Failure::Syntax(error)) => self.recover_declaration(start, error, in_block)?,
                Err(Failure::Eof(error)) if !in_block => {
                    self.recover_declaration(start, error, in_block)?
                }
                Err(failure) => return Err(failure),
            }
        }
    }

    /// A declaration that must be followed by `;`, `}` or the end of input.
    fn terminated_declaration(&mut self, in_block: bool) -> PResult<CssNode> {
        let node = self.declaration()?;
        self.skip_ws();
        match self.kind() {
            TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Eof => Ok(node),
            _ if in_block => Err(self.unexpected("';' or '}'")),
            _ => Err(self.unexpected("';'")),
        }
    }

    /// `property : expression [!important]`
    fn declaration(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::StyleDeclaration);

        let token = self.peek().clone();
        let property = match token.kind {
            TokenKind::Ident => self.leaf(NodeType::Property),
            TokenKind::Delim(hack @ ('*' | '$')) if self.peek_nth(1).kind == TokenKind::Ident => {
                self.bump();
                let name = self.bump();
                let text = format!("{hack}{}", name.text);
                let error = ParseError::new(
                    ParseErrorKind::DeprecatedProperty,
                    format!("Deprecated property name '{text}'"),
                    token.area.begin_line,
                    token.area.begin_column,
                );
                self.handler.on_deprecated_property(&error)?;
                let mut property = CssNode::with_text(NodeType::Property, text);
                property.set_span(Some(token.area), Some(name.area));
                property
            }
            _ => return Err(self.unexpected("property name")),
        };
        let custom = property.text().starts_with("--");
        node.push(property);

        self.skip_ws();
        self.expect(TokenKind::Colon, "':'")?;
        self.skip_ws();

        if custom {
            if let Some(value) = self.custom_property_value() {
                node.push(value);
            }
        } else if !matches!(
            self.kind(),
            TokenKind::Semicolon
                | TokenKind::RightBrace
                | TokenKind::RightParen
                | TokenKind::Important
                | TokenKind::Eof
        ) {
            node.push(self.expr()?);
        }

        self.skip_ws();
        if self.kind() == TokenKind::Important {
            let important = self.bump();
            node.push(CssNode::leaf(NodeType::Important, "!important", important.area));
        }
        Ok(self.finish(node, start))
    }

    /// The value of a custom property is kept as raw text.
    fn custom_property_value(&mut self) -> Option<CssNode> {
        let start = self.start();
        let mut text = String::new();
        let mut closers: Vec<TokenKind> = Vec::new();
        loop {
            match self.kind() {
                TokenKind::Eof => break,
                TokenKind::Semicolon
                | TokenKind::RightBrace
                | TokenKind::RightParen
                | TokenKind::Important
                    if closers.is_empty() =>
                {
                    break;
                }
                _ => {}
            }
            let token = self.bump();
            if token.kind == TokenKind::Whitespace {
                text.push(' ');
            } else {
                text.push_str(&token.text);
            }
            if let Some(closer) = closer_for(token.kind) {
                closers.push(closer);
            } else if closers.last() == Some(&token.kind) {
                closers.pop();
            }
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let mut term = CssNode::with_text(NodeType::ExprTerm, text);
        term.set_span(start, self.last_area);
        let mut expr = CssNode::new(NodeType::Expr);
        expr.push(term);
        Some(self.finish(expr, start))
    }

    // Expressions

    fn starts_term(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::Number
                | TokenKind::Percentage
                | TokenKind::Dimension
                | TokenKind::String
                | TokenKind::Ident
                | TokenKind::Hash
                | TokenKind::UnicodeRange
                | TokenKind::Url
                | TokenKind::BadUrl
                | TokenKind::Function
                | TokenKind::LeftBracket
        )
    }

    fn expr(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut node = CssNode::new(NodeType::Expr);
        node.push(self.term()?);
        loop {
            let save = self.pos;
            self.skip_ws();
            match self.kind() {
                TokenKind::Delim('/' | '=') | TokenKind::Comma => {
                    node.push(self.leaf(NodeType::ExprOperator));
                    self.skip_ws();
                    node.push(self.term()?);
                }
                _ if self.starts_term() => node.push(self.term()?),
                _ => {
                    self.pos = save;
                    break;
                }
            }
        }
        Ok(self.finish(node, start))
    }

    fn term(&mut self) -> PResult<CssNode> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number
            | TokenKind::Percentage
            | TokenKind::Dimension
            | TokenKind::String
            | TokenKind::Hash
            | TokenKind::UnicodeRange => Ok(self.leaf(NodeType::ExprTerm)),
            TokenKind::Ident
                if token.is_ident("progid") && self.peek_nth(1).kind == TokenKind::Colon =>
            {
                self.raw_term()
            }
            TokenKind::Ident => Ok(self.leaf(NodeType::ExprTerm)),
            TokenKind::Url => {
                self.bump();
                Ok(CssNode::leaf(NodeType::Url, trim_url(&token.text), token.area))
            }
            TokenKind::Function if is_calc_function(&token) => self.calc(),
            TokenKind::Function if token.is_function("expression") => self.raw_term(),
            TokenKind::Function => self.function(),
            TokenKind::LeftBracket => self.line_names(),
            _ => Err(self.unexpected("expression term")),
        }
    }

    /// A term copied verbatim up to the end of its first parenthesised group.
    /// Used for `progid:...(...)` filters and IE `expression(...)`.
    fn raw_term(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let mut text = String::new();
        let mut closers: Vec<TokenKind> = Vec::new();
        let mut opened = false;
        loop {
            let kind = self.kind();
            if kind == TokenKind::Eof {
                return Err(self.unexpected("')'"));
            }
            if closers.is_empty()
                && (opened
                    || matches!(
                        kind,
                        TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Important
                    ))
            {
                break;
            }
            let token = self.bump();
            if token.kind == TokenKind::Whitespace {
                text.push(' ');
            } else {
                text.push_str(&token.text);
            }
            if let Some(closer) = closer_for(token.kind) {
                closers.push(closer);
                opened = true;
            } else if closers.last() == Some(&token.kind) {
                closers.pop();
            }
        }
        Ok(self.finish(CssNode::with_text(NodeType::ExprTerm, text.trim_end()), start))
    }

    fn function(&mut self) -> PResult<CssNode> {
        self.nested(Self::function_content)
    }

    fn function_content(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let token = self.bump();
        let name = token.text.strip_suffix('(').unwrap_or(&token.text);
        let mut node = CssNode::with_text(NodeType::Function, name);
        self.skip_ws();
        if self.kind() != TokenKind::RightParen {
            node.push(self.expr()?);
            self.skip_ws();
        }
        self.expect(TokenKind::RightParen, "')'")?;
        Ok(self.finish(node, start))
    }

    fn line_names(&mut self) -> PResult<CssNode> {
        let start = self.start();
        self.bump();
        let mut node = CssNode::new(NodeType::LineNames);
        loop {
            self.skip_ws();
            match self.kind() {
                TokenKind::Ident => node.push(self.leaf(NodeType::LineName)),
                TokenKind::RightBracket => {
                    self.bump();
                    break;
                }
                _ => return Err(self.unexpected("line name or ']'")),
            }
        }
        Ok(self.finish(node, start))
    }

    // calc()

    fn calc(&mut self) -> PResult<CssNode> {
        self.nested(Self::calc_content)
    }

    fn calc_content(&mut self) -> PResult<CssNode> {
        let start = self.start();
        let token = self.bump();
        let name = token.text.strip_suffix('(').unwrap_or(&token.text);
        let mut node = CssNode::with_text(NodeType::Calc, name);
        self.skip_ws();
        self.calc_sum(&mut node)?;
        self.skip_ws();
        self.expect(TokenKind::RightParen, "')'")?;
        Ok(self.finish(node, start))
    }

    fn calc_sum(&mut self, parent: &mut CssNode) -> PResult<()> {
        self.calc_product(parent)?;
        loop {
            let save = self.pos;
            self.skip_ws();
            if matches!(self.kind(), TokenKind::Delim('+' | '-')) {
                parent.push(self.leaf(NodeType::CalcSumOperator));
                self.skip_ws();
                self.calc_product(parent)?;
            } else {
                self.pos = save;
                return Ok(());
            }
        }
    }

    fn calc_product(&mut self, parent: &mut CssNode) -> PResult<()> {
        let start = self.start();
        let mut members = vec![self.calc_unit()?];
        loop {
            let save = self.pos;
            self.skip_ws();
            if matches!(self.kind(), TokenKind::Delim('*' | '/')) {
                members.push(self.leaf(NodeType::CalcProductOperator));
                self.skip_ws();
                members.push(self.calc_unit()?);
            } else {
                self.pos = save;
                break;
            }
        }
        if members.len() == 1 {
            for member in members {
                parent.push(member);
            }
        } else {
            let mut product = CssNode::new(NodeType::CalcProduct);
            for member in members {
                product.push(member);
            }
            parent.push(self.finish(product, start));
        }
        Ok(())
    }

    fn calc_unit(&mut self) -> PResult<CssNode> {
        self.nested(Self::calc_unit_content)
    }

    fn calc_unit_content(&mut self) -> PResult<CssNode> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number | TokenKind::Percentage | TokenKind::Dimension | TokenKind::Ident => {
                Ok(self.leaf(NodeType::CalcUnit))
            }
            TokenKind::Function => {
                let start = self.start();
                let text = self.raw_term()?.text().to_string();
                Ok(self.finish(CssNode::with_text(NodeType::CalcUnit, text), start))
            }
            TokenKind::LeftParen => {
                let start = self.start();
                self.bump();
                self.skip_ws();
                let mut nested = CssNode::new(NodeType::CalcNested);
                self.calc_sum(&mut nested)?;
                self.skip_ws();
                self.expect(TokenKind::RightParen, "')'")?;
                Ok(self.finish(nested, start))
            }
            _ => Err(self.unexpected("calc operand")),
        }
    }
}
