use crate::ast::{ConfigOption, Document};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::resolver::Link;
use crate::ConfigError;

mod document;
mod reference;
mod value;

/// Builds a [`Document`] from the token stream of one input buffer.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Tokenizes `input` up front; lexical errors surface here.
    pub fn new(input: &'a str) -> Result<Self, ConfigError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    pub fn from_tokens(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn bump(&mut self) -> Option<Token<'a>> {
        let curr = self.tokens.get(self.pos).copied();
        if curr.is_some() {
            self.pos += 1;
        }
        curr
    }

    pub(crate) fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token only if it has the given kind.
    pub(crate) fn bump_if(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        match self.peek() {
            Some(tok) if tok.kind == kind => self.bump(),
            _ => None,
        }
    }

    pub fn parse_document(&mut self) -> Result<Document, ConfigError> {
        document::parse_document(self)
    }

    pub fn resolve_link<'d>(&self, link: &Link<'_>, doc: &'d Document) -> Option<&'d ConfigOption> {
        reference::resolve_link(link, doc)
    }
}

#[cfg(test)]
mod tests;
