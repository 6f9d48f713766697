// Author: Dustin Pilgrim
// License: MIT

use crate::ConfigError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[name]` header; the text is the name without brackets.
    Section,
    /// Option name on the left of `=`.
    Identifier,
    /// Right-hand side of `=` with no `,` or `:` separator.
    Value,
    /// One field of a separated right-hand side.
    VectorValue,
}

/// A lexical token borrowing its text from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub line: usize,
    pub column: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, line: usize, column: usize) -> Self {
        Self { kind, text, line, column }
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole input, stopping at the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, ConfigError> {
        tokenizer::tokenize(&mut self)?;
        log::trace!("tokenized {} tokens over {} lines", self.tokens.len(), self.line);
        Ok(self.tokens)
    }
}
