//! Syntax module for the calque front end
//!
//! This module provides the span and token types shared by the lexer and the
//! parser, with source location tracking on every lexical unit.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod lexer;
pub mod parser;

pub use lexer::tokenize;
pub use parser::parse;

/// Represents a span in the source code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Wrapper for carrying source span information with any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

/// Kinds of tokens recognised by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Paren,
    Number,
    String,
    Name,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Paren => "paren",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Name => "name",
        }
    }
}

/// Smallest classified lexical unit produced from the raw source text.
///
/// Immutable once produced: created by the lexer, read by the parser, and
/// discarded after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Convenience constructor to keep the lexer loop readable.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.as_str(), self.value)
    }
}
