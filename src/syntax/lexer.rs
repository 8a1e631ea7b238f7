//! Lexical analysis: turns the raw input string into a flat vector of tokens.
//!
//! The scanner is a single left-to-right pass with one cursor and no
//! backtracking. It knows nothing about structure: parenthesis pairing is the
//! parser's job.

use crate::errors::{CalqueError, ErrorReporting, SourceContext, StageContext};
use crate::syntax::{Span, Token, TokenKind};

/// Tokenize source text into an ordered sequence of tokens.
///
/// The token alphabet is fixed: `(` and `)` each become a `paren` token, a
/// run of ASCII digits becomes one `number` token, a double-quoted run
/// becomes one `string` token holding the content with the quotes stripped,
/// and a run of ASCII letters becomes one `name` token. Whitespace is
/// skipped. Anything else - operator symbols included, so `+` or `-` never
/// lex as names - fails with `UnknownCharacter` at the offending position.
pub fn tokenize(
    source_text: &str,
    source_context: SourceContext,
) -> Result<Vec<Token>, CalqueError> {
    Lexer::new(source_text, source_context).run()
}

/// The scanner state: one cursor, plus the start of the token being built.
struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    start: usize,
    tokens: Vec<Token>,
    ctx: StageContext,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str, source_context: SourceContext) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            tokens: Vec::new(),
            ctx: StageContext::new(source_context, "lexer"),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, CalqueError> {
        while let Some(c) = self.peek() {
            self.start = self.pos;
            match c {
                c if c.is_ascii_whitespace() => {
                    self.advance();
                }
                '(' | ')' => {
                    self.advance();
                    self.push(TokenKind::Paren);
                }
                c if c.is_ascii_digit() => self.scan_number(),
                '"' => self.scan_string()?,
                c if c.is_ascii_alphabetic() => self.scan_name(),
                other => {
                    let span = Span::new(self.pos, self.pos + other.len_utf8());
                    return Err(self.ctx.unknown_character(other, span));
                }
            }
        }
        Ok(self.tokens)
    }

    /// Peek at the current character without consuming it.
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Advance to the next character and return the one consumed.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// The text from the start of the current token to the cursor.
    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    /// Push a token whose value is the current lexeme.
    fn push(&mut self, kind: TokenKind) {
        let span = Span::new(self.start, self.pos);
        self.tokens.push(Token::new(kind, self.lexeme(), span));
    }

    /// Scan a run of ASCII digits into one number token.
    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.push(TokenKind::Number);
    }

    /// Scan a run of ASCII letters into one name token.
    fn scan_name(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.advance();
        }
        self.push(TokenKind::Name);
    }

    /// Scan a double-quoted run into one string token. No escape handling:
    /// the token value is everything between the quotes, verbatim.
    fn scan_string(&mut self) -> Result<(), CalqueError> {
        self.advance();
        while let Some(c) = self.peek() {
            if c == '"' {
                let content = self.source[self.start + 1..self.pos].to_string();
                self.advance();
                let span = Span::new(self.start, self.pos);
                self.tokens.push(Token::new(TokenKind::String, content, span));
                return Ok(());
            }
            self.advance();
        }
        // Ran off the end without a closing quote; point at the opening one.
        let span = Span::new(self.start, self.start + 1);
        Err(self.ctx.unexpected_end_of_input(span))
    }
}
