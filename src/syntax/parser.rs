//! Calque parser - recursive descent over the token stream
//!
//! One procedure per grammar production, a single monotonic cursor with one
//! token of lookahead, and no backtracking. This parser is purely syntactic:
//! it builds the source tree and nothing else.

use crate::ast::{Expr, Program};
use crate::errors::{CalqueError, ErrorReporting, SourceContext, StageContext};
use crate::syntax::{Span, Spanned, Token, TokenKind};

/// Parse a token sequence into a source program.
///
/// Grammar: `program := expr*` with `expr := number | string | "(" name expr* ")"`.
pub fn parse(tokens: &[Token], source_context: SourceContext) -> Result<Program, CalqueError> {
    let mut parser = Parser::new(tokens, source_context);
    let mut body = Vec::new();
    while !parser.is_at_end() {
        body.push(parser.walk()?);
    }
    Ok(Program { body })
}

/// The read cursor over the token sequence. Consumption is strictly
/// monotonic: the cursor never moves backward.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    ctx: StageContext,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], source_context: SourceContext) -> Self {
        Self {
            tokens,
            pos: 0,
            ctx: StageContext::new(source_context, "parser"),
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// A span pointing just past the last character of the input.
    fn end_span(&self) -> Span {
        let end = self.ctx.source.content.len();
        Span::new(end, end)
    }

    /// Parse exactly one expression.
    fn walk(&mut self) -> Result<Expr, CalqueError> {
        let token = match self.advance() {
            Some(token) => token.clone(),
            None => return Err(self.ctx.unexpected_end_of_input(self.end_span())),
        };

        match token.kind {
            TokenKind::Number => Ok(Expr::Number(token.value, token.span)),
            TokenKind::String => Ok(Expr::String(token.value, token.span)),
            TokenKind::Paren if token.value == "(" => self.call_expression(token.span),
            _ => Err(self.ctx.unexpected_token(token.to_string(), token.span)),
        }
    }

    /// Parse the remainder of a call form, the opening paren already consumed.
    fn call_expression(&mut self, open_span: Span) -> Result<Expr, CalqueError> {
        let name_token = match self.advance() {
            Some(token) => token.clone(),
            None => return Err(self.ctx.unexpected_end_of_input(open_span)),
        };
        if name_token.kind != TokenKind::Name {
            return Err(self
                .ctx
                .expected_name(name_token.to_string(), name_token.span));
        }
        let name = Spanned {
            value: name_token.value,
            span: name_token.span,
        };

        let mut params = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.ctx.unexpected_end_of_input(open_span)),
                Some(token) if is_closing_paren(token) => {
                    let span = Span::new(open_span.start, token.span.end);
                    self.advance();
                    return Ok(Expr::Call { name, params, span });
                }
                Some(_) => params.push(self.walk()?),
            }
        }
    }
}

fn is_closing_paren(token: &Token) -> bool {
    token.kind == TokenKind::Paren && token.value == ")"
}
