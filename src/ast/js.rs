//! AST module for the target (C-style call) notation
//!
//! Built fresh by the transformer; shares no node identity with the source
//! tree. Both node inventories are closed enums, so extending the grammar
//! without updating the transformer or the generator fails to build instead
//! of silently no-opping.

use serde::{Deserialize, Serialize};

use crate::syntax::Span;

/// A whole target program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// A top-level statement. Only expression statements exist in this subset of
/// the target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Expression { expression: Expr, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expression { span, .. } => *span,
        }
    }
}

/// The core AST node for target expressions.
///
/// A `Call`'s callee is always built as an `Identifier` node; typing it as a
/// general expression is what lets the generator treat callees uniformly with
/// other expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Identifier {
        name: String,
        span: Span,
    },
    Number(String, Span),
    String(String, Span),
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier { span, .. } => *span,
            Expr::Number(_, span) | Expr::String(_, span) => *span,
            Expr::Call { span, .. } => *span,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Identifier { .. } => "Identifier",
            Expr::Number(_, _) => "Number",
            Expr::String(_, _) => "String",
            Expr::Call { .. } => "Call",
        }
    }
}
