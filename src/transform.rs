//! Tree transformation from the source notation to the target notation
//!
//! A structure-preserving-but-reshaping traversal: the visitor walks the
//! source tree and builds a brand-new target tree, recursing innermost
//! first. Nothing is mutated and no node is shared between the two trees.

use crate::ast::{js, Expr, Program};

/// Transform a source program into a target program.
///
/// Each top-level expression is wrapped in an expression statement after
/// transformation. Nested expressions stay bare: the expression/statement
/// distinction exists only at the program's top level.
pub fn transform(program: Program) -> js::Program {
    let body = program
        .body
        .into_iter()
        .map(|expr| {
            let span = expr.span();
            js::Stmt::Expression {
                expression: transform_expr(expr),
                span,
            }
        })
        .collect();
    js::Program { body }
}

/// Map one source node to one target node.
///
/// Literals copy across; a call's name moves from a plain string field into a
/// dedicated `Identifier` node in callee position.
fn transform_expr(expr: Expr) -> js::Expr {
    match expr {
        Expr::Number(value, span) => js::Expr::Number(value, span),
        Expr::String(value, span) => js::Expr::String(value, span),
        Expr::Call { name, params, span } => js::Expr::Call {
            callee: Box::new(js::Expr::Identifier {
                name: name.value,
                span: name.span,
            }),
            arguments: params.into_iter().map(transform_expr).collect(),
            span,
        },
    }
}
