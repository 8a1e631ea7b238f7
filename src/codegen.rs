//! Code generation: turns the target AST into program text
//!
//! A pure recursive printer with one case per node kind and nothing but
//! string concatenation. Output is a function of tree shape alone.

use crate::ast::js::{Expr, Program, Stmt};

/// Generate target-language source text from a program tree, one statement
/// per line.
pub fn generate(program: &Program) -> String {
    program
        .body
        .iter()
        .map(generate_stmt)
        .collect::<Vec<_>>()
        .join("\n")
}

fn generate_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression { expression, .. } => format!("{};", generate_expr(expression)),
    }
}

fn generate_expr(expr: &Expr) -> String {
    match expr {
        Expr::Identifier { name, .. } => name.clone(),
        // Emitted verbatim: the digit run was never reparsed, so the original
        // spelling (leading zeros included) is preserved.
        Expr::Number(value, _) => value.clone(),
        // Re-quoted without escaping, matching the lexer's no-escape policy.
        Expr::String(value, _) => format!("\"{}\"", value),
        Expr::Call {
            callee, arguments, ..
        } => {
            let args = arguments
                .iter()
                .map(generate_expr)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({})", generate_expr(callee), args)
        }
    }
}
