//! Calque error handling - unified miette diagnostics
//!
//! Every failure in any stage of the pipeline is a `CalqueError`. The first
//! error aborts the whole compilation; no stage catches or downgrades another
//! stage's error.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::syntax::Span;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Represents source context for error reporting. Wraps the original input
/// text together with the name it should be reported under.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from the input text being compiled.
    pub fn from_source(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when the real input is unavailable.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("; {}", context),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// The single error type - no wrapper, no variants, just essential data.
#[derive(Debug)]
pub struct CalqueError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened (source and span information)
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on the kind)
    pub diagnostic_info: DiagnosticInfo,
}

/// All failure modes of the pipeline as a closed enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    // Lexical errors
    #[error("unknown character '{character}'")]
    UnknownCharacter { character: char },

    // Syntactic errors
    #[error("expected a name after '(', found {found}")]
    ExpectedName { found: String },
    #[error("unexpected token {found}")]
    UnexpectedToken { found: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Stage-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl ErrorKind {
    /// Get the error category for test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCharacter { .. } => ErrorCategory::Lex,
            Self::ExpectedName { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput => ErrorCategory::Parse,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnknownCharacter { .. } => "unknown_character",
            Self::ExpectedName { .. } => "expected_name",
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::UnexpectedEndOfInput => "unexpected_end_of_input",
        }
    }

    /// Help text attached to the diagnostic, where a fixed rule explains the
    /// failure better than the message alone.
    fn help(&self) -> Option<String> {
        match self {
            Self::UnknownCharacter { .. } => Some(
                "the only legal characters are parentheses, ASCII digits, double quotes, \
                 ASCII letters, and whitespace; operator symbols are not part of the grammar"
                    .into(),
            ),
            Self::ExpectedName { .. } => {
                Some("every call form starts with a function name, e.g. (add 2 3)".into())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Parse,
}

impl std::error::Error for CalqueError {}

impl fmt::Display for CalqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.category() {
            ErrorCategory::Lex => write!(f, "Lex error: {}", self.kind),
            ErrorCategory::Parse => write!(f, "Parse error: {}", self.kind),
        }
    }
}

impl Diagnostic for CalqueError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl CalqueError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::UnknownCharacter { .. } => "not part of the alphabet".into(),
            ErrorKind::ExpectedName { .. } => "a name must follow this".into(),
            ErrorKind::UnexpectedToken { .. } => "unexpected token".into(),
            ErrorKind::UnexpectedEndOfInput => "input ends here".into(),
        }
    }
}

// ============================================================================
// ERROR REPORTING TRAIT
// ============================================================================

/// Context-aware error creation - each stage knows how to create appropriately
/// coded and sourced errors.
pub trait ErrorReporting {
    /// Create an error with stage-appropriate source and code.
    fn report(&self, kind: ErrorKind, span: Span) -> CalqueError;

    /// Convenience methods for the fixed taxonomy.
    fn unknown_character(&self, character: char, span: Span) -> CalqueError {
        self.report(ErrorKind::UnknownCharacter { character }, span)
    }

    fn expected_name(&self, found: impl Into<String>, span: Span) -> CalqueError {
        self.report(
            ErrorKind::ExpectedName {
                found: found.into(),
            },
            span,
        )
    }

    fn unexpected_token(&self, found: impl Into<String>, span: Span) -> CalqueError {
        self.report(
            ErrorKind::UnexpectedToken {
                found: found.into(),
            },
            span,
        )
    }

    fn unexpected_end_of_input(&self, span: Span) -> CalqueError {
        self.report(ErrorKind::UnexpectedEndOfInput, span)
    }
}

/// Error creation context shared by the lexer and the parser.
pub struct StageContext {
    pub source: SourceContext,
    pub phase: String,
}

impl StageContext {
    pub fn new(source: SourceContext, phase: impl Into<String>) -> Self {
        Self {
            source,
            phase: phase.into(),
        }
    }
}

impl ErrorReporting for StageContext {
    fn report(&self, kind: ErrorKind, span: Span) -> CalqueError {
        let error_code = format!("calque::{}::{}", self.phase, kind.code_suffix());
        let help = kind.help();

        CalqueError {
            kind,
            source_info: SourceInfo {
                source: self.source.to_named_source(),
                primary_span: to_source_span(span),
                phase: self.phase.clone(),
            },
            diagnostic_info: DiagnosticInfo { help, error_code },
        }
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Converts a calque AST Span to a miette SourceSpan.
pub fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

/// Prints a CalqueError with full miette diagnostics.
///
/// This provides rich error formatting with source spans, suggestions, and
/// context. Use this for user-facing error display.
pub fn print_error(error: CalqueError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod errors_tests {
    use miette::Report;

    use super::*;

    fn lexer_context(source: &str) -> StageContext {
        StageContext::new(SourceContext::from_source("test.clq", source), "lexer")
    }

    #[test]
    fn test_error_codes_and_categories() {
        let ctx = lexer_context("(+ 2 3)");
        let err = ctx.unknown_character('+', Span { start: 1, end: 2 });
        assert_eq!(err.kind.category(), ErrorCategory::Lex);
        assert_eq!(err.diagnostic_info.error_code, "calque::lexer::unknown_character");
        assert_eq!(err.to_string(), "Lex error: unknown character '+'");
    }

    #[test]
    fn test_report_rendering_includes_span_and_help() {
        let ctx = lexer_context("(+ 2 3)");
        let err = ctx.unknown_character('+', Span { start: 1, end: 2 });
        let report = Report::new(err);
        let output = format!("{report:?}");
        assert!(output.contains("unknown character '+'"));
        assert!(output.contains("operator symbols are not part of the grammar"));
    }

    #[test]
    fn test_parser_phase_code() {
        let ctx = StageContext::new(SourceContext::from_source("test.clq", "(add 2"), "parser");
        let err = ctx.unexpected_end_of_input(Span { start: 0, end: 1 });
        assert_eq!(
            err.diagnostic_info.error_code,
            "calque::parser::unexpected_end_of_input"
        );
        assert_eq!(err.kind.category(), ErrorCategory::Parse);
    }
}
