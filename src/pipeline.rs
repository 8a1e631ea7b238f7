//! Stage orchestration for the calque pipeline
//!
//! Four stages composed in fixed order: lex, parse, transform, generate.
//! Every stage is an independently callable, side-effect-free function of its
//! input; `compile_until` additionally exposes each stage's output for
//! inspection, so no debugging ever needs to reach into the pipeline.

use serde::Serialize;

use crate::ast::{js, Program};
use crate::codegen;
use crate::errors::{CalqueError, SourceContext};
use crate::syntax::{lexer, parser, Token};
use crate::transform;

/// Compile source text in s-expression notation into C-style call notation.
///
/// This is the entry point for the common case; construct a [`Pipeline`] to
/// control the source name used in diagnostics or to inspect intermediate
/// stage outputs.
pub fn compile(source_text: &str) -> Result<String, CalqueError> {
    Pipeline::default().compile(source_text)
}

/// The compiler pipeline and its configuration.
///
/// The pipeline owns no state across invocations; independent compilations
/// may run fully in parallel with zero coordination.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Name reported for the source in diagnostics.
    pub source_name: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            source_name: "source".to_string(),
        }
    }
}

impl Pipeline {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }

    fn source_context(&self, source_text: &str) -> SourceContext {
        SourceContext::from_source(self.source_name.clone(), source_text)
    }

    /// Lexical analysis only: source text to token sequence.
    pub fn tokenize_source(&self, source_text: &str) -> Result<Vec<Token>, CalqueError> {
        lexer::tokenize(source_text, self.source_context(source_text))
    }

    /// Lex and parse: source text to source AST.
    pub fn parse_source(&self, source_text: &str) -> Result<Program, CalqueError> {
        let context = self.source_context(source_text);
        let tokens = lexer::tokenize(source_text, context.clone())?;
        parser::parse(&tokens, context)
    }

    /// Lex, parse, and transform: source text to target AST.
    pub fn transform_source(&self, source_text: &str) -> Result<js::Program, CalqueError> {
        Ok(transform::transform(self.parse_source(source_text)?))
    }

    /// The full four-stage compilation: source text to target text.
    pub fn compile(&self, source_text: &str) -> Result<String, CalqueError> {
        Ok(codegen::generate(&self.transform_source(source_text)?))
    }

    /// Run the pipeline up to `stage` and return that stage's artifact.
    pub fn compile_until(
        &self,
        source_text: &str,
        stage: Stage,
    ) -> Result<Artifact, CalqueError> {
        match stage {
            Stage::Tokens => Ok(Artifact::Tokens(self.tokenize_source(source_text)?)),
            Stage::SourceAst => Ok(Artifact::SourceAst(self.parse_source(source_text)?)),
            Stage::TargetAst => Ok(Artifact::TargetAst(self.transform_source(source_text)?)),
            Stage::Code => Ok(Artifact::Code(self.compile(source_text)?)),
        }
    }
}

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Tokens,
    SourceAst,
    TargetAst,
    Code,
}

/// The output of a single pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stage", content = "output", rename_all = "snake_case")]
pub enum Artifact {
    Tokens(Vec<Token>),
    SourceAst(Program),
    TargetAst(js::Program),
    Code(String),
}

impl Artifact {
    /// Serialize the artifact to pretty-printed JSON for inspection.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
