pub use crate::errors::{CalqueError, ErrorCategory, ErrorKind, ErrorReporting, SourceContext};
pub use crate::pipeline::{compile, Artifact, Pipeline, Stage};

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod pipeline;
pub mod syntax;
pub mod transform;
