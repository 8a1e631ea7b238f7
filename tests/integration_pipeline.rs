// tests/integration_pipeline.rs
//
// End-to-end coverage of the four-stage pipeline: the compiled examples, the
// full error taxonomy as surfaced through `compile`, and the stage-inspection
// API.

use calque::errors::ErrorKind;
use calque::{compile, Artifact, Pipeline, Stage};
use miette::Report;

#[test]
fn test_compile_simple_call() {
    assert_eq!(compile("(add 2 2)").unwrap(), "add(2, 2);");
}

#[test]
fn test_compile_nested_call() {
    assert_eq!(
        compile("(subtract 4 (add 2 2))").unwrap(),
        "subtract(4, add(2, 2));"
    );
}

#[test]
fn test_compile_multiple_top_level_forms() {
    assert_eq!(
        compile("(add 2 3) (add 4 4)").unwrap(),
        "add(2, 3);\nadd(4, 4);"
    );
}

#[test]
fn test_compile_empty_source() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn test_compile_string_arguments() {
    assert_eq!(
        compile(r#"(concat "foo" "bar")"#).unwrap(),
        r#"concat("foo", "bar");"#
    );
}

#[test]
fn test_leading_zeros_survive_end_to_end() {
    assert_eq!(compile("(add 007 2)").unwrap(), "add(007, 2);");
}

#[test]
fn test_deep_nesting() {
    assert_eq!(compile("(a (b (c 1)))").unwrap(), "a(b(c(1)));");
}

#[test]
fn test_unterminated_call_fails_with_end_of_input() {
    let err = compile("(add 2 3").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn test_operator_name_fails_in_the_lexer() {
    let err = compile("(+ 2 3)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCharacter { character: '+' });
    assert_eq!(err.source_info.phase, "lexer");
}

#[test]
fn test_stray_closing_paren_fails() {
    let err = compile("(add 1))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
    assert_eq!(err.source_info.phase, "parser");
}

#[test]
fn test_missing_name_fails() {
    let err = compile("()").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExpectedName { .. }));
}

#[test]
fn test_stage_inspection_tokens() {
    let pipeline = Pipeline::default();
    match pipeline.compile_until("(add 2 3)", Stage::Tokens).unwrap() {
        Artifact::Tokens(tokens) => assert_eq!(tokens.len(), 5),
        other => panic!("expected a token artifact, got {:?}", other),
    }
}

#[test]
fn test_stage_inspection_source_ast() {
    let pipeline = Pipeline::default();
    match pipeline
        .compile_until("(add 2 3) (add 4 4)", Stage::SourceAst)
        .unwrap()
    {
        Artifact::SourceAst(program) => assert_eq!(program.body.len(), 2),
        other => panic!("expected a source AST artifact, got {:?}", other),
    }
}

#[test]
fn test_stage_inspection_target_ast() {
    let pipeline = Pipeline::default();
    match pipeline
        .compile_until("(add 2 3)", Stage::TargetAst)
        .unwrap()
    {
        Artifact::TargetAst(program) => assert_eq!(program.body.len(), 1),
        other => panic!("expected a target AST artifact, got {:?}", other),
    }
}

#[test]
fn test_stage_inspection_code_matches_compile() {
    let source = "(subtract 4 (add 2 2))";
    let pipeline = Pipeline::default();
    match pipeline.compile_until(source, Stage::Code).unwrap() {
        Artifact::Code(code) => assert_eq!(code, compile(source).unwrap()),
        other => panic!("expected a code artifact, got {:?}", other),
    }
}

#[test]
fn test_artifact_serializes_to_json() {
    let pipeline = Pipeline::default();
    let artifact = pipeline.compile_until("(add 2 3)", Stage::Tokens).unwrap();
    let json = artifact.to_json().unwrap();
    assert!(json.contains("\"stage\""));
    assert!(json.contains("\"tokens\""));
    assert!(json.contains("\"paren\""));
    assert!(json.contains("\"add\""));
}

#[test]
fn test_error_renders_against_the_original_source() {
    let err = compile("(+ 2 3)").unwrap_err();
    let report = Report::new(err);
    let output = format!("{report:?}");
    assert!(output.contains("unknown character '+'"));
}

#[test]
fn test_pipeline_source_name_appears_in_diagnostics() {
    let pipeline = Pipeline::new("repl");
    let err = pipeline.compile("(+ 2 3)").unwrap_err();
    let report = Report::new(err);
    let output = format!("{report:?}");
    assert!(output.contains("repl"));
}
