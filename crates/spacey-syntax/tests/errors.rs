//! Failure reporting: kind of failure and its position.

use spacey_syntax::{ParseError, parse_script};

#[test]
fn test_unterminated_string_is_lexical() {
    let err = parse_script("a = 'open").unwrap_err();
    assert!(matches!(err, ParseError::Lexical { line: 1, column: 4, .. }));
}

#[test]
fn test_stray_character_is_lexical() {
    let err = parse_script("a #").unwrap_err();
    match err {
        ParseError::Lexical { line, column, found } => {
            assert_eq!((line, column), (1, 2));
            assert_eq!(found, "'#'");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_grammar_error_on_later_line() {
    let err = parse_script("let a = 1;\nlet b = ;").unwrap_err();
    match &err {
        ParseError::Grammar { line, column, expected, .. } => {
            assert_eq!((*line, *column), (2, 8));
            assert!(!expected.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(err.to_string().starts_with("Parse error at 2:8: expected "));
}

#[test]
fn test_incomplete_binary_keeps_last_match() {
    let err = parse_script("1 +").unwrap_err();
    assert_eq!((err.line(), err.column()), (1, 3));
    assert!(err.last_matched().is_some());
}

#[test]
fn test_unbalanced_brace_is_trailing_input() {
    let err = parse_script("a;\n}").unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { line: 2, column: 0, .. }));
}

#[test]
fn test_throw_needs_expression_on_same_line() {
    assert!(parse_script("throw\nerr;").is_err());
    assert!(parse_script("throw err;").is_ok());
}

#[test]
fn test_unclosed_block() {
    let err = parse_script("if (a) {\n  b();\n").unwrap_err();
    assert!(matches!(err, ParseError::Grammar { line: 3, column: 0, .. }));
}
