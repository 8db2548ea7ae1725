#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::io::Cursor;

use pretty_assertions::assert_eq;

use super::*;

fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// === write_tokens ===

#[test]
fn write_tokens_ends_with_eof() {
    let mut out = Vec::new();
    let count = write_tokens("let x = 5;", &mut out).unwrap();
    assert_eq!(count, 6);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{Type:LET Literal:let}\n\
         {Type:IDENT Literal:x}\n\
         {Type:= Literal:=}\n\
         {Type:INT Literal:5}\n\
         {Type:; Literal:;}\n\
         {Type:EOF Literal:}\n"
    );
}

#[test]
fn write_tokens_empty_source() {
    let mut out = Vec::new();
    assert_eq!(write_tokens("", &mut out).unwrap(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "{Type:EOF Literal:}\n");
}

// === lex ===

#[test]
fn lex_file_prints_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add.monkey");
    std::fs::write(&path, "fn(x) { x + 1 }").unwrap();
    let path = path.to_str().unwrap();

    let text = output_of(|out| lex_file(path, out));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "{Type:FUNCTION Literal:fn}");
    assert_eq!(lines[9], "{Type:EOF Literal:}");
}

#[test]
fn lex_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.monkey");
    let path = path.to_str().unwrap();
    let err = lex_file(path, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound { .. }));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}

#[test]
fn lex_invalid_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.monkey");
    std::fs::write(&path, [b'a', 0xFF, b'b']).unwrap();
    let err = read_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CliError::InvalidUtf8 { .. }));
}

// === repl ===

#[test]
fn repl_lexes_each_line() {
    let input = Cursor::new("let a = 1;\n@\n");
    let text = output_of(|out| run_repl(input, out));
    assert_eq!(
        text,
        "Welcome to the Monkey lexer! Type some code.\n\
         >> {Type:LET Literal:let}\n\
         {Type:IDENT Literal:a}\n\
         {Type:= Literal:=}\n\
         {Type:INT Literal:1}\n\
         {Type:; Literal:;}\n\
         {Type:EOF Literal:}\n\
         >> {Type:ILLEGAL Literal:@}\n\
         {Type:EOF Literal:}\n\
         >> \n"
    );
}

#[test]
fn repl_on_empty_input() {
    let text = output_of(|out| run_repl(Cursor::new(""), out));
    assert_eq!(
        text,
        format!("Welcome to the Monkey lexer! Type some code.\n{PROMPT}\n")
    );
}

#[test]
fn repl_blank_line_yields_eof_only() {
    let text = output_of(|out| run_repl(Cursor::new("   \n"), out));
    assert!(text.contains(">> {Type:EOF Literal:}\n>> "));
}
