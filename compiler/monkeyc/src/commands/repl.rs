//! `repl`: read lines from the user and echo their tokens.

use std::io::{BufRead, Write};

use super::write_tokens;
use crate::CliError;

pub const PROMPT: &str = ">> ";

/// Run the read-lex-print loop until `input` is exhausted.
///
/// Each line is tokenized on its own; tokens never span lines.
pub fn run_repl(input: impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Welcome to the Monkey lexer! Type some code.")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        write_tokens(&line?, out)?;
    }
}
