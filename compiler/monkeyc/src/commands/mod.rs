//! Command handlers for the `monkey` CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_file`,
//! `write_tokens`) live here in the module root.

use std::io::Write;

use monkey_lexer::Scanner;

use crate::CliError;

mod lex;
mod repl;

pub use lex::lex_file;
pub use repl::{run_repl, PROMPT};

/// Read a source file, mapping I/O failures to readable messages.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))
}

/// Write one line per token of `source`, ending with the EOF token.
///
/// Returns the number of tokens written, EOF included.
pub fn write_tokens(source: &str, out: &mut impl Write) -> Result<usize, CliError> {
    let mut scanner = Scanner::new(source);
    let mut count = 0;
    loop {
        let tok = scanner.next_token();
        writeln!(out, "{tok}")?;
        count += 1;
        if tok.is_eof() {
            return Ok(count);
        }
    }
}

#[cfg(test)]
mod tests;
