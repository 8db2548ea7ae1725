//! `lex`: print the token stream of a file.

use std::io::Write;

use tracing::debug;

use super::{read_file, write_tokens};
use crate::CliError;

/// Lex the file at `path` and write its tokens to `out`.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let content = read_file(path)?;
    let count = write_tokens(&content, out)?;
    debug!(path, count, "lexed file");
    Ok(())
}
