//! Monkey CLI
//!
//! Token dumps and an interactive lexer loop.

use std::io;

use monkeyc::commands::{lex_file, run_repl};
use monkeyc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "lex" => match args.get(2) {
            Some(path) => lex_file(path, &mut io::stdout().lock()),
            None => Err(CliError::Usage("Usage: monkey lex <file>".to_owned())),
        },
        "repl" => run_repl(io::stdin().lock(), &mut io::stdout().lock()),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(CliError::Usage(format!(
            "unknown command '{other}' (run 'monkey help' for usage)"
        ))),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Monkey lexer");
    println!();
    println!("Usage: monkey <command> [args]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Print the token stream of a file");
    println!("  repl          Read lines from stdin and print their tokens");
    println!("  help          Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=monkey_lexer=trace) for diagnostics.");
}
