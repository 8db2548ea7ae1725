//! Library half of the `monkey` CLI.
//!
//! Command handlers take their input and output streams as parameters so
//! they can be driven from tests; `main.rs` only parses arguments and wires
//! them to stdin/stdout.

pub mod commands;
mod error;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;
