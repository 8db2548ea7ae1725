//! Log subscriber installation for the CLI.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Only installs when `RUST_LOG` is set, so ordinary runs print nothing
/// but command output. Safe to call multiple times.
/// Enable with `RUST_LOG=monkey_lexer=trace` to see every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
