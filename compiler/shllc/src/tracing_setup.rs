//! Subscriber installation for the CLI.
//!
//! Libraries only emit events; the binary decides where they go. Nothing is
//! installed unless `RUST_LOG` is set, e.g. `RUST_LOG=shll_parse=debug`.
//! Setting `SHLL_LOG_TREE` switches from flat lines to an indented tree.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = if std::env::var_os("SHLL_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            (None, Some(flat))
        };

        let _ = tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .try_init();
    });
}
