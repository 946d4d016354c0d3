//! Tracing subscriber for the `lox` binary.
//!
//! Off unless `RUST_LOG` is set, e.g. `RUST_LOG=lox_eval=trace lox a.lox`.
//! Output is an indented span tree on stderr, so it never mixes with
//! program output.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Another subscriber may already be installed (tests, embedding).
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(layer)
            .try_init();
    });
}
