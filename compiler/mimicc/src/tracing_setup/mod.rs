//! Subscriber installation for the `mimic` binary.
//!
//! Library crates only emit through `tracing`; the driver decides whether
//! anything is recorded. Nothing is installed unless `RUST_LOG` is set:
//!
//! ```bash
//! RUST_LOG=mimic_blueprint=debug mimic generate catalog.json
//! RUST_LOG=debug MIMIC_LOG_TREE=1 mimic check catalog.json
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable selecting the indented span-tree layout.
pub const TREE_ENV: &str = "MIMIC_LOG_TREE";

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var_os(TREE_ENV).is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
