//! luai driver.
//!
//! Reads a chunk, then alternates between parsing one statement and
//! executing it. The first fault of any kind ends the run and is reported
//! once as `<file>:<line>:<column>: <message>` on stdout.
//!
//! # Tracing
//!
//! Set `RUST_LOG` to get hierarchical trace output on stderr:
//!
//! ```bash
//! RUST_LOG=lua_eval=trace luai prog.lua
//! RUST_LOG=debug luai < prog.lua
//! ```

mod config;
mod fault;
mod session;

use std::sync::Once;

pub use config::{usage, Command, ConfigError, InputSource, RunConfig};
pub use fault::Fault;
pub use session::{run, run_source, Outcome};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, and only when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
