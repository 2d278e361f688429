//! Tracing setup for embedders and tests.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install a global tracing subscriber writing to stderr, so program output
/// on stdout stays clean.
///
/// Does nothing while `RUST_LOG` is unset. The first call that sees it makes
/// the only attempt; if the embedder already installed a global subscriber,
/// that one stays. Returns whether this crate's subscriber is installed.
///
/// `RUST_LOG=stimpl_eval=trace` logs every node the evaluator visits and every
/// binding it creates.
pub fn init_tracing() -> bool {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return INSTALLED.get() == Some(&true);
    };
    *INSTALLED.get_or_init(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init()
            .is_ok()
    })
}
