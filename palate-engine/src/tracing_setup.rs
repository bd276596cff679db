//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for embedding applications.
///
/// Reads `PALATE_LOG` for per-crate log levels, e.g.
/// `PALATE_LOG=palate_learning=debug,palate_context=info`.
/// Falls back to `palate=info` when unset or invalid.
///
/// Idempotent; safe to call from multiple tests or entry points.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PALATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("palate=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
