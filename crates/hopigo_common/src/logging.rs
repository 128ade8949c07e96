// --- File: crates/hopigo_common/src/logging.rs ---
//! Logging utilities for the HopiGo services.
//!
//! Provides a single place to initialize the tracing subscriber so every
//! binary and test harness gets the same format and filtering behavior.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Respects `RUST_LOG` when set; the `hopigo` directive only raises the
/// floor for this workspace's own crates.
pub fn init_with_level(level: Level) {
    let filter =
        EnvFilter::from_default_env().add_directive(format!("hopigo={}", level).parse().unwrap());

    // Use try_init to handle the case where a global default subscriber has
    // already been set (tests initialize repeatedly).
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
