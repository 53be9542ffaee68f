//! Logging setup
//!
//! One `tracing-subscriber` fmt layer filtered by `RUST_LOG`, falling back
//! to the configured level. Natively it writes to stderr; in the browser
//! each event becomes one `console.log` line.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter for `level`, overridable through `RUST_LOG`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber; later calls are no-ops
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(level))
        .try_init();
}

/// Install the global subscriber; later calls are no-ops
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(crate::web::ConsoleWriter::default),
        )
        .with(env_filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on garbage input
        let _ = env_filter("not a [valid] directive");
        let _ = env_filter("crypto_dashboard=debug");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("info");
    }
}
