//! Tracing initialization and configuration.

use std::sync::Once;

use scadgen_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable carrying per-target log directives.
pub const LOG_ENV: &str = "SCADGEN_LOG";

static INIT: Once = Once::new();

/// Directive used when `SCADGEN_LOG` is unset or invalid.
pub fn default_directive(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        "scadgen=info".to_string()
    } else {
        format!("scadgen={level}")
    }
}

/// Initialize tracing with default settings.
///
/// Reads `SCADGEN_LOG` for per-target levels, e.g.
/// `SCADGEN_LOG=scadgen_retrieval=debug,scadgen_generation=info`.
/// Falls back to `scadgen=info`.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize tracing with JSON log lines.
pub fn init_tracing_json() {
    init_tracing_with(&ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    });
}

/// Initialize tracing from configuration. `SCADGEN_LOG` still wins over
/// `log_level` when it parses.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    let json = config.json;
    let fallback = default_directive(&config.log_level);
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&fallback))
            .unwrap_or_else(|_| EnvFilter::new("scadgen=info"));

        // Logs go to stderr so generated code on stdout stays clean.
        let result = if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
        // Another subscriber may already be installed by an embedding host.
        let _ = result;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_scopes_to_scadgen_targets() {
        assert_eq!(default_directive("debug"), "scadgen=debug");
        assert_eq!(default_directive("  "), "scadgen=info");
    }
}
