/*!
 * Diagnostic Tracing
 * Structured tracing for launches, reaps, relays and continues
 *
 * Diagnostics always go to stderr; stdout belongs to the shell's own
 * output (prompts, notices, listings).
 */

use crate::shell::ShellConfig;
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
fn default_directive(config: &ShellConfig) -> &'static str {
    if config.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn, debug with `-v`)
/// - JOBSHELL_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing(config: &ShellConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.trace_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    match installed {
        Ok(()) => info!(json = config.trace_json, "tracing initialized"),
        Err(e) => debug!(error = %e, "tracing subscriber already installed"),
    }
}
