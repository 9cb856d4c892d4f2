//! Diagnostic logging to stderr.
//!
//! Stdout carries only the report, so every layer here writes to stderr.
//! The filter comes from `RUST_LOG` and defaults to `warn`.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Builds the `RUST_LOG` filter, falling back to `warn` for anything unset or malformed.
pub fn env_filter() -> EnvFilter {
    filter_from_var(EnvFilter::DEFAULT_ENV)
}

fn filter_from_var(var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(var)
        .from_env_lossy()
}

/// Installs the global subscriber. Call once, before any work is done.
pub fn init(format: LogFormat) {
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Text => fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(env_filter()))
        .init();
}
