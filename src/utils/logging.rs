//! Logging utilities
//!
//! Tracing subscriber setup shared by the binary

use crate::config::LoggingSettings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from the configured directive, falling back to `info`
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging system
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = env_filter(&settings.filter);

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if settings.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::info!("Logging system initialized");
    Ok(())
}
