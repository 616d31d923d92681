use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{self, Settings};

/// Where log lines go. The TUI owns stdout, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sink {
    File,
    Stderr,
}

/// Installs the global subscriber when `DESPESAS_LOG` is set; otherwise a no-op.
pub(crate) fn init(settings: &Settings, sink: Sink) -> Result<()> {
    let Some(directive) = settings.log_filter.as_deref() else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid {} filter: {directive}", config::LOG_ENV))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match sink {
        Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        Sink::File => {
            let path = config::log_dir()?.join("despesas.log");
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
