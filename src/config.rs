use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Month;

pub(crate) const LOG_ENV: &str = "DESPESAS_LOG";

/// Runtime settings gathered from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) start_month: Month,
    /// `EnvFilter` directive from `DESPESAS_LOG`; logging is off when unset.
    pub(crate) log_filter: Option<String>,
    /// Remaining positional arguments (subcommand and its args).
    pub(crate) command: Vec<String>,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, std::env::var(LOG_ENV).ok())
    }

    pub(crate) fn parse(args: &[String], log_filter: Option<String>) -> Result<Self> {
        let mut start_month = Month::default();
        let mut command = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--month" || arg == "-m" {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--month requires a value (1-12)"))?;
                start_month = parse_month(value)?;
            } else {
                command.push(arg.clone());
            }
        }

        Ok(Self {
            start_month,
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
            command,
        })
    }
}

pub(crate) fn parse_month(value: &str) -> Result<Month> {
    let number: u8 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid month: {value}"))?;
    Ok(Month::new(number)?)
}

/// Directory for the log file, created on demand.
pub(crate) fn log_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "despesas", "Despesas")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let dir = proj_dirs.data_local_dir();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
