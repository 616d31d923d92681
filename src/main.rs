mod config;
mod error;
mod ledger;
mod logging;
mod models;
mod run;
mod state;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let settings = config::Settings::from_env()?;

    if settings.command.is_empty() {
        logging::init(&settings, logging::Sink::File)?;
        run::as_tui(settings.start_month)
    } else {
        logging::init(&settings, logging::Sink::Stderr)?;
        run::as_cli(&settings.command, settings.start_month)
    }
}
