mod config;
mod form;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    run::as_tui(&config)
}
