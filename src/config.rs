use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;

const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Parser)]
#[command(name = "cashbook", version, about = "Track cash inflow and outflow from the terminal")]
struct Args {
    /// Currency symbol shown in front of amounts.
    #[arg(long, env = "CASHBOOK_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,
    /// strftime-style format for transaction dates.
    #[arg(long, env = "CASHBOOK_DATE_FORMAT", default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,
    /// Start with an empty ledger instead of the opening salary entry.
    #[arg(long, env = "CASHBOOK_EMPTY")]
    empty: bool,
    /// Write a log to the default location in the data directory.
    #[arg(long)]
    log: bool,
    /// Write a log to this file (implies --log).
    #[arg(long, env = "CASHBOOK_LOG_FILE")]
    log_file: Option<PathBuf>,
    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, env = "CASHBOOK_LOG_LEVEL", default_value = "info")]
    log_level: tracing::Level,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) currency: String,
    pub(crate) date_format: String,
    pub(crate) empty: bool,
    /// `None` disables logging.
    pub(crate) log_path: Option<PathBuf>,
    pub(crate) log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            empty: false,
            log_path: None,
            log_level: tracing::Level::INFO,
        }
    }
}

pub(crate) fn load() -> Result<Config> {
    from_args(Args::parse())
}

fn from_args(args: Args) -> Result<Config> {
    validate_date_format(&args.date_format)?;

    let log_path = match args.log_file {
        Some(path) => Some(path),
        None if args.log => Some(crate::logging::default_log_path()?),
        None => None,
    };

    Ok(Config {
        currency: args.currency,
        date_format: args.date_format,
        empty: args.empty,
        log_path,
        log_level: args.log_level,
    })
}

/// Reject formats chrono cannot render for a plain date (bad specifiers, or
/// time/offset fields a calendar date does not carry).
pub(crate) fn validate_date_format(fmt: &str) -> Result<()> {
    if fmt.trim().is_empty() {
        bail!("Date format must not be empty");
    }
    let sample = NaiveDate::default();
    let mut out = String::new();
    if write!(out, "{}", sample.format(fmt)).is_err() {
        bail!("Invalid date format: {fmt}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
