#![allow(clippy::unwrap_used)]

use clap::Parser;

use super::*;

fn parse(argv: &[&str]) -> Config {
    let mut full = vec!["cashbook"];
    full.extend_from_slice(argv);
    from_args(Args::try_parse_from(full).unwrap()).unwrap()
}

#[test]
fn test_defaults() {
    let config = parse(&[]);
    assert_eq!(config.currency, "$");
    assert_eq!(config.date_format, "%d.%m.%Y");
    assert!(!config.empty);
    assert!(config.log_path.is_none());
    assert_eq!(config.log_level, tracing::Level::INFO);
}

#[test]
fn test_overrides() {
    let config = parse(&[
        "--currency",
        "€",
        "--date-format",
        "%Y-%m-%d",
        "--empty",
        "--log-file",
        "/tmp/cashbook-test.log",
        "--log-level",
        "debug",
    ]);
    assert_eq!(config.currency, "€");
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert!(config.empty);
    assert_eq!(
        config.log_path.as_deref(),
        Some(std::path::Path::new("/tmp/cashbook-test.log"))
    );
    assert_eq!(config.log_level, tracing::Level::DEBUG);
}

#[test]
fn test_bad_log_level_rejected() {
    assert!(Args::try_parse_from(["cashbook", "--log-level", "loud"]).is_err());
}

#[test]
fn test_bad_date_format_rejected() {
    let args = Args::try_parse_from(["cashbook", "--date-format", "%Q"]).unwrap();
    assert!(from_args(args).is_err());
}

#[test]
fn test_validate_date_format() {
    assert!(validate_date_format("%d.%m.%Y").is_ok());
    assert!(validate_date_format("%m/%d/%y").is_ok());
    assert!(validate_date_format("").is_err());
    assert!(validate_date_format("%").is_err());
    assert!(validate_date_format("%H:%M").is_err());
}

#[test]
fn test_config_default_matches_cli_defaults() {
    let from_cli = parse(&[]);
    let default = Config::default();
    assert_eq!(from_cli.currency, default.currency);
    assert_eq!(from_cli.date_format, default.date_format);
    assert_eq!(from_cli.log_level, default.log_level);
}
