//! Tests for command-line parsing and its conversion into `Config`.

use std::path::PathBuf;

use api_finder::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS};
use api_finder::{Cli, Config, LogFormat, LogLevel};
use clap::Parser;

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    Cli::try_parse_from(std::iter::once("api_finder").chain(args.iter().copied())).map(Config::from)
}

#[test]
fn test_cli_defaults() {
    let config = parse(&["-u", "https://example.com"]).expect("should parse");

    assert_eq!(config.url.as_deref(), Some("https://example.com"));
    assert_eq!(config.file, None);
    assert_eq!(config.workers, DEFAULT_WORKERS);
    assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(!config.verify_ssl);
    assert_eq!(config.output, None);
    assert!(config.custom_module.is_none());
    // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Info)
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_all_options() {
    let config = parse(&[
        "-f",
        "targets.txt",
        "-w",
        "25",
        "--ssl",
        "-o",
        "endpoints.txt",
        "--custom-module",
        "plugins",
        "--parsed-name",
        "MyExtractor",
        "--request-name",
        "MyRequester",
        "--timeout-seconds",
        "9",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("should parse");

    assert_eq!(config.file, Some(PathBuf::from("targets.txt")));
    assert_eq!(config.workers, 25);
    assert!(config.verify_ssl);
    assert_eq!(config.output, Some(PathBuf::from("endpoints.txt")));
    assert_eq!(config.custom_module.as_deref(), Some("plugins"));
    assert_eq!(config.parsed_name.as_deref(), Some("MyExtractor"));
    assert_eq!(config.request_name.as_deref(), Some("MyRequester"));
    assert_eq!(config.timeout_seconds, 9);
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_short_aliases() {
    let config = parse(&[
        "-u",
        "example.com",
        "--cm",
        "plugins",
        "--pn",
        "MyExtractor",
        "--rn",
        "MyRequester",
    ])
    .expect("should parse");

    assert_eq!(config.custom_module.as_deref(), Some("plugins"));
    assert_eq!(config.parsed_name.as_deref(), Some("MyExtractor"));
    assert_eq!(config.request_name.as_deref(), Some("MyRequester"));
}

#[test]
fn test_cli_requires_input() {
    assert!(parse(&[]).is_err());
    assert!(parse(&["-w", "5"]).is_err());
}

#[test]
fn test_cli_rejects_url_and_file_together() {
    assert!(parse(&["-u", "https://example.com", "-f", "targets.txt"]).is_err());
}

#[test]
fn test_cli_rejects_non_numeric_workers() {
    assert!(parse(&["-u", "https://example.com", "-w", "many"]).is_err());
    assert!(parse(&["-u", "https://example.com", "-w", "-3"]).is_err());
}

#[test]
fn test_cli_zero_workers_fails_validation() {
    let config = parse(&["-u", "https://example.com", "-w", "0"]).expect("parses as a number");
    assert!(config.validate().is_err());
}
