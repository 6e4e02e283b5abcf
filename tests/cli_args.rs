//! CLI argument parsing tests.

use std::time::Duration;

use clap::Parser;
use external::cli::{Cli, Command};
use external::{FetchError, DEFAULT_TIMEOUT};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["external", "get", "mock"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { id } => assert_eq!(id, "mock"),
    }
}

#[test]
fn test_cli_accepts_empty_id() {
    let cli = Cli::parse_from(["external", "get", ""]);

    match cli.command {
        Command::Get { id } => assert!(id.is_empty()),
    }
}

#[test]
fn test_global_json_flag() {
    let cli = Cli::parse_from(["external", "--json", "get", "mock"]);
    assert!(cli.json);

    let cli = Cli::parse_from(["external", "get", "mock", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_config_from_flags() {
    let cli = Cli::parse_from([
        "external",
        "--base-url",
        "http://localhost:3000",
        "--timeout-ms",
        "250",
        "get",
        "mock",
    ]);

    let config = cli.config().unwrap();
    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout, Duration::from_millis(250));
}

#[test]
fn test_config_default_timeout() {
    let mut cli = Cli::parse_from(["external", "--base-url", "http://x", "get", "mock"]);
    cli.timeout_ms = None;

    assert_eq!(cli.config().unwrap().timeout, DEFAULT_TIMEOUT);
}

#[test]
fn test_config_requires_base_url() {
    let mut cli = Cli::parse_from(["external", "get", "mock"]);
    cli.base_url = None;

    assert!(matches!(cli.config(), Err(FetchError::ConfigMissing(_))));
}

#[test]
fn test_config_rejects_zero_timeout() {
    let cli = Cli::parse_from([
        "external",
        "--base-url",
        "http://x",
        "--timeout-ms",
        "0",
        "get",
        "mock",
    ]);

    assert!(matches!(cli.config(), Err(FetchError::InvalidConfig(_))));
}
