//! Tests for CLI subcommand parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use user_admin::config::{Cli, Command, LogFormat, LogLevel};
use user_admin::{ExportConfig, FilterConfig};

#[test]
fn test_cli_low_activity_defaults() {
    let cli = Cli::try_parse_from(["user_admin", "low-activity"]).expect("Should parse");

    assert_eq!(
        log::LevelFilter::from(cli.log_level.clone()),
        log::LevelFilter::Info
    );
    assert!(matches!(cli.log_format, LogFormat::Plain));

    match cli.command {
        Command::LowActivity(args) => {
            let config = FilterConfig::from(args);
            assert_eq!(config.input, PathBuf::from("users.csv"));
            assert_eq!(config.threshold, 1000.0);
        }
        other => panic!("Expected low-activity command, got {other:?}"),
    }
}

#[test]
fn test_cli_low_activity_with_options() {
    let cli = Cli::try_parse_from([
        "user_admin",
        "low-activity",
        "exported.csv",
        "--threshold",
        "250.5",
        "--log-level",
        "debug",
    ])
    .expect("Should parse");

    assert_eq!(
        log::LevelFilter::from(cli.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    match cli.command {
        Command::LowActivity(args) => {
            assert_eq!(args.input, PathBuf::from("exported.csv"));
            assert_eq!(args.threshold, 250.5);
        }
        other => panic!("Expected low-activity command, got {other:?}"),
    }
}

#[test]
fn test_cli_export_with_explicit_options() {
    let cli = Cli::try_parse_from([
        "user_admin",
        "--log-format",
        "json",
        "export",
        "--output",
        "out/all_users.csv",
        "--base-url",
        "http://localhost:3000",
        "--endpoint",
        "/api/admin/users",
        "--token",
        "abc123",
        "--limit",
        "100",
        "--timeout-seconds",
        "30",
        "--delay-ms",
        "0",
    ])
    .expect("Should parse");

    assert!(matches!(cli.log_format, LogFormat::Json));
    match cli.command {
        Command::Export(args) => {
            let config = ExportConfig::from(args);
            assert_eq!(config.output, PathBuf::from("out/all_users.csv"));
            assert_eq!(config.base_url, "http://localhost:3000");
            assert_eq!(config.endpoint, "/api/admin/users");
            assert_eq!(config.token, "abc123");
            assert_eq!(config.limit, 100);
            assert_eq!(config.timeout_seconds, 30);
            assert_eq!(config.page_delay, Duration::ZERO);
        }
        other => panic!("Expected export command, got {other:?}"),
    }
}

#[test]
fn test_cli_export_defaults_match_library_defaults() {
    let cli = Cli::try_parse_from(["user_admin", "export", "--token", "t"]).expect("Should parse");
    let Command::Export(args) = cli.command else {
        panic!("Expected export command");
    };
    let parsed = ExportConfig::from(args);
    let defaults = ExportConfig::default();

    assert_eq!(parsed.base_url, defaults.base_url);
    assert_eq!(parsed.endpoint, defaults.endpoint);
    assert_eq!(parsed.limit, defaults.limit);
    assert_eq!(parsed.timeout_seconds, defaults.timeout_seconds);
    assert_eq!(parsed.page_delay, defaults.page_delay);
    assert_eq!(parsed.output, defaults.output);
}

#[test]
fn test_cli_short_output_flag() {
    let cli = Cli::try_parse_from(["user_admin", "export", "-o", "x.csv", "--token", "t"])
        .expect("Should parse");
    let Command::Export(args) = cli.command else {
        panic!("Expected export command");
    };
    assert_eq!(args.output, PathBuf::from("x.csv"));
}

#[test]
fn test_cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["user_admin"]).is_err());
}

#[test]
fn test_cli_rejects_invalid_values() {
    assert!(Cli::try_parse_from(["user_admin", "export", "--limit", "fifty"]).is_err());
    assert!(Cli::try_parse_from(["user_admin", "--log-level", "loud", "export"]).is_err());
    assert!(Cli::try_parse_from(["user_admin", "low-activity", "--threshold", "x"]).is_err());
}
