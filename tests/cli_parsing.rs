//! Tests for command-line parsing.

use clap::Parser;
use release_fixer::config::{Config, LogFormat, LogLevel, Opt, SummaryFormat};
use std::path::PathBuf;

#[test]
fn test_file_only() {
    let opt = Opt::try_parse_from(["release_fixer", "build/app.js"]).expect("should parse");
    assert_eq!(opt.file, PathBuf::from("build/app.js"));
    assert!(opt.functions.is_empty());
    assert_eq!(opt.log_level, LogLevel::Info);
    assert_eq!(opt.log_format, LogFormat::Plain);
    assert_eq!(opt.summary, SummaryFormat::Plain);
    assert!(!opt.dry_run);
}

#[test]
fn test_function_names_follow_the_file() {
    let opt = Opt::try_parse_from(["release_fixer", "app.js", "_glClear", "_glFlush"])
        .expect("should parse");
    assert_eq!(opt.functions, vec!["_glClear", "_glFlush"]);
}

#[test]
fn test_options_mix_with_positionals() {
    let opt = Opt::try_parse_from([
        "release_fixer",
        "--log-level",
        "debug",
        "app.js",
        "foo",
        "--dry-run",
        "--summary",
        "json",
        "--log-format",
        "json",
    ])
    .expect("should parse");
    assert_eq!(opt.file, PathBuf::from("app.js"));
    assert_eq!(opt.functions, vec!["foo"]);
    assert_eq!(opt.log_level, LogLevel::Debug);
    assert_eq!(opt.log_format, LogFormat::Json);
    assert_eq!(opt.summary, SummaryFormat::Json);
    assert!(opt.dry_run);
}

#[test]
fn test_missing_file_is_a_usage_error() {
    let err = Opt::try_parse_from(["release_fixer"]).expect_err("file is required");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(Opt::try_parse_from(["release_fixer", "app.js", "--log-level", "loud"]).is_err());
}

#[test]
fn test_config_from_opt() {
    let opt = Opt::try_parse_from(["release_fixer", "app.js", "foo", "foo", "bar"])
        .expect("should parse");
    let config = Config::from(opt);
    assert_eq!(
        config.functions.into_iter().collect::<Vec<_>>(),
        vec!["bar".to_string(), "foo".to_string()]
    );
}
