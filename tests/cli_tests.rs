use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{missing_config, setup_test_config, sts};

#[test]
fn test_help_lists_flags() {
    sts()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--workspace"))
        .stdout(contains("--token"))
        .stdout(contains("--auth-cookie"))
        .stdout(contains("--from"));
}

#[test]
fn test_version() {
    sts()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_from_date_fails_before_fetching() {
    let cfg = missing_config("invalid_from");

    sts()
        .args(["--config", &cfg, "--workspace", "acme", "--from", "31/01/2021"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(contains("Invalid date format").and(contains("31/01/2021")));
}

#[test]
fn test_impossible_from_date_fails() {
    let cfg = missing_config("impossible_from");

    sts()
        .args(["--config", &cfg, "--from", "2021-02-30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_broken_config_file_fails() {
    let cfg = setup_test_config("broken", "workspace: [unclosed\n");

    sts()
        .args(["--config", &cfg, "--from", "2021-06-01"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(contains("Configuration error"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    sts().arg("--bogus").assert().failure();
}
