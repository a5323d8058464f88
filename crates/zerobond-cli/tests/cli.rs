//! End-to-end tests for the `zerobond` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const PROMPTS: &str = "Face Value : Interest Rate  :Year Fraction :";

fn zerobond() -> Command {
    let mut cmd = Command::cargo_bin("zerobond").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prices_zero_rate_bond() {
    zerobond()
        .write_stdin("1000\n0.0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{PROMPTS}Face Value : 1000\n\
             Interest Rate : 0\n\
             Year Fraction : 5\n\
             =============\n\
             Price : 1000\n"
        )));
}

#[test]
fn test_prices_discounted_bond() {
    zerobond()
        .write_stdin("100\n0.05\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=============\nPrice : 90.4837418035"));
}

#[test]
fn test_malformed_input_fails() {
    zerobond()
        .write_stdin("100\nabc\n2\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Price").not())
        .stderr(predicate::str::contains("interest rate"))
        .stderr(predicate::str::contains("'abc'"));
}

#[test]
fn test_truncated_input_fails() {
    zerobond()
        .write_stdin("100\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("end of input"));
}

#[test]
fn test_retries_recover() {
    zerobond()
        .args(["--retries", "1"])
        .write_stdin("1000\n0\nsoon\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid number 'soon', try again."))
        .stdout(predicate::str::ends_with("Price : 1000\n"));
}

#[test]
fn test_json_format() {
    zerobond()
        .args(["--format", "json"])
        .write_stdin("1000\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"price\": 1000.0"));
}

#[test]
fn test_shortest_rendering() {
    zerobond()
        .arg("--shortest")
        .write_stdin("100\n0.05\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interest Rate : 0.05\n"));
}

#[test]
fn test_show_initial() {
    zerobond()
        .arg("--show-initial")
        .write_stdin("1000\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Face Value : 0\n"))
        .stdout(predicate::str::contains("Price : n/a\n"));
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "precision = 120\nmax_attempts = 2").unwrap();

    zerobond()
        .arg("--config")
        .arg(file.path())
        .write_stdin("100\n0.1\nx\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interest Rate : 0.1000000000000000055511151231257827",
        ));
}

#[test]
fn test_invalid_precision_rejected() {
    zerobond()
        .args(["--precision", "5"])
        .write_stdin("1000\n0\n5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision"));
}

#[test]
fn test_missing_config_file() {
    zerobond()
        .args(["--config", "/nonexistent/zerobond.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "precision = \"many\"").unwrap();

    zerobond()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_shortest_with_precision_rejected() {
    zerobond()
        .args(["--shortest", "--precision", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_invalid_utf8_input() {
    zerobond()
        .write_stdin(&b"100\n\xff\xfe\n2\n"[..])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid interest rate"));
}
