#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};

#[test]
fn test_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("options"))
        .stdout(predicate::str::contains("token"));
}

#[test]
fn test_list_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--domain"));
}

#[test]
fn test_list_missing_domain() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--domain"));
}

#[test]
fn test_list_requires_server_url() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.env_remove("MXROUTE_SERVER_URL")
        .args(["list", "--domain", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MXROUTE_SERVER_URL"));
}

#[test]
fn test_delete_refuses_without_yes() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.args(["delete", "--email", "alias@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_options_show_defaults_to_empty_string() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "options", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn test_options_set_then_show_roundtrip() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let mut set_cmd = cargo_bin_cmd!("mxfwd");
    set_cmd
        .args([
            "--dir",
            dir_arg,
            "options",
            "set",
            "--domain",
            "example.com",
            "--destination",
            "me@x.com",
        ])
        .assert()
        .success();

    // Act & Assert - the stored record survives a separate invocation
    let mut show_cmd = cargo_bin_cmd!("mxfwd");
    show_cmd
        .args(["--dir", dir_arg, "options", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "domain=example.com,destination=me@x.com",
        ));
}

#[test]
fn test_options_set_suppresses_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let mut set_cmd = cargo_bin_cmd!("mxfwd");
    set_cmd
        .args([
            "--dir",
            dir_arg,
            "options",
            "set",
            "--slug-length",
            "3",
            "--hex-length",
            "6",
        ])
        .assert()
        .success();

    // Act & Assert - hex_length still holds its default and is suppressed
    let mut show_cmd = cargo_bin_cmd!("mxfwd");
    show_cmd
        .args(["--dir", dir_arg, "options", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slug_length=3"))
        .stdout(predicate::str::contains("hex_length").not());
}

#[test]
fn test_options_set_merges_with_stored_record() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let mut first = cargo_bin_cmd!("mxfwd");
    first
        .args(["--dir", dir_arg, "options", "set", "--domain", "example.com"])
        .assert()
        .success();

    let mut second = cargo_bin_cmd!("mxfwd");
    second
        .args(["--dir", dir_arg, "options", "set", "--suffix", "tail"])
        .assert()
        .success();

    // Act & Assert - the second set did not clobber the first field
    let mut show_cmd = cargo_bin_cmd!("mxfwd");
    show_cmd
        .args(["--dir", dir_arg, "options", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domain=example.com,suffix=tail"));
}

#[test]
fn test_token_set_then_show_is_masked() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();

    let mut set_cmd = cargo_bin_cmd!("mxfwd");
    set_cmd
        .args([
            "--dir",
            dir_arg,
            "token",
            "set",
            "--token",
            "secret-value-1234",
        ])
        .assert()
        .success();

    // Act & Assert - the secret is never echoed in full
    let mut show_cmd = cargo_bin_cmd!("mxfwd");
    show_cmd
        .args(["--dir", dir_arg, "token", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secr****"))
        .stdout(predicate::str::contains("secret-value-1234").not());
}

#[test]
fn test_token_show_without_token_hints_set() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.args(["--dir", dir.path().to_str().unwrap(), "token", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token set"));
}

#[test]
fn test_corrupt_options_store_recovers_to_defaults() {
    // Arrange - seed the store with garbage
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    std::fs::write(
        dir.path().join("mxroute_options_config.toml"),
        "domain = [not toml",
    )
    .unwrap();

    // Act & Assert - corrupt storage yields the default (empty) string
    let mut cmd = cargo_bin_cmd!("mxfwd");
    cmd.args(["--dir", dir_arg, "options", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}
