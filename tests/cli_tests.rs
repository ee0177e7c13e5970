use assert_cmd::Command;
use predicates::prelude::*;

fn hkaudit() -> Command {
    let mut cmd = Command::cargo_bin("hkaudit").unwrap();
    cmd.env_remove("HEROKU_API_KEY");
    cmd
}

#[test]
fn test_help_lists_report_groups() {
    hkaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apps"))
        .stdout(predicate::str::contains("postgres"))
        .stdout(predicate::str::contains("redis"))
        .stdout(predicate::str::contains("env"))
        .stdout(predicate::str::contains("domains"))
        .stdout(predicate::str::contains("users"));
}

#[test]
fn test_version_flag() {
    hkaudit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hkaudit"));
}

#[test]
fn test_subcommand_help() {
    hkaudit()
        .args(["postgres", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("major-version"))
        .stdout(predicate::str::contains("backup-schedule"));
}

#[test]
fn test_invalid_format_rejected() {
    hkaudit()
        .args(["apps", "formation", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unset_only_conflicts_with_set_only() {
    hkaudit()
        .args(["env", "value-of", "KEY", "--unset-only", "--set-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_api_key_fails_with_guidance() {
    let home = tempfile::tempdir().unwrap();
    hkaudit()
        .env("HOME", home.path())
        .args(["apps", "formation"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Heroku API key found"));
}
