use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated in its own config directory, pointed at a port nothing listens on
fn spendwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendwise").unwrap();
    cmd.env("SPENDWISE_DATA_DIR", dir.path())
        .env("SPENDWISE_API_URL", "http://127.0.0.1:9")
        .env_remove("SPENDWISE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("expense"))
        .stdout(predicate::str::contains("budget"));
}

#[test]
fn config_shows_paths_and_overrides() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9"))
        .stdout(predicate::str::contains("session.json"))
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn config_writes_default_settings_once() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default settings"));
    assert!(dir.path().join("config.json").exists());

    spendwise(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default settings").not());
}

#[test]
fn login_validates_before_connecting() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .args(["login", "-u", "bob", "-p", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password must be at least 6 characters",
        ));
}

#[test]
fn login_reports_unreachable_server() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .args(["login", "-u", "bob", "-p", "secret123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to connect to the server. Please check your internet connection and try again.",
        ));
    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn expense_commands_need_a_session() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    spendwise(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn logout_without_session() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    spendwise(&dir)
        .args(["expense", "export", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}
