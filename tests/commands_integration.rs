//! Integration tests for the `gitbind` binary.
//!
//! Each test runs the compiled binary with HOME and XDG_CONFIG_HOME pointed
//! into a temporary directory, so neither user settings nor the user's global
//! git configuration leak in.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Temporary home plus a repository path inside it.
struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A `gitbind` command isolated in this sandbox.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitbind").expect("binary not built");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.child("xdg").path())
            .env_remove("GITBIND_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// A `gitbind --repo <repo>` command.
    fn repo_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--repo").arg(self.repo());
        cmd
    }

    fn repo(&self) -> std::path::PathBuf {
        self.home.child("repo").path().to_path_buf()
    }

    /// Initialize the sandbox repository.
    fn init(&self) {
        self.cmd().arg("init").arg(self.repo()).assert().success();
    }
}

#[test]
fn init_creates_repository() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("init")
        .arg(sb.repo())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty repository"));

    sb.home.child("repo/.git/HEAD").assert(predicate::path::is_file());
}

#[test]
fn init_bare() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["init", "--bare"])
        .arg(sb.home.child("bare.git").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bare repository"));

    sb.home.child("bare.git/HEAD").assert(predicate::path::is_file());
}

#[test]
fn init_quiet_prints_nothing() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("-q")
        .arg("init")
        .arg(sb.repo())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn set_then_get_string() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .args(["set", "user.name", "Ada Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set user.name = Ada Lovelace"));

    sb.repo_cmd()
        .args(["get", "user.name"])
        .assert()
        .success()
        .stdout("Ada Lovelace\n");
}

#[test]
fn set_then_get_bool_and_int() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .args(["set", "--type", "bool", "gitbind.flag", "yes"])
        .assert()
        .success();
    sb.repo_cmd()
        .args(["get", "--type", "bool", "gitbind.flag"])
        .assert()
        .success()
        .stdout("true\n");

    sb.repo_cmd()
        .args(["set", "--type", "int", "gitbind.count", "--", "-9223372036854775808"])
        .assert()
        .success();
    sb.repo_cmd()
        .args(["get", "--type", "int", "gitbind.count"])
        .assert()
        .success()
        .stdout("-9223372036854775808\n");
}

#[test]
fn get_missing_key_fails_with_message() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .args(["get", "gitbind.missing"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: Failed to read gitbind.missing: "));
}

#[test]
fn native_failure_is_not_logged_at_default_level() {
    let sb = Sandbox::new();
    sb.init();

    let output = sb.repo_cmd().args(["get", "gitbind.missing"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "unexpected stderr: {}", stderr);
}

#[test]
fn debug_flag_enables_diagnostics() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .args(["--debug", "get", "gitbind.absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("get gitbind.absent as string"))
        .stderr(predicate::str::contains("git_config_get_string_buf"));
}

#[test]
fn rust_log_silences_debug_flag() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .env("RUST_LOG", "off")
        .args(["--debug", "get", "gitbind.absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("get gitbind.absent as string").not())
        .stderr(predicate::str::starts_with("error: Failed to read gitbind.absent: "));
}

#[test]
fn invalid_int_is_rejected_before_writing() {
    let sb = Sandbox::new();
    sb.init();

    sb.repo_cmd()
        .args(["set", "--type", "int", "gitbind.count", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer 'twelve'"));

    let on_disk = std::fs::read_to_string(sb.home.child("repo/.git/config").path()).unwrap();
    assert!(!on_disk.contains("gitbind"));
}

#[test]
fn info_on_missing_repository_fails() {
    let sb = Sandbox::new();
    sb.repo_cmd()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open repository"));
}

#[test]
fn info_json() {
    let sb = Sandbox::new();
    sb.init();

    let output = sb.repo_cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["bare"], serde_json::Value::Bool(false));
    assert!(info["path"].as_str().unwrap().contains(".git"));
    assert!(info["workdir"].is_string());
}

#[test]
fn settings_file_supplies_repo_and_type() {
    let sb = Sandbox::new();
    sb.init();
    sb.home
        .child(".gitbind/config.toml")
        .write_str(&format!(
            "repo = {:?}\nvalue_type = \"int\"\n",
            sb.repo().display().to_string()
        ))
        .unwrap();

    sb.cmd()
        .args(["set", "gitbind.level", "7"])
        .assert()
        .success();
    sb.cmd()
        .args(["get", "gitbind.level"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn broken_settings_file_is_reported() {
    let sb = Sandbox::new();
    sb.home
        .child(".gitbind/config.toml")
        .write_str("no_such_setting = 1\n")
        .unwrap();

    sb.cmd()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn completion_generates_script() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitbind"));
}
