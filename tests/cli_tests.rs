//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("piiscan"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scan databases"))
        .stdout(predicate::str::contains("db"))
        .stdout(predicate::str::contains("sqlite"))
        .stdout(predicate::str::contains("files"))
        .stdout(predicate::str::contains("aws"));
}

#[test]
fn test_db_scan_with_config_exits_clean() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(
        &config,
        r#"[db]
host="localhost"
port="6032"
database="db"
user="user"
password="password"
scan_type="deep"
list_all=True
output_format="json"
schema=["schema1","schema2"]
exclude_schema=["schema1","schema2"]
table=["table1","table2"]
exclude_table=["table1","table2"]
"#,
    )
    .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "db"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_sqlite_scan_with_config_exits_clean() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[sqlite]\npath=\"sqlite.db\"\nscan_type=\"deep\"\noutput_format=\"json\"\n")
        .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "sqlite"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_files_scan_with_config_exits_clean() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[files]\npath=\"file path\"\noutput_format=\"json\"\n")
        .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "files"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_aws_scan_with_config_exits_clean() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(
        &config,
        r#"catalog_host='host'
catalog_port='port'
catalog_user='user'
catalog_password='password'
catalog_format='db'

[aws]
access_key='AAAA'
secret_key='bbbb'
staging_dir='s3://dir'
region='us-east'
scan_type="deep"
list_all=True
output_format="json"
"#,
    )
    .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "aws"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_db_without_config_uses_defaults() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("db");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_files_from_cli_flags_alone() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["files", "--path", "exports/"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_config_file_fails() {
    let tmp = TempDir::new().expect("temp dir");
    let absent = tmp.path().join("absent.ini");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", absent.to_str().expect("utf8 path"), "db"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_malformed_config_reports_line_number() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[db]\nhost=\"h\"\nthis line is junk\n").expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "db"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at line 3"));
}

#[test]
fn test_bad_file_value_names_key() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[db]\nport=\"banana\"\n").expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.args(["--config", config.to_str().expect("utf8 path"), "db"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("for key `port`"));
}

#[test]
fn test_sqlite_requires_path() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("sqlite");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required option `path` for `sqlite`"));
}

#[test]
fn test_files_requires_path() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("files");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required option `path` for `files`"));
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.arg("frobnicate");
    cmd.assert().failure().stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_verbose_logs_dispatch_to_stderr_only() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.env_remove("RUST_LOG");
    cmd.args(["--verbose", "files", "--path", "exports/"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("dispatching filesystem scan"));
}

#[test]
fn test_cli_path_beats_config_path() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[files]\npath=\"from-file\"\n").expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.env_remove("RUST_LOG");
    cmd.args([
        "--verbose",
        "--config",
        config.to_str().expect("utf8 path"),
        "files",
        "--path",
        "from-cli",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("from-cli"));
}

#[test]
fn test_resolution_failure_happens_before_dispatch() {
    let tmp = TempDir::new().expect("temp dir");
    let config = tmp.path().join("piiscan.ini");
    fs::write(&config, "[db]\nlist_all=\"banana\"\n").expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("piiscan"));
    cmd.env_remove("RUST_LOG");
    cmd.args(["--verbose", "--config", config.to_str().expect("utf8 path"), "db"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("for key `list_all`"))
        .stderr(predicate::str::contains("dispatching").not());
}
