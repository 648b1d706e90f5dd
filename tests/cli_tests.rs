//! CLI tests for the `wunder2org` binary.
//!
//! Spawns the binary and verifies exit codes and stdout for the usage error,
//! unreadable input, and successful conversion paths.
mod common;

use common::{write_export, write_raw};
use serde_json::json;
use std::process::Command;

fn wunder2org() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wunder2org"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_exits_with_usage_code() {
    let output = wunder2org().output().expect("run wunder2org");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn missing_file_exits_with_error_and_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("export.json");

    let output = wunder2org().arg(&missing).output().expect("run wunder2org");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("export.json"));
}

#[test]
fn invalid_export_exits_with_error_and_no_output() {
    let file = write_raw("not json at all");

    let output = wunder2org().arg(file.path()).output().expect("run wunder2org");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn valid_export_prints_outline_and_succeeds() {
    let file = write_export(&json!([{
        "title": "Errands",
        "folder": {"title": "Home"},
        "tasks": [
            {"title": "Buy milk", "starred": true, "tags": ["urgent"]},
            {"completed": true},
            {"title": "Pay bills", "completed": true, "dueDate": "2024-01-05"}
        ]
    }]));

    let output = wunder2org().arg(file.path()).output().expect("run wunder2org");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf-8 stdout"),
        "\
* NEXT Buy milk                         :Home:urgent:
* DONE Pay bills                        :Home:
  SCHEDULED: <2024-01-05>
"
    );
}
