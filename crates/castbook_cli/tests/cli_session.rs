#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn castbook_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("castbook"));
    cmd.env("CASTBOOK_DB_PATH", temp.path().join("casts.db"))
        .env("CASTBOOK_LOG_DIR", temp.path().join("logs"))
        .env("CASTBOOK_LOG_LEVEL", "debug");
    cmd
}

#[test]
fn records_persist_across_sessions() {
    let temp = TempDir::new().unwrap();

    castbook_cmd(&temp)
        .write_stdin("store ShopB\nname Bob\nnote likes cats\nadd\nstore ShopA\nname Alice\nage 23\nadd\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ShopA | Alice (23)"));

    castbook_cmd(&temp)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1   ShopA | Alice (23)")
                .and(predicate::str::contains("4   ShopB | Bob"))
                .and(predicate::str::contains("memo: likes cats")),
        );
}

#[test]
fn delete_needs_confirmation() {
    let temp = TempDir::new().unwrap();

    castbook_cmd(&temp)
        .write_stdin("store ShopA\nname Alice\nadd\nselect 1\ndelete\nno\ndelete\ny\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("選択したレコードを削除しますか？"));

    castbook_cmd(&temp)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ShopA | Alice").not());
}

#[test]
fn session_writes_log_file() {
    let temp = TempDir::new().unwrap();

    castbook_cmd(&temp).write_stdin("quit\n").assert().success();

    let logs: Vec<_> = std::fs::read_dir(temp.path().join("logs"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("castbook"))
        .collect();
    assert!(!logs.is_empty(), "expected a castbook log file");
}

#[test]
fn unopenable_database_fails_startup() {
    let temp = TempDir::new().unwrap();

    Command::new(cargo_bin("castbook"))
        .env("CASTBOOK_DB_PATH", temp.path().join("missing").join("casts.db"))
        .env("CASTBOOK_LOG_DIR", temp.path().join("logs"))
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open cast store"));
}
