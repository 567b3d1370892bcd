//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vibe(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vibe"));
    cmd.current_dir(cwd)
        .env_remove("VIBE_OUTPUT_DIR")
        .env_remove("VIBE_CHUNK_MULTIPLIER")
        .env_remove("VIBE_USE_GIT")
        .env_remove("VIBE_INCLUDE_FILE_LIST")
        .env_remove("VIBE_QUIET");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vibe"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("vibe"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vibe"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pack project files"))
        .stdout(predicate::str::contains("--stdout"))
        .stdout(predicate::str::contains("--dry"));
}

#[test]
fn test_sep_rejects_zero() {
    let tmp = TempDir::new().expect("temp dir");
    vibe(tmp.path()).args(["-s", "0"]).assert().failure();
    assert!(!tmp.path().join(".vibe").exists());
}

#[test]
fn test_clear_without_output_dir() {
    let tmp = TempDir::new().expect("temp dir");
    vibe(tmp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains(".vibe does not exist"));
}

#[test]
fn test_clear_removes_output_dir() {
    let tmp = TempDir::new().expect("temp dir");
    let out = tmp.path().join(".vibe");
    fs::create_dir_all(&out).expect("mkdir");
    fs::write(out.join("001.txt"), "old").expect("write");

    vibe(tmp.path()).arg("clear").assert().success().stdout(predicate::str::contains("Removed "));
    assert!(!out.exists());
}

#[test]
fn test_missing_target_warns_and_succeeds() {
    let tmp = TempDir::new().expect("temp dir");
    fs::write(tmp.path().join("a.py"), "print(1)\n").expect("write");

    vibe(tmp.path())
        .args(["nope", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("Files scanned: 1"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp = TempDir::new().expect("temp dir");
    fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
    fs::write(tmp.path().join("src/app.py"), "x = 1\n").expect("write");

    vibe(tmp.path())
        .args(["--dry", "-d", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 1\n- src/app.py\n"))
        .stdout(predicate::str::contains("Tree (filtered):\n\nsrc\n└── app.py"));
    assert!(!tmp.path().join(".vibe").exists());
}

#[test]
fn test_completions_are_printed() {
    let tmp = TempDir::new().expect("temp dir");
    vibe(tmp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vibe"));
    assert!(!tmp.path().join(".vibe").exists());
}

#[test]
fn test_explicit_missing_config_fails() {
    let tmp = TempDir::new().expect("temp dir");
    vibe(tmp.path())
        .args(["-c", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_clear_ignores_broken_config() {
    let tmp = TempDir::new().expect("temp dir");
    fs::write(tmp.path().join("vibe.toml"), "chunk_multiplier = \"abc\"\n").expect("write");
    let out = tmp.path().join(".vibe");
    fs::create_dir_all(&out).expect("mkdir");

    vibe(tmp.path())
        .arg("clear")
        .env("VIBE_CHUNK_MULTIPLIER", "x")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed "));
    assert!(!out.exists());
}

#[test]
fn test_file_target_is_reported_as_not_a_directory() {
    let tmp = TempDir::new().expect("temp dir");
    fs::write(tmp.path().join("a.py"), "x = 1\n").expect("write");

    vibe(tmp.path())
        .args(["--dry", "a.py"])
        .assert()
        .success()
        .stderr(predicate::str::contains("is not a directory"))
        .stdout(predicate::str::contains("Files: 0"));
}

#[test]
fn test_target_inside_ignored_directory_yields_nothing() {
    let tmp = TempDir::new().expect("temp dir");
    fs::create_dir_all(tmp.path().join("app/migrations")).expect("mkdir");
    fs::write(tmp.path().join("app/migrations/0001.py"), "ops = []\n").expect("write");

    vibe(tmp.path())
        .args(["--dry", "app/migrations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 0"));
}

#[test]
fn test_tree_label_is_normalized() {
    let tmp = TempDir::new().expect("temp dir");
    fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
    fs::write(tmp.path().join("src/app.py"), "x = 1\n").expect("write");

    vibe(tmp.path())
        .args(["--dry", "-d", "./src/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree (filtered):\n\nsrc\n└── app.py"));
}

#[test]
fn test_git_mode_packs_only_tracked_files() {
    let tmp = TempDir::new().expect("temp dir");
    let git = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .current_dir(tmp.path())
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    };
    if !git(&["--version"]) {
        return;
    }
    fs::create_dir_all(tmp.path().join("sub")).expect("mkdir");
    fs::write(tmp.path().join("sub/a.py"), "a = 1\n").expect("write");
    fs::write(tmp.path().join("sub/b.py"), "b = 2\n").expect("write");
    assert!(git(&["init", "-q"]), "git init");
    assert!(git(&["add", "sub/a.py"]), "git add");

    vibe(tmp.path())
        .args(["--dry", "--git", "sub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 1\n- sub/a.py\n"));
}
