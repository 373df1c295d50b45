//! FATAL終了のテスト（デモバイナリを子プロセスとして実行）

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const CLI_SOURCE: &str = include_str!("../src/cli.rs");

/// `pattern` を含む cli.rs の行番号（1始まり）
fn cli_line_of(pattern: &str) -> usize {
    CLI_SOURCE
        .lines()
        .position(|line| line.contains(pattern))
        .map(|index| index + 1)
        .unwrap()
}

fn run_demo(home: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_levelog"))
        .args(args)
        // ユーザーの設定ファイルを読まないようにする
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_fatal_flushes_to_file_and_exits_with_status_1() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("demo.log");

    let output = run_demo(
        &temp_dir,
        &[
            "--file",
            log_path.to_str().unwrap(),
            "--level",
            "error",
            "--no-timestamp",
        ],
    );

    assert_eq!(output.status.code(), Some(1));

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!(
                "[ERROR]at run[cli.rs:{}] [something might have gone wrong]",
                cli_line_of("levelog::error!(")
            ),
            format!(
                "[ERROR]at run[cli.rs:{}] [oops, fatality...]",
                cli_line_of("levelog::fatal!(")
            ),
        ]
    );
}

#[test]
fn test_fatal_is_written_even_at_fatal_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("demo.log");

    let output = run_demo(
        &temp_dir,
        &["--file", log_path.to_str().unwrap(), "--level", "fatal"],
    );

    assert_eq!(output.status.code(), Some(1));

    let content = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[ERROR]"));
    assert!(lines[0].ends_with(" [oops, fatality...]"));
    assert!(lines[0].contains(" at run[cli.rs:"));
}

#[test]
fn test_fatal_to_console_reaches_stdout() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_demo(&temp_dir, &["--level", "info", "--no-timestamp"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[INFO]this app is running great");
    assert!(lines[2].ends_with("[oops, fatality...]"));
}
