//! Exit status and stderr of the compiled binary for runs that never reach the network.

use std::process::Command;

fn play_rank() -> Command {
    Command::new(env!("CARGO_BIN_EXE_play_rank"))
}

#[test]
fn test_malformed_limit_is_usage_error() {
    let output = play_rank()
        .args(["--limit", "abc"])
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "no ranking output before a request");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid limit 'abc'"), "{stderr}");
}

#[test]
fn test_negative_limit_is_usage_error() {
    let output = play_rank()
        .args(["--limit=-1"])
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_documents_limit_values() {
    let output = play_rank().arg("--help").output().expect("binary should start");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--limit"));
    let flat = stdout.split_whitespace().collect::<Vec<_>>().join(" ");
    assert!(flat.contains("Negative values are rejected"), "{stdout}");
}
