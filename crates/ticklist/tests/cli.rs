use std::process::Command;

#[test]
fn help_flag_prints_usage_and_exits_cleanly() {
    let binary_path = env!("CARGO_BIN_EXE_ticklist");

    let output = Command::new(binary_path)
        .arg("--help")
        .output()
        .expect("Failed to start ticklist binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--data-dir"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn version_flag_reports_package_version() {
    let binary_path = env!("CARGO_BIN_EXE_ticklist");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to start ticklist binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    let binary_path = env!("CARGO_BIN_EXE_ticklist");

    let output = Command::new(binary_path)
        .arg("--no-such-flag")
        .output()
        .expect("Failed to start ticklist binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-such-flag"));
}
