use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hypr-hotspots"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute hypr-hotspots");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hover hotspots for Hyprland"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hypr-hotspots"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute hypr-hotspots");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hypr-hotspots"));
}

#[test]
fn daemon_subcommand_is_hidden_from_help() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hypr-hotspots"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute hypr-hotspots");

    // Assert
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("doctor"));
    assert!(!stdout.lines().any(|l| l.trim_start().starts_with("daemon")));
}

#[test]
fn key_press_requires_a_key_name() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hypr-hotspots"));
    cmd.args(["key", "press"]);

    // Act
    let output = cmd.output().expect("failed to execute hypr-hotspots");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<NAME>"));
}

#[test]
fn unknown_subcommand_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hypr-hotspots"));
    cmd.arg("toggle");

    // Act
    let output = cmd.output().expect("failed to execute hypr-hotspots");

    // Assert
    assert!(!output.status.success());
}
