use super::*;
use crate::config::loader::parse;

#[test]
fn empty_file_yields_defaults() {
    // Act
    let config = parse("").unwrap();

    // Assert
    assert_eq!(config.toggle_bind, "");
    assert_eq!(config.toggle_mode, "hold");
    assert_eq!(config.hide_delay(), Duration::ZERO);
    assert!(config.show_on_workspace_change);
    assert_eq!(config.mouse_sample_interval(), Duration::from_millis(16));
    assert_eq!(config.leave_margins(), Margins::default());
}

#[test]
fn region_directives_use_dashed_keys() {
    // Arrange
    let toml = r#"
hypr-waybar-region = ["DP-1,0,0,1920,5", "DP-2,0,0,2560,5,eww"]
hypr-command-region = ["DP-1,0,1075,5,5,notify-send hi"]
"#;

    // Act
    let config = parse(toml).unwrap();

    // Assert
    assert_eq!(config.waybar_regions.len(), 2);
    assert_eq!(config.waybar_regions[1], "DP-2,0,0,2560,5,eww");
    assert_eq!(config.command_regions, vec!["DP-1,0,1075,5,5,notify-send hi"]);
}

#[test]
fn negative_values_are_clamped() {
    // Arrange
    let toml = r#"
hide_delay = -250
mouse_sample_ms = 0

[leave_expand]
left = -5
down = 30
"#;

    // Act
    let config = parse(toml).unwrap();

    // Assert
    assert_eq!(config.hide_delay, 0);
    assert_eq!(config.mouse_sample_ms, 1);
    assert_eq!(config.leave_margins(), Margins::new(0, 0, 0, 30));
}

#[test]
fn oversized_margins_are_capped() {
    // Arrange
    let mut config = Config::default();
    config.leave_expand.right = 1_000_000;

    // Act
    config.validate();

    // Assert
    assert_eq!(config.leave_expand.right, MAX_MARGIN);
}

#[test]
fn hide_delay_converts_to_duration() {
    // Arrange
    let config = parse("hide_delay = 500").unwrap();

    // Act
    let delay = config.hide_delay();

    // Assert
    assert_eq!(delay, Duration::from_millis(500));
}

#[test]
fn logging_section_is_parsed() {
    // Arrange
    let toml = r#"
[logging]
enabled = true
level = "debug"
"#;

    // Act
    let config = parse(toml).unwrap();

    // Assert
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn wrong_type_is_a_parse_error() {
    // Act
    let result = parse("hide_delay = \"soon\"");

    // Assert
    assert!(result.is_err());
}

#[test]
fn missing_file_falls_back_to_default() {
    // Arrange
    let missing = || Err::<u32, _>("config.toml: No such file or directory (os error 2)".to_string());

    // Act
    let (value, _) = super::loader::split_or_default(missing, || 7);

    // Assert
    assert_eq!(value, 7);
}

#[test]
fn parse_errors_are_not_mistaken_for_missing_files() {
    // Act
    let missing = super::loader::is_file_not_found("config.toml: invalid type: string \"soon\"");

    // Assert
    assert!(!missing);
}

#[test]
fn broken_file_falls_back_and_reports_the_error() {
    // Arrange
    let broken = || Err::<u32, _>("config.toml: invalid type: string \"soon\"".to_string());

    // Act
    let (value, warning) = super::loader::split_or_default(broken, || 7);

    // Assert
    assert_eq!(value, 7);
    assert_eq!(warning.as_deref(), Some("config.toml: invalid type: string \"soon\""));
}

#[test]
fn missing_file_is_not_reported() {
    // Arrange
    let missing = || Err::<u32, _>("config.toml: No such file or directory (os error 2)".to_string());

    // Act
    let (_, warning) = super::loader::split_or_default(missing, || 7);

    // Assert
    assert_eq!(warning, None);
}
