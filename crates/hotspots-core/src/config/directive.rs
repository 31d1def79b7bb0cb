//! Parsers for the two region directives.
//!
//! ```text
//! hypr-waybar-region  = monitor,x,y,width,height[,process_name]
//! hypr-command-region = monitor,x,y,width,height,enter_command[,leave_command]
//! ```
//!
//! Command text may itself contain commas, so only the first five
//! delimiters split fields. In the remainder, the first comma separates
//! the enter command from the leave command.

use crate::error::ConfigError;
use crate::rect::Rect;
use crate::region::DEFAULT_PROCESS_NAME;

pub const WAYBAR_REGION: &str = "hypr-waybar-region";
pub const COMMAND_REGION: &str = "hypr-command-region";

/// A parsed `hypr-waybar-region` value, monitor not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverDirective {
    pub monitor: String,
    pub rect: Rect,
    pub process_name: String,
}

/// A parsed `hypr-command-region` value, monitor not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDirective {
    pub monitor: String,
    pub rect: Rect,
    pub enter_command: String,
    pub leave_command: Option<String>,
}

pub fn parse_hover(value: &str) -> Result<HoverDirective, ConfigError> {
    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    if fields.len() < 5 {
        return Err(ConfigError::FieldCount {
            directive: WAYBAR_REGION,
            expected: 5,
            found: fields.len(),
        });
    }
    if fields.len() > 6 {
        return Err(ConfigError::TooManyFields {
            directive: WAYBAR_REGION,
            max: 6,
            found: fields.len(),
        });
    }

    let rect = parse_rect(WAYBAR_REGION, &fields[1..5])?;
    let process_name = fields
        .get(5)
        .filter(|name| !name.is_empty())
        .map_or(DEFAULT_PROCESS_NAME, |name| *name);

    Ok(HoverDirective {
        monitor: fields[0].to_owned(),
        rect,
        process_name: process_name.to_owned(),
    })
}

pub fn parse_command(value: &str) -> Result<CommandDirective, ConfigError> {
    let fields: Vec<&str> = value.splitn(6, ',').collect();
    if fields.len() < 6 {
        return Err(ConfigError::FieldCount {
            directive: COMMAND_REGION,
            expected: 6,
            found: fields.len(),
        });
    }

    let geometry: Vec<&str> = fields[1..5].iter().map(|f| f.trim()).collect();
    let rect = parse_rect(COMMAND_REGION, &geometry)?;

    let (enter, leave) = match fields[5].split_once(',') {
        Some((enter, leave)) => (enter.trim(), Some(leave.trim())),
        None => (fields[5].trim(), None),
    };
    if enter.is_empty() {
        return Err(ConfigError::EmptyCommand {
            directive: COMMAND_REGION,
        });
    }

    Ok(CommandDirective {
        monitor: fields[0].trim().to_owned(),
        rect,
        enter_command: enter.to_owned(),
        leave_command: leave.filter(|l| !l.is_empty()).map(str::to_owned),
    })
}

fn parse_rect(directive: &'static str, fields: &[&str]) -> Result<Rect, ConfigError> {
    const NAMES: [&str; 4] = ["x", "y", "width", "height"];
    let mut values = [0i32; 4];
    for (i, (field, name)) in fields.iter().zip(NAMES).enumerate() {
        values[i] = field.parse().map_err(|_| ConfigError::InvalidInteger {
            directive,
            field: name,
            value: (*field).to_owned(),
        })?;
    }
    Ok(Rect::new(values[0], values[1], values[2], values[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_directive_defaults_process_name() {
        // Act
        let d = parse_hover("DP-1, 0, 0, 1920, 8").unwrap();

        // Assert
        assert_eq!(d.monitor, "DP-1");
        assert_eq!(d.rect, Rect::new(0, 0, 1920, 8));
        assert_eq!(d.process_name, "waybar");
    }

    #[test]
    fn hover_directive_with_process_name() {
        // Act
        let d = parse_hover("eDP-1,0,1070,1920,10,eww").unwrap();

        // Assert
        assert_eq!(d.process_name, "eww");
        assert_eq!(d.rect.y, 1070);
    }

    #[test]
    fn hover_directive_with_too_few_fields() {
        // Act
        let err = parse_hover("DP-1,0,0,100").unwrap_err();

        // Assert
        assert_eq!(
            err,
            ConfigError::FieldCount {
                directive: WAYBAR_REGION,
                expected: 5,
                found: 4,
            }
        );
    }

    #[test]
    fn hover_directive_with_too_many_fields() {
        // Act
        let err = parse_hover("DP-1,0,0,100,10,waybar,extra").unwrap_err();

        // Assert
        assert_eq!(
            err,
            ConfigError::TooManyFields {
                directive: WAYBAR_REGION,
                max: 6,
                found: 7,
            }
        );
        assert!(err.to_string().contains("Expected at most 6 but got 7"));
    }

    #[test]
    fn hover_directive_with_non_integer_geometry() {
        // Act
        let err = parse_hover("DP-1,0,zero,100,10").unwrap_err();

        // Assert
        assert!(matches!(
            err,
            ConfigError::InvalidInteger { field: "y", ref value, .. } if value == "zero"
        ));
    }

    #[test]
    fn command_directive_enter_only() {
        // Act
        let d = parse_command("DP-1,0,0,10,10, notify-send hello ").unwrap();

        // Assert
        assert_eq!(d.enter_command, "notify-send hello");
        assert_eq!(d.leave_command, None);
    }

    #[test]
    fn command_directive_enter_and_leave() {
        // Act
        let d = parse_command("DP-1,0,0,10,10,pactl set-sink-mute 0 1 , pactl set-sink-mute 0 0")
            .unwrap();

        // Assert
        assert_eq!(d.enter_command, "pactl set-sink-mute 0 1");
        assert_eq!(d.leave_command.as_deref(), Some("pactl set-sink-mute 0 0"));
    }

    #[test]
    fn command_directive_keeps_commas_in_leave_command() {
        // Act
        let d = parse_command("DP-1,0,0,10,10,echo in,echo a,b,c").unwrap();

        // Assert
        assert_eq!(d.enter_command, "echo in");
        assert_eq!(d.leave_command.as_deref(), Some("echo a,b,c"));
    }

    #[test]
    fn command_directive_requires_six_fields() {
        // Act
        let err = parse_command("DP-1,0,0,10,10").unwrap_err();

        // Assert
        assert!(matches!(err, ConfigError::FieldCount { expected: 6, found: 5, .. }));
    }

    #[test]
    fn command_directive_rejects_empty_enter() {
        // Act
        let err = parse_command("DP-1,0,0,10,10,  ,echo out").unwrap_err();

        // Assert
        assert_eq!(
            err,
            ConfigError::EmptyCommand {
                directive: COMMAND_REGION
            }
        );
    }
}
