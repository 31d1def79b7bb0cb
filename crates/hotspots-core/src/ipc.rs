use serde::{Deserialize, Serialize};

/// File name of the daemon's Unix socket inside the runtime directory.
pub const SOCKET_NAME: &str = "hypr-hotspots.sock";

/// A command sent from the CLI to the daemon.
///
/// These are serialized as one JSON object per line over the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop.
    Stop,
    /// Request the daemon's current status.
    Status,
    /// Re-read the config file now instead of waiting for the watcher.
    Reload,
    /// Forward a key event from a compositor keybind.
    Key { name: String, pressed: bool },
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_command_wire_format() {
        // Arrange
        let cmd = Command::Key {
            name: "Super_L".into(),
            pressed: true,
        };

        // Act
        let json = serde_json::to_string(&cmd).unwrap();

        // Assert
        assert_eq!(json, r#"{"command":"Key","name":"Super_L","pressed":true}"#);
    }

    #[test]
    fn unit_commands_are_tagged_objects() {
        // Act
        let cmd: Command = serde_json::from_str(r#"{"command":"Reload"}"#).unwrap();

        // Assert
        assert_eq!(cmd, Command::Reload);
    }

    #[test]
    fn ok_response_omits_message() {
        // Act
        let json = serde_json::to_string(&Response::ok()).unwrap();

        // Assert
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn error_response_is_not_ok() {
        // Act
        let resp: Response =
            serde_json::from_str(r#"{"status":"error","message":"unknown key"}"#).unwrap();

        // Assert
        assert!(!resp.is_ok());
        assert_eq!(resp.message.as_deref(), Some("unknown key"));
    }
}
