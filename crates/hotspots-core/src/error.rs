use std::fmt;

/// A boxed error type for platform and IO operations.
///
/// Any error type that implements the `Error` trait can be boxed into this.
pub type HotspotsResult<T> = Result<T, Box<dyn std::error::Error>>;

/// A region directive that could not be registered.
///
/// The offending region is skipped; the rest of the config still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Too few comma-separated fields.
    FieldCount {
        directive: &'static str,
        expected: usize,
        found: usize,
    },
    /// More comma-separated fields than the directive accepts.
    TooManyFields {
        directive: &'static str,
        max: usize,
        found: usize,
    },
    /// A geometry field is not an integer.
    InvalidInteger {
        directive: &'static str,
        field: &'static str,
        value: String,
    },
    /// The monitor name does not match any connected monitor.
    UnknownMonitor {
        directive: &'static str,
        name: String,
    },
    /// A command region without an enter command.
    EmptyCommand { directive: &'static str },
    /// The configured toggle key is not a known key name.
    UnknownKey { name: String },
    /// `toggle_mode` is neither `hold` nor `press`.
    InvalidToggleMode { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount {
                directive,
                expected,
                found,
            } => write!(
                f,
                "Invalid number of parameters passed to {directive}. Expected at least {expected} but got {found}"
            ),
            Self::TooManyFields {
                directive,
                max,
                found,
            } => write!(
                f,
                "Invalid number of parameters passed to {directive}. Expected at most {max} but got {found}"
            ),
            Self::InvalidInteger {
                directive,
                field,
                value,
            } => write!(
                f,
                "Failed to parse `{directive}` {field} '{value}' as an integer"
            ),
            Self::UnknownMonitor { directive, name } => {
                write!(f, "{directive}: no monitor with name {name} was found")
            }
            Self::EmptyCommand { directive } => {
                write!(f, "{directive}: enter command must not be empty")
            }
            Self::UnknownKey { name } => {
                write!(f, "Invalid key name `{name}` for toggle_bind")
            }
            Self::InvalidToggleMode { value } => {
                write!(f, "Invalid value '{value}' for toggle_mode")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
