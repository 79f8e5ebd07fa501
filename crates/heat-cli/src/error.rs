//! CLI error types.

use std::fmt;

/// CLI-specific errors.
#[derive(Debug)]
pub enum CliError {
    /// The event store could not be read or written.
    Storage(heat_events::EventError),
    /// A duration argument could not be parsed.
    InvalidDuration(String),
    /// Output formatting error.
    Format(String),
    /// No sensor signal could be obtained at all.
    NoSensors,
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "storage error: {e}"),
            Self::InvalidDuration(msg) => write!(f, "invalid duration: {msg}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::NoSensors => write!(
                f,
                "no sensors could be read; try elevated privileges or check platform support"
            ),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<heat_events::EventError> for CliError {
    fn from(err: heat_events::EventError) -> Self {
        Self::Storage(err)
    }
}
