//! Error types for sensor acquisition.
//!
//! Read failures stay internal to this crate: callers of
//! [`crate::SnapshotSource::sample`] only ever see an absent signal.

use thiserror::Error;

/// Result type for sensor read operations.
pub type Result<T> = std::result::Result<T, SensorError>;

/// Errors that can occur while reading a single sensor signal.
#[derive(Error, Debug)]
pub enum SensorError {
    /// The host exposes no source for this signal.
    #[error("signal unavailable: {signal}")]
    Unavailable {
        /// Name of the signal that could not be read.
        signal: &'static str,
    },

    /// Reading the underlying OS interface failed.
    #[error("sensor read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The OS interface returned a value that could not be parsed.
    #[error("failed to parse sensor value: {value}")]
    Parse {
        /// The raw value that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unavailable() {
        let err = SensorError::Unavailable {
            signal: "temperature",
        };
        assert_eq!(err.to_string(), "signal unavailable: temperature");
    }

    #[test]
    fn error_display_parse() {
        let err = SensorError::Parse {
            value: "not-a-number".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse sensor value: not-a-number"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SensorError = io.into();
        assert!(err.to_string().contains("missing"));
    }
}
