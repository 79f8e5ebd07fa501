//! Event summary command implementation.
//!
//! Answers "why was my system slow?" by counting recorded events over a
//! recent window.

use std::io::Write;

use chrono::{DateTime, Utc};
use heat_events::EventStore;

use crate::cli::AnalyzeArgs;
use crate::error::CliError;
use crate::output::{AnalyzeSummary, OutputFormat};

/// Analyze command executor.
#[derive(Debug, Default)]
pub struct AnalyzeCommand;

impl AnalyzeCommand {
    /// Create a new analyze command.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the analyze command against the wall clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be parsed, the store cannot be
    /// read, or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
        args: &AnalyzeArgs,
    ) -> Result<(), CliError> {
        self.execute_at(writer, format, store, args, Utc::now())
    }

    /// Execute the analyze command at an explicit reference time.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AnalyzeCommand::execute`].
    pub fn execute_at<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
        args: &AnalyzeArgs,
        now: DateTime<Utc>,
    ) -> Result<(), CliError> {
        let window = parse_window(&args.last)?;
        let events = store.read_since(now - window)?;
        let throttle_count = events.iter().filter(|e| e.is_throttling()).count();

        let summary = AnalyzeSummary {
            window: args.last.clone(),
            event_count: events.len(),
            throttle_count,
        };
        format.write(writer, &summary)
    }
}

/// Parses a human-readable duration like "2h" or "30m".
fn parse_window(input: &str) -> Result<chrono::Duration, CliError> {
    let duration = humantime::parse_duration(input)
        .map_err(|e| CliError::InvalidDuration(format!("{input}: {e}")))?;
    chrono::Duration::from_std(duration)
        .map_err(|_| CliError::InvalidDuration(format!("{input}: window out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use heat_analyzer::ThermalState;
    use heat_events::ThermalEvent;

    fn seeded_store(dir: &std::path::Path, now: DateTime<Utc>) -> EventStore {
        let store = EventStore::open(dir).unwrap();
        let entries = [
            (ThermalState::Throttling, Duration::hours(5)),
            (ThermalState::Throttling, Duration::minutes(90)),
            (ThermalState::Recovery, Duration::minutes(80)),
            (ThermalState::Normal, Duration::minutes(30)),
        ];
        for (state, age) in entries {
            store
                .append(&ThermalEvent::state_change(state, "seeded", now - age))
                .unwrap();
        }
        store
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn parses_common_windows() {
            assert_eq!(parse_window("2h").unwrap(), Duration::hours(2));
            assert_eq!(parse_window("30m").unwrap(), Duration::minutes(30));
            assert_eq!(parse_window("90s").unwrap(), Duration::seconds(90));
        }

        #[test]
        fn rejects_garbage() {
            assert!(matches!(
                parse_window("soon"),
                Err(CliError::InvalidDuration(_))
            ));
        }
    }

    #[test]
    fn counts_only_events_inside_the_window() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc::now();
        let store = seeded_store(dir.path(), now);

        let args = AnalyzeArgs { last: "2h".into() };
        let mut out = Vec::new();
        AnalyzeCommand::new()
            .execute_at(&mut out, &OutputFormat::default(), &store, &args, now)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Recorded:    3"));
        assert!(text.contains("Throttling:  1"));
    }

    #[test]
    fn empty_window_reports_no_events() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::open(dir.path()).unwrap();

        let args = AnalyzeArgs { last: "10m".into() };
        let mut out = Vec::new();
        AnalyzeCommand::new()
            .execute_at(&mut out, &OutputFormat::default(), &store, &args, Utc::now())
            .unwrap();

        assert!(
            String::from_utf8(out)
                .unwrap()
                .contains("no events recorded in this period")
        );
    }
}
