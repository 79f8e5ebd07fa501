//! Raw event log command implementation.

use std::io::Write;

use chrono::{DateTime, Utc};
use heat_events::EventStore;

use crate::cli::LogArgs;
use crate::error::CliError;
use crate::output::{EventList, EventView, OutputFormat};

/// Log command executor.
#[derive(Debug, Default)]
pub struct LogCommand;

impl LogCommand {
    /// Create a new log command.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the log command against the wall clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
        args: &LogArgs,
    ) -> Result<(), CliError> {
        self.execute_at(writer, format, store, args, Utc::now())
    }

    /// Execute the log command at an explicit reference time (the "today"
    /// filter compares calendar dates against it).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`LogCommand::execute`].
    pub fn execute_at<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
        args: &LogArgs,
        now: DateTime<Utc>,
    ) -> Result<(), CliError> {
        let events = store.read_all()?;
        let events: Vec<EventView> = events
            .iter()
            .filter(|e| !args.today || e.timestamp.date_naive() == now.date_naive())
            .map(EventView::from)
            .collect();

        format.write(writer, &EventList { events })
    }
}
