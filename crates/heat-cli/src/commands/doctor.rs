//! Advisory report command implementation.

use std::io::Write;

use chrono::{DateTime, Utc};
use heat_doctor::DoctorReport;
use heat_events::EventStore;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Doctor command executor.
#[derive(Debug, Default)]
pub struct DoctorCommand;

impl DoctorCommand {
    /// Create a new doctor command.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the doctor command against the wall clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
    ) -> Result<(), CliError> {
        self.execute_at(writer, format, store, Utc::now())
    }

    /// Execute the doctor command at an explicit reference time.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DoctorCommand::execute`].
    pub fn execute_at<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        store: &EventStore,
        now: DateTime<Utc>,
    ) -> Result<(), CliError> {
        let events = store.read_all()?;
        let report = DoctorReport::from_events(&events, now);
        format.write(writer, &report)
    }
}
