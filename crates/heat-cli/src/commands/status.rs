//! One-shot status command implementation.
//!
//! Samples the sensors once, runs a single classification cycle on a fresh
//! default-initialized state machine, and prints the result. No event is
//! recorded; the machine is discarded afterwards.

use std::io::Write;

use heat_analyzer::{StateMachine, Thresholds};
use heat_sensors::SnapshotSource;

use crate::error::CliError;
use crate::output::{OutputFormat, StatusView};

/// Status command executor.
#[derive(Debug, Default)]
pub struct StatusCommand;

impl StatusCommand {
    /// Create a new status command.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the status command against the given snapshot source.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoSensors`] when not a single signal could be
    /// read (the result is still printed first), or an error if output
    /// fails.
    pub async fn execute<W, S>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        source: &mut S,
    ) -> Result<(), CliError>
    where
        W: Write,
        S: SnapshotSource,
    {
        let snapshot = source.sample().await;
        let mut machine = StateMachine::new(Thresholds::default());
        let result = machine.observe(&snapshot);

        format.write(writer, &StatusView::from(&result))?;

        if snapshot.signal_count() == 0 {
            return Err(CliError::NoSensors);
        }
        Ok(())
    }
}
