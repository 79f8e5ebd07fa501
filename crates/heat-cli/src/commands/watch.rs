//! Continuous monitoring command implementation.
//!
//! A fixed-period sampling loop drives the hysteresis state machine. The
//! machine is owned exclusively by this loop: nothing else reads or mutates
//! it, and samples are processed strictly in tick order. Output and event
//! persistence happen only on a status change, after the cycle's
//! classification has completed.

use std::io::Write;

use heat_analyzer::{AnalysisResult, StateMachine, ThermalState, Thresholds};
use heat_events::{EventStore, ThermalEvent};
use heat_sensors::SnapshotSource;
use tracing::debug;

use crate::error::CliError;

/// Watch command executor.
#[derive(Debug)]
pub struct WatchCommand {
    thresholds: Thresholds,
}

impl WatchCommand {
    /// Create a new watch command with the given thresholds.
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Run the monitoring loop until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or appending an event fails;
    /// sampling itself never fails.
    pub async fn run<W, S>(
        &self,
        writer: &mut W,
        source: &mut S,
        store: &EventStore,
    ) -> Result<(), CliError>
    where
        W: Write,
        S: SnapshotSource,
    {
        writeln!(writer, "Monitoring thermal state (press Ctrl+C to stop)")?;

        let mut machine = StateMachine::new(self.thresholds.clone());
        let mut last_state = machine.state();

        let mut ticker = tokio::time::interval(self.thresholds.sample_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    writeln!(writer, "stopping monitor")?;
                    break;
                }
                _ = ticker.tick() => {
                    let snapshot = source.sample().await;
                    let result = machine.observe(&snapshot);
                    debug!(state = %result.state, confidence = %result.confidence, "cycle complete");
                    last_state = record_if_changed(writer, store, &result, last_state)?;
                }
            }
        }

        Ok(())
    }
}

/// Prints and persists the result when the status changed, returning the
/// status to compare the next cycle against.
fn record_if_changed<W: Write>(
    writer: &mut W,
    store: &EventStore,
    result: &AnalysisResult,
    last_state: ThermalState,
) -> Result<ThermalState, CliError> {
    if result.state == last_state {
        return Ok(last_state);
    }

    writeln!(
        writer,
        "[{}] {} ({})",
        result.snapshot.timestamp.format("%H:%M"),
        result.state,
        result.reason
    )?;
    store.append(&ThermalEvent::state_change(
        result.state,
        result.reason.clone(),
        result.snapshot.timestamp,
    ))?;

    Ok(result.state)
}
