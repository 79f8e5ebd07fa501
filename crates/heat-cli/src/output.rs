//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use heat_analyzer::{AnalysisResult, Confidence, ThermalState};
use heat_doctor::DoctorReport;
use heat_events::ThermalEvent;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// One-shot classification result for display.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    /// Classified thermal state.
    pub state: ThermalState,
    /// Why the state was chosen.
    pub reason: String,
    /// Confidence grade for the classification.
    pub confidence: Confidence,
    /// Names of the signals that were obtained.
    pub signals: Vec<String>,
}

impl From<&AnalysisResult> for StatusView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            state: result.state,
            reason: result.reason.clone(),
            confidence: result.confidence,
            signals: result
                .snapshot
                .signals
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

impl TableDisplay for StatusView {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Thermal state:  {}", self.state)?;
        writeln!(writer, "Reason:         {}", self.reason)?;
        writeln!(writer, "Confidence:     {}", self.confidence)?;
        if self.signals.is_empty() {
            writeln!(writer, "Signals:        none")?;
        } else {
            writeln!(writer, "Signals:        {}", self.signals.join(", "))?;
        }
        Ok(())
    }
}

/// A single event prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Event details.
    pub details: String,
}

impl From<&ThermalEvent> for EventView {
    fn from(event: &ThermalEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            kind: event.kind.clone(),
            details: event.details.clone(),
        }
    }
}

/// List of events for display.
#[derive(Debug, Clone, Serialize)]
pub struct EventList {
    /// Events, oldest first.
    pub events: Vec<EventView>,
}

impl TableDisplay for EventList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.events.is_empty() {
            writeln!(writer, "no events recorded")?;
            return Ok(());
        }
        for event in &self.events {
            writeln!(
                writer,
                "{} {} {}",
                event.timestamp.format("%H:%M"),
                event.kind,
                event.details
            )?;
        }
        Ok(())
    }
}

/// Summary of recorded events over a window.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeSummary {
    /// The window that was analyzed, as given on the command line.
    pub window: String,
    /// Events recorded within the window.
    pub event_count: usize,
    /// Throttling events within the window.
    pub throttle_count: usize,
}

impl TableDisplay for AnalyzeSummary {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "Thermal events (last {})", self.window)?;
        if self.event_count == 0 {
            writeln!(writer, "  no events recorded in this period")?;
            return Ok(());
        }
        writeln!(writer, "  Recorded:    {}", self.event_count)?;
        writeln!(writer, "  Throttling:  {}", self.throttle_count)?;
        Ok(())
    }
}

impl TableDisplay for DoctorReport {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        write!(writer, "{self}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_status() -> StatusView {
        StatusView {
            state: ThermalState::HeatStress,
            reason: "high temperature 91.0C".into(),
            confidence: Confidence::High,
            signals: vec!["temperature".into(), "frequency".into(), "load".into()],
        }
    }

    #[test]
    fn status_table_lists_fields() {
        let format = OutputFormat::new(Format::Table);
        let out = format.to_string(&sample_status()).unwrap();
        assert!(out.contains("HEAT_STRESS"));
        assert!(out.contains("high temperature 91.0C"));
        assert!(out.contains("temperature, frequency, load"));
    }

    #[test]
    fn status_json_is_machine_readable() {
        let format = OutputFormat::new(Format::Json);
        let out = format.to_string(&sample_status()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"], "HEAT_STRESS");
        assert_eq!(value["confidence"], "high");
    }

    #[test]
    fn status_table_with_no_signals_says_none() {
        let view = StatusView {
            state: ThermalState::Normal,
            reason: "operating within normal parameters".into(),
            confidence: Confidence::Low,
            signals: vec![],
        };
        let out = OutputFormat::default().to_string(&view).unwrap();
        assert!(out.contains("Signals:        none"));
    }

    #[test]
    fn empty_event_list_renders_placeholder() {
        let list = EventList { events: vec![] };
        let out = OutputFormat::default().to_string(&list).unwrap();
        assert!(out.contains("no events recorded"));
    }

    #[test]
    fn analyze_summary_renders_counts() {
        let summary = AnalyzeSummary {
            window: "2h".into(),
            event_count: 4,
            throttle_count: 2,
        };
        let out = OutputFormat::default().to_string(&summary).unwrap();
        assert!(out.contains("last 2h"));
        assert!(out.contains("Throttling:  2"));
    }
}
