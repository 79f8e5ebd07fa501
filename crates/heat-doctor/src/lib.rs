//! Conservative advisory reports from heatwatch event history.
//!
//! The doctor looks at the recorded event log, counts throttling episodes,
//! and produces risk-reduction advice. It deliberately stays conservative:
//! airflow suggestions always apply, power-profile and ambient-temperature
//! hints only once throttling becomes frequent. Report generation is pure;
//! the reference time is injected so the 24-hour window is testable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use heat_events::ThermalEvent;
use serde::Serialize;

/// Recent throttling count above which stronger suggestions are added.
const FREQUENT_THROTTLING: usize = 5;

/// A health report derived from the event history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// Throttling events on record, all time.
    pub throttle_count: usize,
    /// Throttling events within the last 24 hours.
    pub recent_throttle_count: usize,
    /// Risk-reduction suggestions, most general first.
    pub suggestions: Vec<String>,
}

impl DoctorReport {
    /// Builds a report from the event history, with "recent" meaning the
    /// 24 hours before `now`.
    #[must_use]
    pub fn from_events(events: &[ThermalEvent], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::hours(24);
        let throttle_count = events.iter().filter(|e| e.is_throttling()).count();
        let recent_throttle_count = events
            .iter()
            .filter(|e| e.is_throttling() && e.timestamp > cutoff)
            .count();

        let mut suggestions = Vec::new();
        if throttle_count > 0 {
            suggestions.push("ensure air vents are not obstructed".to_string());
            suggestions.push("avoid soft surfaces that block airflow".to_string());
            if recent_throttle_count > FREQUENT_THROTTLING {
                suggestions
                    .push("prefer a balanced power profile over high performance".to_string());
                suggestions.push("high ambient temperature may be contributing".to_string());
            }
        }

        Self {
            throttle_count,
            recent_throttle_count,
            suggestions,
        }
    }

    /// Returns true when no throttling has ever been recorded.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.throttle_count == 0
    }
}

impl std::fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "System health report")?;
        if self.is_healthy() {
            writeln!(
                f,
                "  no throttling events on record; system appears healthy"
            )?;
            return Ok(());
        }

        writeln!(
            f,
            "  {} throttling events detected ({} in the last 24h)",
            self.throttle_count, self.recent_throttle_count
        )?;
        writeln!(f)?;
        writeln!(f, "Suggestions (risk reduction)")?;
        for suggestion in &self.suggestions {
            writeln!(f, "  - {suggestion}")?;
        }
        Ok(())
    }
}
