//! Event types persisted by the store.

use chrono::{DateTime, Utc};
use heat_analyzer::ThermalState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A significant thermal event, one JSON line in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalEvent {
    /// Unique event id.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// Event kind; for status changes this is the new state's name.
    #[serde(rename = "type")]
    pub kind: String,
    /// The thermal state entered.
    pub state: ThermalState,
    /// Human-readable details, typically the classification reason.
    pub details: String,
}

impl ThermalEvent {
    /// Creates a status-change event for the given new state.
    #[must_use]
    pub fn state_change(
        state: ThermalState,
        details: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            kind: state.as_str().to_string(),
            state,
            details: details.into(),
        }
    }

    /// Returns true if this event recorded a throttling episode.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        self.state == ThermalState::Throttling
    }
}
