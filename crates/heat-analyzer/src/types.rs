//! Core types for thermal classification.
//!
//! This module provides the fundamental types used throughout the
//! heat-analyzer crate:
//! - [`ThermalState`]: The classified thermal condition of the host
//! - [`Confidence`]: How trustworthy a classification is
//! - [`Signal`]: A sensor signal that may or may not have been obtained
//! - [`Snapshot`]: A point-in-time bundle of sensor readings
//! - [`AnalysisResult`]: The combined output of one classification cycle

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The classified thermal condition of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThermalState {
    /// Operating within normal parameters.
    #[default]
    Normal,
    /// Elevated temperature without confirmed throttling.
    HeatStress,
    /// Active thermal throttling: high temperature, frequency drop, and load.
    Throttling,
    /// Transitional status after throttling, pending a stability window.
    Recovery,
}

impl ThermalState {
    /// Returns the state as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::HeatStress => "HEAT_STRESS",
            Self::Throttling => "THROTTLING",
            Self::Recovery => "RECOVERY",
        }
    }

    /// Returns true if the state indicates an elevated thermal condition.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::HeatStress | Self::Throttling)
    }
}

impl std::fmt::Display for ThermalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How trustworthy a classification is, driven purely by how many of the
/// underlying signals were obtainable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// One signal or fewer was obtained.
    Low,
    /// Exactly two signals were obtained.
    Medium,
    /// Three or more signals were obtained.
    High,
}

impl Confidence {
    /// Grades a snapshot by counting its distinct obtained signals.
    #[must_use]
    pub fn grade(snapshot: &Snapshot) -> Self {
        Self::from_signal_count(snapshot.signal_count())
    }

    /// Maps an obtained-signal count to a confidence grade.
    #[must_use]
    pub const fn from_signal_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Low,
            2 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Returns the confidence as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sensor signal that a snapshot may carry.
///
/// A signal absent from a snapshot's set means the reading could not be
/// obtained; the corresponding numeric field is then a default, not a
/// genuine zero measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// CPU package temperature in Celsius.
    Temperature,
    /// Current CPU clock frequency in MHz.
    Frequency,
    /// Base (rated) CPU clock frequency in MHz.
    BaseFrequency,
    /// CPU load percentage.
    Load,
}

impl Signal {
    /// All signals a snapshot can carry.
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::Frequency,
        Self::BaseFrequency,
        Self::Load,
    ];

    /// Returns the signal name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Frequency => "frequency",
            Self::BaseFrequency => "base_frequency",
            Self::Load => "load",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable point-in-time bundle of sensor readings.
///
/// Fields whose signal is absent from [`Snapshot::signals`] hold zero and
/// must be treated as unknown by consumers; the classifier compensates
/// through the confidence grade rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// CPU temperature in Celsius (valid only with [`Signal::Temperature`]).
    pub temp_c: f64,
    /// Current CPU frequency in MHz (valid only with [`Signal::Frequency`]).
    pub freq_mhz: u32,
    /// Base CPU frequency in MHz (valid only with [`Signal::BaseFrequency`]).
    pub base_freq_mhz: u32,
    /// CPU load percentage 0-100 (valid only with [`Signal::Load`]).
    pub load_percent: f64,
    /// When the snapshot was captured.
    pub timestamp: DateTime<Utc>,
    /// The signals that were successfully obtained.
    pub signals: BTreeSet<Signal>,
}

impl Snapshot {
    /// Creates an empty snapshot with no obtained signals.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            temp_c: 0.0,
            freq_mhz: 0,
            base_freq_mhz: 0,
            load_percent: 0.0,
            timestamp,
            signals: BTreeSet::new(),
        }
    }

    /// Sets the temperature reading and marks its signal obtained.
    #[must_use]
    pub fn with_temperature(mut self, temp_c: f64) -> Self {
        self.temp_c = temp_c;
        self.signals.insert(Signal::Temperature);
        self
    }

    /// Sets the current frequency reading and marks its signal obtained.
    #[must_use]
    pub fn with_frequency(mut self, freq_mhz: u32) -> Self {
        self.freq_mhz = freq_mhz;
        self.signals.insert(Signal::Frequency);
        self
    }

    /// Sets the base frequency reading and marks its signal obtained.
    #[must_use]
    pub fn with_base_frequency(mut self, base_freq_mhz: u32) -> Self {
        self.base_freq_mhz = base_freq_mhz;
        self.signals.insert(Signal::BaseFrequency);
        self
    }

    /// Sets the load reading and marks its signal obtained.
    #[must_use]
    pub fn with_load(mut self, load_percent: f64) -> Self {
        self.load_percent = load_percent;
        self.signals.insert(Signal::Load);
        self
    }

    /// Returns true if the given signal was obtained.
    #[must_use]
    pub fn has(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }

    /// Returns the number of distinct obtained signals.
    #[must_use]
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }
}

/// The combined output of one classification cycle.
///
/// Created fresh on every cycle and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The (possibly hysteresis-overridden) thermal state.
    pub state: ThermalState,
    /// Human-readable explanation of the state.
    pub reason: String,
    /// Confidence grade for this cycle.
    pub confidence: Confidence,
    /// The snapshot that produced this result.
    pub snapshot: Snapshot,
}
