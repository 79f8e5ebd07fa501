//! Threshold configuration for thermal analysis.
//!
//! All magic numbers live here. The struct is built once and shared
//! read-only; nothing mutates it at runtime.

use std::time::Duration;

/// Immutable threshold configuration for the classifier and state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Temperature at or above which the host is heat-stressed (Celsius).
    pub temp_high_c: f64,
    /// Temperature at or above which the condition is critical (Celsius).
    pub temp_critical_c: f64,
    /// Temperature below which recovery is plausible (Celsius). Reserved;
    /// the transition logic does not consult it yet.
    pub temp_recovery_c: f64,
    /// Fractional frequency drop from base that suggests throttling.
    pub freq_drop_fraction: f64,
    /// Load percentage above which the host counts as under load.
    pub load_high_percent: f64,
    /// How long a throttling condition must persist to be confirmed.
    /// Reserved; the transition logic does not consult it yet.
    pub throttle_sustain: Duration,
    /// Minimum dwell time in recovery before normalcy is declared.
    pub recovery_sustain: Duration,
    /// Period of the monitoring sampling loop.
    pub sample_interval: Duration,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temp_high_c: 90.0,
            temp_critical_c: 95.0,
            temp_recovery_c: 85.0,
            freq_drop_fraction: 0.20,
            load_high_percent: 50.0,
            throttle_sustain: Duration::from_secs(10),
            recovery_sustain: Duration::from_secs(30),
            sample_interval: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let t = Thresholds::default();
        assert!((t.temp_high_c - 90.0).abs() < f64::EPSILON);
        assert!((t.temp_critical_c - 95.0).abs() < f64::EPSILON);
        assert!((t.freq_drop_fraction - 0.20).abs() < f64::EPSILON);
        assert!((t.load_high_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(t.recovery_sustain, Duration::from_secs(30));
        assert_eq!(t.sample_interval, Duration::from_secs(2));
    }
}
