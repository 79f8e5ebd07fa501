//! Instantaneous thermal classification.
//!
//! A pure decision table over a single [`Snapshot`]. It has no memory of
//! prior samples and never fails: zero-valued fields from absent signals
//! fall through every elevated-state predicate, so degraded input lands on
//! [`ThermalState::Normal`] and is surfaced through the confidence grade
//! instead of an error.

use tracing::trace;

use crate::thresholds::Thresholds;
use crate::types::{Snapshot, ThermalState};

/// Reason attached to a snapshot that triggers no rule.
pub const REASON_NORMAL: &str = "operating within normal parameters";

/// An instantaneous verdict: a state and the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The state indicated by this snapshot alone.
    pub state: ThermalState,
    /// Why the rule fired.
    pub reason: String,
}

impl Verdict {
    fn new(state: ThermalState, reason: impl Into<String>) -> Self {
        Self {
            state,
            reason: reason.into(),
        }
    }
}

/// Classifies a single snapshot against the thresholds.
///
/// The decision table is evaluated top to bottom, first match wins:
///
/// 1. critical temperature + frequency drop + high load → throttling
/// 2. critical temperature alone → heat stress
/// 3. high temperature + frequency drop + high load → throttling
/// 4. high temperature alone → heat stress
/// 5. frequency drop + high load at normal temperature → normal
///    (frequency/load correlation without heat is not thermal throttling)
/// 6. otherwise → normal
#[must_use]
pub fn classify(snapshot: &Snapshot, thresholds: &Thresholds) -> Verdict {
    let is_critical_temp = snapshot.temp_c >= thresholds.temp_critical_c;
    let is_high_temp = snapshot.temp_c >= thresholds.temp_high_c;

    // No drop assumed when the base frequency is unknown.
    let freq_ratio = if snapshot.base_freq_mhz > 0 {
        f64::from(snapshot.freq_mhz) / f64::from(snapshot.base_freq_mhz)
    } else {
        1.0
    };
    let is_freq_drop = freq_ratio <= 1.0 - thresholds.freq_drop_fraction;
    let is_high_load = snapshot.load_percent > thresholds.load_high_percent;

    let drop_percent = (1.0 - freq_ratio) * 100.0;

    trace!(
        temp_c = snapshot.temp_c,
        freq_ratio,
        load = snapshot.load_percent,
        is_critical_temp,
        is_high_temp,
        is_freq_drop,
        is_high_load,
        "classifying snapshot"
    );

    if is_critical_temp {
        if is_freq_drop && is_high_load {
            Verdict::new(
                ThermalState::Throttling,
                format!(
                    "critical temperature {:.1}C with {drop_percent:.0}% frequency drop under load",
                    snapshot.temp_c
                ),
            )
        } else {
            Verdict::new(
                ThermalState::HeatStress,
                format!("critical temperature {:.1}C", snapshot.temp_c),
            )
        }
    } else if is_high_temp {
        if is_freq_drop && is_high_load {
            Verdict::new(
                ThermalState::Throttling,
                format!(
                    "high temperature {:.1}C with {drop_percent:.0}% frequency drop under load",
                    snapshot.temp_c
                ),
            )
        } else {
            Verdict::new(
                ThermalState::HeatStress,
                format!("high temperature {:.1}C", snapshot.temp_c),
            )
        }
    } else {
        // Covers rule 5 as well: a frequency drop under load with normal
        // temperature may be power limiting, but it is not thermal.
        Verdict::new(ThermalState::Normal, REASON_NORMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn snapshot(temp: f64, freq: u32, base: u32, load: f64) -> Snapshot {
        Snapshot::new(Utc::now())
            .with_temperature(temp)
            .with_frequency(freq)
            .with_base_frequency(base)
            .with_load(load)
    }

    mod decision_table_tests {
        use super::*;

        #[test]
        fn critical_temp_with_drop_and_load_is_throttling() {
            let verdict = classify(&snapshot(96.0, 2000, 3000, 80.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Throttling);
            assert!(verdict.reason.contains("96.0"));
            assert!(verdict.reason.contains("33"));
        }

        #[test]
        fn critical_temp_alone_is_heat_stress() {
            let verdict = classify(&snapshot(96.0, 3000, 3000, 10.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::HeatStress);
            assert!(verdict.reason.contains("critical"));
            assert!(verdict.reason.contains("96.0"));
        }

        #[test]
        fn high_temp_with_drop_and_load_is_throttling() {
            let verdict = classify(&snapshot(91.0, 2000, 3000, 80.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Throttling);
            assert!(verdict.reason.contains("high temperature"));
        }

        #[test]
        fn high_temp_without_load_is_heat_stress() {
            let verdict = classify(&snapshot(91.0, 2900, 3000, 10.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::HeatStress);
            assert!(verdict.reason.contains("91.0"));
        }

        #[test]
        fn freq_drop_under_load_at_normal_temp_is_normal() {
            let verdict = classify(&snapshot(70.0, 1500, 3000, 90.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Normal);
            assert_eq!(verdict.reason, REASON_NORMAL);
        }

        #[test]
        fn quiet_host_is_normal() {
            let verdict = classify(&snapshot(45.0, 2900, 3000, 5.0), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Normal);
        }
    }

    mod boundary_tests {
        use super::*;
        use test_case::test_case;

        // Load must be strictly above the threshold; temperatures fire at
        // their thresholds inclusively.
        #[test_case(95.0, 2300, 3000, 50.1, ThermalState::Throttling; "exactly critical, clear drop, just loaded")]
        #[test_case(95.0, 2300, 3000, 50.0, ThermalState::HeatStress; "load at threshold does not count")]
        #[test_case(90.0, 3000, 3000, 90.0, ThermalState::HeatStress; "exactly high, no drop")]
        #[test_case(89.9, 3000, 3000, 90.0, ThermalState::Normal; "just below high")]
        fn thresholds_are_inclusive_where_documented(
            temp: f64,
            freq: u32,
            base: u32,
            load: f64,
            expected: ThermalState,
        ) {
            let verdict = classify(&snapshot(temp, freq, base, load), &Thresholds::default());
            assert_eq!(verdict.state, expected);
        }

        #[test]
        fn unknown_base_frequency_assumes_no_drop() {
            // base = 0 means the signal was absent; ratio defined as 1.0.
            let snap = Snapshot::new(Utc::now())
                .with_temperature(91.0)
                .with_frequency(1500)
                .with_load(90.0);
            let verdict = classify(&snap, &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::HeatStress);
        }
    }

    mod degraded_input_tests {
        use super::*;

        #[test]
        fn empty_snapshot_degrades_to_normal() {
            let verdict = classify(&Snapshot::new(Utc::now()), &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Normal);
            assert_eq!(verdict.reason, REASON_NORMAL);
        }

        #[test]
        fn load_only_snapshot_is_normal() {
            let snap = Snapshot::new(Utc::now()).with_load(99.0);
            let verdict = classify(&snap, &Thresholds::default());
            assert_eq!(verdict.state, ThermalState::Normal);
        }
    }

    proptest! {
        // The classifier is total and idempotent over any numeric input.
        #[test]
        fn classify_is_total_and_idempotent(
            temp in -40.0f64..150.0,
            freq in 0u32..8000,
            base in 0u32..8000,
            load in 0.0f64..100.0,
        ) {
            let snap = snapshot(temp, freq, base, load);
            let thresholds = Thresholds::default();
            let first = classify(&snap, &thresholds);
            let second = classify(&snap, &thresholds);
            prop_assert_eq!(first.state, second.state);
            prop_assert_eq!(first.reason, second.reason);
        }

        // Rule 5: without elevated temperature, no snapshot classifies as
        // throttling no matter what frequency and load report.
        #[test]
        fn no_throttling_below_high_temp(
            temp in -40.0f64..89.9,
            freq in 0u32..8000,
            base in 0u32..8000,
            load in 0.0f64..100.0,
        ) {
            let verdict = classify(&snapshot(temp, freq, base, load), &Thresholds::default());
            prop_assert_ne!(verdict.state, ThermalState::Throttling);
        }
    }
}
