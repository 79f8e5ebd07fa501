//! Hysteresis state machine over the instantaneous classifier.
//!
//! Raw per-sample verdicts flap: one cool reading after a throttling episode
//! does not mean the host is healthy. The machine holds the current status
//! and the time of the last confirmed transition, routes every exit from
//! throttling through [`ThermalState::Recovery`], and keeps the machine
//! there for a minimum dwell time before normalcy is declared.
//!
//! The machine is a plain value with `&mut self` observation: it is owned
//! exclusively by its sampling loop and never shared across concurrent
//! callers, so it needs no locking. Single-shot queries build a fresh
//! default-initialized machine and observe exactly once.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::classifier::classify;
use crate::thresholds::Thresholds;
use crate::types::{AnalysisResult, Confidence, Snapshot, ThermalState};

/// Reason reported when a throttling episode ends and verification begins.
pub const REASON_RECOVERY_ENTERED: &str = "temperature dropping, verifying stability";

/// Reason reported while the recovery dwell window is still open.
pub const REASON_RECOVERING: &str = "recovering";

/// Stateful thermal status tracker with time-gated transitions.
///
/// Dwell logic assumes observation times are monotonically non-decreasing;
/// feeding samples out of chronological order is undefined behavior for
/// dwell-time correctness.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: ThermalState,
    last_transition: DateTime<Utc>,
    thresholds: Thresholds,
}

impl StateMachine {
    /// Creates a machine in the initial state, anchored at the current time.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self::anchored_at(thresholds, Utc::now())
    }

    /// Creates a machine in the initial state, anchored at a specific time.
    #[must_use]
    pub fn anchored_at(thresholds: Thresholds, now: DateTime<Utc>) -> Self {
        Self {
            state: ThermalState::Normal,
            last_transition: now,
            thresholds,
        }
    }

    /// Returns the current status.
    #[must_use]
    pub const fn state(&self) -> ThermalState {
        self.state
    }

    /// Returns the time of the last confirmed transition.
    #[must_use]
    pub const fn last_transition(&self) -> DateTime<Utc> {
        self.last_transition
    }

    /// Returns the thresholds the machine was built with.
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Processes one sample against the wall clock.
    pub fn observe(&mut self, snapshot: &Snapshot) -> AnalysisResult {
        self.observe_at(snapshot, Utc::now())
    }

    /// Processes one sample at an explicit observation time.
    ///
    /// The injected clock keeps the dwell rules testable without real
    /// wall-clock delays.
    pub fn observe_at(&mut self, snapshot: &Snapshot, now: DateTime<Utc>) -> AnalysisResult {
        let verdict = classify(snapshot, &self.thresholds);
        let confidence = Confidence::grade(snapshot);

        debug!(
            current = %self.state,
            instant = %verdict.state,
            %confidence,
            "processing sample"
        );

        // A throttling episode never ends directly: any non-throttling
        // verdict routes through recovery first, overriding the verdict
        // for this cycle.
        if self.state == ThermalState::Throttling
            && matches!(verdict.state, ThermalState::Normal | ThermalState::HeatStress)
        {
            self.transition(ThermalState::Recovery, now);
            return self.result(REASON_RECOVERY_ENTERED, confidence, snapshot);
        }

        if self.state == ThermalState::Recovery {
            if !self.recovery_window_elapsed(now) {
                return self.result(REASON_RECOVERING, confidence, snapshot);
            }
            if verdict.state == ThermalState::Normal {
                self.transition(ThermalState::Normal, now);
            }
            // A heat-stress verdict after the window holds the machine in
            // recovery without restarting the dwell clock; only a normal or
            // throttling sample moves it on.
        }

        if verdict.state == ThermalState::Throttling {
            // Every throttling sample re-anchors the transition time.
            self.transition(ThermalState::Throttling, now);
        } else if self.state != ThermalState::Recovery && self.state != verdict.state {
            // Normal and heat-stress adopt the verdict directly, with no
            // dwell gate and without touching the transition time.
            info!(from = %self.state, to = %verdict.state, "thermal state change");
            self.state = verdict.state;
        }

        self.result(&verdict.reason, confidence, snapshot)
    }

    fn recovery_window_elapsed(&self, now: DateTime<Utc>) -> bool {
        let sustain = chrono::Duration::from_std(self.thresholds.recovery_sustain)
            .unwrap_or_else(|_| chrono::Duration::seconds(30));
        now >= self.last_transition + sustain
    }

    fn transition(&mut self, next: ThermalState, now: DateTime<Utc>) {
        if self.state != next {
            info!(from = %self.state, to = %next, "thermal state change");
        }
        self.state = next;
        self.last_transition = now;
    }

    fn result(
        &self,
        reason: &str,
        confidence: Confidence,
        snapshot: &Snapshot,
    ) -> AnalysisResult {
        AnalysisResult {
            state: self.state,
            reason: reason.to_string(),
            confidence,
            snapshot: snapshot.clone(),
        }
    }
}
