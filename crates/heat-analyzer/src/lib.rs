//! Thermal state classification core for heatwatch.
//!
//! `heat-analyzer` turns noisy, possibly-partial sensor snapshots into a
//! stable thermal status with a human-readable reason and a confidence grade.
//! It is deliberately free of I/O: sensor acquisition, event persistence, and
//! rendering live in sibling crates.
//!
//! Two layers:
//!
//! - [`classifier::classify`] — a pure, total function from a [`Snapshot`] to
//!   an instantaneous verdict. No memory of prior samples.
//! - [`StateMachine`] — a stateful wrapper that applies hysteresis on top of
//!   the instantaneous verdict, enforcing a minimum dwell time in the
//!   [`ThermalState::Recovery`] status before declaring normalcy.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use heat_analyzer::{Snapshot, StateMachine, ThermalState, Thresholds};
//!
//! let snapshot = Snapshot::new(Utc::now())
//!     .with_temperature(96.0)
//!     .with_frequency(2000)
//!     .with_base_frequency(3000)
//!     .with_load(80.0);
//!
//! let mut machine = StateMachine::new(Thresholds::default());
//! let result = machine.observe(&snapshot);
//!
//! assert_eq!(result.state, ThermalState::Throttling);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classifier;
pub mod machine;
pub mod thresholds;
pub mod types;

// Re-export main types at crate root
pub use classifier::{Verdict, classify};
pub use machine::StateMachine;
pub use thresholds::Thresholds;
pub use types::{AnalysisResult, Confidence, Signal, Snapshot, ThermalState};
