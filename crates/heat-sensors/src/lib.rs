//! Best-effort OS sensor acquisition for heatwatch.
//!
//! This crate is the acquisition collaborator in front of the
//! classification core: it produces [`heat_analyzer::Snapshot`]s from
//! whatever the host exposes. Every signal is read independently and
//! exactly once per sample; a failed read marks the signal absent on the
//! snapshot and is never surfaced as an error. The analyzer compensates for
//! missing signals through its confidence grade.
//!
//! [`SystemSensors`] is the sysinfo-backed implementation;
//! [`StaticSource`] replays preset snapshots for tests and simulations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod source;
pub mod system;

// Re-export main types at crate root
pub use error::{Result, SensorError};
pub use source::{SnapshotSource, StaticSource};
pub use system::SystemSensors;
