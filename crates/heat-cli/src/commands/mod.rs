//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`status`] - one-shot thermal classification
//! - [`watch`] - continuous monitoring loop
//! - [`analyze`] - event summary over a recent window
//! - [`log`] - raw event log view
//! - [`doctor`] - advisory report

pub mod analyze;
pub mod doctor;
pub mod log;
pub mod status;
pub mod watch;

pub use analyze::AnalyzeCommand;
pub use doctor::DoctorCommand;
pub use log::LogCommand;
pub use status::StatusCommand;
pub use watch::WatchCommand;
