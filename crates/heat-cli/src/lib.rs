//! heatwatch CLI library.
//!
//! Command implementations for the `heatwatch` binary: a one-shot status
//! query, a continuous monitoring loop, and three read-only views over the
//! recorded event history (analyze, log, doctor). The binary entrypoint in
//! `main.rs` is a thin wrapper around [`cli::Cli`] and these commands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
