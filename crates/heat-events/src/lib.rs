//! Append-only thermal event store for heatwatch.
//!
//! Status changes observed during continuous monitoring are persisted as
//! JSON lines in a single `events.jsonl` file, one event per line. Reads
//! are best-effort: malformed lines are skipped with a warning rather than
//! failing the whole read, so a partially corrupted log still yields its
//! intact history.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use heat_analyzer::ThermalState;
//! use heat_events::{EventStore, ThermalEvent};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = EventStore::open(dir.path()).unwrap();
//!
//! let event = ThermalEvent::state_change(
//!     ThermalState::Throttling,
//!     "critical temperature 96.0C with 33% frequency drop under load",
//!     Utc::now(),
//! );
//! store.append(&event).unwrap();
//!
//! assert_eq!(store.read_all().unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export main types at crate root
pub use error::{EventError, Result};
pub use store::{EVENTS_FILE, EventStore};
pub use types::ThermalEvent;
