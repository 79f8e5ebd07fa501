//! The snapshot source seam between acquisition and analysis.

use std::collections::VecDeque;
use std::future::Future;

use chrono::Utc;
use heat_analyzer::Snapshot;

/// Produces point-in-time sensor snapshots.
///
/// Sampling never fails: signals the implementation cannot obtain are
/// simply absent from the snapshot's signal set. Implementations may block
/// briefly (a sensor read has its own bounded latency), which is why the
/// method is async.
pub trait SnapshotSource: Send {
    /// Captures one snapshot of the host's thermal signals.
    fn sample(&mut self) -> impl Future<Output = Snapshot> + Send;
}

/// A source that replays preset snapshots, for tests and simulations.
///
/// Once the queue is exhausted, further samples yield empty snapshots
/// (no signals obtained), stamped at the current time.
#[derive(Debug, Default)]
pub struct StaticSource {
    queue: VecDeque<Snapshot>,
}

impl StaticSource {
    /// Creates a source from a sequence of snapshots.
    #[must_use]
    pub fn new(snapshots: impl IntoIterator<Item = Snapshot>) -> Self {
        Self {
            queue: snapshots.into_iter().collect(),
        }
    }

    /// Appends a snapshot to the replay queue.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.queue.push_back(snapshot);
    }

    /// Returns the number of snapshots still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SnapshotSource for StaticSource {
    async fn sample(&mut self) -> Snapshot {
        self.queue
            .pop_front()
            .unwrap_or_else(|| Snapshot::new(Utc::now()))
    }
}
