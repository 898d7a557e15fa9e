use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;

use super::Snapshot;

/// A single slot hand-off between the trainer and whoever renders its progress.
///
/// Publishing never blocks on the consumer: a new snapshot overwrites one that hasn't been
/// taken yet. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    slot: Arc<Mutex<Option<Snapshot>>>,
    published: Arc<AtomicU64>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `snapshot` in the slot.
    ///
    /// # Returns
    /// Whether an untaken snapshot was overwritten.
    pub fn publish(&self, snapshot: Snapshot) -> bool {
        let replaced = self.slot.lock().replace(snapshot).is_some();
        self.published.fetch_add(1, Ordering::Relaxed);
        replaced
    }

    /// Takes the latest snapshot, if one was published since the last take.
    pub fn take(&self) -> Option<Snapshot> {
        self.slot.lock().take()
    }

    /// Whether a snapshot is waiting to be taken.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// The amount of snapshots ever published.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}
