//! Snapshot-based undo/redo history.
//!
//! Every committed scene state is kept as a complete immutable snapshot.
//! Undo and redo move a cursor through the log; the scene store restores the
//! snapshot under the cursor. Snapshots are `Arc<[Entity]>`, so handing one
//! out for restore or serialization costs a reference-count bump.

use crate::model::Entity;
use spacekit_core::constants::DEFAULT_HISTORY_LIMIT;
use std::sync::Arc;

/// Immutable copy of every entity at one commit, in z-order.
pub type Snapshot = Arc<[Entity]>;

/// Bounded log of scene snapshots with a current position.
///
/// The log is never empty and `index < len()` always holds.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<Snapshot>,
    index: usize,
    capacity: usize,
}

impl HistoryManager {
    /// Creates a history holding one empty snapshot.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: vec![Snapshot::from(Vec::new())],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Records `entities` as the newest state.
    ///
    /// States after the cursor (undone steps) are discarded. When the log
    /// outgrows its capacity the oldest snapshot is dropped.
    pub fn commit(&mut self, entities: &[Entity]) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(Snapshot::from(entities));
        self.index += 1;

        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
            self.index -= 1;
            tracing::trace!("History full, dropped oldest snapshot");
        }

        tracing::debug!(
            "Committed snapshot {} of {} ({} entities)",
            self.index + 1,
            self.snapshots.len(),
            entities.len()
        );
    }

    /// Steps back one snapshot and returns it, or `None` at the oldest state.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Steps forward one snapshot and returns it, or `None` at the newest state.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Replaces the whole log with a single snapshot of `entities`.
    pub fn reset(&mut self, entities: &[Entity]) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot::from(entities));
        self.index = 0;
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Snapshot {
        // index < len is an invariant of every mutator
        Arc::clone(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of snapshots in the log.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the log holds at least one snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
