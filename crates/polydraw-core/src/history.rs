//! Bounded log of structural changes, used for undo.
//!
//! Only the most recent records are kept. Older ones are dropped from the
//! front and can no longer be undone.

use crate::shapes::{Shape, ShapeId};
use std::collections::VecDeque;

/// Number of changes kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Kind of structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Create,
    Update,
    Delete,
}

/// A committed change with the snapshots needed to reverse it.
#[derive(Debug, Clone)]
pub enum ChangeRecord {
    /// `after` is the shape that was added to the canvas.
    Create { after: Shape },
    /// `before` is the replaced shape, `after` the one now on the canvas.
    Update { before: Shape, after: Shape },
    /// `before` is the shape that was removed.
    Delete { before: Shape },
}

impl ChangeRecord {
    pub fn action(&self) -> ChangeAction {
        match self {
            ChangeRecord::Create { .. } => ChangeAction::Create,
            ChangeRecord::Update { .. } => ChangeAction::Update,
            ChangeRecord::Delete { .. } => ChangeAction::Delete,
        }
    }

    pub fn before(&self) -> Option<&Shape> {
        match self {
            ChangeRecord::Create { .. } => None,
            ChangeRecord::Update { before, .. } | ChangeRecord::Delete { before } => Some(before),
        }
    }

    pub fn after(&self) -> Option<&Shape> {
        match self {
            ChangeRecord::Create { after } | ChangeRecord::Update { after, .. } => Some(after),
            ChangeRecord::Delete { .. } => None,
        }
    }

    /// Identity of the shape the record refers to on the canvas right now.
    pub fn live_id(&self) -> Option<ShapeId> {
        self.after().map(Shape::id)
    }
}

/// Fixed-size undo log.
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<ChangeRecord>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a record, evicting the oldest one once over capacity.
    pub fn record(&mut self, record: ChangeRecord) {
        log::debug!("Recording {:?}", record.action());
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_front() {
                log::debug!("History full, dropping oldest {:?}", evicted.action());
            }
        }
    }

    /// Remove and return the most recent record.
    pub fn undo_last(&mut self) -> Option<ChangeRecord> {
        self.records.pop_back()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&ChangeRecord> {
        self.records.back()
    }

    /// Records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter()
    }

    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

}
