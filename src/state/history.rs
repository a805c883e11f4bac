/// Append-only snapshot buffer behind the time-travel slider.
///
/// Every handled message records a new snapshot at the end. Moving the
/// cursor only changes which snapshot is shown; nothing is ever rewritten.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// One recorded state plus a short description of what produced it
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub state: T,
    pub label: String,
    pub recorded_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<Snapshot<T>>,
    cursor: usize,
    /// Maximum number of snapshots kept (None = unbounded)
    capacity: Option<usize>,
}

impl<T> History<T> {
    /// Start a history with a single initial snapshot
    pub fn new(initial: T, capacity: Option<usize>) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(Snapshot {
            state: initial,
            label: "init".to_string(),
            recorded_at: Local::now(),
        });

        Self {
            entries,
            cursor: 0,
            // A history must always hold at least the live snapshot
            capacity: capacity.map(|c| c.max(1)),
        }
    }

    /// Append a snapshot and jump to it
    pub fn record(&mut self, state: T, label: impl Into<String>) {
        self.entries.push_back(Snapshot {
            state,
            label: label.into(),
            recorded_at: Local::now(),
        });

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }

        self.cursor = self.entries.len() - 1;
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> &Snapshot<T> {
        &self.entries[self.cursor]
    }

    /// Move the cursor, clamped to the newest snapshot
    pub fn travel_to(&mut self, index: usize) {
        self.cursor = index.min(self.entries.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the newest snapshot is shown
    pub fn is_live(&self) -> bool {
        self.cursor + 1 == self.entries.len()
    }
}
