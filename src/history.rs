//! Shared calculation history.
//!
//! Both the calculator and the currency converter append here. The log is
//! bounded and ordered newest first.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::format_result;
use crate::error::Result;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 20;

/// One completed calculation or conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What was computed, e.g. `"50 + 10"` or `"100 USD to EUR"`.
    pub expression: String,
    /// The raw, unformatted result.
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// The result as shown in the history list.
    pub fn display_result(&self) -> String {
        format_result(self.result)
    }
}

/// Bounded, newest-first log of [`HistoryEntry`] values.
#[derive(Clone, Debug)]
pub struct HistoryRecorder {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryRecorder {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryRecorder {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front, evicting the oldest entry when full.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity
            && let Some(evicted) = self.entries.pop_back()
        {
            debug!(expression = %evicted.expression, "History entry evicted");
        }
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize the entries, newest first, as a JSON array.
    ///
    /// Non-finite results become `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
