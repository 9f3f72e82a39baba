//! In-process data layer and the tracking function bound to it.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::gtag::command::GtagCommand;

/// Ordered, append-only queue of tracking calls. Clones share the same queue.
#[derive(Clone, Debug, Default)]
pub struct DataLayer {
    entries: Arc<Mutex<Vec<GtagCommand>>>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue that already holds `entries`, e.g. one set up by another tag.
    pub fn with_entries(entries: Vec<GtagCommand>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    pub fn push(&self, command: GtagCommand) {
        self.entries.lock().unwrap().push(command);
    }

    pub fn entries(&self) -> Vec<GtagCommand> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<GtagCommand> {
        self.entries.lock().unwrap().last().cloned()
    }

    /// Returns `true` when both handles point at the same underlying queue.
    pub fn shares_queue_with(&self, other: &DataLayer) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Renders the queue the way `JSON.stringify(window.dataLayer)` would.
    pub fn to_json(&self) -> Value {
        let entries = self.entries.lock().unwrap();
        Value::Array(
            entries
                .iter()
                .map(|entry| Value::Array(entry.to_arguments()))
                .collect(),
        )
    }
}

/// The page-wide `gtag` function. Calling it records the call on its data layer and nothing else.
#[derive(Clone, Debug)]
pub struct Tracker {
    data_layer: DataLayer,
}

impl Tracker {
    pub fn new(data_layer: DataLayer) -> Self {
        Self { data_layer }
    }

    pub fn call(&self, command: impl Into<GtagCommand>) {
        self.data_layer.push(command.into());
    }

    pub fn data_layer(&self) -> &DataLayer {
        &self.data_layer
    }
}
