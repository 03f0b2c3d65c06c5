use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Context;
use tracing::{debug, warn};

use crate::task::Task;

pub const DEFAULT_SLOT_KEY: &str = "todos";

/// Local-storage slot used by the browser build; lists saved by earlier jQuery
/// versions of the page live under this name.
pub const BROWSER_SLOT_KEY: &str = "todos-jquery";

/// A durable key-value area holding one serialized value per slot.
pub trait SlotStore {
    fn read_slot(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn write_slot(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Reads the task list stored under `key`.
///
/// An absent, blank or unparseable slot yields an empty list. Only a failure of the
/// underlying read is an error.
#[tracing::instrument(skip(store))]
pub fn load<S>(store: &S, key: &str) -> anyhow::Result<Vec<Task>>
where
    S: SlotStore + ?Sized,
{
    let Some(raw) = store
        .read_slot(key)
        .with_context(|| format!("failed to read slot {key}"))?
    else {
        debug!("slot is empty");
        return Ok(Vec::new());
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(tasks) => {
            let tasks = tasks.unwrap_or_default();
            debug!(count = tasks.len(), "loaded tasks");
            Ok(tasks)
        }
        Err(error) => {
            warn!(%error, "stored tasks are malformed; starting empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrites the slot under `key` with the full list.
#[tracing::instrument(skip(store, tasks), fields(count = tasks.len()))]
pub fn save<S>(store: &S, key: &str, tasks: &[Task]) -> anyhow::Result<()>
where
    S: SlotStore + ?Sized,
{
    let serialized = serde_json::to_string(tasks).context("failed to serialize tasks")?;
    store
        .write_slot(key, &serialized)
        .with_context(|| format!("failed to write slot {key}"))
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStore for MemoryStore {
    fn read_slot(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slot(key))
    }

    fn write_slot(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
