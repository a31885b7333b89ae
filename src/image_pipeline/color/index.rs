use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::image_pipeline::color::key::ColorKey;

#[derive(Debug, Default)]
struct IndexState {
    ids: HashMap<ColorKey, u32>,
    last_id: u32,
}

/// Registry handing out IDs `1, 2, 3, ...` to colour keys in the order they
/// are first resolved.
///
/// The lookup and the insert happen under one lock, so concurrent callers
/// never hand out two IDs for one key or skip an ID. Which colour ends up
/// with ID 1 depends on which worker gets there first.
#[derive(Debug, Default)]
pub struct ColorIndex {
    state: Mutex<IndexState>,
}

impl ColorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID of `key`, registering it with the next ID if unseen.
    pub fn resolve(&self, key: &ColorKey) -> u32 {
        // Inserts are a single map write, so a poisoned lock still guards a
        // consistent map.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&id) = state.ids.get(key) {
            return id;
        }
        state.last_id += 1;
        let id = state.last_id;
        state.ids.insert(key.clone(), id);
        trace!(color = %key, id, "Registered new colour");
        id
    }

    /// Number of distinct colours registered so far.
    pub fn color_count(&self) -> usize {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).ids.len()
    }

    /// Snapshot of every registered colour, ordered by ID.
    pub fn table(&self) -> ColorTable {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<(ColorKey, u32)> = state
            .ids
            .iter()
            .map(|(key, &id)| (key.clone(), id))
            .collect();
        entries.sort_by_key(|(_, id)| *id);
        ColorTable { entries }
    }
}

/// Final colour -> ID assignments of a run. Displays as one `key:id` line
/// per colour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<(ColorKey, u32)>,
}

impl ColorTable {
    pub fn entries(&self) -> &[(ColorKey, u32)] {
        &self.entries
    }

    pub fn id_of(&self, key: &ColorKey) -> Option<u32> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|(key, id)| format!("{}:{}", key, id))
    }
}

impl fmt::Display for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
