//! Load-once session cache for the dataset.
//!
//! The dashboard loads its one survey CSV once per session and serves every
//! page render from that copy. There is no invalidation policy: if the
//! underlying file changes, the cached copy is stale until process restart.
//! Edited copies produced by the raw-data editor are disjoint values and are
//! never fed back into this cache.

use std::sync::OnceLock;

use crate::error::EngineResult;
use crate::table::Table;

/// A write-once slot holding the session's dataset.
#[derive(Debug, Default)]
pub struct DatasetCache {
    slot: OnceLock<Table>,
}

impl DatasetCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the cached table, loading it with `load` on first use.
    ///
    /// A load error is returned to the caller and nothing is cached, so a
    /// later call retries the load.
    pub fn get_or_load<F>(&self, load: F) -> EngineResult<&Table>
    where
        F: FnOnce() -> EngineResult<Table>,
    {
        if let Some(table) = self.slot.get() {
            return Ok(table);
        }
        let table = load()?;
        Ok(self.slot.get_or_init(|| table))
    }

    /// Returns the cached table if one has been loaded.
    pub fn get(&self) -> Option<&Table> {
        self.slot.get()
    }
}
