use ahash::AHashMap;
use parking_lot::RwLock;

use crate::errors::GraphStoreError;

/// Memo of outgoing adjacency lists keyed by node id. Only the forward
/// direction is cached; the traversal never walks to->from.
#[derive(Default)]
pub struct AdjacencyCache {
    inner: RwLock<AHashMap<i64, Vec<i64>>>,
}

impl AdjacencyCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
        }
    }

    /// Returns the cached list for `key`, loading and memoizing it on a
    /// miss. Load failures are not cached.
    pub fn try_cached<F>(&self, key: i64, load: F) -> Result<Vec<i64>, GraphStoreError>
    where
        F: FnOnce() -> Result<Vec<i64>, GraphStoreError>,
    {
        if let Some(cached) = self.inner.read().get(&key) {
            return Ok(cached.clone());
        }
        let loaded = load()?;
        self.inner.write().insert(key, loaded.clone());
        Ok(loaded)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
