use ahash::AHashSet;

use crate::{errors::GraphStoreError, store::SqliteStore};

/// Batch existence check for one entity kind: how to fetch the existing
/// subset of a requested id set, and which error reports the absent ones.
pub trait ExistenceCheck {
    fn fetch_existing(&self, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError>;
    fn missing(ids: Vec<i64>) -> GraphStoreError;
}

pub struct NodeExistence<'a> {
    store: &'a SqliteStore,
}

impl<'a> NodeExistence<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }
}

impl ExistenceCheck for NodeExistence<'_> {
    fn fetch_existing(&self, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError> {
        self.store.existing_node_ids(ids)
    }

    fn missing(ids: Vec<i64>) -> GraphStoreError {
        GraphStoreError::nodes_not_found(ids)
    }
}

pub struct EdgeExistence<'a> {
    store: &'a SqliteStore,
}

impl<'a> EdgeExistence<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }
}

impl ExistenceCheck for EdgeExistence<'_> {
    fn fetch_existing(&self, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError> {
        self.store.existing_edge_ids(ids)
    }

    fn missing(ids: Vec<i64>) -> GraphStoreError {
        GraphStoreError::edges_not_found(ids)
    }
}

/// Gate in front of every batch mutation. Dedupes the requested ids,
/// fetches the existing subset and fails with the complete missing set
/// before the caller touches a row. Missing is the strict difference
/// `requested - existing`; requested duplicates collapse instead of
/// surfacing as phantom misses. On success returns the deduplicated
/// requested ids, order unspecified.
pub fn ensure_all_exist<C: ExistenceCheck>(
    check: &C,
    requested: impl IntoIterator<Item = i64>,
) -> Result<Vec<i64>, GraphStoreError> {
    let requested: AHashSet<i64> = requested.into_iter().collect();
    let deduped: Vec<i64> = requested.iter().copied().collect();
    let existing: AHashSet<i64> = check.fetch_existing(&deduped)?.into_iter().collect();
    let missing: Vec<i64> = deduped
        .iter()
        .copied()
        .filter(|id| !existing.contains(id))
        .collect();
    if !missing.is_empty() {
        // The error constructor sorts and dedupes the list.
        return Err(C::missing(missing));
    }
    Ok(deduped)
}
