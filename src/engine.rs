use crate::{
    errors::GraphStoreError,
    store::{GraphEdge, GraphNode, SqliteStore},
    validate::{EdgeExistence, NodeExistence, ensure_all_exist},
};

/// Mutation and query orchestration over a borrowed store. Every batch is
/// validated in full before any row changes: one absent id rejects the
/// whole batch with nothing applied. Validation and mutation are separate
/// store calls, so a concurrent delete in between shows up as the
/// mutation touching fewer rows, never as a dangling edge.
pub struct GraphEngine<'a> {
    store: &'a SqliteStore,
}

impl<'a> GraphEngine<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// Nodes reference nothing, so creation skips validation entirely.
    pub fn create_nodes(&self, count: usize) -> Result<Vec<GraphNode>, GraphStoreError> {
        self.store.create_nodes(count)
    }

    pub fn delete_nodes(&self, ids: &[i64]) -> Result<(), GraphStoreError> {
        let ids = ensure_all_exist(&NodeExistence::new(self.store), ids.iter().copied())?;
        self.store.delete_nodes(&ids)
    }

    /// Validates the union of endpoints across the whole batch as one
    /// set, then inserts every edge.
    pub fn create_edges(&self, pairs: &[(i64, i64)]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        let endpoints = pairs.iter().flat_map(|&(from, to)| [from, to]);
        ensure_all_exist(&NodeExistence::new(self.store), endpoints)?;
        self.store.create_edges(pairs)
    }

    pub fn swap_edge_directions(&self, ids: &[i64]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        let ids = ensure_all_exist(&EdgeExistence::new(self.store), ids.iter().copied())?;
        self.store.swap_edge_directions(&ids)
    }

    pub fn delete_edges(&self, ids: &[i64]) -> Result<(), GraphStoreError> {
        let ids = ensure_all_exist(&EdgeExistence::new(self.store), ids.iter().copied())?;
        self.store.delete_edges(&ids)
    }

    /// Reachability only needs the start node checked, so it bypasses the
    /// batch gate and goes straight to the traversal.
    pub fn reachable_nodes(&self, node_id: i64) -> Result<Vec<GraphNode>, GraphStoreError> {
        if self.store.get_node(node_id)?.is_none() {
            return Err(GraphStoreError::nodes_not_found([node_id]));
        }
        self.store.get_reachable_nodes(node_id)
    }
}

impl SqliteStore {
    pub fn engine(&self) -> GraphEngine<'_> {
        GraphEngine::new(self)
    }
}
