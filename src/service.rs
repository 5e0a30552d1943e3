use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::GraphStoreError,
    store::{GraphSnapshot, SqliteStore},
};

const SEED_NODE_COUNT: usize = 25;

/// Fixed seed topology as offsets from the minimum id of the seeded node
/// batch. Absolute ids keep growing across repeated seeds; the shifted
/// template keeps the logical shape stable.
const SEED_EDGE_TEMPLATE: [(i64, i64); 32] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (0, 5),
    (1, 3),
    (1, 6),
    (1, 7),
    (2, 4),
    (2, 8),
    (3, 10),
    (5, 12),
    (6, 10),
    (7, 5),
    (7, 13),
    (9, 3),
    (9, 11),
    (10, 15),
    (11, 5),
    (12, 14),
    (14, 7),
    (14, 8),
    (15, 9),
    (16, 13),
    (16, 14),
    (17, 9),
    (18, 17),
    (19, 22),
    (20, 19),
    (20, 23),
    (20, 24),
    (21, 19),
    (22, 21),
];

/// Node and edge count ranges for the random seeder, endpoints inclusive.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub nodes: RangeInclusive<usize>,
    pub edges: RangeInclusive<usize>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            nodes: 10..=30,
            edges: 10..=30,
        }
    }
}

/// Whole-graph facade: snapshot, clear and the two reseeding flavors.
pub struct GraphService<'a> {
    store: &'a SqliteStore,
}

impl<'a> GraphService<'a> {
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// All nodes plus all edges. Two independent reads; a writer landing
    /// between them can skew the pair.
    pub fn snapshot(&self) -> Result<GraphSnapshot, GraphStoreError> {
        let nodes = self.store.get_all_nodes()?;
        let edges = self.store.get_all_edges()?;
        Ok(GraphSnapshot { nodes, edges })
    }

    /// Deletes every node, cascading every edge.
    pub fn clear(&self) -> Result<(), GraphStoreError> {
        self.store.delete_all_nodes()
    }

    /// Replaces the graph with the fixed template: 25 nodes, 31 edges,
    /// template pairs shifted by the batch's minimum assigned id.
    pub fn seed(&self) -> Result<GraphSnapshot, GraphStoreError> {
        self.store.delete_all_nodes()?;
        let nodes = self.store.create_nodes(SEED_NODE_COUNT)?;
        // Allocation order is ascending, so the first node holds the
        // batch minimum.
        let min_id = nodes[0].id;
        let pairs: Vec<(i64, i64)> = SEED_EDGE_TEMPLATE
            .iter()
            .map(|&(from, to)| (from + min_id, to + min_id))
            .collect();
        let edges = self.store.create_edges(&pairs)?;
        Ok(GraphSnapshot { nodes, edges })
    }

    pub fn seed_random(&self, config: &SeedConfig) -> Result<GraphSnapshot, GraphStoreError> {
        self.seed_random_with(config, &mut StdRng::from_entropy())
    }

    /// Random topology with caller-supplied randomness. Endpoints are
    /// drawn uniformly over the new batch's id range, so self-loops and
    /// duplicate edges can occur and some nodes may stay isolated.
    pub fn seed_random_with<R: Rng>(
        &self,
        config: &SeedConfig,
        rng: &mut R,
    ) -> Result<GraphSnapshot, GraphStoreError> {
        self.store.delete_all_nodes()?;
        let node_count = rng.gen_range(config.nodes.clone());
        let nodes = self.store.create_nodes(node_count)?;
        if nodes.is_empty() {
            return Ok(GraphSnapshot {
                nodes,
                edges: Vec::new(),
            });
        }
        let min_id = nodes[0].id;
        let max_id = nodes[nodes.len() - 1].id;
        let edge_count = rng.gen_range(config.edges.clone());
        let pairs: Vec<(i64, i64)> = (0..edge_count)
            .map(|_| {
                (
                    rng.gen_range(min_id..=max_id),
                    rng.gen_range(min_id..=max_id),
                )
            })
            .collect();
        let edges = self.store.create_edges(&pairs)?;
        Ok(GraphSnapshot { nodes, edges })
    }
}

impl SqliteStore {
    pub fn service(&self) -> GraphService<'_> {
        GraphService::new(self)
    }
}
