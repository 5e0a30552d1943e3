use std::collections::VecDeque;

use ahash::AHashSet;

use crate::{errors::GraphStoreError, store::SqliteStore};

/// Ids of every node reachable from `start` over zero or more forward
/// hops, start first, expanded breadth-first with ties in edge-creation
/// order. The seen set keeps cycles, self-loops and duplicate edges from
/// re-enqueueing a node, so the walk always terminates.
pub fn reachable_ids(store: &SqliteStore, start: i64) -> Result<Vec<i64>, GraphStoreError> {
    let mut visited = Vec::new();
    let mut seen = AHashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    seen.insert(start);
    while let Some(node) = queue.pop_front() {
        visited.push(node);
        for next in store.fetch_outgoing(node)? {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(visited)
}
