use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use serde::{Deserialize, Serialize};

use crate::{cache::AdjacencyCache, errors::GraphStoreError, schema::ensure_schema, traverse};

/// Identity-only vertex. Ids are SQLite rowids: assigned on insert,
/// monotonically increasing, never reused within a store file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: i64,
}

/// Directed edge. Self-loops and parallel duplicates are both legal;
/// endpoints only change through a direction swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub id: i64,
    pub from_node_id: i64,
    pub to_node_id: i64,
}

/// Point-in-time read of the whole graph. A query result, not a stored
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Durable node/edge collections over one SQLite connection. Each call
/// commits atomically before returning; batch mutations run inside a
/// single transaction. Existence of referenced ids is the caller's
/// contract (the engine validates upstream); deletes here are plain
/// idempotent row removals.
pub struct SqliteStore {
    conn: Connection,
    outgoing_cache: AdjacencyCache,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GraphStoreError> {
        let conn =
            Connection::open(path).map_err(|e| GraphStoreError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, GraphStoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| GraphStoreError::connection(e.to_string()))?;
        ensure_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Allocates `count` fresh nodes in one transaction and returns them
    /// in allocation order. `count == 0` is an empty batch.
    pub fn create_nodes(&self, count: usize) -> Result<Vec<GraphNode>, GraphStoreError> {
        let tx = self.transaction()?;
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            tx.execute("INSERT INTO graph_nodes DEFAULT VALUES", [])
                .map_err(|e| GraphStoreError::query(e.to_string()))?;
            nodes.push(GraphNode {
                id: tx.last_insert_rowid(),
            });
        }
        tx.commit()
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        Ok(nodes)
    }

    pub fn get_node(&self, id: i64) -> Result<Option<GraphNode>, GraphStoreError> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM graph_nodes WHERE id=?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        Ok(found.map(|id| GraphNode { id }))
    }

    /// The existing subset of `ids`, ordered by id. Missing ids are
    /// silently omitted; reporting them is the validator's job.
    pub fn get_nodes(&self, ids: &[i64]) -> Result<Vec<GraphNode>, GraphStoreError> {
        let ids = self.existing_node_ids(ids)?;
        Ok(ids.into_iter().map(|id| GraphNode { id }).collect())
    }

    pub fn get_all_nodes(&self) -> Result<Vec<GraphNode>, GraphStoreError> {
        let ids = self.collect_ids("SELECT id FROM graph_nodes ORDER BY id", &[])?;
        Ok(ids.into_iter().map(|id| GraphNode { id }).collect())
    }

    pub fn existing_node_ids(&self, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT id FROM graph_nodes WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        self.collect_ids(&sql, ids)
    }

    /// Removes the nodes and every edge touching them in one transaction,
    /// so no dangling edge is ever observable. Absent ids delete zero
    /// rows.
    pub fn delete_nodes(&self, ids: &[i64]) -> Result<(), GraphStoreError> {
        if ids.is_empty() {
            return Ok(());
        }
        let marks = placeholders(ids.len());
        let tx = self.transaction()?;
        tx.execute(
            &format!(
                "DELETE FROM graph_edges WHERE from_node_id IN ({marks}) OR to_node_id IN ({marks})"
            ),
            params_from_iter(ids),
        )
        .map_err(|e| GraphStoreError::query(e.to_string()))?;
        tx.execute(
            &format!("DELETE FROM graph_nodes WHERE id IN ({marks})"),
            params_from_iter(ids),
        )
        .map_err(|e| GraphStoreError::query(e.to_string()))?;
        tx.commit()
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        self.outgoing_cache.clear();
        Ok(())
    }

    pub fn delete_all_nodes(&self) -> Result<(), GraphStoreError> {
        let tx = self.transaction()?;
        tx.execute("DELETE FROM graph_edges", [])
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        tx.execute("DELETE FROM graph_nodes", [])
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        tx.commit()
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        self.outgoing_cache.clear();
        Ok(())
    }

    /// Inserts the whole batch in one transaction and returns the edges
    /// with assigned ids, in input order. Endpoint existence is the
    /// caller's guarantee.
    pub fn create_edges(&self, pairs: &[(i64, i64)]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        let tx = self.transaction()?;
        let mut edges = Vec::with_capacity(pairs.len());
        for &(from, to) in pairs {
            tx.execute(
                "INSERT INTO graph_edges(from_node_id, to_node_id) VALUES(?1, ?2)",
                params![from, to],
            )
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
            edges.push(GraphEdge {
                id: tx.last_insert_rowid(),
                from_node_id: from,
                to_node_id: to,
            });
        }
        tx.commit()
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        self.outgoing_cache.clear();
        Ok(edges)
    }

    pub fn get_edge(&self, id: i64) -> Result<Option<GraphEdge>, GraphStoreError> {
        self.conn
            .query_row(
                "SELECT id, from_node_id, to_node_id FROM graph_edges WHERE id=?1",
                params![id],
                |row| row_to_edge(row),
            )
            .optional()
            .map_err(|e| GraphStoreError::query(e.to_string()))
    }

    /// The existing subset of `ids`, ordered by id.
    pub fn get_edges(&self, ids: &[i64]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT id, from_node_id, to_node_id FROM graph_edges WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        self.collect_edges(&sql, ids)
    }

    pub fn get_all_edges(&self) -> Result<Vec<GraphEdge>, GraphStoreError> {
        self.collect_edges(
            "SELECT id, from_node_id, to_node_id FROM graph_edges ORDER BY id",
            &[],
        )
    }

    pub fn existing_edge_ids(&self, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT id FROM graph_edges WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        self.collect_ids(&sql, ids)
    }

    /// Exchanges from/to on every matched edge and returns the matched
    /// edges in stored-id order, not input order. SQLite evaluates the
    /// right-hand sides against the old row, so one UPDATE swaps both
    /// columns; self-loops are excluded and come back unchanged.
    pub fn swap_edge_directions(&self, ids: &[i64]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let marks = placeholders(ids.len());
        self.conn
            .execute(
                &format!(
                    "UPDATE graph_edges SET from_node_id=to_node_id, to_node_id=from_node_id \
                     WHERE id IN ({marks}) AND from_node_id != to_node_id"
                ),
                params_from_iter(ids),
            )
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        self.outgoing_cache.clear();
        self.get_edges(ids)
    }

    pub fn delete_edges(&self, ids: &[i64]) -> Result<(), GraphStoreError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.conn
            .execute(
                &format!(
                    "DELETE FROM graph_edges WHERE id IN ({})",
                    placeholders(ids.len())
                ),
                params_from_iter(ids),
            )
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        self.outgoing_cache.clear();
        Ok(())
    }

    /// Forward closure from `start`, inclusive, in breadth-first order.
    /// An absent start yields an empty result; callers wanting an error
    /// for that go through the engine.
    pub fn get_reachable_nodes(&self, start: i64) -> Result<Vec<GraphNode>, GraphStoreError> {
        if self.get_node(start)?.is_none() {
            return Ok(Vec::new());
        }
        let ids = traverse::reachable_ids(self, start)?;
        // Closure ids come from live edge rows and cascade keeps edge
        // endpoints alive, so no refetch is needed.
        Ok(ids.into_iter().map(|id| GraphNode { id }).collect())
    }
}

impl SqliteStore {
    /// Outgoing neighbor ids for `id`, duplicates included, in
    /// edge-creation order. Served from the adjacency cache between
    /// mutations.
    pub(crate) fn fetch_outgoing(&self, id: i64) -> Result<Vec<i64>, GraphStoreError> {
        self.outgoing_cache.try_cached(id, || {
            self.collect_ids(
                "SELECT to_node_id FROM graph_edges WHERE from_node_id=?1 ORDER BY id",
                &[id],
            )
        })
    }

    fn transaction(&self) -> Result<rusqlite::Transaction<'_>, GraphStoreError> {
        self.conn
            .unchecked_transaction()
            .map_err(|e| GraphStoreError::query(e.to_string()))
    }

    fn collect_ids(&self, sql: &str, ids: &[i64]) -> Result<Vec<i64>, GraphStoreError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params_from_iter(ids), |row| row.get(0))
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        let mut result = Vec::new();
        for item in rows {
            result.push(item.map_err(|e| GraphStoreError::query(e.to_string()))?);
        }
        Ok(result)
    }

    fn collect_edges(&self, sql: &str, ids: &[i64]) -> Result<Vec<GraphEdge>, GraphStoreError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        let rows = stmt
            .query_map(params_from_iter(ids), |row| row_to_edge(row))
            .map_err(|e| GraphStoreError::query(e.to_string()))?;
        let mut edges = Vec::new();
        for edge in rows {
            edges.push(edge.map_err(|e| GraphStoreError::query(e.to_string()))?);
        }
        Ok(edges)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            outgoing_cache: AdjacencyCache::new(),
        }
    }
}

fn row_to_edge(row: &rusqlite::Row<'_>) -> Result<GraphEdge, rusqlite::Error> {
    Ok(GraphEdge {
        id: row.get(0)?,
        from_node_id: row.get(1)?,
        to_node_id: row.get(2)?,
    })
}

/// Numbered placeholders `?1,?2,...` so the same list can bind two IN
/// clauses in one statement.
fn placeholders(count: usize) -> String {
    let mut marks = String::new();
    for idx in 1..=count {
        if idx > 1 {
            marks.push(',');
        }
        marks.push_str(&format!("?{idx}"));
    }
    marks
}
