use rusqlite::Connection;

use crate::errors::GraphStoreError;

/// AUTOINCREMENT keeps ids monotonic for the lifetime of a store file,
/// even across deletes.
pub fn ensure_schema(conn: &Connection) -> Result<(), GraphStoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS graph_nodes (
            id INTEGER PRIMARY KEY AUTOINCREMENT
        );
        CREATE TABLE IF NOT EXISTS graph_edges (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            from_node_id INTEGER NOT NULL,
            to_node_id   INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_edges_from ON graph_edges(from_node_id);
        CREATE INDEX IF NOT EXISTS idx_edges_to ON graph_edges(to_node_id);
        "#,
    )
    .map_err(|e| GraphStoreError::schema(e.to_string()))?;
    Ok(())
}
