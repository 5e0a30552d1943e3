use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphStoreError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("node(s) with id(s) {0:?} not found")]
    NodeNotFound(Vec<i64>),
    #[error("edge(s) with id(s) {0:?} not found")]
    EdgeNotFound(Vec<i64>),
}

impl GraphStoreError {
    pub fn connection<T: Into<String>>(msg: T) -> Self {
        GraphStoreError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        GraphStoreError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        GraphStoreError::QueryError(msg.into())
    }

    /// The carried ids come out sorted and deduplicated whatever order the
    /// caller collected them in.
    pub fn nodes_not_found<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        GraphStoreError::NodeNotFound(normalize_ids(ids))
    }

    pub fn edges_not_found<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        GraphStoreError::EdgeNotFound(normalize_ids(ids))
    }
}

fn normalize_ids<I: IntoIterator<Item = i64>>(ids: I) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
