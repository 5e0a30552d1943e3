//! SQLite-backed directed-graph store with batch-validated mutations.
//! Nodes are identity-only, edges are directed and may self-loop or
//! duplicate; every batch mutation is all-or-nothing behind a single
//! existence-validation gate.

pub mod cache;
pub mod client;
pub mod engine;
pub mod errors;
pub mod schema;
pub mod service;
pub mod store;
pub mod traverse;
pub mod validate;

pub use crate::engine::GraphEngine;
pub use crate::errors::GraphStoreError;
pub use crate::service::{GraphService, SeedConfig};
pub use crate::store::{GraphEdge, GraphNode, GraphSnapshot, SqliteStore};
