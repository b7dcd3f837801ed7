//! staffgraph-graph: Neo4j client for the employee/department directory.
//!
//! Every directory read and write flows through this crate. Each operation
//! runs as one Neo4j transaction, and all caller-supplied filter names,
//! filter values and sort keys are bound as query parameters.

pub mod client;
pub mod cypher;
pub mod directory;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError, Transaction};
