//! Neo4j connection management, transactions, and the shared graph client.

use neo4rs::{ConfigBuilder, Graph, Query, Row, Txn};
use serde::Deserialize;

use staffgraph_core::DirectoryError;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("{label} not found: {id}")]
    NotFound { label: String, id: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GraphError {
    pub(crate) fn not_found(label: &str, id: impl ToString) -> Self {
        Self::NotFound {
            label: label.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<GraphError> for DirectoryError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NotFound { label, id } => DirectoryError::NotFound { label, id },
            GraphError::Serialization(msg) => DirectoryError::Serialization(msg),
            other => DirectoryError::Database(other.to_string()),
        }
    }
}

/// Configuration for connecting to Neo4j.
///
/// Loaded from the `[neo4j]` section of `staffgraph.toml` or
/// `STAFFGRAPH__NEO4J__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "test1234".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// Created once at startup and shared by every request handler.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Begin a transaction on a pooled connection.
    pub async fn begin(&self) -> Result<Transaction, GraphError> {
        let txn = self.graph.start_txn().await?;
        Ok(Transaction { txn })
    }

    /// Execute a single write statement in its own transaction.
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        let mut txn = self.begin().await?;
        let result = txn.run(query).await;
        txn.finish(result).await
    }

    /// Execute a single read statement in its own transaction and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<Row>, GraphError> {
        let mut txn = self.begin().await?;
        let result = txn.rows(query).await;
        txn.finish(result).await
    }

    /// Execute a single read statement and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<Row>, GraphError> {
        let mut txn = self.begin().await?;
        let result = txn.first(query).await;
        txn.finish(result).await
    }
}

/// An open Neo4j transaction.
///
/// Callers hand the outcome of their work to [`Transaction::finish`], which
/// commits on success and rolls back on error, so the connection goes back to
/// the pool on every exit path.
pub struct Transaction {
    txn: Txn,
}

impl Transaction {
    /// Run a statement, discarding any result rows.
    pub async fn run(&mut self, query: Query) -> Result<(), GraphError> {
        self.txn.run(query).await?;
        Ok(())
    }

    /// Run a statement and collect every row.
    pub async fn rows(&mut self, query: Query) -> Result<Vec<Row>, GraphError> {
        let mut stream = self.txn.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next(self.txn.handle()).await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Run a statement and return its first row, if any.
    pub async fn first(&mut self, query: Query) -> Result<Option<Row>, GraphError> {
        Ok(self.rows(query).await?.into_iter().next())
    }

    /// Commit if `result` is Ok, roll back otherwise, and pass `result` through.
    pub async fn finish<T>(self, result: Result<T, GraphError>) -> Result<T, GraphError> {
        match result {
            Ok(value) => {
                self.txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = self.txn.rollback().await {
                    tracing::warn!(error = %rollback, "Transaction rollback failed");
                }
                Err(e)
            }
        }
    }
}

/// Read a column from a row, reporting a missing or mistyped value.
pub(crate) fn column<T>(row: &Row, key: &str) -> Result<T, GraphError>
where
    T: serde::de::DeserializeOwned,
{
    row.get::<T>(key)
        .map_err(|e| GraphError::Serialization(format!("Failed to read column {key}: {e}")))
}

/// Build a row from `(column, value)` pairs.
#[cfg(test)]
pub(crate) fn test_row(cells: Vec<(&str, neo4rs::BoltType)>) -> Row {
    let (fields, data): (Vec<neo4rs::BoltType>, Vec<neo4rs::BoltType>) = cells
        .into_iter()
        .map(|(key, value)| (neo4rs::BoltType::from(key), value))
        .unzip();
    Row::new(fields.into(), data.into())
}
