//! staffgraph-api: REST resource layer over the staffgraph directory.
//!
//! Parses query-string filters and request bodies, hands them to a
//! [`Directory`](staffgraph_core::Directory) and shapes the results into JSON.
//! Handlers are stateless apart from the shared directory handle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::HttpError;
pub use routes::router;
pub use state::AppState;
