//! staffgraph-core: Shared types and error handling for the staffgraph directory.
//!
//! This crate provides the foundational types used by the graph client and the
//! HTTP layer:
//! - Employee and department records as returned to API callers
//! - The list-query model (equality filters and a sort key)
//! - The `Directory` trait every store backend implements
//! - Common error types

pub mod directory;
pub mod error;
pub mod query;
pub mod types;

pub use directory::Directory;
pub use error::DirectoryError;
pub use query::ListQuery;
pub use types::{
    DepartmentInfo, DepartmentSummary, Employee, EmployeeDraft, EmployeeFields, EmployeeSummary,
    NodeId, UpdatePolicy,
};
