//! Route handlers, one module per resource.

pub mod departments;
pub mod employees;
pub mod health;

use serde::Serialize;

/// Body of a successful write.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
