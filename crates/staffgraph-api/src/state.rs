//! State shared by every handler.

use std::sync::Arc;

use staffgraph_core::{Directory, UpdatePolicy};

/// Shared handler state: the directory handle plus request-independent settings.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn Directory>,
    pub update_policy: UpdatePolicy,
}

impl AppState {
    pub fn new(directory: Arc<dyn Directory>, update_policy: UpdatePolicy) -> Self {
        Self {
            directory,
            update_policy,
        }
    }
}
