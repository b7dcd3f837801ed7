//! Configuration for the staffgraph API server.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`STAFFGRAPH__` prefix, `__` separator,
//!    e.g. `STAFFGRAPH__NEO4J__URI`)
//! 2. Config file (`staffgraph.toml` by default)
//! 3. Defaults

use serde::Deserialize;

use staffgraph_core::UpdatePolicy;
use staffgraph_graph::GraphConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub neo4j: GraphConfig,
}

/// HTTP server settings, from the `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (default: "127.0.0.1:5000").
    #[serde(default = "default_bind")]
    pub bind: String,

    /// What an employee update does when the target department is missing.
    #[serde(default)]
    pub update_policy: UpdatePolicy,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load from an optional config file (`file_prefix` plus any supported
    /// extension) overlaid with `STAFFGRAPH__*` environment variables.
    pub fn load(file_prefix: &str) -> anyhow::Result<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::with_name(file_prefix).required(false))
            .add_source(
                ::config::Environment::with_prefix("STAFFGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}
