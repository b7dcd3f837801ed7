use thiserror::Error;

/// Top-level error type for directory operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{label} not found: {id}")]
    NotFound { label: String, id: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DirectoryError {
    pub fn not_found(label: &str, id: impl ToString) -> Self {
        Self::NotFound {
            label: label.to_string(),
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
