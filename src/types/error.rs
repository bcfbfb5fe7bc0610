//! Error types for the assistant.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `From`
//! implementations. Every fallible boundary (catalog fetch, graph query,
//! model invocation) returns `Result` explicitly; nothing relies on panics.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Error type covering all assistant operations.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Neo4j driver error (connection or query execution)
    #[error("Graph query failed: {0}")]
    Graph(#[from] neo4rs::Error),

    /// Row or node could not be decoded into the expected shape
    #[error("Graph result decoding failed: {0}")]
    Decode(#[from] neo4rs::DeError),

    /// QA model request failed or returned an unusable payload
    #[error("Model request failed: {0}")]
    Model(String),

    /// HTTP transport error (QA inference endpoint)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Line editor error in the interactive shell
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssistantError {
    /// Create a model error with context.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a configuration error with context.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
