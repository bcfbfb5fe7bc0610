//! Runtime configuration.
//!
//! All settings come from command-line options backed by environment
//! variables (see the binary's clap definition); this struct is the
//! library-facing view of them.

use std::path::PathBuf;

use crate::types::{AssistantError, Result};

/// Default QA inference endpoint: German extractive QA model on the
/// Hugging Face inference API.
pub const DEFAULT_QA_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/deepset/gelectra-base-germanquad";

/// Default bolt endpoint of a local Neo4j instance.
pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";

/// Assistant settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Neo4j bolt URI
    pub neo4j_uri: String,
    /// Neo4j username
    pub neo4j_user: String,
    /// Neo4j password
    pub neo4j_password: String,
    /// Extractive-QA inference endpoint URL
    pub qa_endpoint: String,
    /// Optional bearer token for the inference endpoint
    pub qa_token: Option<String>,
    /// Log file path (append mode)
    pub log_file: PathBuf,
}

impl Settings {
    /// Validate settings that clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.neo4j_uri.trim().is_empty() {
            return Err(AssistantError::config("Neo4j URI must not be empty"));
        }
        if !self.qa_endpoint.starts_with("http://") && !self.qa_endpoint.starts_with("https://") {
            return Err(AssistantError::config(format!(
                "QA endpoint must be an http(s) URL, got '{}'",
                self.qa_endpoint
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            neo4j_uri: DEFAULT_NEO4J_URI.to_string(),
            neo4j_user: "neo4j".to_string(),
            neo4j_password: String::new(),
            qa_endpoint: DEFAULT_QA_ENDPOINT.to_string(),
            qa_token: None,
            log_file: PathBuf::from("skyqa.log"),
        }
    }
}
