//! Extractive question-answering model boundary.
//!
//! The model is a black box taking (question, context) and returning an
//! answer span or nothing. [`AnswerExtractor`] is the seam; [`RemoteQaModel`]
//! talks to an HTTP inference endpoint.

pub mod remote;

use async_trait::async_trait;

use crate::types::Result;

pub use remote::RemoteQaModel;

/// Extractive question answering over a text context.
#[async_trait]
pub trait AnswerExtractor: Send + Sync {
    /// Extract an answer span for `question` from `context`.
    ///
    /// Returns `None` when the model yields no usable span.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Model` or `AssistantError::Http` when the
    /// model cannot be reached or returns an error payload.
    async fn extract(&self, question: &str, context: &str) -> Result<Option<String>>;
}
