//! HTTP client for an extractive-QA inference endpoint.
//!
//! Speaks the Hugging Face inference payload for question-answering
//! pipelines: `{"inputs": {"question": ..., "context": ...}}` in,
//! `{"answer": ..., "score": ...}` out. The default endpoint serves
//! `deepset/gelectra-base-germanquad`, a German extractive QA model.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::qa::AnswerExtractor;
use crate::types::{AssistantError, Result};

/// Request timeout for a single inference call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Debug, Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct QaResponse {
    answer: String,
    #[serde(default)]
    score: f64,
}

/// Remote extractive-QA model client.
pub struct RemoteQaModel {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl RemoteQaModel {
    /// Create a client for the given inference endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the QA inference endpoint
    /// * `token` - Optional bearer token for hosted endpoints
    pub fn new(endpoint: String, token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// Verify the model is loadable by running a trivial warmup question.
    ///
    /// Startup treats a failure here as fatal, mirroring an unloadable model.
    pub async fn verify(&self) -> Result<()> {
        self.request("Was ist die Sonne?", "Die Sonne ist ein Stern.")
            .await
            .map_err(|e| {
                error!("QA model warmup failed: {e}");
                e
            })?;
        info!(endpoint = %self.endpoint, "QA model ready");
        Ok(())
    }

    async fn request(&self, question: &str, context: &str) -> Result<QaResponse> {
        let body = QaRequest {
            inputs: QaInputs { question, context },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable error body".to_string());
            return Err(AssistantError::model(format!(
                "endpoint returned {status}: {text}"
            )));
        }

        Ok(response.json::<QaResponse>().await?)
    }
}

#[async_trait]
impl AnswerExtractor for RemoteQaModel {
    async fn extract(&self, question: &str, context: &str) -> Result<Option<String>> {
        let response = self.request(question, context).await?;
        debug!(score = response.score, "QA model answered");

        let answer = response.answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }
}
