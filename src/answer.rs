//! Answer routing.
//!
//! A question either asks about orbit relationships (detected by a fixed
//! keyword set) and is answered directly from the graph, or it goes through
//! the generic path: assemble a fact context and let the QA model extract an
//! answer span. Every failure on either path is caught here, logged, and
//! turned into one fixed user-facing error string.

use std::sync::Arc;
use tracing::{debug, error};

use crate::catalog::Catalog;
use crate::context;
use crate::graph::ObjectStore;
use crate::qa::AnswerExtractor;
use crate::resolver;
use crate::types::Result;

/// Fixed user-facing messages (German, matching the rest of the surface).
pub mod messages {
    /// No catalog name occurs in the question.
    pub const NO_KNOWN_OBJECT: &str =
        "Ich konnte kein bekanntes Himmelsobjekt in der Frage finden.";

    /// The object resolved but the graph holds no record for it.
    pub const NO_INFORMATION: &str =
        "Ich habe keine Informationen zu diesem Himmelsobjekt.";

    /// Orbit path: the object has neither a parent nor satellites.
    pub const NO_RELATIONS: &str =
        "Ich konnte keine Beziehungen zu diesem Himmelsobjekt finden.";

    /// The QA model produced no answer span.
    pub const NO_ANSWER: &str = "Darauf habe ich leider keine Antwort gefunden.";

    /// Catch-all for any per-question failure.
    pub const PROCESSING_ERROR: &str =
        "Bei der Verarbeitung der Frage ist ein Fehler aufgetreten. Bitte versuchen Sie es erneut.";
}

/// Keywords that route a question to the orbit-relationship path.
const ORBIT_KEYWORDS: &[&str] = &[
    "umkreist",
    "umkreisen",
    "orbit",
    "satellit",
    "mond",
    "monde",
    "trabant",
];

/// True when the question asks about orbit relationships.
pub fn is_orbit_question(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    ORBIT_KEYWORDS.iter().any(|kw| question_lower.contains(kw))
}

/// Dispatches questions to the orbit path or the QA-model path.
pub struct AnswerRouter {
    store: Arc<dyn ObjectStore>,
    model: Arc<dyn AnswerExtractor>,
    catalog: Catalog,
}

impl AnswerRouter {
    /// Create a router over a store and a QA model.
    pub fn new(store: Arc<dyn ObjectStore>, model: Arc<dyn AnswerExtractor>) -> Self {
        Self {
            store,
            model,
            catalog: Catalog::new(),
        }
    }

    /// Answer a question, converting any failure to the fixed error string.
    ///
    /// This is the outermost handling point for a single question; no error
    /// escapes past it.
    pub async fn answer(&mut self, question: &str) -> String {
        match self.try_answer(question).await {
            Ok(answer) => answer,
            Err(err) => {
                error!("question processing failed: {err}");
                messages::PROCESSING_ERROR.to_string()
            }
        }
    }

    /// Refresh the catalog cache and return the new name list.
    pub async fn refresh_catalog(&mut self) -> Result<Vec<String>> {
        self.catalog.invalidate();
        Ok(self.catalog.get(self.store.as_ref()).await?.to_vec())
    }

    /// Current catalog names, populating the cache if needed.
    pub async fn catalog_names(&mut self) -> Result<Vec<String>> {
        Ok(self.catalog.get(self.store.as_ref()).await?.to_vec())
    }

    async fn try_answer(&mut self, question: &str) -> Result<String> {
        if is_orbit_question(question) {
            debug!("routing to orbit path");
            self.orbit_answer(question).await
        } else {
            debug!("routing to QA-model path");
            self.model_answer(question).await
        }
    }

    async fn resolve_object(&mut self, question: &str) -> Result<Option<String>> {
        let names = self.catalog.get(self.store.as_ref()).await?;
        Ok(resolver::resolve(question, names).map(str::to_string))
    }

    async fn orbit_answer(&mut self, question: &str) -> Result<String> {
        let Some(name) = self.resolve_object(question).await? else {
            return Ok(messages::NO_KNOWN_OBJECT.to_string());
        };

        let Some(relations) = self.store.fetch_orbit(&name).await? else {
            return Ok(messages::NO_INFORMATION.to_string());
        };

        if relations.is_empty() {
            return Ok(messages::NO_RELATIONS.to_string());
        }

        let mut sentences = Vec::new();
        if let Some(parent) = &relations.parent {
            sentences.push(context::parent_sentence(&relations.name, parent));
        }
        if !relations.satellites.is_empty() {
            sentences.push(context::satellites_sentence(
                &relations.name,
                &relations.satellites,
            ));
        }
        Ok(sentences.join(" "))
    }

    async fn model_answer(&mut self, question: &str) -> Result<String> {
        let Some(name) = self.resolve_object(question).await? else {
            return Ok(messages::NO_KNOWN_OBJECT.to_string());
        };

        let Some(relations) = self.store.fetch_object(&name).await? else {
            return Ok(messages::NO_INFORMATION.to_string());
        };

        let context = context::assemble(&relations);
        match self.model.extract(question, &context).await? {
            Some(answer) => Ok(answer),
            None => Ok(messages::NO_ANSWER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_keywords_detected_case_insensitively() {
        assert!(is_orbit_question("Was umkreist Mars?"));
        assert!(is_orbit_question("Hat Jupiter MONDE?"));
        assert!(is_orbit_question("Welche Satelliten hat die Erde?"));
    }

    #[test]
    fn factual_questions_take_the_model_path() {
        assert!(!is_orbit_question("Wie weit ist Sirius entfernt?"));
        assert!(!is_orbit_question("Was ist die Andromeda-Galaxie?"));
    }
}
