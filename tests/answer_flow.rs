//! End-to-end answer routing against in-memory stubs.
//!
//! Exercises both router paths, the fixed user-facing messages, and the
//! error conversion at the question boundary without a database or a model
//! endpoint.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use skyqa::answer::{messages, AnswerRouter};
use skyqa::graph::ObjectStore;
use skyqa::qa::AnswerExtractor;
use skyqa::types::{
    AssistantError, CelestialObject, ObjectRelations, OrbitRelations, Result,
};

/// In-memory object store: name -> optional parent name.
#[derive(Default)]
struct MemoryStore {
    orbits: Mutex<BTreeMap<String, Option<String>>>,
    fail_queries: bool,
}

impl MemoryStore {
    fn with_orbit(objects: &[(&str, Option<&str>)]) -> Self {
        let orbits = objects
            .iter()
            .map(|(name, parent)| (name.to_string(), parent.map(str::to_string)))
            .collect();
        Self {
            orbits: Mutex::new(orbits),
            fail_queries: false,
        }
    }

    fn failing() -> Self {
        Self {
            orbits: Mutex::new(BTreeMap::from([("Mars".to_string(), None)])),
            fail_queries: true,
        }
    }

    fn insert(&self, name: &str, parent: Option<&str>) {
        self.orbits
            .lock()
            .unwrap()
            .insert(name.to_string(), parent.map(str::to_string));
    }

    fn satellites_of(&self, name: &str) -> Vec<String> {
        self.orbits
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, parent)| parent.as_deref() == Some(name))
            .map(|(child, _)| child.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn object_names(&self) -> Result<Vec<String>> {
        Ok(self.orbits.lock().unwrap().keys().cloned().collect())
    }

    async fn fetch_object(&self, name: &str) -> Result<Option<ObjectRelations>> {
        if self.fail_queries {
            return Err(AssistantError::config("query failure injected"));
        }
        let parent = match self.orbits.lock().unwrap().get(name) {
            Some(parent) => parent.clone(),
            None => return Ok(None),
        };
        Ok(Some(ObjectRelations {
            object: CelestialObject {
                name: name.to_string(),
                object_type: Some("planet".to_string()),
                distance_from_earth_ly: Some(0.000024),
                size_km: Some(6779.0),
                mass_kg: Some(6.39e23),
            },
            parent: parent.map(CelestialObject::named),
            satellites: self
                .satellites_of(name)
                .into_iter()
                .map(CelestialObject::named)
                .collect(),
        }))
    }

    async fn fetch_orbit(&self, name: &str) -> Result<Option<OrbitRelations>> {
        if self.fail_queries {
            return Err(AssistantError::config("query failure injected"));
        }
        let parent = match self.orbits.lock().unwrap().get(name) {
            Some(parent) => parent.clone(),
            None => return Ok(None),
        };
        Ok(Some(OrbitRelations {
            name: name.to_string(),
            parent,
            satellites: self.satellites_of(name),
        }))
    }
}

/// QA model stub: canned answer, no answer, or failure; records the context
/// it was called with.
struct StubModel {
    answer: Option<String>,
    fail: bool,
    last_context: Mutex<Option<String>>,
}

impl StubModel {
    fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            fail: false,
            last_context: Mutex::new(None),
        }
    }

    fn silent() -> Self {
        Self {
            answer: None,
            fail: false,
            last_context: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            answer: None,
            fail: true,
            last_context: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AnswerExtractor for StubModel {
    async fn extract(&self, _question: &str, context: &str) -> Result<Option<String>> {
        if self.fail {
            return Err(AssistantError::model("inference failure injected"));
        }
        *self.last_context.lock().unwrap() = Some(context.to_string());
        Ok(self.answer.clone())
    }
}

fn router(store: MemoryStore, model: StubModel) -> (AnswerRouter, Arc<MemoryStore>, Arc<StubModel>) {
    let store = Arc::new(store);
    let model = Arc::new(model);
    (
        AnswerRouter::new(store.clone(), model.clone()),
        store,
        model,
    )
}

#[tokio::test]
async fn orbit_question_lists_satellites() {
    let store = MemoryStore::with_orbit(&[("Mars", None), ("Phobos", Some("Mars"))]);
    let (mut router, _, _) = router(store, StubModel::silent());

    let answer = router.answer("Was umkreist Mars?").await;
    assert!(answer.contains("Phobos"), "answer was: {answer}");
    assert_ne!(answer, messages::PROCESSING_ERROR);
    assert_ne!(answer, messages::NO_RELATIONS);
}

#[tokio::test]
async fn orbit_answer_contains_parent_sentence_verbatim() {
    let store = MemoryStore::with_orbit(&[("Mars", None), ("Phobos", Some("Mars"))]);
    let (mut router, _, _) = router(store, StubModel::silent());

    let answer = router.answer("Was umkreist Phobos?").await;
    assert!(answer.contains("Phobos umkreist Mars."), "answer was: {answer}");
}

#[tokio::test]
async fn orbit_question_without_relations_gives_fixed_message() {
    let store = MemoryStore::with_orbit(&[("Sirius", None)]);
    let (mut router, _, _) = router(store, StubModel::silent());

    let answer = router.answer("Hat Sirius Monde?").await;
    assert_eq!(answer, messages::NO_RELATIONS);
}

#[tokio::test]
async fn unknown_object_message_is_verbatim_on_both_paths() {
    let store = MemoryStore::with_orbit(&[("Mars", None)]);
    let (mut router, _, _) = router(store, StubModel::answering("egal"));

    let generic = router.answer("Wie weit ist Pluto entfernt?").await;
    assert_eq!(generic, "Ich konnte kein bekanntes Himmelsobjekt in der Frage finden.");

    let orbit = router.answer("Was umkreist Pluto?").await;
    assert_eq!(orbit, messages::NO_KNOWN_OBJECT);
}

#[tokio::test]
async fn generic_path_returns_model_answer_with_fact_context() {
    let store = MemoryStore::with_orbit(&[("Mars", None), ("Phobos", Some("Mars"))]);
    let (mut router, _, model) = router(store, StubModel::answering("6779 km"));

    let answer = router.answer("Wie groß ist Mars?").await;
    assert_eq!(answer, "6779 km");

    let context = model.last_context.lock().unwrap().clone().unwrap();
    assert!(context.contains("Mars ist ein planet."));
    assert!(context.contains("Mars wird von Phobos umkreist."));
}

#[tokio::test]
async fn silent_model_gives_no_answer_message() {
    let store = MemoryStore::with_orbit(&[("Mars", None)]);
    let (mut router, _, _) = router(store, StubModel::silent());

    let answer = router.answer("Wie schwer ist Mars?").await;
    assert_eq!(answer, messages::NO_ANSWER);
}

#[tokio::test]
async fn model_failure_becomes_fixed_error_string() {
    let store = MemoryStore::with_orbit(&[("Mars", None)]);
    let (mut router, _, _) = router(store, StubModel::failing());

    let answer = router.answer("Wie schwer ist Mars?").await;
    assert_eq!(answer, messages::PROCESSING_ERROR);
}

#[tokio::test]
async fn query_failure_becomes_fixed_error_string() {
    let (mut router, _, _) = router(MemoryStore::failing(), StubModel::silent());

    // Catalog load succeeds, the per-object query fails.
    let answer = router.answer("Wie schwer ist Mars?").await;
    assert_eq!(answer, messages::PROCESSING_ERROR);
}

#[tokio::test]
async fn refresh_catalog_picks_up_new_objects() {
    let store = MemoryStore::with_orbit(&[("Mars", None)]);
    let (mut router, store, _) = router(store, StubModel::silent());

    assert_eq!(router.catalog_names().await.unwrap(), ["Mars"]);

    store.insert("Phobos", Some("Mars"));
    // Cached copy is served until an explicit refresh.
    assert_eq!(router.catalog_names().await.unwrap(), ["Mars"]);
    assert_eq!(router.refresh_catalog().await.unwrap(), ["Mars", "Phobos"]);
}
