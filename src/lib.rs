//! skyqa - question answering over a Neo4j graph of celestial objects.
//!
//! The crate is thin orchestration glue between two external services:
//! - a Neo4j instance holding `CelestialObject` nodes linked by `ORBIT_OF`
//!   relationships (satellite -> orbited object), and
//! - an extractive question-answering model behind an HTTP inference endpoint.
//!
//! A question is answered in four steps: resolve which known object the
//! question mentions, fetch that object's properties and orbit relationships
//! from the graph, and either answer directly from the relationships (for
//! orbit questions) or hand a formatted fact context to the QA model.

pub mod answer;
pub mod catalog;
pub mod config;
pub mod context;
pub mod graph;
pub mod logging;
pub mod qa;
pub mod resolver;
pub mod shell;
pub mod types;

pub use answer::AnswerRouter;
pub use catalog::Catalog;
pub use config::Settings;
pub use graph::{GraphClient, ObjectStore};
pub use qa::{AnswerExtractor, RemoteQaModel};
pub use types::{AssistantError, CelestialObject, ObjectRelations, OrbitRelations, Result};
