//! Graph query layer.
//!
//! All graph access goes through the [`ObjectStore`] trait; [`GraphClient`]
//! is the Neo4j-backed implementation. The trait exists so the catalog and
//! the answer router can be exercised against an in-memory store in tests.

pub mod client;

use async_trait::async_trait;

use crate::types::{ObjectRelations, OrbitRelations, Result};

pub use client::GraphClient;

/// Read-only access to the celestial object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all known object names in alphabetical order.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Graph` if the query fails.
    async fn object_names(&self) -> Result<Vec<String>>;

    /// Fetch an object with its orbit neighborhood as full entities.
    ///
    /// Returns `None` when no object with this name exists.
    async fn fetch_object(&self, name: &str) -> Result<Option<ObjectRelations>>;

    /// Fetch an object's orbit neighborhood reduced to names.
    ///
    /// Returns `None` when no object with this name exists.
    async fn fetch_orbit(&self, name: &str) -> Result<Option<OrbitRelations>>;
}
