//! Neo4j-backed object store.
//!
//! Three parameterized, read-only Cypher queries: catalog listing, full
//! object fetch and orbit-only fetch. Query failures are logged here and
//! propagated to the caller; nothing is retried.

use async_trait::async_trait;
use neo4rs::{query, Graph};
use tracing::{debug, error, info};

use crate::graph::ObjectStore;
use crate::types::{CelestialObject, ObjectRelations, OrbitRelations, Result};

/// All known object names, alphabetically.
const CATALOG_QUERY: &str = "\
MATCH (obj)
WHERE obj.name IS NOT NULL
RETURN obj.name AS name
ORDER BY obj.name";

/// Object with parent (outgoing ORBIT_OF) and satellites (incoming ORBIT_OF)
/// as full property maps. `collect()` drops nulls, so an object without
/// satellites yields an empty list.
const OBJECT_QUERY: &str = "\
MATCH (obj {name: $object_name})
OPTIONAL MATCH (obj)-[:ORBIT_OF]->(parent)
OPTIONAL MATCH (child)-[:ORBIT_OF]->(obj)
RETURN obj {.name, .type, .distance_from_earth_ly, .size_km, .mass_kg} AS object,
       parent {.name, .type, .distance_from_earth_ly, .size_km, .mass_kg} AS parent,
       collect(child {.name, .type, .distance_from_earth_ly, .size_km, .mass_kg}) AS satellites";

/// Same traversal projected to name strings only.
const ORBIT_QUERY: &str = "\
MATCH (obj {name: $object_name})
OPTIONAL MATCH (obj)-[:ORBIT_OF]->(parent)
OPTIONAL MATCH (child)-[:ORBIT_OF]->(obj)
RETURN obj.name AS name,
       parent.name AS parent,
       collect(child.name) AS satellites";

/// Neo4j client for the celestial object graph.
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to a Neo4j instance over bolt.
    ///
    /// # Arguments
    ///
    /// * `uri` - Bolt URI (e.g., "bolt://localhost:7687")
    /// * `user` - Username
    /// * `password` - Password
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Graph` when the connection cannot be
    /// established; startup treats that as fatal.
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password).await.map_err(|e| {
            error!(uri, "failed to connect to Neo4j: {e}");
            e
        })?;
        info!(uri, "connected to Neo4j");
        Ok(Self { graph })
    }
}

#[async_trait]
impl ObjectStore for GraphClient {
    async fn object_names(&self) -> Result<Vec<String>> {
        let mut rows = self.graph.execute(query(CATALOG_QUERY)).await.map_err(|e| {
            error!("catalog query failed: {e}");
            e
        })?;

        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>("name")?);
        }
        debug!(count = names.len(), "loaded object catalog");
        Ok(names)
    }

    async fn fetch_object(&self, name: &str) -> Result<Option<ObjectRelations>> {
        let mut rows = self
            .graph
            .execute(query(OBJECT_QUERY).param("object_name", name))
            .await
            .map_err(|e| {
                error!(object = name, "object query failed: {e}");
                e
            })?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        Ok(Some(ObjectRelations {
            object: row.get::<CelestialObject>("object")?,
            parent: row.get::<Option<CelestialObject>>("parent")?,
            satellites: row.get::<Vec<CelestialObject>>("satellites")?,
        }))
    }

    async fn fetch_orbit(&self, name: &str) -> Result<Option<OrbitRelations>> {
        let mut rows = self
            .graph
            .execute(query(ORBIT_QUERY).param("object_name", name))
            .await
            .map_err(|e| {
                error!(object = name, "orbit query failed: {e}");
                e
            })?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };

        Ok(Some(OrbitRelations {
            name: row.get::<String>("name")?,
            parent: row.get::<Option<String>>("parent")?,
            satellites: row.get::<Vec<String>>("satellites")?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs a running Neo4j instance, configured via NEO4J_* variables.
    #[tokio::test]
    #[ignore]
    async fn catalog_query_against_live_instance() {
        let uri = std::env::var("NEO4J_URI").expect("NEO4J_URI not set");
        let user = std::env::var("NEO4J_USER").expect("NEO4J_USER not set");
        let password = std::env::var("NEO4J_PASSWORD").expect("NEO4J_PASSWORD not set");

        let client = GraphClient::connect(&uri, &user, &password)
            .await
            .expect("connection failed");
        let names = client.object_names().await.expect("catalog query failed");
        assert!(!names.is_empty());
    }

    #[test]
    fn queries_are_parameterized() {
        assert!(OBJECT_QUERY.contains("$object_name"));
        assert!(ORBIT_QUERY.contains("$object_name"));
        assert!(!CATALOG_QUERY.contains('$'));
    }
}
