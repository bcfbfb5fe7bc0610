//! Celestial object data structures.
//!
//! `CelestialObject` mirrors the node properties stored in the graph. Only
//! `name` is guaranteed; every other attribute may be absent on a node and is
//! therefore optional.

use serde::{Deserialize, Serialize};

/// A celestial object as stored in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    /// Unique object name (e.g., "Sonne", "Andromeda-Galaxie")
    pub name: String,

    /// Object class (e.g., "star", "planet", "galaxy", "nebula")
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,

    /// Distance from Earth in light years
    #[serde(default)]
    pub distance_from_earth_ly: Option<f64>,

    /// Diameter in kilometers
    #[serde(default)]
    pub size_km: Option<f64>,

    /// Mass in kilograms
    #[serde(default)]
    pub mass_kg: Option<f64>,
}

impl CelestialObject {
    /// Create an object with a name and no further attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_type: None,
            distance_from_earth_ly: None,
            size_km: None,
            mass_kg: None,
        }
    }
}

/// Full fetch result: an object together with its orbit neighborhood.
///
/// `parent` follows the single outgoing `ORBIT_OF` edge, `satellites` collects
/// the sources of all incoming ones. Satellite order is whatever the query
/// returned, not sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRelations {
    pub object: CelestialObject,
    pub parent: Option<CelestialObject>,
    pub satellites: Vec<CelestialObject>,
}

/// Orbit-only fetch result: the same traversal reduced to names.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRelations {
    pub name: String,
    pub parent: Option<String>,
    pub satellites: Vec<String>,
}

impl OrbitRelations {
    /// True when the object has neither a parent nor satellites.
    pub fn is_empty(&self) -> bool {
        self.parent.is_none() && self.satellites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_object_has_no_attributes() {
        let obj = CelestialObject::named("Mars");
        assert_eq!(obj.name, "Mars");
        assert!(obj.object_type.is_none());
        assert!(obj.mass_kg.is_none());
    }

    #[test]
    fn orbit_relations_empty_only_without_parent_and_satellites() {
        let mut rel = OrbitRelations {
            name: "Sirius".to_string(),
            parent: None,
            satellites: vec![],
        };
        assert!(rel.is_empty());

        rel.parent = Some("Sonne".to_string());
        assert!(!rel.is_empty());

        rel.parent = None;
        rel.satellites.push("Phobos".to_string());
        assert!(!rel.is_empty());
    }
}
