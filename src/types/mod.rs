//! Core data types and error definitions.

pub mod error;
pub mod object;

pub use error::{AssistantError, Result};
pub use object::{CelestialObject, ObjectRelations, OrbitRelations};
