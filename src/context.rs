//! QA context assembly.
//!
//! Formats a full fetch result into the fixed German fact block the QA model
//! receives as context. Deterministic: the same input always yields the same
//! text.

use crate::types::ObjectRelations;

/// Instruction preamble preceding the facts.
const PREAMBLE: &str =
    "Bitte beantworte die folgende Frage kurz und präzise basierend auf den nachfolgenden Fakten:";

/// Placeholder for absent attributes.
const UNKNOWN: &str = "unbekannt";

/// Sentence stating what an object orbits.
pub fn parent_sentence(name: &str, parent: &str) -> String {
    format!("{name} umkreist {parent}.")
}

/// Sentence listing an object's satellites.
pub fn satellites_sentence(name: &str, satellites: &[String]) -> String {
    format!("{name} wird von {} umkreist.", satellites.join(", "))
}

fn fmt_plain(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

/// Masses span dozens of orders of magnitude; scientific notation keeps the
/// context readable for the model.
fn fmt_exp(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| format!("{v:e}"))
}

/// Assemble the QA context for an object and its orbit neighborhood.
pub fn assemble(relations: &ObjectRelations) -> String {
    let obj = &relations.object;
    let name = &obj.name;

    let mut lines = vec![
        PREAMBLE.to_string(),
        String::new(),
        format!(
            "{name} ist ein {}.",
            obj.object_type.as_deref().unwrap_or(UNKNOWN)
        ),
        format!(
            "{name} ist {} Lichtjahre von der Erde entfernt.",
            fmt_plain(obj.distance_from_earth_ly)
        ),
        format!("Seine Größe beträgt {} km.", fmt_plain(obj.size_km)),
        format!("Seine Masse beträgt {} kg.", fmt_exp(obj.mass_kg)),
    ];

    if let Some(parent) = &relations.parent {
        lines.push(parent_sentence(name, &parent.name));
    }
    if !relations.satellites.is_empty() {
        let satellite_names: Vec<String> = relations
            .satellites
            .iter()
            .map(|s| s.name.clone())
            .collect();
        lines.push(satellites_sentence(name, &satellite_names));
    }

    lines.join("\n")
}
