//! Object name resolution.
//!
//! Pure case-insensitive substring containment of catalog names in the
//! question text, checked in catalog (alphabetical) order. The first match
//! wins; when one catalog name is a substring of another this is observed
//! behavior, not a contract.

/// Find the first catalog name contained in the question, case-insensitively.
pub fn resolve<'a>(question: &str, names: &'a [String]) -> Option<&'a str> {
    let question_lower = question.to_lowercase();
    names
        .iter()
        .find(|name| question_lower.contains(&name.to_lowercase()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn finds_name_verbatim() {
        let names = catalog(&["Jupiter", "Sirius", "Sonne"]);
        assert_eq!(resolve("Wie weit ist Sirius entfernt?", &names), Some("Sirius"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let names = catalog(&["Jupiter", "Sirius"]);
        assert_eq!(resolve("was ist SIRIUS?", &names), Some("Sirius"));
        assert_eq!(resolve("beschreibe jupiter", &names), Some("Jupiter"));
    }

    #[test]
    fn handles_german_names_with_umlauts_and_hyphens() {
        let names = catalog(&["Andromeda-Galaxie", "Orion-Nebel"]);
        assert_eq!(
            resolve("Beschreibe die ANDROMEDA-GALAXIE.", &names),
            Some("Andromeda-Galaxie")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let names = catalog(&["Mars", "Phobos"]);
        assert_eq!(resolve("Wie weit ist Pluto entfernt?", &names), None);
    }

    #[test]
    fn empty_catalog_returns_none() {
        assert_eq!(resolve("Was ist Mars?", &[]), None);
    }

    #[test]
    fn first_catalog_name_wins_on_overlap() {
        // "Mars" is a substring of "Marsmond"; catalog order decides.
        let names = catalog(&["Mars", "Marsmond"]);
        assert_eq!(resolve("Erzähl mir was über den Marsmond.", &names), Some("Mars"));
    }
}
