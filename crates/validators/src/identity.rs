use models::{Hotspot, ValidationResult};
use std::collections::HashSet;

/// Checks that the hotspot id has not been seen earlier in the run.
///
/// A unique id is inserted into `seen_ids` before returning, so later
/// records carrying the same id fail. On a duplicate, `seen_ids` is left
/// untouched.
pub fn check_unique_id(
    hotspot: &Hotspot,
    seen_ids: &mut HashSet<String>,
    result: &mut ValidationResult,
) -> bool {
    if seen_ids.contains(&hotspot.hotspot_id) {
        logging::warning(&format!(
            "Hotspot ID {} already exists",
            hotspot.hotspot_id
        ));
        result.add_issue(format!(
            "Hotspot id '{}' is already used by an earlier record",
            hotspot.hotspot_id
        ));
        return false;
    }

    seen_ids.insert(hotspot.hotspot_id.clone());
    logging::info(&format!("Hotspot ID {} is unique", hotspot.hotspot_id));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Location;

    fn hotspot(id: &str) -> Hotspot {
        Hotspot {
            hotspot_id: id.to_string(),
            name: "Test".to_string(),
            description: String::new(),
            location: Location {
                latitude: 0.0,
                longitude: 0.0,
            },
            created_on: String::new(),
            status: String::new(),
            features: Vec::new(),
        }
    }

    #[test]
    fn distinct_ids_all_pass() {
        let mut seen = HashSet::new();
        for id in ["a", "b", "c"] {
            let mut result = ValidationResult::new(id);
            assert!(check_unique_id(&hotspot(id), &mut seen, &mut result));
            assert!(result.issues.is_empty());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn first_record_wins_on_duplicate() {
        let mut seen = HashSet::new();

        let mut first = ValidationResult::new("dup");
        assert!(check_unique_id(&hotspot("dup"), &mut seen, &mut first));

        let mut second = ValidationResult::new("dup");
        assert!(!check_unique_id(&hotspot("dup"), &mut seen, &mut second));
        assert_eq!(second.issues.len(), 1);
    }

    #[test]
    fn duplicate_does_not_mutate_the_set() {
        let mut seen: HashSet<String> = ["dup".to_string()].into_iter().collect();
        let mut result = ValidationResult::new("dup");

        check_unique_id(&hotspot("dup"), &mut seen, &mut result);
        assert_eq!(seen.len(), 1);
    }
}
