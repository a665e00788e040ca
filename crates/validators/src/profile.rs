use models::{Hotspot, ValidationResult};

/// Name format rules (length, character set) are not enforced yet; the
/// hook exists so a future rule set slots into the run unchanged.
pub fn check_name(_hotspot: &Hotspot, _result: &mut ValidationResult) -> bool {
    true
}

/// Same placeholder as [`check_name`], for the description field.
pub fn check_description(_hotspot: &Hotspot, _result: &mut ValidationResult) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Location;

    fn hotspot() -> Hotspot {
        Hotspot {
            hotspot_id: "spot".to_string(),
            name: String::new(),
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
    fn placeholder_checks_always_pass() {
        let mut result = ValidationResult::new("spot");
        assert!(check_name(&hotspot(), &mut result));
        assert!(check_description(&hotspot(), &mut result));
        assert!(result.issues.is_empty());
    }
}
