use serde_json::Value;

/// Keys every descriptor is expected to carry.
pub const REQUIRED_KEYS: [&str; 7] = [
    "hotspotId",
    "name",
    "description",
    "location",
    "createdOn",
    "status",
    "features",
];

/// Reports which of the required keys are present in a raw descriptor.
/// Presence is informational only; it does not gate the record verdict.
pub fn present_required_keys(descriptor: &Value) -> Vec<&'static str> {
    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| descriptor.get(key).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_only_present_keys() {
        let descriptor = json!({
            "hotspotId": "gate-01",
            "location": {"latitude": 1.0, "longitude": 2.0},
            "features": []
        });

        assert_eq!(
            present_required_keys(&descriptor),
            vec!["hotspotId", "location", "features"]
        );
    }

    #[test]
    fn full_descriptor_reports_every_key() {
        let descriptor = json!({
            "hotspotId": "gate-01",
            "name": "Gate",
            "description": "Main gate",
            "location": {"latitude": 1.0, "longitude": 2.0},
            "createdOn": "2024-01-01",
            "status": "published",
            "features": []
        });

        assert_eq!(present_required_keys(&descriptor), REQUIRED_KEYS.to_vec());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let descriptor = json!({"somethingElse": true});
        assert!(present_required_keys(&descriptor).is_empty());
    }
}
