use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse media classification of an asset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Text,
    Video,
    Audio,
    Unknown,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Text => "text",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hotspot descriptor as stored in a record directory's `hotspot.json`.
///
/// `hotspotId` and `location` are structurally required; the remaining
/// fields default to empty so that presence reporting, not deserialization,
/// decides how a sparse descriptor is surfaced to the user.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub hotspot_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub location: Location,

    #[serde(default)]
    pub created_on: String,

    #[serde(default)]
    pub status: String,

    /// Referenced media assets, in declaration order.
    #[serde(default)]
    pub features: Vec<AssetReference>,
}

/// Geographic position of a hotspot.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A media file referenced from a hotspot's `features` list.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetReference {
    /// Path of the file relative to the record's `Assets` directory.
    pub file_location: String,

    /// Declared media kind ("image", "text", "video", "audio").
    #[serde(rename = "type")]
    pub kind: String,
}

/// Per-record validation outcome.
///
/// Holds one verdict per check. `assets` is an `Option` because a record
/// with an empty `features` list produces no asset verdict at all; the
/// aggregate treats that as a failure.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub hotspot_id: String,
    pub id_ok: bool,
    pub name_ok: bool,
    pub assets_ok: Option<bool>,
    pub location_ok: bool,
    pub issues: Vec<String>,
}

impl ValidationResult {
    pub fn new(hotspot_id: &str) -> Self {
        ValidationResult {
            hotspot_id: hotspot_id.to_string(),
            id_ok: false,
            name_ok: false,
            assets_ok: None,
            location_ok: false,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: String) {
        self.issues.push(issue);
    }

    /// Overall verdict: every check must have passed.
    pub fn is_valid(&self) -> bool {
        self.id_ok && self.name_ok && self.assets_ok.unwrap_or(false) && self.location_ok
    }
}

/// Totals for one full pass over a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records that were parsed and validated.
    pub processed: usize,
    pub passed: usize,
    pub failed: usize,
    /// Records skipped before validation (missing or unparseable descriptor).
    pub skipped: usize,
}

/// Failure to turn a descriptor file into a validated record.
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("failed to read descriptor {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid descriptor {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("descriptor {path} is not a JSON object")]
    NotAnObject { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_result() -> ValidationResult {
        ValidationResult {
            hotspot_id: "library-01".to_string(),
            id_ok: true,
            name_ok: true,
            assets_ok: Some(true),
            location_ok: true,
            issues: Vec::new(),
        }
    }

    #[test]
    fn aggregate_requires_every_check() {
        assert!(passing_result().is_valid());

        let mut result = passing_result();
        result.id_ok = false;
        assert!(!result.is_valid());

        let mut result = passing_result();
        result.location_ok = false;
        assert!(!result.is_valid());

        let mut result = passing_result();
        result.assets_ok = Some(false);
        assert!(!result.is_valid());
    }

    #[test]
    fn missing_asset_verdict_counts_as_failure() {
        let mut result = passing_result();
        result.assets_ok = None;
        assert!(!result.is_valid());
    }

    #[test]
    fn descriptor_deserializes_with_camel_case_keys() {
        let hotspot: Hotspot = serde_json::from_str(
            r#"{
                "hotspotId": "fountain-02",
                "name": "Fountain",
                "description": "Central fountain",
                "location": {"latitude": 41.4, "longitude": 2.2},
                "createdOn": "2024-05-01",
                "status": "published",
                "features": [{"fileLocation": "fountain.png", "type": "image"}]
            }"#,
        )
        .unwrap();

        assert_eq!(hotspot.hotspot_id, "fountain-02");
        assert_eq!(hotspot.features.len(), 1);
        assert_eq!(hotspot.features[0].kind, "image");
    }

    #[test]
    fn sparse_descriptor_defaults_optional_fields() {
        let hotspot: Hotspot = serde_json::from_str(
            r#"{"hotspotId": "bare-01", "location": {"latitude": 0.0, "longitude": 0.0}}"#,
        )
        .unwrap();

        assert!(hotspot.name.is_empty());
        assert!(hotspot.features.is_empty());
    }
}
