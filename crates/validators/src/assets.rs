use models::{Hotspot, ValidationResult};
use std::path::Path;
use utils::{asset_path, classify_media};

/// Checks that a referenced asset file exists under the record's `Assets`
/// directory and that its extension matches the declared media kind.
///
/// Only the first entry of `features` is examined, and a record with no
/// features produces no verdict at all; the aggregate counts that as a
/// failure. TODO: walk the whole feature list instead of stopping at the
/// first asset.
pub fn check_assets(
    hotspot: &Hotspot,
    hotspots_root: &Path,
    result: &mut ValidationResult,
) -> Option<bool> {
    let asset = hotspot.features.first()?;

    let path = asset_path(hotspots_root, &hotspot.hotspot_id, &asset.file_location);
    if !path.exists() {
        result.add_issue(format!("Asset file not found: {}", path.display()));
        return Some(false);
    }

    let found = classify_media(&asset.file_location);
    if found.as_str() != asset.kind {
        result.add_issue(format!(
            "Asset file {} is not in the correct format: expected {}, found {}",
            asset.file_location, asset.kind, found
        ));
        return Some(false);
    }

    Some(true)
}
