use colored::*;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use models::{EvaluateError, Hotspot, ValidationResult};
use validators::{
    check_assets, check_location, check_name, check_unique_id, present_required_keys,
    REQUIRED_KEYS,
};

/// Reads and validates one hotspot descriptor.
///
/// The descriptor is parsed as plain JSON data; anything else is a parse
/// failure. Every check then runs in a fixed order (id, name, assets,
/// location) regardless of earlier failures, and the populated
/// [`ValidationResult`] carries one verdict per check.
pub fn evaluate_hotspot_file(
    hotspots_root: &Path,
    descriptor: &Path,
    seen_ids: &mut HashSet<String>,
    verbose: bool,
) -> Result<ValidationResult, EvaluateError> {
    let content = fs::read_to_string(descriptor).map_err(|e| EvaluateError::Read {
        path: descriptor.to_path_buf(),
        source: e,
    })?;

    // Strict data parsing: only JSON literals, arrays, and objects get
    // through. Descriptors carrying anything executable fail here.
    let raw: Value = serde_json::from_str(&content).map_err(|e| EvaluateError::Parse {
        path: descriptor.to_path_buf(),
        source: e,
    })?;

    if !raw.is_object() {
        return Err(EvaluateError::NotAnObject {
            path: descriptor.to_path_buf(),
        });
    }

    report_missing_keys(&raw, descriptor);

    let hotspot: Hotspot = serde_json::from_value(raw).map_err(|e| EvaluateError::Parse {
        path: descriptor.to_path_buf(),
        source: e,
    })?;

    let mut result = ValidationResult::new(&hotspot.hotspot_id);

    // No short-circuiting: a failed check never suppresses the later ones.
    let id_ok = check_unique_id(&hotspot, seen_ids, &mut result);
    let name_ok = check_name(&hotspot, &mut result);
    let assets_ok = check_assets(&hotspot, hotspots_root, &mut result);
    let location_ok = check_location(&hotspot, &mut result);

    result.id_ok = id_ok;
    result.name_ok = name_ok;
    result.assets_ok = assets_ok;
    result.location_ok = location_ok;

    if verbose && result.is_valid() {
        println!(
            "{} Validated hotspot: {}",
            "✓".green(),
            result.hotspot_id
        );
    }

    Ok(result)
}

// Required-key presence is reported but never gates the verdict.
fn report_missing_keys(raw: &Value, descriptor: &Path) {
    let present = present_required_keys(raw);
    if present.len() < REQUIRED_KEYS.len() {
        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !present.contains(key))
            .collect();
        logging::warning(&format!(
            "Descriptor {} is missing keys: {}",
            descriptor.display(),
            missing.join(", ")
        ));
    }
}
