use models::{Hotspot, ValidationResult};

/// Checks that the hotspot's coordinates are in range. The bounds
/// themselves (±90 latitude, ±180 longitude) are valid positions.
pub fn check_location(hotspot: &Hotspot, result: &mut ValidationResult) -> bool {
    let location = &hotspot.location;
    let mut ok = true;

    if location.latitude > 90.0 || location.latitude < -90.0 {
        result.add_issue(format!("Invalid latitude: {}", location.latitude));
        ok = false;
    }
    if location.longitude > 180.0 || location.longitude < -180.0 {
        result.add_issue(format!("Invalid longitude: {}", location.longitude));
        ok = false;
    }

    ok
}
