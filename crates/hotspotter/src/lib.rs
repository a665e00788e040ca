// Collection runner: walks the hotspots root and validates every record.

use colored::*;
use std::collections::HashSet;
use std::io;
use std::path::Path;

use evaluator::evaluate_hotspot_file;
use models::{RunSummary, ValidationResult};

/// File name of the descriptor expected inside every record directory.
pub const DESCRIPTOR_FILE: &str = "hotspot.json";

/// Validates each record directory under `root` and prints per-record and
/// collection-level outcomes.
///
/// A directory with no descriptor, or whose descriptor does not parse, is
/// skipped with a diagnostic and excluded from the pass/fail totals. The
/// run always continues to the next record. Returns `Err` only when the
/// root itself cannot be enumerated.
pub fn run_collection(root: &Path, verbose: bool) -> io::Result<RunSummary> {
    let mut record_dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            record_dirs.push(path);
        }
    }

    println!("Found {} hotspot(s) to validate.", record_dirs.len());

    // Run-wide uniqueness state, threaded through every evaluation.
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut summary = RunSummary::default();

    for dir in record_dirs {
        println!("Validating hotspot: {}", dir.display());

        let descriptor = dir.join(DESCRIPTOR_FILE);
        if !descriptor.is_file() {
            logging::warning(&format!("Descriptor not found: {}", descriptor.display()));
            summary.skipped += 1;
            continue;
        }

        match evaluate_hotspot_file(root, &descriptor, &mut seen_ids, verbose) {
            Ok(result) => {
                summary.processed += 1;
                if result.is_valid() {
                    println!("✅ Valid: {}", result.hotspot_id);
                    summary.passed += 1;
                } else {
                    println!("❌ Invalid: {}", result.hotspot_id);
                    for (i, issue) in result.issues.iter().enumerate() {
                        println!("   {}. {}", i + 1, issue);
                    }
                    summary.failed += 1;
                }
                if verbose {
                    print_check_breakdown(&result);
                }
            }
            Err(e) => {
                logging::error(&format!("Skipping {}: {}", dir.display(), e));
                summary.skipped += 1;
            }
        }
    }

    println!(
        "\nSummary: {} passed, {} failed, {} skipped",
        summary.passed.to_string().green(),
        summary.failed.to_string().red(),
        summary.skipped
    );

    Ok(summary)
}

fn print_check_breakdown(result: &ValidationResult) {
    println!("   {} id", mark(result.id_ok));
    println!("   {} name", mark(result.name_ok));
    match result.assets_ok {
        Some(ok) => println!("   {} assets", mark(ok)),
        None => println!("   {} assets (no assets examined)", "-".yellow()),
    }
    println!("   {} location", mark(result.location_ok));
}

fn mark(ok: bool) -> ColoredString {
    if ok {
        "✓".green()
    } else {
        "✗".red()
    }
}
