use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hotspotter",
    about = "Hotspot collection validator",
    version,
    long_about = "Validates a directory of hotspot records: identifier uniqueness, required fields, referenced asset files, and location ranges.\n\nExamples:\n  hotspotter validate                   # Validate records under ./hotspots\n  hotspotter validate content/hotspots  # Validate a specific collection\n  hotspotter --verbose validate         # Show per-check results for every record"
)]
struct Hotspotter {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive execution details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate hotspot record directories
    Validate {
        /// Path to the hotspots root directory (defaults to ./hotspots)
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Hotspotter::parse();

    // Set log level based on command line flags
    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::set_log_level(logging::LogLevel::Info);
        logging::info("Verbose mode enabled");
    } else {
        logging::set_log_level(logging::LogLevel::Warning);
    }

    let root = match cli.command {
        Some(Commands::Validate { path }) => path.unwrap_or_else(|| PathBuf::from("hotspots")),
        None => PathBuf::from("hotspots"),
    };

    // Per-record failures are reported in the summary; they do not change
    // the exit status. Only an unusable root directory is an error.
    if let Err(e) = hotspotter::run_collection(&root, cli.verbose || cli.debug) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
