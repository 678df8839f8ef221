//! List command implementation.
//!
//! Discovers rosters and prints a one-line summary for each.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, load_manifest};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::parser::parse_army_file;
use crate::render::summary_line;

/// List discovered rosters
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: roster.yaml sources, else current directory)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let (scan, options) = if args.paths.is_empty() {
        let discovery = discover(".")?;
        let options = discovery.manifest.parse_options();
        (discovery.scan, options)
    } else {
        let manifest = load_manifest(std::path::Path::new("."))?.unwrap_or_default();
        (discover_paths(&args.paths, &manifest), manifest.parse_options())
    };

    if scan.is_empty() {
        printer.warning("Empty", "no roster files found");
        return Ok(());
    }

    for path in &scan.rosters {
        let parsed = parse_army_file(path, &options)?;
        printer.info(
            "Roster",
            &format!(
                "{} {}",
                summary_line(&parsed.army),
                printer.dim(&display_path(path))
            ),
        );
    }

    Ok(())
}
