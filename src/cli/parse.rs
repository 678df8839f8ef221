//! Parse command implementation.
//!
//! Reads roster exports and prints the parsed armies to stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_paths, load_manifest, Manifest};
use crate::error::Result;
use crate::output::{display_path, format_armies, format_army, plural, OutputFormat, Printer};
use crate::parser::{parse_army_file, ParseOptions};
use crate::types::Army;

/// Parse roster exports and print them as structured data
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Roster files or directories to parse
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (default: from roster.yaml, else json)
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fold weaponless multi-model units into a single vehicle model
    #[arg(long)]
    pub consolidate_vehicles: bool,
}

impl ParseArgs {
    /// Flags win over the manifest.
    fn resolve(&self, manifest: &Manifest) -> (OutputFormat, ParseOptions) {
        let format = self.format.unwrap_or(manifest.format);
        let options = ParseOptions {
            consolidate_vehicles: self.consolidate_vehicles || manifest.consolidate_vehicles,
        };
        (format, options)
    }
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(Path::new("."))?.unwrap_or_default();
    let output = parse_to_string(&args, &manifest, printer)?;
    print!("{}", output);
    Ok(())
}

/// Parse every input and format the result.
///
/// A single file argument prints one army; anything else prints a list,
/// even when a directory holds only one roster.
pub fn parse_to_string(args: &ParseArgs, manifest: &Manifest, printer: &Printer) -> Result<String> {
    let (format, options) = args.resolve(manifest);
    let scan = discover_paths(&args.files, manifest);

    let mut armies: Vec<Army> = Vec::with_capacity(scan.total());
    for path in &scan.rosters {
        printer.status("Parsing", &display_path(path));
        let parsed = parse_army_file(path, &options)?;
        if !parsed.diagnostics.is_empty() {
            printer.warning(
                "Skipped",
                &format!(
                    "{} in {} (run `roster check` for details)",
                    plural(parsed.diagnostics.len(), "line", "lines"),
                    display_path(path)
                ),
            );
        }
        armies.push(parsed.army);
    }

    match (args.files.as_slice(), armies.as_slice()) {
        ([file], [army]) if !file.is_dir() => format_army(army, format),
        _ => format_armies(&armies, format),
    }
}
