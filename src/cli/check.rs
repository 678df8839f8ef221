//! Check command implementation.
//!
//! Parses rosters and reports every line that did not make it into the
//! tree, with its line number and reason.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_paths, load_manifest};
use crate::error::{Result, RosterError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_army_file, ParseDiagnostics};

/// Report lines the parser could not place
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Roster files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Fail if any line was skipped
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(Path::new("."))?.unwrap_or_default();
    let scan = discover_paths(&args.paths, &manifest);
    let options = manifest.parse_options();

    let mut skipped = 0;
    for path in &scan.rosters {
        let parsed = parse_army_file(path, &options)?;
        report(path, &parsed.diagnostics, printer);
        skipped += parsed.diagnostics.len();
    }

    finish(scan.total(), skipped, args.strict, printer)
}

fn report(path: &Path, diagnostics: &ParseDiagnostics, printer: &Printer) {
    let shown = display_path(path);
    if diagnostics.is_empty() {
        printer.status("Checked", &shown);
        return;
    }

    for skipped in diagnostics {
        printer.warning(
            "warning",
            &format!(
                "{}:{} {} [{}]",
                shown,
                skipped.line_number,
                skipped.reason,
                skipped.reason.code()
            ),
        );
        printer.info(
            "",
            &printer.dim(&format!("{:?} ({})", skipped.text, skipped.reason.help())),
        );
    }
}

fn finish(files: usize, skipped: usize, strict: bool, printer: &Printer) -> Result<()> {
    let summary = format!(
        "{}, {} skipped",
        plural(files, "roster", "rosters"),
        plural(skipped, "line", "lines")
    );

    if strict && skipped > 0 {
        printer.error("Failed", &summary);
        return Err(RosterError::Check {
            message: summary,
            help: Some("fix or remove the reported lines, or drop --strict".to_string()),
        });
    }

    printer.status("Finished", &summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_lenient() {
        assert!(finish(2, 3, false, &Printer::new()).is_ok());
    }

    #[test]
    fn test_finish_strict_fails_on_skips() {
        let result = finish(1, 1, true, &Printer::new());
        assert!(matches!(result, Err(RosterError::Check { .. })));
    }

    #[test]
    fn test_finish_strict_clean() {
        assert!(finish(1, 0, true, &Printer::new()).is_ok());
    }
}
