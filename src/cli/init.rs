//! Init command implementation.
//!
//! Generates a `roster.yaml` manifest from discovered roster files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, RosterError};
use crate::output::{display_path, plural, Printer};

/// Initialize a roster project by generating a roster.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing roster.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(RosterError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let scan = scan_directory(&args.path, &Manifest::default());
    let source_dirs = source_dirs(&args.path, &scan.rosters);

    // Scanning "." is recursive, so it covers every other directory.
    let sources = if source_dirs.contains(".") {
        vec![]
    } else {
        source_dirs.iter().cloned().collect()
    };
    let manifest = Manifest {
        sources,
        ..Default::default()
    };
    let yaml = serde_yaml::to_string(&manifest).map_err(|e| RosterError::Output {
        message: format!("Failed to serialize manifest: {}", e),
    })?;

    fs::write(&manifest_path, &yaml).map_err(|e| RosterError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !source_dirs.is_empty() {
        let dirs: Vec<&str> = source_dirs.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "roster", "rosters")
        ),
    );

    Ok(())
}

/// Unique parent directories of `files`, relative to `root`.
fn source_dirs(root: &Path, files: &[PathBuf]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sisters.txt"), "Sisters (2000 Points)").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(manifest.sources.is_empty());
        assert_eq!(manifest.extensions, vec!["txt"]);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: yaml").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "format: yaml").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.format, crate::output::OutputFormat::Json);
    }

    #[test]
    fn test_init_root_and_subdirectory_keeps_root_rosters() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("crusade")).unwrap();
        fs::write(dir.path().join("root.txt"), "").unwrap();
        fs::write(dir.path().join("crusade/a.txt"), "").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(manifest.sources.is_empty());

        let discovery = crate::discovery::discover(dir.path()).unwrap();
        assert_eq!(discovery.scan.total(), 2);
    }

    #[test]
    fn test_init_discovers_source_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("crusade")).unwrap();
        fs::create_dir_all(dir.path().join("tournament")).unwrap();
        fs::write(dir.path().join("crusade/a.txt"), "").unwrap();
        fs::write(dir.path().join("tournament/b.txt"), "").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.sources, vec!["crusade/", "tournament/"]);
    }
}
