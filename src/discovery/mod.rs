//! File discovery for roster projects.
//!
//! Finds roster exports either by scanning a directory wholesale or by
//! following the `sources` listed in a `roster.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use roster::discovery::discover;
//!
//! let result = discover("./lists")?;
//! println!("Found {} rosters", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "roster.yaml";

/// Result of discovering rosters in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (may be default if no roster.yaml found).
    pub manifest: Manifest,

    /// Whether a roster.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

/// Load the manifest from `root` if one exists.
pub fn load_manifest(root: &Path) -> Result<Option<Manifest>> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Ok(Some(Manifest::load(&manifest_path)?))
    } else {
        Ok(None)
    }
}

/// Discover rosters in a project directory.
///
/// Looks for a `roster.yaml` manifest in the root directory. If found, uses
/// the manifest's source paths. Otherwise, scans the entire directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let (manifest, has_manifest) = match load_manifest(&root)? {
        Some(manifest) => (manifest, true),
        None => (Manifest::default(), false),
    };

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover rosters from specific paths.
///
/// Directories are scanned; files are taken as given regardless of their
/// extension. The manifest is only used for its scan settings.
pub fn discover_paths(paths: &[PathBuf], manifest: &Manifest) -> ScanResult {
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, manifest));
        } else {
            scan.push(path.clone());
        }
    }

    scan
}
