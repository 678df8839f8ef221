//! File system scanner for discovering roster exports.
//!
//! Recursively scans directories for files whose extension the manifest
//! accepts (`.txt` by default).

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning for roster files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered roster files. Sorted within each scanned directory,
    /// otherwise in the order they were added.
    pub rosters: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.rosters.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }

    /// Append a path unless it is already present.
    pub fn push(&mut self, path: PathBuf) {
        if !self.rosters.contains(&path) {
            self.rosters.push(path);
        }
    }

    /// Merge another scan result into this one, keeping first-seen order.
    pub fn merge(&mut self, other: ScanResult) {
        for path in other.rosters {
            self.push(path);
        }
    }
}

/// Scan a directory for roster files.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        debug!("scan root {} does not exist", root.display());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if manifest.is_excluded(path) {
            debug!("excluded {}", path.display());
            continue;
        }

        if manifest.is_roster_file(path) {
            result.rosters.push(path.to_path_buf());
        }
    }

    result.rosters.sort();
    result
}

/// Scan multiple source paths.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest));
    }

    result
}
