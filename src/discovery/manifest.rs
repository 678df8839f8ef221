//! Project manifest (roster.yaml) parsing.
//!
//! The manifest says where roster exports live and how they should be
//! parsed and printed. Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::output::OutputFormat;
use crate::parser::ParseOptions;

/// Project manifest loaded from roster.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for rosters.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// File extensions treated as roster exports (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Fold weaponless multi-model units into vehicles.
    pub consolidate_vehicles: bool,

    /// Default output format for `roster parse`.
    pub format: OutputFormat,
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            excludes: vec![],
            extensions: default_extensions(),
            consolidate_vehicles: false,
            format: OutputFormat::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a roster.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RosterError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check roster.yaml syntax".to_string()),
        })
    }

    /// Parse options implied by the manifest.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            consolidate_vehicles: self.consolidate_vehicles,
        }
    }

    /// Whether a file looks like a roster export by extension.
    pub fn is_roster_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}
