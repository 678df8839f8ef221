//! roster - Army list export parser
//!
//! A library for turning the plain-text roster exports of a tabletop
//! wargame army builder into a typed army → unit → model → weapon tree.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{Result, RosterError};
pub use output::{format_army, OutputFormat};
pub use parser::{
    parse_army, parse_army_file, parse_army_with, ParseDiagnostics, ParseOptions, ParseOutput,
    SkipReason, SkippedLine,
};
pub use render::{render_army, summarize_army};
pub use types::{estimate_power_rating, Army, Category, Model, Unit};
