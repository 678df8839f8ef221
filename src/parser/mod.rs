//! Roster export parser.
//!
//! Turns the plain-text export of an army list into an [`Army`] tree in a
//! single forward pass. Each line is classified on its own (see
//! [`classify`]) and then applied to a small state machine (see
//! [`builder`]) that owns the unit and model currently being filled in.
//!
//! # Input Shape
//!
//! ```text
//! Sisters Strike Force (2000 Points)
//! Adepta Sororitas
//! Hallowed Martyrs
//!
//! CHARACTERS
//! Canoness (90 Points)
//! • 1x Canoness
//! ◦ 1x Power sword
//! ```
//!
//! Parsing never fails. Lines that cannot be placed are dropped and listed
//! in [`ParseDiagnostics`].
//!
//! # Usage
//!
//! ```ignore
//! use roster::parser::parse_army;
//!
//! let source = std::fs::read_to_string("sisters.txt")?;
//! let army = parse_army(&source);
//!
//! for unit in &army.units {
//!     println!("{} ({} pts)", unit.name, unit.points_cost);
//! }
//! ```

pub mod builder;
pub mod classify;
pub mod diagnostics;
pub mod extract;
pub mod vehicles;

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{Result, RosterError};
use crate::types::Army;

pub use builder::ArmyBuilder;
pub use classify::{classify_line, LineKind};
pub use diagnostics::{ParseDiagnostics, SkipReason, SkippedLine};
pub use vehicles::consolidate_vehicles;

/// Knobs for a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fold weaponless multi-model units into a single vehicle model.
    pub consolidate_vehicles: bool,
}

impl ParseOptions {
    pub fn with_vehicles() -> Self {
        Self {
            consolidate_vehicles: true,
        }
    }
}

/// The parsed tree plus whatever was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    pub army: Army,
    pub diagnostics: ParseDiagnostics,
}

/// Parse roster text with default options.
pub fn parse_army(content: &str) -> Army {
    parse_army_with(content, &ParseOptions::default()).army
}

/// Parse roster text, keeping the skipped-line record.
pub fn parse_army_with(content: &str, options: &ParseOptions) -> ParseOutput {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut builder = ArmyBuilder::new();
    for (i, line) in content.lines().enumerate() {
        builder.feed(i + 1, line);
    }
    let (mut army, diagnostics) = builder.finish();

    if options.consolidate_vehicles {
        let changed = consolidate_vehicles(&mut army);
        debug!("consolidated {changed} vehicle unit(s)");
    }

    debug!(
        "parsed {:?}: {} unit(s), {} skipped line(s)",
        army.name,
        army.units.len(),
        diagnostics.len()
    );

    ParseOutput { army, diagnostics }
}

/// Read and parse a roster file.
pub fn parse_army_file(path: &Path, options: &ParseOptions) -> Result<ParseOutput> {
    let content = fs::read_to_string(path).map_err(|e| RosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read roster: {}", e),
    })?;

    Ok(parse_army_with(&content, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Model};

    const SISTERS: &str = "\
Sisters Strike Force (2000 Points)
Adepta Sororitas
Hallowed Martyrs
CHARACTERS
Canoness (90 Points)
• 1x Canoness
◦ 1x Power sword
BATTLELINE
Battle Sisters Squad (100 Points)
• 10x Battle Sister
";

    #[test]
    fn test_parse_sisters() {
        let army = parse_army(SISTERS);

        assert_eq!(army.name, "Sisters Strike Force");
        assert_eq!(army.total_points, 2000);
        assert_eq!(army.faction_name, "Adepta Sororitas");
        assert_eq!(army.detachment_name, "Hallowed Martyrs");
        assert_eq!(army.units.len(), 2);

        let canoness = &army.units[0];
        assert_eq!(canoness.name, "Canoness");
        assert_eq!(canoness.points_cost, 90);
        assert_eq!(canoness.category, Category::Characters);
        assert_eq!(
            canoness.models,
            vec![Model::new("Canoness", 1).with_weapons(["Power sword"])]
        );

        let squad = &army.units[1];
        assert_eq!(squad.name, "Battle Sisters Squad");
        assert_eq!(squad.points_cost, 100);
        assert_eq!(squad.category, Category::Battleline);
        assert_eq!(squad.models, vec![Model::new("Battle Sister", 10)]);
    }

    #[test]
    fn test_parse_sisters_has_no_diagnostics() {
        let output = parse_army_with(SISTERS, &ParseOptions::default());
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_input_yields_default_army() {
        assert_eq!(parse_army(""), Army::default());
        assert_eq!(parse_army("\n\n   \n"), Army::default());
    }

    #[test]
    fn test_only_category_header() {
        let output = parse_army_with("CHARACTERS\n", &ParseOptions::default());
        assert!(output.army.units.is_empty());
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_weapon_before_any_model() {
        let output = parse_army_with(
            "Army (100 Points)\nCanoness (90 Points)\n◦ 1x Power sword\n",
            &ParseOptions::default(),
        );
        assert!(output.army.units[0].models.is_empty());
        assert_eq!(output.diagnostics.count(SkipReason::OrphanWeapon), 1);
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let army = parse_army(&format!("\u{feff}{}", SISTERS));
        assert_eq!(army.name, "Sisters Strike Force");
        assert_eq!(army, parse_army(SISTERS));
    }

    #[test]
    fn test_crlf_line_endings() {
        let army = parse_army(&SISTERS.replace('\n', "\r\n"));
        assert_eq!(army.units.len(), 2);
        assert_eq!(army.detachment_name, "Hallowed Martyrs");
    }

    #[test]
    fn test_consolidate_vehicles_option() {
        let source = "Army (100 Points)\nRhino (75 Points)\n• 1x Armoured tracks\n• 1x Storm bolter\n";

        let plain = parse_army_with(source, &ParseOptions::default());
        assert_eq!(plain.army.units[0].models.len(), 2);

        let folded = parse_army_with(source, &ParseOptions::with_vehicles());
        assert_eq!(
            folded.army.units[0].models,
            vec![Model::new("Rhino", 1).with_weapons(["Armoured tracks", "Storm bolter"])]
        );
    }

    #[test]
    fn test_parse_army_file_missing() {
        let result = parse_army_file(Path::new("/nonexistent/roster.txt"), &ParseOptions::default());
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }
}
