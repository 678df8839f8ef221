//! Line classification.
//!
//! Every trimmed, non-blank line is tagged with exactly one [`LineKind`].
//! Rules are tried in a fixed priority order and the first hit wins:
//!
//! 1. army header   `Strike Force (2000 Points)`, only while the army is unnamed
//! 2. category      `CHARACTERS`, `BATTLELINE`, `DEDICATED TRANSPORTS`, `OTHER DATASHEETS`
//! 3. unit header   `Canoness (90 Points)`, whole line
//! 4. model         `• 1x Canoness`
//! 5. weapon        `◦ 1x Power sword`
//! 6. plain text    no parenthesis, not a bullet (faction/detachment candidate)
//! 7. other
//!
//! Classification never creates entities; see the builder for that.

use crate::types::Category;

use super::extract::{split_count_name, split_points_header, split_points_prefix};

/// Glyph that starts a model line.
pub const MODEL_BULLET: char = '•';

/// Glyph that starts a weapon line.
pub const WEAPON_BULLET: char = '◦';

/// The kind of one roster line, with any fields pulled out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    ArmyHeader { name: &'a str, points: u32 },
    Category(Category),
    UnitHeader { name: &'a str, points: u32 },
    Model { count: u32, name: &'a str },
    Weapon { count: u32, name: &'a str },
    /// A bullet or sub-bullet whose text is not `"<N>x <name>"`,
    /// e.g. `• Warlord` or `• Enhancements: ...`.
    MalformedBullet { glyph: char },
    /// Bare text; may become the faction or detachment.
    Text(&'a str),
    Other,
}

impl LineKind<'_> {
    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::ArmyHeader { .. } => "army-header",
            LineKind::Category(_) => "category",
            LineKind::UnitHeader { .. } => "unit-header",
            LineKind::Model { .. } => "model",
            LineKind::Weapon { .. } => "weapon",
            LineKind::MalformedBullet { .. } => "malformed-bullet",
            LineKind::Text(_) => "text",
            LineKind::Other => "other",
        }
    }
}

/// Classify one trimmed line.
///
/// `army_named` tells the classifier whether the army header has already
/// been consumed; once it has, header-shaped lines are unit headers.
pub fn classify_line(line: &str, army_named: bool) -> LineKind<'_> {
    if !army_named {
        if let Some((name, points)) = split_points_prefix(line) {
            return LineKind::ArmyHeader { name, points };
        }
    }

    if let Some(category) = Category::from_keyword(line) {
        return LineKind::Category(category);
    }

    if let Some((name, points)) = split_points_header(line) {
        return LineKind::UnitHeader { name, points };
    }

    if let Some(rest) = line.strip_prefix(MODEL_BULLET) {
        return match split_count_name(rest.trim()) {
            Some((count, name)) if count > 0 => LineKind::Model { count, name },
            _ => LineKind::MalformedBullet { glyph: MODEL_BULLET },
        };
    }

    if let Some(rest) = line.strip_prefix(WEAPON_BULLET) {
        return match split_count_name(rest.trim()) {
            Some((count, name)) => LineKind::Weapon { count, name },
            None => LineKind::MalformedBullet { glyph: WEAPON_BULLET },
        };
    }

    if !line.contains('(') {
        return LineKind::Text(line);
    }

    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_army_header_only_while_unnamed() {
        assert_eq!(
            classify_line("Sisters Strike Force (2000 Points)", false),
            LineKind::ArmyHeader {
                name: "Sisters Strike Force",
                points: 2000
            }
        );
        assert_eq!(
            classify_line("Sisters Strike Force (2000 Points)", true),
            LineKind::UnitHeader {
                name: "Sisters Strike Force",
                points: 2000
            }
        );
    }

    #[test]
    fn test_army_header_with_trailing_text() {
        assert_eq!(
            classify_line("Crusade Force (1000 Points) Incursion", false),
            LineKind::ArmyHeader {
                name: "Crusade Force",
                points: 1000
            }
        );
        // Once named, the same line is neither header.
        assert_eq!(
            classify_line("Crusade Force (1000 Points) Incursion", true),
            LineKind::Other
        );
    }

    #[test]
    fn test_category_keywords() {
        assert_eq!(
            classify_line("CHARACTERS", true),
            LineKind::Category(Category::Characters)
        );
        assert_eq!(
            classify_line("Dedicated Transports", false),
            LineKind::Category(Category::DedicatedTransports)
        );
    }

    #[test]
    fn test_category_is_not_substring_match() {
        assert_eq!(
            classify_line("CHARACTERS OF NOTE", true),
            LineKind::Text("CHARACTERS OF NOTE")
        );
    }

    #[test]
    fn test_model_line() {
        assert_eq!(
            classify_line("• 10x Battle Sister", true),
            LineKind::Model {
                count: 10,
                name: "Battle Sister"
            }
        );
        assert_eq!(
            classify_line("•1x Canoness", true),
            LineKind::Model {
                count: 1,
                name: "Canoness"
            }
        );
    }

    #[test]
    fn test_malformed_model_bullet() {
        assert_eq!(
            classify_line("• Warlord", true),
            LineKind::MalformedBullet { glyph: MODEL_BULLET }
        );
        assert_eq!(
            classify_line("• 0x Ghost", true),
            LineKind::MalformedBullet { glyph: MODEL_BULLET }
        );
    }

    #[test]
    fn test_weapon_line() {
        assert_eq!(
            classify_line("◦ 2x Bolt rifle", true),
            LineKind::Weapon {
                count: 2,
                name: "Bolt rifle"
            }
        );
        assert_eq!(
            classify_line("◦ Enhancement: Blade of Saint Ellynor", true),
            LineKind::MalformedBullet {
                glyph: WEAPON_BULLET
            }
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            classify_line("Adepta Sororitas", true),
            LineKind::Text("Adepta Sororitas")
        );
        assert_eq!(
            classify_line("Exported with App Version: v1.2.0", true),
            LineKind::Text("Exported with App Version: v1.2.0")
        );
    }

    #[test]
    fn test_parenthesised_non_header_is_other() {
        assert_eq!(classify_line("Strike Force (2000 pts)", true), LineKind::Other);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LineKind::Other.label(), "other");
        assert_eq!(LineKind::Text("x").label(), "text");
    }
}
