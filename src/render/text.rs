//! Canonical export text.
//!
//! Writes an [`Army`] back out in the same shape the parser reads, so a
//! parsed roster with a name survives `parse_army(render_army(..))`
//! unchanged. Weapon counts are not kept by the parser and come out as
//! `1x`.

use crate::parser::classify::{MODEL_BULLET, WEAPON_BULLET};
use crate::types::{Army, Category};

/// Render an army as roster export text.
pub fn render_army(army: &Army) -> String {
    let mut out = String::new();

    if !army.name.is_empty() {
        push_line(&mut out, &format!("{} ({} Points)", army.name, army.total_points));
    }
    for text in [&army.faction_name, &army.detachment_name] {
        if !text.is_empty() {
            push_line(&mut out, text);
        }
    }

    let mut category = Category::Unknown;
    for unit in &army.units {
        if unit.category != category {
            category = unit.category;
            if category.is_known() {
                push_separator(&mut out);
                push_line(&mut out, category.keyword());
            }
        }

        push_separator(&mut out);
        push_line(&mut out, &format!("{} ({} Points)", unit.name, unit.points_cost));
        for model in &unit.models {
            push_line(&mut out, &format!("{MODEL_BULLET} {}x {}", model.count, model.name));
            for weapon in &model.weapons {
                push_line(&mut out, &format!("{WEAPON_BULLET} 1x {weapon}"));
            }
        }
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_separator(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}
