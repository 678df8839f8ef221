//! Human-readable army summary.

use crate::output::plural;
use crate::types::{Army, Category};

/// One-line description used by `roster list`.
pub fn summary_line(army: &Army) -> String {
    let name = if army.name.is_empty() {
        "(unnamed army)"
    } else {
        army.name.as_str()
    };
    let mut line = format!("{} [{} pts]", name, army.total_points);
    if !army.faction_name.is_empty() {
        line.push_str(&format!(" {}", army.faction_name));
    }
    line.push_str(&format!(", {}", plural(army.units.len(), "unit", "units")));
    line
}

/// Multi-line breakdown grouped by section.
pub fn summarize_army(army: &Army) -> String {
    let mut out = String::new();
    out.push_str(&summary_line(army));
    out.push('\n');

    if !army.detachment_name.is_empty() {
        out.push_str(&format!("  Detachment: {}\n", army.detachment_name));
    }
    out.push_str(&format!(
        "  Units cost {} of {} points, {}\n",
        army.unit_points(),
        army.total_points,
        plural(army.total_models() as usize, "model", "models")
    ));

    let sections = Category::ALL.into_iter().chain([Category::Unknown]);
    for category in sections {
        let mut units = army.units_in(category).peekable();
        if units.peek().is_none() {
            continue;
        }
        out.push_str(&format!("  {}\n", category));
        for unit in units {
            out.push_str(&format!(
                "    {} ({} pts, PR {}) - {}\n",
                unit.name,
                unit.points_cost,
                unit.power_rating(),
                plural(unit.total_models() as usize, "model", "models")
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_army;

    const SOURCE: &str = "\
Sisters Strike Force (2000 Points)
Adepta Sororitas
Hallowed Martyrs
BATTLELINE
Battle Sisters Squad (100 Points)
• 10x Battle Sister
CHARACTERS
Canoness (90 Points)
• 1x Canoness
";

    #[test]
    fn test_summary_line() {
        let army = parse_army(SOURCE);
        assert_eq!(
            summary_line(&army),
            "Sisters Strike Force [2000 pts] Adepta Sororitas, 2 units"
        );
    }

    #[test]
    fn test_summary_line_unnamed() {
        assert_eq!(summary_line(&Army::default()), "(unnamed army) [0 pts], 0 units");
    }

    #[test]
    fn test_summarize_groups_in_print_order() {
        let army = parse_army(SOURCE);
        insta::assert_snapshot!(summarize_army(&army), @r"
        Sisters Strike Force [2000 pts] Adepta Sororitas, 2 units
          Detachment: Hallowed Martyrs
          Units cost 190 of 2000 points, 11 models
          CHARACTERS
            Canoness (90 pts, PR 5) - 1 model
          BATTLELINE
            Battle Sisters Squad (100 pts, PR 5) - 10 models
        ");
    }
}
