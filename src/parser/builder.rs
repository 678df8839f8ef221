//! Single-pass tree builder.
//!
//! The builder holds at most one open unit and one open model. Any line
//! that starts a new unit or section flushes them into their parents:
//! model into unit, then unit into army. Flushed entities are never
//! touched again.

use log::{debug, trace};

use crate::types::{Army, Category, Model, Unit};

use super::classify::{classify_line, LineKind};
use super::diagnostics::{ParseDiagnostics, SkipReason};

/// Incremental state for one parse.
#[derive(Debug, Default)]
pub struct ArmyBuilder {
    army: Army,
    category: Category,
    open_unit: Option<Unit>,
    open_model: Option<Model>,
    /// Non-blank lines seen so far.
    position: usize,
    diagnostics: ParseDiagnostics,
}

impl ArmyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw input line.
    ///
    /// `line_number` is 1-indexed and only used for diagnostics. Blank
    /// lines are ignored and do not advance the position.
    pub fn feed(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let kind = classify_line(line, !self.army.name.is_empty());
        trace!("line {line_number}: {} {line:?}", kind.label());
        self.apply(line_number, line, kind);
        self.position += 1;
    }

    fn apply(&mut self, line_number: usize, line: &str, kind: LineKind<'_>) {
        match kind {
            LineKind::ArmyHeader { name, points } => {
                debug!("army {name:?} ({points} points)");
                self.army.name = name.to_string();
                self.army.total_points = points;
            }
            LineKind::Category(category) => {
                self.flush_unit();
                debug!("category {category}");
                self.category = category;
            }
            LineKind::UnitHeader { name, points } => {
                self.flush_unit();
                debug!("unit {name:?} ({points} points) in {}", self.category);
                self.open_unit = Some(Unit::new(name, points, self.category));
            }
            LineKind::Model { count, name } => {
                if self.open_unit.is_none() {
                    self.diagnostics
                        .skip(line_number, line, SkipReason::OrphanModel);
                    return;
                }
                self.flush_model();
                self.open_model = Some(Model::new(name, count));
            }
            // The weapon count is not kept; only the name is.
            LineKind::Weapon { name, .. } => match self.open_model.as_mut() {
                Some(model) => model.weapons.push(name.to_string()),
                None => self
                    .diagnostics
                    .skip(line_number, line, SkipReason::OrphanWeapon),
            },
            LineKind::MalformedBullet { .. } => {
                self.diagnostics
                    .skip(line_number, line, SkipReason::MalformedBullet);
            }
            LineKind::Text(text) => self.apply_text(line_number, text),
            LineKind::Other => {
                self.diagnostics
                    .skip(line_number, line, SkipReason::Unclassified);
            }
        }
    }

    /// Faction first, then detachment, each at most once.
    fn apply_text(&mut self, line_number: usize, text: &str) {
        if self.army.faction_name.is_empty() && self.position > 0 {
            debug!("faction {text:?}");
            self.army.faction_name = text.to_string();
        } else if self.army.detachment_name.is_empty() && !self.army.faction_name.is_empty() {
            debug!("detachment {text:?}");
            self.army.detachment_name = text.to_string();
        } else {
            self.diagnostics
                .skip(line_number, text, SkipReason::IgnoredText);
        }
    }

    fn flush_model(&mut self) {
        if let Some(model) = self.open_model.take() {
            if let Some(unit) = self.open_unit.as_mut() {
                unit.models.push(model);
            }
        }
    }

    fn flush_unit(&mut self) {
        self.flush_model();
        if let Some(unit) = self.open_unit.take() {
            debug!("close unit {:?} with {} model(s)", unit.name, unit.models.len());
            self.army.units.push(unit);
        }
    }

    /// Flush whatever is still open and hand back the tree.
    pub fn finish(mut self) -> (Army, ParseDiagnostics) {
        self.flush_unit();
        (self.army, self.diagnostics)
    }
}
