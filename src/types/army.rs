//! The parsed roster tree: army, units, models.
//!
//! ```text
//! Army
//! └── Unit (category frozen at creation)
//!     └── Model (count ≥ 1)
//!         └── weapon names, in print order
//! ```

use serde::{Deserialize, Serialize};

use super::Category;

/// Points per power level in the rough conversion used for display.
const POINTS_PER_POWER: u32 = 20;

/// A whole roster export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Army {
    /// Army name from the `"<name> (<N> Points)"` header line.
    pub name: String,
    pub faction_name: String,
    pub detachment_name: String,
    /// Points limit declared in the header, not the sum of unit costs.
    pub total_points: u32,
    pub units: Vec<Unit>,
}

impl Army {
    /// Whether nothing at all was recovered from the input.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.faction_name.is_empty()
            && self.detachment_name.is_empty()
            && self.total_points == 0
            && self.units.is_empty()
    }

    /// Units printed under the given section, in input order.
    pub fn units_in(&self, category: Category) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.category == category)
    }

    /// Sum of every unit's cost.
    pub fn unit_points(&self) -> u32 {
        self.units.iter().map(|u| u.points_cost).sum()
    }

    /// Total miniatures across all units.
    pub fn total_models(&self) -> u32 {
        self.units.iter().map(Unit::total_models).sum()
    }
}

/// A costed datasheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub points_cost: u32,
    pub category: Category,
    pub models: Vec<Model>,
}

impl Unit {
    pub fn new(name: impl Into<String>, points_cost: u32, category: Category) -> Self {
        Self {
            name: name.into(),
            points_cost,
            category,
            models: Vec::new(),
        }
    }

    /// Sum of model counts.
    pub fn total_models(&self) -> u32 {
        self.models.iter().map(|m| m.count).sum()
    }

    pub fn power_rating(&self) -> u32 {
        estimate_power_rating(self.points_cost)
    }
}

/// A counted miniature type within a unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub count: u32,
    /// Weapon names as printed. Repeats are kept as separate entries.
    pub weapons: Vec<String>,
}

impl Model {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
            weapons: Vec::new(),
        }
    }

    /// Builder-style helper, mostly for tests.
    pub fn with_weapons<I, S>(mut self, weapons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weapons.extend(weapons.into_iter().map(Into::into));
        self
    }
}

/// Rough power level from a points cost, rounded up.
pub fn estimate_power_rating(points: u32) -> u32 {
    points.div_ceil(POINTS_PER_POWER)
}
