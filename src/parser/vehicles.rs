//! Vehicle consolidation pass.
//!
//! Vehicle datasheets export their wargear as `•` bullets rather than
//! `◦` sub-bullets, so a Rhino comes out as several one-off "models" with
//! no weapons:
//!
//! ```text
//! Rhino (75 Points)
//! • 1x Armoured tracks
//! • 1x Hunter-killer missile
//! • 1x Storm bolter
//! ```
//!
//! This pass folds such units into a single model named after the unit
//! whose weapons are the former model names. It runs after the tree is
//! complete and is off by default.

use log::debug;

use crate::types::{Army, Model, Unit};

/// Collapse vehicle-shaped units in place. Returns how many were changed.
pub fn consolidate_vehicles(army: &mut Army) -> usize {
    let mut changed = 0;
    for unit in &mut army.units {
        if looks_like_vehicle(unit) {
            debug!("consolidating vehicle {:?}", unit.name);
            let weapons: Vec<String> = unit.models.drain(..).map(|m| m.name).collect();
            let hull = Model::new(unit.name.clone(), 1).with_weapons(weapons);
            unit.models.push(hull);
            changed += 1;
        }
    }
    changed
}

/// More than one model and not a single weapon among them.
fn looks_like_vehicle(unit: &Unit) -> bool {
    unit.models.len() > 1 && unit.models.iter().all(|m| m.weapons.is_empty())
}
