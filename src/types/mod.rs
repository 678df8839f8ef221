//! Core domain types for roster.
//!
//! This module contains the parsed roster tree:
//! - `Army` - the whole export, one per parse
//! - `Unit` - a costed datasheet entry tagged with its `Category`
//! - `Model` - a counted miniature type carrying weapon names

mod army;
mod category;

pub use army::{estimate_power_rating, Army, Model, Unit};
pub use category::Category;
