//! Rendering module for roster.
//!
//! This module turns a parsed army back into text: either canonical
//! export text that the parser reads again, or a readable summary.

mod summary;
mod text;

pub use summary::{summarize_army, summary_line};
pub use text::render_army;
