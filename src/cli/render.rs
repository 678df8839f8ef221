//! Render command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::{parse_army_file, ParseOptions};
use crate::render::render_army;

/// Re-write a roster in canonical export form
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Roster file to normalize
    pub file: PathBuf,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let parsed = parse_army_file(&args.file, &ParseOptions::default())?;
    print!("{}", render_army(&parsed.army));
    Ok(())
}
