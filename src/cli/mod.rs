pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod parse;
pub mod render;

use clap::{Parser, Subcommand};

/// roster - Army list export parser
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter implied by the verbosity flag.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse roster exports and print them as structured data
    Parse(parse::ParseArgs),

    /// Report lines the parser could not place
    Check(check::CheckArgs),

    /// List discovered rosters with a one-line summary each
    List(list::ListArgs),

    /// Re-write a roster in canonical export form
    Render(render::RenderArgs),

    /// Initialize a roster project (generates roster.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
