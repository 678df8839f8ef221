use clap::Parser;
use miette::Result;
use roster::cli::{Cli, Commands};
use roster::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Parse(args) => roster::cli::parse::run(args, &printer)?,
        Commands::Check(args) => roster::cli::check::run(args, &printer)?,
        Commands::List(args) => roster::cli::list::run(args, &printer)?,
        Commands::Render(args) => roster::cli::render::run(args)?,
        Commands::Init(args) => roster::cli::init::run(args, &printer)?,
        Commands::Completions(args) => roster::cli::completions::run(args)?,
    }

    Ok(())
}
