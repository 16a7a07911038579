use clap::Parser;
use galaxy::cli::{Cli, Commands};
use galaxy::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => galaxy::cli::generate::run(args, &printer)?,
        Commands::Stats(args) => galaxy::cli::stats::run(args, &printer)?,
        Commands::Init(args) => galaxy::cli::init::run(args, &printer)?,
        Commands::Completions(args) => galaxy::cli::completions::run(args)?,
    }

    Ok(())
}
