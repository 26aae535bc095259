use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod client;
mod core;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("rsid_harmonizer=debug,info")
    } else {
        EnvFilter::new("rsid_harmonizer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Clean(args) => {
            cli::clean::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
