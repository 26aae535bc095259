use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_input, OutputFormat};
use crate::parsing::rsid::clean_rsids_sorted;

#[derive(Args)]
pub struct CleanArgs {
    /// File with one raw identifier value per line; '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute clean subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CleanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let raw: Vec<&str> = text.lines().collect();
    let cleaned = clean_rsids_sorted(&raw);

    if verbose {
        eprintln!(
            "{} raw values -> {} distinct rsIDs",
            raw.len(),
            cleaned.len()
        );
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for id in &cleaned {
                println!("{id}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cleaned)?),
    }

    Ok(())
}
