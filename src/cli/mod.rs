//! Command-line interface for rsid-harmonizer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **clean**: Split and filter raw identifier values into atomic rsIDs
//! - **resolve**: Place rsIDs on a single canonical chromosome/position
//! - **check**: Reconcile scoring-file effect/other alleles with the canonical alleles
//!
//! ## Usage
//!
//! ```text
//! # Clean an identifier column
//! cut -f1 scores.tsv | rsid-harmonizer clean -
//!
//! # Resolve against an offline var2location file
//! rsid-harmonizer resolve ids.txt --mappings var2location.tsv.gz
//!
//! # Resolve live against Ensembl (GRCh37 server)
//! rsid-harmonizer resolve ids.txt --fetch --build GRCh37
//!
//! # Check scoring-file alleles, JSON output
//! rsid-harmonizer check scores.tsv --mappings var2location.tsv --format json
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::catalog::store::VariantCatalog;
use crate::client::ensembl::EnsemblClient;
use crate::core::chromosome::ChromosomeSet;
use crate::core::types::GenomeBuild;
use crate::parsing;

pub mod check;
pub mod clean;
pub mod resolve;

#[derive(Parser)]
#[command(name = "rsid-harmonizer")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Resolve rsIDs to canonical loci and harmonize scoring-file alleles")]
#[command(
    long_about = "rsid-harmonizer places variant identifiers (rsIDs) from a scoring file on a single canonical locus and checks the declared alleles against it.\n\nMappings come from the Ensembl Variation REST service or from an offline var2location file. For each variant it reports:\n- The canonical chromosome, position and alleles (or why none could be chosen)\n- Whether the declared alleles match, and on which strand\n- Whether the allele set is palindromic (strand-ambiguous)\n- The inferred other allele when only the effect allele is declared"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split and filter raw identifiers into atomic rsIDs
    Clean(clean::CleanArgs),

    /// Resolve rsIDs to a canonical chromosome/position/alleles
    Resolve(resolve::ResolveArgs),

    /// Reconcile scoring-file alleles with the canonical alleles
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where variant mappings come from (exactly one)
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct MappingSource {
    /// Offline var2location output (tab-delimited, optionally .gz)
    #[arg(long)]
    pub mappings: Option<PathBuf>,

    /// Saved Ensembl Variation POST response (JSON)
    #[arg(long)]
    pub ensembl_json: Option<PathBuf>,

    /// Query the Ensembl Variation REST service
    #[arg(long)]
    pub fetch: bool,
}

/// Options shared by commands that resolve variants
#[derive(Args, Debug)]
pub struct ResolveOptions {
    #[command(flatten)]
    pub source: MappingSource,

    /// Genome build of the Ensembl server used with --fetch
    #[arg(long, default_value = "GRCh38")]
    pub build: GenomeBuild,

    /// Chromosomes eligible for the canonical locus (e.g. "1-22,X,Y,MT")
    #[arg(long, default_value = "1-22,X,Y,MT")]
    pub chromosomes: ChromosomeSet,
}

/// Read a whole input, `-` meaning stdin
pub(crate) fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Load mappings for `ids` from the configured source and resolve them
pub(crate) fn load_catalog(
    options: &ResolveOptions,
    ids: &[String],
    verbose: bool,
) -> anyhow::Result<VariantCatalog> {
    let source = &options.source;

    let mut catalog = if let Some(path) = &source.mappings {
        let allowed: HashSet<String> = ids.iter().cloned().collect();
        parsing::var2location::parse_var2location_file(path, Some(&allowed))?
    } else if let Some(path) = &source.ensembl_json {
        parsing::ensembl::parse_ensembl_json(&std::fs::read_to_string(path)?)?
    } else {
        let client = EnsemblClient::new(options.build)?;
        let runtime = tokio::runtime::Runtime::new()?;
        let outcome = runtime.block_on(client.fetch(ids));
        if !outcome.failed_ids.is_empty() {
            eprintln!(
                "Warning: {} identifiers could not be retrieved from Ensembl",
                outcome.failed_ids.len()
            );
        }
        outcome.catalog
    };

    let summary = catalog.resolve_all(&options.chromosomes);
    if verbose {
        eprintln!(
            "Loaded {} variant records: {} resolved, {} without an accepted mapping, {} ambiguous",
            catalog.len(),
            summary.resolved,
            summary.unmapped,
            summary.ambiguous
        );
    }

    Ok(catalog)
}
