use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::VariantCatalog;
use crate::cli::{load_catalog, read_input, OutputFormat, ResolveOptions};
use crate::core::allele::ALLELE_SEPARATOR;
use crate::core::record::{CanonicalLocus, Unresolved};
use crate::parsing::rsid::clean_rsids_sorted;

#[derive(Args)]
pub struct ResolveArgs {
    /// File with identifiers, one raw value per line; '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub options: ResolveOptions,
}

/// Resolution status of one requested identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Status {
    Resolved,
    NotFound,
    NoAcceptedMapping,
    Ambiguous,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::NotFound => write!(f, "not_found"),
            Self::NoAcceptedMapping => write!(f, "no_accepted_mapping"),
            Self::Ambiguous => write!(f, "ambiguous"),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResolvedId<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_id: Option<&'a str>,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    locus: Option<&'a CanonicalLocus>,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the input or mapping source cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let ids = clean_rsids_sorted(text.lines());
    if verbose {
        eprintln!("Resolving {} distinct rsIDs", ids.len());
    }

    let catalog = load_catalog(&args.options, &ids, verbose)?;
    let results: Vec<ResolvedId> = ids
        .iter()
        .map(|id| describe(id, &catalog))
        .collect();

    match format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv(&results),
    }

    Ok(())
}

fn describe<'a>(id: &'a str, catalog: &'a VariantCatalog) -> ResolvedId<'a> {
    let Some(record) = catalog.get(id) else {
        return ResolvedId {
            id,
            primary_id: None,
            status: Status::NotFound,
            locus: None,
        };
    };

    let status = match (record.resolved(), record.unresolved_reason()) {
        (Some(_), _) => Status::Resolved,
        (None, Some(Unresolved::Ambiguous)) => Status::Ambiguous,
        (None, _) => Status::NoAcceptedMapping,
    };

    ResolvedId {
        id,
        primary_id: Some(&record.primary_id),
        status,
        locus: record.resolved(),
    }
}

fn alleles(locus: &CanonicalLocus) -> String {
    locus.alleles.join(&ALLELE_SEPARATOR.to_string())
}

fn print_text(results: &[ResolvedId]) {
    let resolved = results.iter().filter(|r| r.locus.is_some()).count();
    println!("Resolved {resolved} of {} rsIDs", results.len());
    println!("{}", "=".repeat(60));

    for r in results {
        match r.locus {
            Some(locus) => println!(
                "{:<16} {}:{} {}",
                r.id,
                locus.chromosome,
                locus.position,
                alleles(locus)
            ),
            None => println!("{:<16} {}", r.id, r.status),
        }
    }
}

fn print_tsv(results: &[ResolvedId]) {
    println!("rsid\tprimary_id\tstatus\tchromosome\tposition\talleles");
    for r in results {
        let (chromosome, position, allele_string) = match r.locus {
            Some(locus) => (
                locus.chromosome.clone(),
                locus.position.to_string(),
                alleles(locus),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        println!(
            "{}\t{}\t{}\t{chromosome}\t{position}\t{allele_string}",
            r.id,
            r.primary_id.unwrap_or_default(),
            r.status
        );
    }
}
