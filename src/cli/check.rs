use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::{load_catalog, read_input, OutputFormat, ResolveOptions};
use crate::core::allele::ALLELE_SEPARATOR;
use crate::matching::Harmonization;
use crate::parsing::rsid::clean_rsids_sorted;
use crate::parsing::scores::parse_scores_text;
use crate::utils::validation::is_valid_allele;

#[derive(Args)]
pub struct CheckArgs {
    /// Scoring file (tab-delimited: rsID, effect_allele, [other_allele]); '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub options: ResolveOptions,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the scoring file or mapping source cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rows = parse_scores_text(&read_input(&args.input)?)?;
    let ids = clean_rsids_sorted(rows.iter().map(|r| r.rsid.as_str()));
    if verbose {
        eprintln!("Parsed {} scoring rows ({} distinct rsIDs)", rows.len(), ids.len());
    }

    let catalog = load_catalog(&args.options, &ids, verbose)?;

    let results: Vec<Harmonization> = rows
        .into_iter()
        .map(|row| {
            if !is_valid_allele(&row.effect_allele) {
                warn!("{}: unusual effect allele '{}'", row.rsid, row.effect_allele);
            }
            let record = catalog.get(&row.rsid);
            Harmonization::evaluate(row.rsid, row.effect_allele, row.other_allele, record)
        })
        .collect();

    match format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv(&results),
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn print_text(results: &[Harmonization]) {
    let verdicts: Vec<_> = results.iter().filter_map(|h| h.verdict).collect();
    println!("Harmonization Results");
    println!("{}", "=".repeat(60));
    println!("  Variants: {}", results.len());
    println!("  Unresolved: {}", results.len() - verdicts.len());
    println!("  Matched: {}", verdicts.iter().filter(|v| v.matches).count());
    println!(
        "  Flipped: {}",
        verdicts.iter().filter(|v| v.matches && v.is_flipped).count()
    );
    println!(
        "  Palindromic: {}",
        verdicts.iter().filter(|v| v.is_palindromic).count()
    );
    println!();

    for h in results {
        let declared = match &h.other_allele {
            Some(other) => format!("{}/{other}", h.effect_allele),
            None => h.effect_allele.clone(),
        };
        match (&h.locus, &h.verdict) {
            (Some(locus), Some(v)) => {
                print!(
                    "{:<16} {:<8} {}:{} {}  match={} flipped={} palindromic={}",
                    h.rsid,
                    declared,
                    locus.chromosome,
                    locus.position,
                    locus.alleles.join(&ALLELE_SEPARATOR.to_string()),
                    yes_no(v.matches),
                    yes_no(v.is_flipped),
                    yes_no(v.is_palindromic),
                );
                match &h.inferred_other_allele {
                    Some(other) => println!(" other={other}"),
                    None => println!(),
                }
            }
            _ => println!("{:<16} {:<8} unresolved", h.rsid, declared),
        }
    }
}

fn print_tsv(results: &[Harmonization]) {
    println!(
        "rsid\teffect_allele\tother_allele\tchromosome\tposition\talleles\tmatches\tis_palindromic\tis_flipped\tinferred_other_allele"
    );
    for h in results {
        let (chromosome, position, alleles) = match &h.locus {
            Some(locus) => (
                locus.chromosome.clone(),
                locus.position.to_string(),
                locus.alleles.join(&ALLELE_SEPARATOR.to_string()),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let (matches, palindromic, flipped) = match h.verdict {
            Some(v) => (
                v.matches.to_string(),
                v.is_palindromic.to_string(),
                v.is_flipped.to_string(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let inferred = h
            .inferred_other_allele
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        println!(
            "{}\t{}\t{}\t{chromosome}\t{position}\t{alleles}\t{matches}\t{palindromic}\t{flipped}\t{inferred}",
            h.rsid,
            h.effect_allele,
            h.other_allele.as_deref().unwrap_or_default()
        );
    }
}
