//! # rsid-harmonizer
//!
//! A library for placing variant identifiers (rsIDs) from polygenic scoring files
//! on a canonical genomic locus and reconciling the declared alleles with it.
//!
//! Scoring files list variants by rsID together with an effect allele and,
//! often, a reference (other) allele. Before the weights can be applied, each
//! rsID has to be placed on one chromosome/position and the declared alleles
//! have to be checked against the alleles known at that position, which may be
//! reported on the opposite strand.
//!
//! ## Features
//!
//! - **Identifier cleaning**: splits interaction/haplotype notation (`rs1_x_rs2`)
//!   and lists (`rs1;rs2`), drops anything that is not an rsID
//! - **Canonical locus selection**: ignores patches/ALT scaffolds and refuses to
//!   guess when the remaining mappings disagree
//! - **Strand reconciliation**: forward/flipped matching with palindrome detection
//! - **Other-allele inference**: recovers a missing reference allele, or reports it unknown
//! - **Two sources, one model**: Ensembl Variation REST or offline var2location output
//!
//! ## Example
//!
//! ```rust
//! use rsid_harmonizer::parsing::var2location::parse_var2location_text;
//! use rsid_harmonizer::{ChromosomeSet, OtherAllele};
//!
//! let mappings = "rs7412\trs7412\tC/T\t19\t44908822\t44908822\n";
//! let mut catalog = parse_var2location_text(mappings, None).unwrap();
//! catalog.resolve_all(&ChromosomeSet::human_default());
//!
//! let record = catalog.get("rs7412").unwrap();
//! let verdict = record.check_alleles("A", Some("G")).unwrap();
//! assert!(verdict.matches && verdict.is_flipped);
//! assert_eq!(record.infer_other_allele("T"), OtherAllele::Known("C".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Identifier-indexed record storage with synonym aliasing
//! - [`client`]: Ensembl Variation batch client
//! - [`core`]: Variant records, canonical loci, allele helpers, configuration types
//! - [`matching`]: Strand reconciliation and other-allele inference
//! - [`parsing`]: rsID cleaning, var2location, Ensembl JSON and scoring-file parsers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod client;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::VariantCatalog;
pub use core::chromosome::ChromosomeSet;
pub use core::record::{CanonicalLocus, RawMapping, Unresolved, VariantRecord};
pub use core::types::*;
pub use matching::inference::OtherAllele;
pub use matching::strand::StrandVerdict;
pub use matching::Harmonization;
