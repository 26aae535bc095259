//! Core data types for variant mapping and harmonization.
//!
//! - [`VariantRecord`](record::VariantRecord): a variant as reported by a mapping
//!   source, with its raw candidate loci and (once resolved) its canonical locus
//! - [`CanonicalLocus`](record::CanonicalLocus): the single chromosome/position/allele
//!   set chosen for a variant, with index-aligned reverse complements
//! - [`ChromosomeSet`](chromosome::ChromosomeSet): chromosomes eligible for a canonical locus
//! - [`GenomeBuild`](types::GenomeBuild), [`ConfigError`](types::ConfigError)
//!
//! ## Allele strings
//!
//! Sources report alleles as a `/`-separated string whose first element is the
//! reference (ancestral) allele:
//!
//! | Allele string | Alleles | Reverse complements |
//! |---------------|---------|---------------------|
//! | `A/G`         | A, G    | T, C                |
//! | `A/T`         | A, T    | T, A (palindromic)  |
//! | `-/CT`        | -, CT   | (none), AG          |

pub mod allele;
pub mod chromosome;
pub mod record;
pub mod types;
