//! Identifier-indexed storage of variant records.
//!
//! A [`VariantCatalog`](store::VariantCatalog) is the shared lookup structure both
//! mapping sources fill: one record per variant, reachable by its primary rsID
//! and by every synonym. Build it, resolve it once against the accepted
//! chromosome set, then hand out shared references for reconciliation.
//!
//! ```
//! use rsid_harmonizer::catalog::store::VariantCatalog;
//! use rsid_harmonizer::core::chromosome::ChromosomeSet;
//! use rsid_harmonizer::core::record::{RawMapping, VariantRecord};
//!
//! let mut catalog = VariantCatalog::new();
//! catalog.insert(
//!     VariantRecord::new("rs1", vec![RawMapping::new("1", 100, "A/G")])
//!         .with_synonyms(vec!["rs100".to_string()]),
//! );
//! catalog.resolve_all(&ChromosomeSet::human_default());
//!
//! let verdict = catalog.get("rs100").and_then(|r| r.check_alleles("C", Some("T")));
//! assert!(verdict.unwrap().is_flipped);
//! ```

pub mod store;
