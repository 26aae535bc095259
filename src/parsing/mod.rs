//! Parsers for identifier lists and variant mapping sources.
//!
//! This module provides:
//!
//! - **rsID cleaning** ([`rsid`]): split/filter submitted identifier values
//! - **var2location output** ([`var2location`]): the offline, precomputed mapping file
//! - **Ensembl Variation JSON** ([`ensembl`]): the live service's response payload
//! - **Scoring files** ([`scores`]): rsID, effect allele and optional other allele per row
//!
//! Both mapping sources produce the same [`VariantCatalog`](crate::catalog::store::VariantCatalog).
//!
//! ## var2location columns
//!
//! | Column | Description |
//! |--------|-------------|
//! | 1 | Query rsID (as requested) |
//! | 2 | Canonical rsID (current dbSNP name) |
//! | 3 | Allele string (`A/G`, `-/CT`) |
//! | 4 | Sequence region name |
//! | 5 | Start |
//! | 6 | End |

pub mod ensembl;
pub mod rsid;
pub mod scores;
pub mod var2location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mapping format: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = crate::utils::validation::MAX_RECORDS)]
    TooManyRecords(usize),
}
