//! Live retrieval of variant mappings.
//!
//! [`EnsemblClient`](ensembl::EnsemblClient) posts identifiers to the Ensembl
//! Variation endpoint in chunks, waits out rate limiting, and returns whatever
//! it could retrieve as a [`VariantCatalog`](crate::catalog::store::VariantCatalog),
//! the same shape the offline var2location parser produces.

pub mod ensembl;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Still rate limited after {0} retries")]
    RateLimited(u32),

    #[error("Invalid response payload: {0}")]
    Payload(String),
}
