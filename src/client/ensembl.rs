use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::catalog::store::VariantCatalog;
use crate::client::ClientError;
use crate::core::types::GenomeBuild;
use crate::parsing::ensembl::{extend_catalog, EnsemblResponse};
use crate::utils::validation::MAX_IDS_PER_REQUEST;

const GRCH38_URL: &str = "https://rest.ensembl.org";
const GRCH37_URL: &str = "https://grch37.rest.ensembl.org";
const VARIATION_PATH: &str = "/variation/homo_sapiens";

/// Default number of rate-limit retries per chunk
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Wait used when a `Retry-After` header is present but unreadable
const FALLBACK_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Base URL of the Ensembl REST server for `build`
#[must_use]
pub fn base_url(build: GenomeBuild) -> &'static str {
    match build {
        GenomeBuild::Grch37 => GRCH37_URL,
        GenomeBuild::Grch38 => GRCH38_URL,
    }
}

/// Parse a `Retry-After` value given in (possibly fractional) seconds
#[must_use]
pub fn parse_retry_after(value: &str) -> Duration {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(FALLBACK_RETRY_DELAY)
}

/// Result of a batch lookup: everything that could be retrieved, plus the
/// identifiers whose request failed
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub catalog: VariantCatalog,
    pub failed_ids: Vec<String>,
}

/// Batch client for the Ensembl Variation POST endpoint
#[derive(Debug, Clone)]
pub struct EnsemblClient {
    client: Client,
    base_url: String,
    chunk_size: usize,
    max_retries: u32,
}

impl EnsemblClient {
    /// Create a client for the Ensembl server hosting `build`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the HTTP client cannot be constructed.
    pub fn new(build: GenomeBuild) -> Result<Self, ClientError> {
        Self::with_base_url(base_url(build))
    }

    /// Create a client for an arbitrary Ensembl-compatible server
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the HTTP client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().build().map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chunk_size: MAX_IDS_PER_REQUEST,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Identifiers per request, clamped to `1..=MAX_IDS_PER_REQUEST`
    #[must_use]
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.clamp(1, MAX_IDS_PER_REQUEST);
        self
    }

    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{VARIATION_PATH}", self.base_url)
    }

    /// Look up `ids` in chunks.
    ///
    /// A failed chunk does not fail the batch: its identifiers are reported in
    /// [`FetchOutcome::failed_ids`] and the remaining chunks are still fetched.
    /// Identifiers unknown to Ensembl are simply absent from the catalog.
    pub async fn fetch(&self, ids: &[String]) -> FetchOutcome {
        let mut outcome = FetchOutcome::default();
        let total_chunks = ids.len().div_ceil(self.chunk_size);

        for (n, chunk) in ids.chunks(self.chunk_size).enumerate() {
            debug!("Requesting chunk {}/{total_chunks} ({} ids)", n + 1, chunk.len());

            let result = match self.post_chunk(chunk).await {
                Ok(response) => extend_catalog(&mut outcome.catalog, response)
                    .map_err(|e| ClientError::Payload(e.to_string())),
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                warn!("Chunk {}/{total_chunks} failed: {e}", n + 1);
                outcome.failed_ids.extend(chunk.iter().cloned());
            }
        }

        info!(
            "Retrieved {} of {} variants from {}",
            outcome.catalog.len(),
            ids.len(),
            self.base_url
        );
        outcome
    }

    /// POST one chunk, honoring `Retry-After` up to `max_retries` times
    async fn post_chunk(&self, chunk: &[String]) -> Result<EnsemblResponse, ClientError> {
        let body = serde_json::json!({ "ids": chunk });
        let mut attempt = 0;

        loop {
            let response = self
                .client
                .post(self.endpoint())
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&body)
                .send()
                .await
                .map_err(ClientError::Transport)?;

            if let Some(delay) = retry_delay(&response) {
                if attempt >= self.max_retries {
                    return Err(ClientError::RateLimited(attempt));
                }
                attempt += 1;
                debug!("Rate limited; retrying in {delay:?} (attempt {attempt})");
                sleep(delay).await;
                continue;
            }

            let status = response.status();
            if !status.is_success() {
                return Err(ClientError::Status(status));
            }

            return response
                .json::<EnsemblResponse>()
                .await
                .map_err(|e| ClientError::Payload(e.to_string()));
        }
    }
}

fn retry_delay(response: &Response) -> Option<Duration> {
    match response.headers().get(RETRY_AFTER) {
        Some(value) => Some(parse_retry_after(value.to_str().unwrap_or_default())),
        None if response.status() == StatusCode::TOO_MANY_REQUESTS => Some(FALLBACK_RETRY_DELAY),
        None => None,
    }
}
