use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::catalog::store::VariantCatalog;
use crate::core::record::{RawMapping, VariantRecord};
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// One mapping of a variant as returned by the Ensembl Variation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsemblMapping {
    pub seq_region_name: String,
    pub start: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
    pub allele_string: String,
}

impl From<&EnsemblMapping> for RawMapping {
    fn from(m: &EnsemblMapping) -> Self {
        let mapping = RawMapping::new(m.seq_region_name.clone(), m.start, &m.allele_string);
        match m.end {
            Some(end) => mapping.with_end(end),
            None => mapping,
        }
    }
}

/// Per-variant payload of the Ensembl Variation endpoint (fields used here only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsemblVariation {
    /// Current name of the variant; absent in some payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub mappings: Vec<EnsemblMapping>,
}

impl EnsemblVariation {
    /// Convert to a record named `requested_id` unless the payload names it otherwise
    #[must_use]
    pub fn to_record(&self, requested_id: &str) -> VariantRecord {
        let primary_id = self.name.as_deref().unwrap_or(requested_id);
        let mut record =
            VariantRecord::new(primary_id, self.mappings.iter().map(RawMapping::from).collect());
        record.add_synonym(requested_id);
        for synonym in &self.synonyms {
            record.add_synonym(synonym.clone());
        }
        record
    }
}

/// A response body: requested identifier -> payload
pub type EnsemblResponse = HashMap<String, EnsemblVariation>;

/// Parse a response body (or a saved file of one) into a catalog
///
/// # Errors
///
/// Returns `ParseError::Json` if the payload does not have the expected shape,
/// or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_ensembl_json(json: &str) -> Result<VariantCatalog, ParseError> {
    let response: EnsemblResponse = serde_json::from_str(json)?;
    let mut catalog = VariantCatalog::new();
    extend_catalog(&mut catalog, response)?;
    Ok(catalog)
}

/// Add every variant of `response` to `catalog`.
///
/// The requested id and all synonyms index the same record. Identifiers are
/// processed in sorted order so the outcome does not depend on map iteration.
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the limit is exceeded.
#[allow(clippy::implicit_hasher)]
pub fn extend_catalog(
    catalog: &mut VariantCatalog,
    response: HashMap<String, EnsemblVariation>,
) -> Result<(), ParseError> {
    let sorted: BTreeMap<String, EnsemblVariation> = response.into_iter().collect();
    for (requested_id, variation) in sorted {
        if check_record_limit(catalog.len()).is_some() {
            return Err(ParseError::TooManyRecords(catalog.len()));
        }
        catalog.insert(variation.to_record(&requested_id));
    }
    debug!(
        "Catalog holds {} records under {} identifiers",
        catalog.len(),
        catalog.id_count()
    );
    Ok(())
}
