use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::allele::{reverse_complement, split_allele_string};
use crate::core::chromosome::ChromosomeSet;

/// One candidate locus reported for a variant by a mapping source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMapping {
    /// Sequence region name (e.g. `1`, `X`, `CHR_HSCHR6_MHC_COX_CTG1`)
    pub chromosome: String,

    /// 1-based start position
    pub position: u64,

    /// 1-based end position, when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,

    /// Ordered alleles; the first is the reference allele by source convention
    pub alleles: Vec<String>,
}

impl RawMapping {
    pub fn new(chromosome: impl Into<String>, position: u64, allele_string: &str) -> Self {
        Self {
            chromosome: chromosome.into(),
            position,
            end: None,
            alleles: split_allele_string(allele_string),
        }
    }

    #[must_use]
    pub fn with_end(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }
}

/// The single canonical location chosen for a variant.
///
/// `alleles_reverse_complement` is index-aligned with `alleles`; an entry is
/// `None` when the allele has no defined reverse complement (non-ACGT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLocus {
    pub chromosome: String,
    pub position: u64,
    pub alleles: Vec<String>,
    pub alleles_reverse_complement: Vec<Option<String>>,
}

impl CanonicalLocus {
    fn from_mapping(mapping: &RawMapping) -> Self {
        let alleles_reverse_complement = mapping
            .alleles
            .iter()
            .map(|a| reverse_complement(a))
            .collect();

        Self {
            chromosome: mapping.chromosome.clone(),
            position: mapping.position,
            alleles: mapping.alleles.clone(),
            alleles_reverse_complement,
        }
    }

    /// Whether `allele` is one of the alleles as reported on the mapped strand
    #[must_use]
    pub fn has_allele(&self, allele: &str) -> bool {
        self.alleles.iter().any(|a| a == allele)
    }

    /// Whether `allele` is the reverse complement of one of the alleles
    #[must_use]
    pub fn has_reverse_complement(&self, allele: &str) -> bool {
        self.alleles_reverse_complement
            .iter()
            .flatten()
            .any(|rc| rc == allele)
    }

    /// Strand-ambiguous allele set: some allele also appears among the reverse
    /// complements (of any allele, not only its own)
    #[must_use]
    pub fn is_palindromic(&self) -> bool {
        self.alleles.iter().any(|a| self.has_reverse_complement(a))
    }
}

/// Why a record has no canonical locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unresolved {
    /// No mapping lies on an accepted chromosome
    NoAcceptedMapping,
    /// Accepted mappings disagree on position
    Ambiguous,
}

/// Choose the canonical locus among `mappings`.
///
/// Only mappings on `accepted` chromosomes are considered. The first of them is
/// chosen when it is the only one or when every accepted mapping has the same
/// position; otherwise the variant is left unresolved rather than guessed.
///
/// # Errors
///
/// Returns the reason the variant could not be placed. This is an expected
/// outcome, not a failure of the input.
pub fn select_canonical(
    mappings: &[RawMapping],
    accepted: &ChromosomeSet,
) -> Result<CanonicalLocus, Unresolved> {
    let mut candidates = mappings.iter().filter(|m| accepted.contains(&m.chromosome));

    let first = candidates.next().ok_or(Unresolved::NoAcceptedMapping)?;
    if candidates.any(|m| m.position != first.position) {
        return Err(Unresolved::Ambiguous);
    }

    Ok(CanonicalLocus::from_mapping(first))
}

/// A variant as known to a mapping source, shared by its primary id and
/// every synonym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Canonical identifier (e.g. `rs123`)
    pub primary_id: String,

    /// Other identifiers that resolve to this record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonym_ids: Vec<String>,

    /// Candidate loci in source order
    pub raw_mappings: Vec<RawMapping>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolved: Option<CanonicalLocus>,

    /// Why the last resolution failed
    #[serde(skip)]
    unresolved: Option<Unresolved>,
}

impl VariantRecord {
    pub fn new(primary_id: impl Into<String>, raw_mappings: Vec<RawMapping>) -> Self {
        Self {
            primary_id: primary_id.into(),
            synonym_ids: Vec::new(),
            raw_mappings,
            resolved: None,
            unresolved: None,
        }
    }

    #[must_use]
    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonym_ids = synonyms;
        self
    }

    /// Record `synonym` as another name for this variant (no duplicates, never the primary id)
    pub fn add_synonym(&mut self, synonym: impl Into<String>) {
        let synonym = synonym.into();
        if synonym != self.primary_id && !self.synonym_ids.contains(&synonym) {
            self.synonym_ids.push(synonym);
        }
    }

    /// Select the canonical locus against `accepted` and store it.
    ///
    /// Re-resolving replaces any previous result, so the record always reflects
    /// the last chromosome set it was resolved against.
    pub fn resolve(&mut self, accepted: &ChromosomeSet) -> Result<&CanonicalLocus, Unresolved> {
        match select_canonical(&self.raw_mappings, accepted) {
            Ok(locus) => {
                self.unresolved = None;
                Ok(&*self.resolved.insert(locus))
            }
            Err(reason) => {
                debug!(
                    "{} unresolved ({:?}, {} raw mappings)",
                    self.primary_id,
                    reason,
                    self.raw_mappings.len()
                );
                self.resolved = None;
                self.unresolved = Some(reason);
                Err(reason)
            }
        }
    }

    /// The canonical locus, if resolution succeeded
    #[must_use]
    pub fn resolved(&self) -> Option<&CanonicalLocus> {
        self.resolved.as_ref()
    }

    /// Why resolution failed; `None` if resolved or never resolved
    #[must_use]
    pub fn unresolved_reason(&self) -> Option<Unresolved> {
        self.unresolved
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// All identifiers this record answers to, primary first
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_id.as_str()).chain(self.synonym_ids.iter().map(String::as_str))
    }
}
