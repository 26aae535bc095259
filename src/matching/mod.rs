//! Allele harmonization against a resolved variant.
//!
//! - [`strand`]: reconcile declared effect/reference alleles with the canonical
//!   alleles, detecting strand flips and palindromic allele sets
//! - [`inference`]: infer a missing reference (other) allele from the effect allele
//!
//! Both operate on a [`CanonicalLocus`](crate::core::record::CanonicalLocus) and
//! never modify it. Unresolved records cannot be evaluated: reconciliation
//! returns `None` and inference returns [`OtherAllele::Unknown`](inference::OtherAllele).

pub mod inference;
pub mod strand;

use serde::{Deserialize, Serialize};

use crate::core::record::{CanonicalLocus, VariantRecord};
use inference::OtherAllele;
use strand::StrandVerdict;

/// Harmonization result for one declared variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmonization {
    /// Identifier as declared
    pub rsid: String,
    pub effect_allele: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_allele: Option<String>,
    /// Canonical locus, if the variant could be placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locus: Option<CanonicalLocus>,
    /// Strand verdict, if the variant could be placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<StrandVerdict>,
    /// Inferred other allele, computed only when none was declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_other_allele: Option<OtherAllele>,
}

impl Harmonization {
    /// Harmonize a declared variant against the record found for it, if any.
    ///
    /// When no other allele is declared, the verdict is computed on the effect
    /// allele alone and the other allele is inferred.
    #[must_use]
    pub fn evaluate(
        rsid: impl Into<String>,
        effect_allele: impl Into<String>,
        other_allele: Option<String>,
        record: Option<&VariantRecord>,
    ) -> Self {
        let effect_allele = effect_allele.into();
        let locus = record.and_then(VariantRecord::resolved);

        let verdict = locus.map(|l| strand::reconcile(l, &effect_allele, other_allele.as_deref()));
        let inferred_other_allele = match (&other_allele, locus) {
            (None, Some(l)) => Some(inference::infer_other_allele(l, &effect_allele)),
            (None, None) => Some(OtherAllele::Unknown),
            (Some(_), _) => None,
        };

        Self {
            rsid: rsid.into(),
            effect_allele,
            other_allele,
            locus: locus.cloned(),
            verdict,
            inferred_other_allele,
        }
    }
}
