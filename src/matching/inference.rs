use serde::{Deserialize, Serialize};

use crate::core::allele::ALLELE_SEPARATOR;
use crate::core::record::{CanonicalLocus, VariantRecord};

/// Inferred other (non-effect) allele
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherAllele {
    /// One allele, or several candidates joined with `/`
    Known(String),
    /// Could not be inferred
    Unknown,
}

impl OtherAllele {
    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(allele) => Some(allele),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for OtherAllele {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(allele) => write!(f, "{allele}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Infer the other allele for `effect_allele` at `locus`.
///
/// An effect allele among the alternate alleles implies the reference allele.
/// An effect allele equal to the reference implies the alternate alleles
/// (`/`-joined when there are several). Anything else is `Unknown`.
#[must_use]
pub fn infer_other_allele(locus: &CanonicalLocus, effect_allele: &str) -> OtherAllele {
    let Some((reference, alternates)) = locus.alleles.split_first() else {
        return OtherAllele::Unknown;
    };

    if alternates.iter().any(|a| a == effect_allele) {
        OtherAllele::Known(reference.clone())
    } else if reference == effect_allele && !alternates.is_empty() {
        OtherAllele::Known(alternates.join(&ALLELE_SEPARATOR.to_string()))
    } else {
        OtherAllele::Unknown
    }
}

impl VariantRecord {
    /// Infer the other allele from this record's canonical locus; `Unknown` if unresolved
    #[must_use]
    pub fn infer_other_allele(&self, effect_allele: &str) -> OtherAllele {
        self.resolved()
            .map_or(OtherAllele::Unknown, |locus| {
                infer_other_allele(locus, effect_allele)
            })
    }
}
