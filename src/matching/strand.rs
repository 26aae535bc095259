use serde::{Deserialize, Serialize};

use crate::core::record::{CanonicalLocus, VariantRecord};

/// Where a declared allele was found relative to the canonical allele set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Present among the canonical alleles
    Forward,
    /// Present only among their reverse complements
    Reverse,
    /// Present in neither
    Absent,
}

impl Orientation {
    /// Classify `allele` against `locus`; the canonical strand takes priority
    #[must_use]
    pub fn of(allele: &str, locus: &CanonicalLocus) -> Self {
        if locus.has_allele(allele) {
            Self::Forward
        } else if locus.has_reverse_complement(allele) {
            Self::Reverse
        } else {
            Self::Absent
        }
    }
}

/// Outcome of reconciling declared alleles with a canonical locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandVerdict {
    /// Declared alleles are consistent with the canonical alleles on one strand
    pub matches: bool,
    /// The canonical allele set is strand-ambiguous (independent of `matches`)
    pub is_palindromic: bool,
    /// The declared alleles match the reverse complement strand
    pub is_flipped: bool,
}

/// Reconcile an effect allele, and optionally a reference allele, with `locus`.
///
/// With only an effect allele, a match on either strand counts. With both, the
/// two alleles must each be found on the same strand: both among the canonical
/// alleles (not flipped) or both among the reverse complements (flipped). One
/// allele per strand, or any missing allele, is not a match.
#[must_use]
pub fn reconcile(
    locus: &CanonicalLocus,
    effect_allele: &str,
    reference_allele: Option<&str>,
) -> StrandVerdict {
    let is_palindromic = locus.is_palindromic();
    let effect = Orientation::of(effect_allele, locus);
    let reference = reference_allele.map(|r| Orientation::of(r, locus));

    let (matches, is_flipped) = match (effect, reference) {
        (Orientation::Forward, None | Some(Orientation::Forward)) => (true, false),
        (Orientation::Reverse, None | Some(Orientation::Reverse)) => (true, true),
        _ => (false, false),
    };

    StrandVerdict {
        matches,
        is_palindromic,
        is_flipped,
    }
}

impl VariantRecord {
    /// Reconcile declared alleles with this record's canonical locus.
    ///
    /// Returns `None` when the record is unresolved and cannot be evaluated.
    #[must_use]
    pub fn check_alleles(
        &self,
        effect_allele: &str,
        reference_allele: Option<&str>,
    ) -> Option<StrandVerdict> {
        self.resolved()
            .map(|locus| reconcile(locus, effect_allele, reference_allele))
    }
}
