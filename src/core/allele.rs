//! Allele helpers: allele-string splitting and reverse complement.

/// Separator between alleles in an Ensembl/var2location allele string (`A/G/T`)
pub const ALLELE_SEPARATOR: char = '/';

/// Complement a single uppercase nucleotide.
///
/// Returns `None` for anything outside `ACGT`, including `N`, `-` and
/// repeat notation characters.
#[inline]
#[must_use]
pub fn complement(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Reverse complement of an allele.
///
/// Multi-base alleles are reversed and complemented base by base. Alleles
/// containing any non-ACGT character (deletion marker `-`, `(CA)15`, `N`, ...)
/// and the empty allele have no defined reverse complement.
///
/// # Examples
///
/// ```
/// use rsid_harmonizer::core::allele::reverse_complement;
///
/// assert_eq!(reverse_complement("A").as_deref(), Some("T"));
/// assert_eq!(reverse_complement("AAC").as_deref(), Some("GTT"));
/// assert_eq!(reverse_complement("-"), None);
/// ```
#[must_use]
pub fn reverse_complement(allele: &str) -> Option<String> {
    if allele.is_empty() {
        return None;
    }
    allele.chars().rev().map(complement).collect()
}

/// Split an allele string such as `A/G` into its ordered alleles.
///
/// The first element is the reference allele by convention of the source.
#[must_use]
pub fn split_allele_string(allele_string: &str) -> Vec<String> {
    allele_string
        .split(ALLELE_SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_snv() {
        assert_eq!(reverse_complement("A").as_deref(), Some("T"));
        assert_eq!(reverse_complement("T").as_deref(), Some("A"));
        assert_eq!(reverse_complement("C").as_deref(), Some("G"));
        assert_eq!(reverse_complement("G").as_deref(), Some("C"));
    }

    #[test]
    fn test_reverse_complement_multi_base() {
        assert_eq!(reverse_complement("ACGT").as_deref(), Some("ACGT"));
        assert_eq!(reverse_complement("AAAC").as_deref(), Some("GTTT"));
    }

    #[test]
    fn test_reverse_complement_non_acgt() {
        assert_eq!(reverse_complement("-"), None);
        assert_eq!(reverse_complement("ACN"), None);
        assert_eq!(reverse_complement("(CA)15"), None);
        assert_eq!(reverse_complement("a"), None);
        assert_eq!(reverse_complement(""), None);
    }

    #[test]
    fn test_split_allele_string() {
        assert_eq!(split_allele_string("A/G/T"), vec!["A", "G", "T"]);
        assert_eq!(split_allele_string("-/CT"), vec!["-", "CT"]);
        assert_eq!(split_allele_string("A"), vec!["A"]);
    }
}
