//! Centralized validation limits and helpers.

/// Maximum number of variant records loaded from a single source (DOS protection)
pub const MAX_RECORDS: usize = 10_000_000;

/// Maximum number of identifiers per request to the Ensembl Variation POST endpoint
pub const MAX_IDS_PER_REQUEST: usize = 200;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(groups.len()).is_some() {
///     return Err(...);
/// }
/// groups.push(new_group); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    check_record_limit_with(count, MAX_RECORDS)
}

#[must_use]
pub(crate) fn check_record_limit_with(count: usize, max: usize) -> Option<String> {
    if count >= max {
        Some(format!(
            "Too many records: adding another would exceed maximum of {max}"
        ))
    } else {
        None
    }
}

/// Whether `allele` is a plausible declared allele: non-empty nucleotides,
/// or the deletion marker `-`
#[must_use]
pub fn is_valid_allele(allele: &str) -> bool {
    allele == "-"
        || (!allele.is_empty()
            && allele
                .chars()
                .all(|c| matches!(c, 'A' | 'C' | 'G' | 'T' | 'N')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
        assert!(check_record_limit_with(3, 3).is_some());
        assert!(check_record_limit_with(2, 3).is_none());
    }

    #[test]
    fn test_is_valid_allele() {
        assert!(is_valid_allele("A"));
        assert!(is_valid_allele("ACGTN"));
        assert!(is_valid_allele("-"));
        assert!(!is_valid_allele(""));
        assert!(!is_valid_allele("a"));
        assert!(!is_valid_allele("A/G"));
        assert!(!is_valid_allele("--"));
    }
}
