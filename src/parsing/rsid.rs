//! Cleaning of submitted variant identifiers into atomic rsIDs.

use std::collections::HashSet;

/// Prefix of every reference SNP identifier
pub const RSID_PREFIX: &str = "rs";

/// Delimiters joining several rsIDs in one submitted value, in priority order:
/// interaction/haplotype notation first, then list separators.
pub const ID_DELIMITERS: [&str; 3] = ["_x_", ";", ","];

/// A raw value from a submitted identifier column.
///
/// Columns read from scoring files are not guaranteed to hold strings; values
/// that are not strings yield `None` and are discarded by [`clean_rsids`].
pub trait RawToken {
    fn as_token(&self) -> Option<&str>;
}

impl RawToken for str {
    fn as_token(&self) -> Option<&str> {
        Some(self)
    }
}

impl RawToken for String {
    fn as_token(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: RawToken + ?Sized> RawToken for &T {
    fn as_token(&self) -> Option<&str> {
        (**self).as_token()
    }
}

impl<T: RawToken> RawToken for Option<T> {
    fn as_token(&self) -> Option<&str> {
        self.as_ref().and_then(RawToken::as_token)
    }
}

impl RawToken for serde_json::Value {
    fn as_token(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Check whether `s` looks like an rsID (prefix only; the number is not validated)
#[must_use]
pub fn is_rsid(s: &str) -> bool {
    s.starts_with(RSID_PREFIX)
}

/// Split one token into its atomic rsIDs.
///
/// Only the first delimiter found in [`ID_DELIMITERS`] order is applied, and
/// the pieces are not split again: `rs1;rs2,rs3` gives `rs1` and `rs2,rs3`.
/// Split pieces are trimmed and must still carry the rsID prefix. A token with
/// no delimiter is kept unchanged.
pub fn split_token(token: &str) -> Vec<&str> {
    if !is_rsid(token) {
        return Vec::new();
    }

    match ID_DELIMITERS.iter().find(|d| token.contains(*d)) {
        Some(delimiter) => token
            .split(delimiter)
            .map(str::trim)
            .filter(|s| is_rsid(s))
            .collect(),
        None => vec![token],
    }
}

/// Clean a column of submitted identifiers into a set of atomic rsIDs.
///
/// Non-string values and values not starting with `rs` are dropped silently;
/// combined values (`rs1_x_rs2`, `rs1;rs2`, `rs1,rs2`) are split.
///
/// # Examples
///
/// ```
/// use rsid_harmonizer::parsing::rsid::clean_rsids;
///
/// let ids = clean_rsids(["rs123_x_rs456", "rs123", "chr1:100", "rs7"]);
/// assert_eq!(ids.len(), 3);
/// assert!(ids.contains("rs456"));
/// ```
pub fn clean_rsids<I>(raw: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: RawToken,
{
    let mut cleaned = HashSet::new();
    for value in raw {
        if let Some(token) = value.as_token() {
            cleaned.extend(split_token(token).into_iter().map(str::to_string));
        }
    }
    cleaned
}

/// [`clean_rsids`] with a deterministic (sorted) order
pub fn clean_rsids_sorted<I>(raw: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: RawToken,
{
    let mut cleaned: Vec<String> = clean_rsids(raw).into_iter().collect();
    cleaned.sort_unstable();
    cleaned
}
