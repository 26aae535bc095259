use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::types::ConfigError;

/// Chromosome names accepted when choosing a canonical locus.
///
/// Mapping records on any other sequence (patches, ALT scaffolds, `CHR_HSCHR...`
/// regions) are ignored by the resolver. Names are compared exactly, so a set
/// built for Ensembl naming (`1`, `X`, `MT`) will not accept UCSC names (`chr1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeSet {
    names: BTreeSet<String>,
}

impl ChromosomeSet {
    /// Build a set from explicit names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyChromosomeSet` if no names are given, or
    /// `ConfigError::InvalidChromosome` if a name is blank or contains whitespace.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for name in names {
            let name = name.into();
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidChromosome(name));
            }
            set.insert(name);
        }

        if set.is_empty() {
            return Err(ConfigError::EmptyChromosomeSet);
        }

        Ok(Self { names: set })
    }

    /// Human primary assembly in Ensembl naming: 1-22, X, Y, MT
    #[must_use]
    pub fn human_default() -> Self {
        let names = (1..=22)
            .map(|n| n.to_string())
            .chain(["X", "Y", "MT"].into_iter().map(str::to_string))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn contains(&self, chromosome: &str) -> bool {
        self.names.contains(chromosome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ChromosomeSet {
    fn default() -> Self {
        Self::human_default()
    }
}

/// Parse a comma-separated list such as `1-22,X,Y,MT`.
///
/// Numeric ranges (`1-22`) are expanded inclusively.
impl std::str::FromStr for ChromosomeSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut names = Vec::new();

        for item in s.split(',').map(str::trim) {
            if let Some((start, end)) = item.split_once('-') {
                let range_err = || ConfigError::InvalidChromosomeRange(item.to_string());
                let start: u32 = start.trim().parse().map_err(|_| range_err())?;
                let end: u32 = end.trim().parse().map_err(|_| range_err())?;
                if start > end {
                    return Err(range_err());
                }
                names.extend((start..=end).map(|n| n.to_string()));
            } else {
                names.push(item.to_string());
            }
        }

        Self::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_default() {
        let set = ChromosomeSet::human_default();
        assert_eq!(set.len(), 25);
        assert!(set.contains("1"));
        assert!(set.contains("22"));
        assert!(set.contains("X"));
        assert!(set.contains("MT"));
        assert!(!set.contains("23"));
        assert!(!set.contains("chr1"));
        assert!(!set.contains("CHR_HSCHR6_MHC_COX_CTG1"));
    }

    #[test]
    fn test_parse_with_range() {
        let set: ChromosomeSet = "1-3, X,MT".parse().unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["1", "2", "3", "MT", "X"]);
    }

    #[test]
    fn test_parse_matches_default() {
        let set: ChromosomeSet = "1-22,X,Y,MT".parse().unwrap();
        assert_eq!(set, ChromosomeSet::human_default());
    }

    #[test]
    fn test_invalid_sets() {
        assert_eq!(
            ChromosomeSet::new(Vec::<String>::new()),
            Err(ConfigError::EmptyChromosomeSet)
        );
        assert_eq!(
            "".parse::<ChromosomeSet>(),
            Err(ConfigError::InvalidChromosome(String::new()))
        );
        assert_eq!(
            "1,,2".parse::<ChromosomeSet>(),
            Err(ConfigError::InvalidChromosome(String::new()))
        );
        assert_eq!(
            "5-2".parse::<ChromosomeSet>(),
            Err(ConfigError::InvalidChromosomeRange("5-2".to_string()))
        );
        assert_eq!(
            "1-X".parse::<ChromosomeSet>(),
            Err(ConfigError::InvalidChromosomeRange("1-X".to_string()))
        );
    }
}
