use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller misuse: invalid configuration inputs. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Accepted chromosome set is empty")]
    EmptyChromosomeSet,

    #[error("Invalid chromosome name: '{0}'")]
    InvalidChromosome(String),

    #[error("Invalid chromosome range: '{0}'")]
    InvalidChromosomeRange(String),

    #[error("Genome build must be one of GRCh37, GRCh38 (got '{0}')")]
    UnsupportedBuild(String),
}

/// Genome build served by the live lookup service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenomeBuild {
    Grch37,
    #[default]
    Grch38,
}

impl std::fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grch37 => write!(f, "GRCh37"),
            Self::Grch38 => write!(f, "GRCh38"),
        }
    }
}

impl std::str::FromStr for GenomeBuild {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRCh37" => Ok(Self::Grch37),
            "GRCh38" => Ok(Self::Grch38),
            other => Err(ConfigError::UnsupportedBuild(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_build_from_str() {
        assert_eq!("GRCh37".parse::<GenomeBuild>(), Ok(GenomeBuild::Grch37));
        assert_eq!("GRCh38".parse::<GenomeBuild>(), Ok(GenomeBuild::Grch38));
        assert_eq!(
            "hg19".parse::<GenomeBuild>(),
            Err(ConfigError::UnsupportedBuild("hg19".to_string()))
        );
    }

    #[test]
    fn test_genome_build_display_roundtrip() {
        for build in [GenomeBuild::Grch37, GenomeBuild::Grch38] {
            assert_eq!(build.to_string().parse::<GenomeBuild>(), Ok(build));
        }
    }
}
