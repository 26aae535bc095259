use crate::parsing::ParseError;

/// One variant row of a scoring file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub rsid: String,
    pub effect_allele: String,
    pub other_allele: Option<String>,
}

/// Column positions of the fields used from a scoring file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    rsid: usize,
    effect_allele: usize,
    other_allele: Option<usize>,
}

impl Columns {
    /// Headerless files: rsid, effect allele, optional other allele
    const POSITIONAL: Self = Self {
        rsid: 0,
        effect_allele: 1,
        other_allele: Some(2),
    };

    /// Locate columns by name; `None` if the line is not a recognizable header
    fn from_header(fields: &[&str]) -> Option<Self> {
        let find = |names: &[&str]| {
            fields
                .iter()
                .position(|f| names.contains(&f.trim().to_lowercase().as_str()))
        };

        Some(Self {
            rsid: find(&["rsid", "snp", "variant_id", "id"])?,
            effect_allele: find(&["effect_allele", "ea", "a1"])?,
            other_allele: find(&["other_allele", "reference_allele", "oa", "a2"]),
        })
    }
}

/// Parse a tab-delimited scoring file.
///
/// Lines starting with `#` and blank lines are skipped. If the first data line
/// names an rsID and an effect-allele column (`rsID`, `effect_allele`,
/// optionally `other_allele`/`reference_allele`), columns are taken by name;
/// otherwise the file is read as `rsid, effect_allele, [other_allele]`.
/// An empty other-allele field counts as absent.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a row lacks the rsID or effect allele.
pub fn parse_scores_text(text: &str) -> Result<Vec<ScoreRow>, ParseError> {
    let mut rows = Vec::new();
    let mut columns: Option<Columns> = None;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        let cols = match columns {
            Some(cols) => cols,
            None => {
                if let Some(cols) = Columns::from_header(&fields) {
                    columns = Some(cols);
                    continue;
                }
                *columns.insert(Columns::POSITIONAL)
            }
        };

        let line_num = i + 1;
        let field = |idx: usize| {
            fields
                .get(idx)
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
        };

        let rsid = field(cols.rsid).ok_or_else(|| {
            ParseError::InvalidFormat(format!("Line {line_num} has no rsID"))
        })?;
        let effect_allele = field(cols.effect_allele).ok_or_else(|| {
            ParseError::InvalidFormat(format!("Line {line_num} has no effect allele"))
        })?;

        rows.push(ScoreRow {
            rsid: rsid.to_string(),
            effect_allele: effect_allele.to_string(),
            other_allele: cols.other_allele.and_then(field).map(str::to_string),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_columns() {
        let text = "\
#pgs_id=PGS000001
#genome_build=GRCh37
rsID\tchr_name\teffect_allele\tother_allele\teffect_weight
rs1\t1\tA\tG\t0.1
rs2\t2\tT\t\t0.2
";
        let rows = parse_scores_text(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            ScoreRow {
                rsid: "rs1".to_string(),
                effect_allele: "A".to_string(),
                other_allele: Some("G".to_string()),
            }
        );
        assert_eq!(rows[1].other_allele, None);
    }

    #[test]
    fn test_reference_allele_column() {
        let text = "rsID\treference_allele\teffect_allele\nrs1\tC\tT\n";
        let rows = parse_scores_text(text).unwrap();
        assert_eq!(rows[0].effect_allele, "T");
        assert_eq!(rows[0].other_allele.as_deref(), Some("C"));
    }

    #[test]
    fn test_positional_columns() {
        let rows = parse_scores_text("rs1\tA\tG\nrs2\tC\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].other_allele.as_deref(), Some("G"));
        assert_eq!(rows[1].other_allele, None);
    }

    #[test]
    fn test_missing_effect_allele() {
        let err = parse_scores_text("rs1\tA\nrs2\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("Line 2")));
    }
}
