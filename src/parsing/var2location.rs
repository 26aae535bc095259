use flate2::read::GzDecoder;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::catalog::store::VariantCatalog;
use crate::core::record::{RawMapping, VariantRecord};
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

const FIELD_COUNT: usize = 6;

/// All lines sharing one query rsID
struct QueryGroup {
    query_id: String,
    canonical_id: String,
    mappings: Vec<RawMapping>,
}

/// Parse a var2location output file, decompressing `.gz` files.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
#[allow(clippy::implicit_hasher)]
pub fn parse_var2location_file(
    path: &Path,
    allowed: Option<&HashSet<String>>,
) -> Result<VariantCatalog, ParseError> {
    let file = std::fs::File::open(path)?;
    let is_gzipped = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    if is_gzipped {
        parse_var2location_reader(BufReader::new(GzDecoder::new(file)), allowed)
    } else {
        parse_var2location_reader(BufReader::new(file), allowed)
    }
}

/// Parse var2location output held in memory
///
/// # Errors
///
/// See [`parse_var2location_reader`].
#[allow(clippy::implicit_hasher)]
pub fn parse_var2location_text(
    text: &str,
    allowed: Option<&HashSet<String>>,
) -> Result<VariantCatalog, ParseError> {
    parse_var2location_reader(text.as_bytes(), allowed)
}

/// Parse tab-delimited var2location lines:
/// `query_id  canonical_id  allele_string  chromosome  start  end`.
///
/// Lines are grouped by query id (first-seen order) into one record per group,
/// named by the canonical id of the group's first line. The record is indexed
/// under its query id and, when different, its canonical id. A canonical id
/// never displaces a group queried under that same id.
///
/// When `allowed` is given, groups whose query id is not in it are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for lines with fewer than six fields or
/// non-integer coordinates, `ParseError::Io` on read failure, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
#[allow(clippy::implicit_hasher)]
pub fn parse_var2location_reader<R: BufRead>(
    reader: R,
    allowed: Option<&HashSet<String>>,
) -> Result<VariantCatalog, ParseError> {
    let mut groups: Vec<QueryGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < FIELD_COUNT {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected {FIELD_COUNT}",
                fields.len()
            )));
        }

        let query_id = fields[0];
        if allowed.is_some_and(|ids| !ids.contains(query_id)) {
            skipped += 1;
            continue;
        }

        let start = parse_coordinate(fields[4], "start", line_num)?;
        let end = parse_coordinate(fields[5], "end", line_num)?;
        let mapping = RawMapping::new(fields[3], start, fields[2]).with_end(end);

        if let Some(&idx) = group_index.get(query_id) {
            groups[idx].mappings.push(mapping);
            continue;
        }

        if check_record_limit(groups.len()).is_some() {
            return Err(ParseError::TooManyRecords(groups.len()));
        }

        group_index.insert(query_id.to_string(), groups.len());
        groups.push(QueryGroup {
            query_id: query_id.to_string(),
            canonical_id: fields[1].to_string(),
            mappings: vec![mapping],
        });
    }

    debug!(
        "Read {} var2location query groups ({skipped} lines outside the allow-list)",
        groups.len()
    );

    Ok(build_catalog(groups))
}

fn parse_coordinate(field: &str, name: &str, line_num: usize) -> Result<u64, ParseError> {
    field.trim().parse().map_err(|_| {
        ParseError::InvalidFormat(format!("Invalid {name} on line {line_num}: '{field}'"))
    })
}

/// Query ids are indexed before any canonical alias so that an explicitly
/// queried id always resolves to its own group.
fn build_catalog(groups: Vec<QueryGroup>) -> VariantCatalog {
    let mut catalog = VariantCatalog::new();
    let mut aliases = Vec::new();

    for group in groups {
        let index = catalog.push(VariantRecord::new(group.canonical_id.clone(), group.mappings));
        catalog.alias(group.query_id.clone(), index);
        if group.canonical_id != group.query_id {
            aliases.push((group.canonical_id, index));
        }
    }

    for (canonical_id, index) in aliases {
        if !catalog.alias(canonical_id.clone(), index) {
            debug!("Canonical id {canonical_id} already indexed; keeping existing record");
        }
    }

    catalog
}
