use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::core::chromosome::ChromosomeSet;
use crate::core::record::{Unresolved, VariantRecord};

/// Counts from resolving every record in a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    pub resolved: usize,
    pub unmapped: usize,
    pub ambiguous: usize,
}

/// Variant records with an identifier index.
///
/// Each record is stored once; its primary id and every synonym map to the
/// same slot, so all identifiers of a variant observe identical resolution.
#[derive(Debug, Default)]
pub struct VariantCatalog {
    /// All records, in insertion order
    records: Vec<VariantRecord>,

    /// Index: identifier (primary or synonym) -> index in records vec
    id_to_index: HashMap<String, usize>,
}

impl VariantCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, indexing it under its primary id and synonyms.
    ///
    /// Identifiers already present are re-pointed at the new record. Returns the
    /// record's index.
    pub fn insert(&mut self, record: VariantRecord) -> usize {
        let index = self.records.len();
        for id in record.ids() {
            self.id_to_index.insert(id.to_string(), index);
        }
        self.records.push(record);
        index
    }

    /// Add a record without indexing any identifier; see [`Self::alias`].
    ///
    /// Returns the record's index.
    pub fn push(&mut self, record: VariantRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Index `id` as another name for the record at `index`.
    ///
    /// Returns `false` (and leaves the index unchanged) if `id` is already taken
    /// or `index` is out of range.
    pub fn alias(&mut self, id: impl Into<String>, index: usize) -> bool {
        let id = id.into();
        if index >= self.records.len() || self.id_to_index.contains_key(&id) {
            return false;
        }
        self.records[index].add_synonym(id.clone());
        self.id_to_index.insert(id, index);
        true
    }

    /// Look up a record by any of its identifiers
    pub fn get(&self, id: &str) -> Option<&VariantRecord> {
        self.id_to_index.get(id).map(|&idx| &self.records[idx])
    }

    /// Index of the record known as `id`
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Resolve every record against `accepted`.
    ///
    /// Takes `&mut self`: all aliasing must be complete before records are
    /// shared with readers.
    pub fn resolve_all(&mut self, accepted: &ChromosomeSet) -> ResolutionSummary {
        let mut summary = ResolutionSummary::default();
        for record in &mut self.records {
            match record.resolve(accepted) {
                Ok(_) => summary.resolved += 1,
                Err(Unresolved::NoAcceptedMapping) => summary.unmapped += 1,
                Err(Unresolved::Ambiguous) => summary.ambiguous += 1,
            }
        }
        debug!(
            "Resolved {} of {} records ({} unmapped, {} ambiguous)",
            summary.resolved,
            self.records.len(),
            summary.unmapped,
            summary.ambiguous
        );
        summary
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    /// Number of distinct records (not identifiers)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of identifiers indexed, including synonyms
    pub fn id_count(&self) -> usize {
        self.id_to_index.len()
    }
}
