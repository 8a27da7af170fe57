//! Ordered subset of the store produced by one search submission.

use crate::filter::FilterSpec;
use crate::models::Book;
use crate::store::RecordStore;
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

/// Records matching a filter, in store order.
///
/// A result set is rebuilt for every submission and never edited; records
/// are shared with the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    records: Vec<Arc<Book>>,
}

impl ResultSet {
    pub fn new(records: Vec<Arc<Book>>) -> Self {
        Self { records }
    }

    /// Every record of the store, unfiltered.
    pub fn all(store: &RecordStore) -> Self {
        Self::new(store.books().to_vec())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[Arc<Book>] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Book>> {
        self.records.iter()
    }

    /// Records in `range`, clamped to the set bounds.
    pub fn slice(&self, range: Range<usize>) -> &[Arc<Book>] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|book| book.id.as_str()).collect()
    }
}

/// Applies `filter` to every record of `store`, keeping store order.
pub fn build_result_set(store: &RecordStore, filter: &FilterSpec) -> ResultSet {
    let prepared = filter.prepare();
    let records: Vec<Arc<Book>> = store
        .books()
        .iter()
        .filter(|book| prepared.matches(book))
        .cloned()
        .collect();

    debug!(
        matches = records.len(),
        total = store.len(),
        "Result set built"
    );

    ResultSet::new(records)
}
