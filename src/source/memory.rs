//! In-memory row source

use crate::error::Result;
use crate::model::Row;

use super::RowSource;

/// A table held entirely in memory.
///
/// Applies the same prefix/limit semantics as any other source, so it can
/// stand in for a real store in tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: Vec<Row>,
}

impl MemoryTable {
    pub fn new(mut rows: Vec<Row>) -> Self {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Self { rows }
    }
}

impl RowSource for MemoryTable {
    fn read_rows(&self, prefix: &str, limit: u64) -> Result<Vec<Row>> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .rows
            .iter()
            .filter(|row| row.key.starts_with(prefix))
            .take(limit)
            .cloned()
            .collect())
    }
}
