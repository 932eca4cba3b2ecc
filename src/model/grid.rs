//! Sparse row-value grid keyed by (row key, column index)

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Values collected per row, positioned by column index.
///
/// A row's inner map holds only the indices that row actually produced a
/// valued cell for — absence is structural, never tombstoned. Rows iterate
/// in insertion (arrival) order.
#[derive(Debug, Default)]
pub struct RowGrid {
    rows: IndexMap<String, FxHashMap<usize, Vec<u8>>>,
}

impl RowGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a row key is present, even if no value is ever stored for
    /// it. Rows whose cells are all absent still render.
    pub fn ensure_row(&mut self, key: &str) {
        self.rows.entry(key.to_string()).or_default();
    }

    /// Store a value under (row key, column index), overwriting any earlier
    /// value for the same pair
    pub fn insert(&mut self, key: &str, index: usize, value: Vec<u8>) {
        self.rows
            .entry(key.to_string())
            .or_default()
            .insert(index, value);
    }

    /// The stored value for (row key, column index), if any
    pub fn get(&self, key: &str, index: usize) -> Option<&[u8]> {
        self.rows.get(key)?.get(&index).map(Vec::as_slice)
    }

    /// Number of rows collected
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in arrival order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FxHashMap<usize, Vec<u8>>)> {
        self.rows.iter().map(|(key, cells)| (key.as_str(), cells))
    }
}
