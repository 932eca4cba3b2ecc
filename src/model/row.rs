//! Rows and cells as delivered by a row source

use indexmap::IndexMap;

/// A single cell within a column family.
///
/// `column` is the fully qualified name, conventionally `family:qualifier`.
/// `value` is `None` when the store reports no data for the cell — the
/// absence marker, distinct from an empty byte sequence. Only the latest
/// version per cell is ever delivered; version selection happens upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub column: String,
    pub value: Option<Vec<u8>>,
}

impl Cell {
    pub fn new(column: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            column: column.into(),
            value: Some(value.into()),
        }
    }

    /// A cell whose latest version carries no data
    pub fn absent(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: None,
        }
    }
}

/// One sparse row: a key plus its cells grouped by column family.
///
/// No two rows need share families or columns; families iterate in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub key: String,
    pub families: IndexMap<String, Vec<Cell>>,
}

impl Row {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            families: IndexMap::new(),
        }
    }

    /// Append a cell to the given family, creating the family if needed
    pub fn push_cell(&mut self, family: impl Into<String>, cell: Cell) {
        self.families.entry(family.into()).or_default().push(cell);
    }

    /// Total number of cells across all families
    pub fn cell_count(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }
}
