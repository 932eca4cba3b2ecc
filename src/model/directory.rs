//! Stable column-identity indexing

use indexmap::IndexMap;

/// Directory of every (family, column) identity seen during one collection
/// run, each assigned a dense integer index in first-seen order.
///
/// Index 0 is reserved for the row-key column, so assignment starts at 1.
/// An identity, once indexed, keeps its index for the rest of the run;
/// entries are never removed.
#[derive(Debug, Default)]
pub struct ColumnDirectory {
    families: IndexMap<String, IndexMap<String, usize>>,
    count: usize,
}

impl ColumnDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of a (family, column) identity, returning its
    /// index. The first observation allocates the next free index; repeats
    /// are no-ops on the stored value.
    pub fn observe(&mut self, family: &str, column: &str) -> usize {
        let columns = self
            .families
            .entry(family.to_string())
            .or_default();
        if let Some(&index) = columns.get(column) {
            return index;
        }
        self.count += 1;
        columns.insert(column.to_string(), self.count);
        self.count
    }

    /// Look up the index of an identity without recording it
    pub fn index_of(&self, family: &str, column: &str) -> Option<usize> {
        self.families.get(family)?.get(column).copied()
    }

    /// Number of distinct identities indexed so far. Indices are dense over
    /// `[1, len()]`.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate every (family, column, index) triple in family insertion
    /// order, columns in first-seen order within each family
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, usize)> {
        self.families.iter().flat_map(|(family, columns)| {
            columns
                .iter()
                .map(move |(column, &index)| (family.as_str(), column.as_str(), index))
        })
    }
}
