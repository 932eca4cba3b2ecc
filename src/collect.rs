//! Flattening sparse rows into a dense grid
//!
//! One sequential pass over the fetched rows builds two structures: a
//! [`ColumnDirectory`] giving every (family, column) identity a stable
//! integer index, and a [`RowGrid`] holding each row's values positioned by
//! that index. Rows never need to agree on shape — a column discovered in a
//! late row simply extends the directory, and earlier rows render as absent
//! at that index.

use crate::error::{Error, Result};
use crate::model::{ColumnDirectory, RowGrid};
use crate::source::RowSource;

/// Fetch up to `limit` rows with the given key prefix from `source` and
/// flatten them.
///
/// Cell values longer than `max_cell_size` keep only their leading
/// `max_cell_size` bytes. A cell whose latest version has no value still
/// claims a column index but stores nothing in the grid.
///
/// Fails with [`Error::EmptyResult`] when the fetch matches no rows; any
/// source error passes through unchanged.
pub fn collect(
    source: &dyn RowSource,
    prefix: &str,
    limit: u64,
    max_cell_size: usize,
) -> Result<(ColumnDirectory, RowGrid)> {
    let mut directory = ColumnDirectory::new();
    let mut grid = RowGrid::new();

    for row in source.read_rows(prefix, limit)? {
        grid.ensure_row(&row.key);
        for (family, cells) in &row.families {
            for cell in cells {
                // Indices accumulate across the whole run; re-seeing an
                // identity in a later row keeps its original index.
                let index = directory.observe(family, &cell.column);
                if let Some(value) = &cell.value {
                    let mut value = value.clone();
                    value.truncate(max_cell_size);
                    grid.insert(&row.key, index, value);
                }
            }
        }
    }

    if grid.is_empty() {
        return Err(Error::EmptyResult {
            prefix: prefix.to_string(),
        });
    }

    Ok((directory, grid))
}
