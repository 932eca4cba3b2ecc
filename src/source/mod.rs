//! Row sources: where rows come from
//!
//! A [`RowSource`] is an opened table handle. It hides the store entirely;
//! the collector only ever sees the rows it hands back.

mod memory;
mod snapshot;

use crate::error::Result;
use crate::model::Row;

pub use memory::MemoryTable;
pub use snapshot::{SnapshotStore, SnapshotTable};

/// An opened table in a wide-column store.
///
/// Implementations must return at most `limit` rows whose keys start with
/// `prefix`, in lexicographic key order, with at most the latest version of
/// each cell. Store-specific failures surface through the crate error type
/// unchanged; an empty result is not an error at this layer.
pub trait RowSource {
    fn read_rows(&self, prefix: &str, limit: u64) -> Result<Vec<Row>>;
}
