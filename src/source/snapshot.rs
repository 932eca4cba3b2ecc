//! JSON snapshot row source
//!
//! The shipped backend reads store snapshots from disk rather than talking
//! to a live cluster: one JSON file per table at
//! `<data-dir>/<project>/<instance>/<table>.json`, holding an array of rows.
//! Each row lists its cells per family, and a cell may appear several times
//! with different timestamps — the source keeps only the latest version, so
//! downstream code never sees more than one version per column.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Cell, Row};

use super::RowSource;

/// Handle to one store instance on disk
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Open the store for `project`/`instance` under `data_dir`
    pub fn open(data_dir: &Path, project: &str, instance: &str) -> Self {
        Self {
            root: data_dir.join(project).join(instance),
        }
    }

    /// Open a table handle. Cheap; the snapshot file is read per fetch.
    pub fn table(&self, name: &str) -> SnapshotTable {
        SnapshotTable {
            table: name.to_string(),
            path: self.root.join(format!("{name}.json")),
        }
    }
}

/// An opened table backed by a snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotTable {
    table: String,
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRow {
    key: String,
    #[serde(default)]
    families: IndexMap<String, Vec<SnapshotCell>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotCell {
    column: String,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    value: Option<Vec<u8>>,
}

impl SnapshotTable {
    fn load(&self) -> Result<Vec<SnapshotRow>> {
        let file = File::open(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::TableNotFound {
                    table: self.table.clone(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl RowSource for SnapshotTable {
    fn read_rows(&self, prefix: &str, limit: u64) -> Result<Vec<Row>> {
        let mut snapshot = self.load()?;
        snapshot.retain(|row| row.key.starts_with(prefix));
        snapshot.sort_by(|a, b| a.key.cmp(&b.key));

        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(snapshot
            .into_iter()
            .take(limit)
            .map(flatten_versions)
            .collect())
    }
}

/// Collapse a snapshot row to the latest version of each column.
///
/// A greater timestamp wins; on a tie the earlier-listed cell is kept.
/// Column order within a family stays first-seen.
fn flatten_versions(row: SnapshotRow) -> Row {
    let mut out = Row::new(row.key);
    for (family, cells) in row.families {
        let mut latest: IndexMap<String, SnapshotCell> = IndexMap::new();
        for cell in cells {
            let newer = match latest.get(&cell.column) {
                Some(kept) => cell.timestamp > kept.timestamp,
                None => true,
            };
            if newer {
                latest.insert(cell.column.clone(), cell);
            }
        }
        for (_, cell) in latest {
            out.push_cell(
                family.clone(),
                Cell {
                    column: cell.column,
                    value: cell.value,
                },
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_store(rows: serde_json::Value) -> (tempfile::TempDir, SnapshotStore) {
        let dir = tempfile::tempdir().unwrap();
        let table_dir = dir.path().join("local").join("local");
        std::fs::create_dir_all(&table_dir).unwrap();
        let mut file = File::create(table_dir.join("events.json")).unwrap();
        write!(file, "{rows}").unwrap();
        let store = SnapshotStore::open(dir.path(), "local", "local");
        (dir, store)
    }

    #[test]
    fn test_missing_table_reports_table_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open(dir.path(), "local", "local");
        let err = store.table("nope").read_rows("", 1).unwrap_err();
        assert!(matches!(err, Error::TableNotFound { table } if table == "nope"));
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        let (_dir, store) = write_store(json!({"not": "an array"}));
        let err = store.table("events").read_rows("", 1).unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
    }

    #[test]
    fn test_prefix_limit_and_key_order() {
        let (_dir, store) = write_store(json!([
            {"key": "b#2", "families": {"f": [{"column": "f:a", "value": [50]}]}},
            {"key": "a#1", "families": {"f": [{"column": "f:a", "value": [49]}]}},
            {"key": "b#1", "families": {"f": [{"column": "f:a", "value": [51]}]}},
        ]));
        let table = store.table("events");

        let rows = table.read_rows("b#", 10).unwrap();
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["b#1", "b#2"]);

        assert_eq!(table.read_rows("", 1).unwrap().len(), 1);
        assert_eq!(table.read_rows("", 1).unwrap()[0].key, "a#1");
    }

    #[test]
    fn test_only_latest_version_survives() {
        let (_dir, store) = write_store(json!([
            {"key": "r1", "families": {"f": [
                {"column": "f:a", "timestamp": 100, "value": [111, 108, 100]},
                {"column": "f:a", "timestamp": 200, "value": [110, 101, 119]},
                {"column": "f:b", "timestamp": 100, "value": [98]},
            ]}},
        ]));
        let rows = store.table("events").read_rows("", 10).unwrap();
        let cells = &rows[0].families["f"];
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].column, "f:a");
        assert_eq!(cells[0].value.as_deref(), Some(b"new".as_slice()));
        assert_eq!(cells[1].column, "f:b");
    }

    #[test]
    fn test_null_value_is_the_absence_marker() {
        let (_dir, store) = write_store(json!([
            {"key": "r1", "families": {"f": [{"column": "f:a", "value": null}]}},
        ]));
        let rows = store.table("events").read_rows("", 10).unwrap();
        assert_eq!(rows[0].families["f"][0].value, None);
    }
}
