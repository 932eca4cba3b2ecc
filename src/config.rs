//! Configuration handling for rowscope

use std::path::PathBuf;

/// Configuration for a single inspection run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding store snapshots
    pub data_dir: PathBuf,
    /// Project the store belongs to
    pub project: String,
    /// Store instance within the project
    pub instance: String,
    /// Table to read from
    pub table: String,
    /// Return only rows whose key starts with this prefix (empty = all)
    pub prefix: String,
    /// Maximum number of rows to fetch
    pub limit: u64,
    /// Cut off cell values after this many bytes
    pub max_cell_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            project: "local".to_string(),
            instance: "local".to_string(),
            table: String::new(),
            prefix: String::new(),
            limit: 1,
            max_cell_size: usize::MAX,
        }
    }
}

impl Config {
    /// Create a new Config for the given table
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix filter
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the row limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the per-cell byte cutoff
    pub fn with_max_cell_size(mut self, max: usize) -> Self {
        self.max_cell_size = max;
        self
    }
}
