//! rowscope - Terminal inspector for wide-column row data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rowscope::collect;
use rowscope::config::Config;
use rowscope::output::{default_mapper, render_to_stdout};
use rowscope::source::SnapshotStore;

/// Inspect rows of a wide-column store snapshot as a flat table
#[derive(Parser, Debug)]
#[command(name = "rowscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project the store belongs to
    #[arg(short, long, default_value = "local")]
    project: String,

    /// Store instance within the project
    #[arg(short, long, default_value = "local")]
    instance: String,

    /// Table to read from
    #[arg(short, long)]
    table: String,

    /// Return only rows that have this key prefix
    #[arg(long, default_value = "")]
    prefix: String,

    /// Amount of rows to return
    #[arg(long, default_value_t = 1)]
    limit: u64,

    /// Cut off cell values after this amount of bytes
    #[arg(long, default_value_t = usize::MAX, hide_default_value = true)]
    max_cell_size: usize,

    /// Directory holding store snapshots
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        data_dir: cli.data_dir,
        project: cli.project,
        instance: cli.instance,
        table: cli.table,
        prefix: cli.prefix,
        limit: cli.limit,
        max_cell_size: cli.max_cell_size,
    };

    let store = SnapshotStore::open(&config.data_dir, &config.project, &config.instance);
    let table = store.table(&config.table);

    let (directory, grid) = collect(&table, &config.prefix, config.limit, config.max_cell_size)
        .with_context(|| format!("Failed to read table: {}", config.table))?;

    render_to_stdout(&directory, &grid, Some(&default_mapper))?;

    Ok(())
}
