//! Rendering the flattened grid as a terminal table

mod mapper;
mod table;

use crate::error::Result;
use crate::model::{ColumnDirectory, RowGrid};

pub use mapper::{default_mapper, ValueMapper};
pub use table::write_table;

/// Render the collected table to stdout
pub fn render_to_stdout(
    directory: &ColumnDirectory,
    grid: &RowGrid,
    mapper: Option<&ValueMapper>,
) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_table(&mut stdout, directory, grid, mapper)
}
