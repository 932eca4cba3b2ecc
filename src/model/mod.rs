//! Row, cell, and flattened-grid data structures

mod directory;
mod grid;
mod row;

pub use directory::ColumnDirectory;
pub use grid::RowGrid;
pub use row::{Cell, Row};
