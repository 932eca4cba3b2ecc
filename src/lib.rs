//! rowscope - Terminal inspector for wide-column row data
//!
//! Reads a bounded set of sparse, family/column-structured rows from a
//! wide-column store, flattens them into a dense rectangular grid with
//! stable column identity, and renders the result as a two-level table.

pub mod collect;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod source;

pub use collect::collect;
pub use config::Config;
pub use error::{Error, Result};
