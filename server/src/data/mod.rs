//! Data storage layer
//!
//! - `duckdb` - the backing record store for file search

pub mod duckdb;

pub use duckdb::{DuckdbError, DuckdbService, FileCollection, FileRecordRow};
