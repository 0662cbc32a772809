//! DuckDB repositories

pub mod files;
