//! DataPortal server
//!
//! A catalog search server: file records and their linked metadata rows
//! live in DuckDB, and a small query language (`pathinc:report size:>=1000
//! date:<2022-01-01`) filters them over an HTTP API.

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
