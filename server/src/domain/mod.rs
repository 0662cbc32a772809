//! Domain logic for catalog search
//!
//! - `files` - filter vocabulary and engine instance for file records
//! - `search` - generic search-query engine (parsing, filters, predicates)

pub mod files;
pub mod search;

pub use files::FileSearchEngine;
