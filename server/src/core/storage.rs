//! Platform-aware data storage directory management
//!
//! ## Platform Paths
//!
//! | Type | Windows | macOS | Linux |
//! |------|---------|-------|-------|
//! | Data | `%APPDATA%\DataPortal\` | `~/Library/Application Support/DataPortal/` | `$XDG_DATA_HOME/dataportal/` |

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, APP_NAME, DUCKDB_DB_FILENAME};

/// Application storage manager
#[derive(Debug, Clone)]
pub struct AppStorage {
    data_dir: PathBuf,
}

impl AppStorage {
    /// Initialize storage with platform-appropriate data directory
    pub fn init(cli: &CliConfig) -> Result<Self> {
        let data_dir = Self::resolve_data_dir(cli.data_dir.clone());

        // Create the directory first (canonicalize requires it to exist)
        std::fs::create_dir_all(&data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;
        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);

        tracing::debug!(data_dir = %data_dir.display(), "Storage initialized");
        Ok(Self { data_dir })
    }

    /// Resolve data directory from CLI/env override or platform default
    pub fn resolve_data_dir(overridden: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = overridden {
            return dir;
        }

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            return proj_dirs.data_dir().to_path_buf();
        }

        // Fallback to local .dataportal
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        cwd.join(APP_DOT_FOLDER)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Path of the DuckDB database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DUCKDB_DB_FILENAME)
    }
}
