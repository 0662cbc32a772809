// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "DataPortal";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "dataportal";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".dataportal";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "DATAPORTAL_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "DATAPORTAL_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "DATAPORTAL_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5480;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "DATAPORTAL_DATA_DIR";

// =============================================================================
// DuckDB Database
// =============================================================================

/// DuckDB database filename
pub const DUCKDB_DB_FILENAME: &str = "dataportal.duckdb";
