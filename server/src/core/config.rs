use super::cli::CliConfig;
use super::constants::{DEFAULT_HOST, DEFAULT_PORT};

/// Server binding configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Resolved application configuration
///
/// Precedence: CLI argument > environment variable > default. Environment
/// variables are handled by clap (`env = ...` on each argument), so by the
/// time a `CliConfig` reaches us the first two layers are already merged.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Self {
        Self {
            server: ServerConfig {
                host: cli.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: cli.port.unwrap_or(DEFAULT_PORT),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_cli_is_empty() {
        let config = AppConfig::load(&CliConfig::default());
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn cli_values_take_precedence() {
        let cli = CliConfig {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            data_dir: None,
        };
        let config = AppConfig::load(&cli);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }
}
