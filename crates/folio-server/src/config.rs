use config::{Config, ConfigError, Environment, File};
use folio_core::{RateLimitConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub github: GithubConfig,
    pub rate_limit: RateLimitConfig,
    /// Absent when outbound mail/calendar dispatch is disabled
    pub groupware: Option<GroupwareConfig>,
    /// Directory the built client bundle is served from
    pub static_dir: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// GitHub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub token: String,
    pub max_repos: u32,
    pub commits_per_repo: u32,
}

/// Microsoft Graph groupware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupwareConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// Mailbox mail and events are sent as
    pub sender: String,
    /// Address contact notifications are delivered to
    pub notify_address: String,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. config.toml file (if present)
    /// 3. Environment variables (prefixed with FOLIO_)
    ///
    /// Environment variables use double underscore for nesting:
    /// - FOLIO_SERVER__HOST=127.0.0.1
    /// - FOLIO_DATABASE__URL=sqlite://folio.db
    /// - FOLIO_GITHUB__TOKEN=ghp_...
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "sqlite://folio.db")?
            .set_default("database.max_connections", 10)?
            .set_default("github.token", "")?
            .set_default("github.max_repos", 5)?
            .set_default("github.commits_per_repo", 5)?
            .set_default("rate_limit.window_secs", 30)?
            .set_default("rate_limit.max_requests", 3)?
            .set_default("rate_limit.sweep_interval_secs", 60)?
            .set_default("static_dir", "client/dist")?;

        // Try to load config.toml if it exists
        let builder = if Path::new("config.toml").exists() {
            builder.add_source(File::with_name("config"))
        } else {
            builder
        };

        // Override with environment variables
        let builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = AppConfig::load().expect("Defaults should satisfy the config shape");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.github.max_repos, 5);
        assert_eq!(config.rate_limit.window_secs, 30);
        assert_eq!(config.rate_limit.max_requests, 3);
        assert!(config.groupware.is_none());
    }

    #[test]
    fn test_config_types() {
        let db_config = DatabaseConfig {
            url: "sqlite://test.db".to_string(),
            max_connections: 10,
        };
        assert_eq!(db_config.url, "sqlite://test.db");
        assert_eq!(db_config.max_connections, 10);
    }
}
