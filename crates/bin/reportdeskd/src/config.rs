//! Configuration for the report registry daemon.
//!
//! Settings come from `reportdesk.toml` in the working directory, then from
//! `REPORTDESK_*` environment variables. The file is optional: without it the
//! daemon listens on port 8084 and keeps its reports in `reportdesk.db`.

use serde::Deserialize;

/// Port the report API listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8084;

/// Report store used when nothing else is configured; created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:reportdesk.db?mode=rwc";

/// Request tracing at `debug`, everything else from the workspace at `info`.
pub const DEFAULT_LOG_FILTER: &str = "reportdeskd=info,reportdesk_app=info,\
reportdesk_adapter_http_axum=info,reportdesk_adapter_storage_sqlite_sqlx=info,tower_http=debug";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Where the `/reports` API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The `SQLite` file holding heroes, villains and criminal reports.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:` URL; `sqlite::memory:` keeps everything in process.
    pub url: String,
}

/// Tracing subscriber setup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Config {
    /// Load `reportdesk.toml` (if present), then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the merged settings cannot serve the report API.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("reportdesk.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// `REPORTDESK_BIND` beats `REPORTDESK_HOST`/`REPORTDESK_PORT`, and
    /// `RUST_LOG` beats `REPORTDESK_LOG`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("REPORTDESK_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("REPORTDESK_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("REPORTDESK_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("REPORTDESK_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = lookup("REPORTDESK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("server host must be set".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.database.url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(format!(
                "report store must be a sqlite: URL, got `{}`",
                self.database.url
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
