//! Server and database configuration, sourced from the environment.

use crate::error::ConfigError;
use std::time::Duration;

/// Listener configuration. Immutable after construction, held for the
/// process lifetime.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_port: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: "3333".into(),
            read_timeout: Duration::from_secs(15),
            write_timeout: Duration::from_secs(15),
            idle_timeout: Duration::from_secs(60),
        }
    }
}

impl ServerConfig {
    /// Port from the `PORT` env var, default 3333. Timeouts are fixed policy.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("PORT") {
            if !port.trim().is_empty() {
                config.listen_port = port;
            }
        }
        config
    }

    /// Budget for one full request exchange (read plus write).
    pub fn request_deadline(&self) -> Duration {
        self.read_timeout + self.write_timeout
    }
}

/// Database connection settings. All fields must be non-empty; `port`
/// must parse as u16 and `ssl_mode` as a PostgreSQL sslmode word.
/// Secret handling is the caller's responsibility.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: String,
}

impl DatabaseConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`,
    /// `DB_SSLMODE`. Any missing or empty variable is a config error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            host: env_string("DB_HOST"),
            port: env_string("DB_PORT"),
            user: env_string("DB_USER"),
            password: env_string("DB_PASSWORD"),
            db_name: env_string("DB_NAME"),
            ssl_mode: env_string("DB_SSLMODE"),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("host", &self.host),
            ("port", &self.port),
            ("user", &self.user),
            ("password", &self.password),
            ("db_name", &self.db_name),
            ("ssl_mode", &self.ssl_mode),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(name));
            }
        }
        Ok(())
    }
}

fn env_string(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}
