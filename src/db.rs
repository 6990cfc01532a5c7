//! Database connection provider: pool construction and liveness probe.

use crate::config::DatabaseConfig;
use crate::error::{ConfigError, StartupError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Pool limits, matching the original deployment sizing. sqlx has no
/// separate idle cap; `MAX_CONNECTIONS` bounds open and idle together.
const MAX_CONNECTIONS: u32 = 25;
const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);
/// Bound on how long startup may wait for the first connection, so a bad
/// host or port fails instead of hanging.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens a pooled connection and verifies it with a liveness probe.
///
/// Failures surface immediately; there is no retry policy. A connection
/// that cannot be established ([`StartupError::Connect`]) is distinct
/// from one that connects but fails the probe ([`StartupError::Liveness`]).
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StartupError> {
    let options = connect_options(config)?;

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(MAX_LIFETIME)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(StartupError::Connect)?;

    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await
        .map_err(StartupError::Liveness)?;

    tracing::info!(
        host = %config.host,
        db_name = %config.db_name,
        max_connections = MAX_CONNECTIONS,
        "successfully connected to database"
    );
    Ok(pool)
}

fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, ConfigError> {
    config.validate()?;

    let port: u16 = config.port.parse().map_err(|_| ConfigError::InvalidField {
        field: "port",
        reason: format!("'{}' is not a valid port number", config.port),
    })?;
    let ssl_mode = PgSslMode::from_str(&config.ssl_mode).map_err(|_| ConfigError::InvalidField {
        field: "ssl_mode",
        reason: format!("'{}' is not a recognized sslmode", config.ssl_mode),
    })?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.db_name)
        .ssl_mode(ssl_mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            host: "localhost".into(),
            port: "5432".into(),
            user: "museum".into(),
            password: "secret".into(),
            db_name: "museums".into(),
            ssl_mode: "disable".into(),
        }
    }

    #[test]
    fn well_formed_config_builds_options() {
        assert!(connect_options(&config()).is_ok());
    }

    #[test]
    fn unparseable_port_is_an_invalid_field() {
        let mut bad = config();
        bad.port = "fivethousand".into();
        let err = connect_options(&bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField { field: "port", .. }
        ));
    }

    #[test]
    fn unknown_ssl_mode_is_an_invalid_field() {
        let mut bad = config();
        bad.ssl_mode = "sometimes".into();
        let err = connect_options(&bad).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "ssl_mode",
                ..
            }
        ));
    }

    #[test]
    fn empty_field_is_caught_before_parsing() {
        let mut bad = config();
        bad.host.clear();
        assert!(matches!(
            connect_options(&bad),
            Err(ConfigError::MissingField("host"))
        ));
    }
}
