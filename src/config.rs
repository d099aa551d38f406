//! Server settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/todos";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// The single origin allowed to make cross-origin requests.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `CORS_ORIGIN` and `DB_MAX_CONNECTIONS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "DB_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            cors_origin,
            max_connections,
        })
    }
}
