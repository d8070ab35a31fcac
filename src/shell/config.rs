use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const SERVER_PORT_VAR: &str = "SERVER_PORT";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid SERVER_PORT value: {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: DEFAULT_SERVER_PORT,
            },
        }
    }
}

impl Config {
    /// Reads the process environment. Unset or empty variables fall back to
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(SERVER_PORT_VAR).filter(|v| !v.is_empty()) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            server: ServerConfig { port },
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.server.port))
    }
}
