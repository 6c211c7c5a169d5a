// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    seed_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `LISTEN_ADDR` wins when set; otherwise `HOST` and `PORT` are combined.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = match lookup("LISTEN_ADDR").filter(|v| !v.trim().is_empty()) {
            Some(addr) => addr,
            None => {
                let host = lookup("HOST").unwrap_or_else(default_host);
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::Invalid(format!("PORT is not a port: {raw}")))?,
                    None => default_port(),
                };
                format!("{host}:{port}")
            }
        };

        let listen_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|_| {
            ConfigError::Invalid(format!("listen address is not host:port: {raw_addr}"))
        })?;

        let seed_path = lookup("SEED_ARTICLES")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            seed_path,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Optional JSON file bulk-loaded into the store at startup.
    pub fn seed_path(&self) -> Option<&PathBuf> {
        self.seed_path.as_ref()
    }
}
