use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Read `FLOWMAN_BIND`, falling back to the default bind address.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("FLOWMAN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = raw
            .parse()
            .with_context(|| format!("invalid bind address `{raw}`"))?;
        Ok(Self { bind })
    }
}

/// True when `FLOWMAN_ENV` selects the dev profile; drives the default log
/// filter.
pub fn is_dev_env() -> bool {
    matches!(env::var("FLOWMAN_ENV").as_deref(), Ok("dev")) || env::var("FLOWMAN_ENV").is_err()
}
